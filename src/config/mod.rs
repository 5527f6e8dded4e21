//! Configuration for the excursion ledger
//!
//! Operator preferences and form suggestion lists, persisted as a JSON
//! settings file.

pub mod settings;

pub use settings::LedgerSettings;
