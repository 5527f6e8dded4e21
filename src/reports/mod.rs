//! Reports for the excursion ledger
//!
//! Aggregations consumed by dashboard and report surfaces. Reports read
//! a (possibly filtered) booking subset and never mutate it.

pub mod summary;

pub use summary::LedgerSummary;
