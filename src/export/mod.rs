//! Export encoders for booking subsets
//!
//! Both encoders are pure functions of their input subset:
//! - CSV: spreadsheet-friendly rows for the records view
//! - JSON: full-fidelity snapshot suitable for round-trip reload

pub mod csv;
pub mod json;

pub use csv::{export_bookings_csv, write_bookings_csv};
pub use json::{export_bookings_json, import_bookings_json, write_bookings_json};
