//! JSON export
//!
//! Serializes a booking subset as a pretty-printed array of full booking
//! objects, visitors and cost sheets included. This is the snapshot/backup
//! schema, not a display format: `import_bookings_json` reloads it into
//! an identical booking set.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Booking;

/// Render a booking subset as a pretty-printed JSON array
pub fn export_bookings_json(subset: &[&Booking]) -> LedgerResult<String> {
    serde_json::to_string_pretty(subset).map_err(|e| LedgerError::Export(e.to_string()))
}

/// Write a booking subset as pretty-printed JSON to the given writer
pub fn write_bookings_json<W: Write>(subset: &[&Booking], writer: W) -> LedgerResult<()> {
    serde_json::to_writer_pretty(writer, subset).map_err(|e| LedgerError::Export(e.to_string()))
}

/// Reload bookings from a JSON snapshot produced by the exporter
pub fn import_bookings_json(json: &str) -> LedgerResult<Vec<Booking>> {
    serde_json::from_str(json).map_err(LedgerError::from)
}
