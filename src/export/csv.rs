//! CSV export
//!
//! Serializes an ordered booking subset (typically the current filtered
//! view) to CSV: one header row, one row per booking. Textual fields are
//! quoted so embedded commas survive; numeric fields are emitted bare.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Booking;

/// Column headers, in row order
const HEADERS: [&str; 8] = [
    "Date",
    "Time",
    "Group Head",
    "Group Size",
    "Partner",
    "Guide",
    "Invoice Amount",
    "Profit Amount",
];

/// Write a booking subset as CSV to the given writer.
///
/// Total for any valid subset: an empty subset produces header-only
/// output. The subset is not mutated, and equal subsets produce
/// byte-identical output.
pub fn write_bookings_csv<W: Write>(subset: &[&Booking], writer: W) -> LedgerResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_writer(writer);

    csv_writer
        .write_record(HEADERS)
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for booking in subset {
        csv_writer
            .write_record([
                booking.date.format("%Y-%m-%d").to_string(),
                booking.time.format("%H:%M").to_string(),
                booking.head_visitor().name.clone(),
                booking.group_size().to_string(),
                booking.partner_name.clone(),
                booking.guide_name.clone(),
                booking.invoice_amount.to_string(),
                booking.profit_amount.to_string(),
            ])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

/// Render a booking subset as a CSV string
pub fn export_bookings_csv(subset: &[&Booking]) -> LedgerResult<String> {
    let mut buffer = Vec::new();
    write_bookings_csv(subset, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| LedgerError::Export(e.to_string()))
}
