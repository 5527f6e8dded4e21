//! Audit entry data structures
//!
//! Defines the structure of audit log entries for ledger mutations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Booking, BookingId};

/// Types of ledger mutations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Booking was recorded
    Create,
    /// Booking was deleted (single or as part of a bulk delete)
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Records one mutation with a full JSON snapshot of the affected
/// booking, so deleted records can still be inspected later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// ID of the affected booking
    pub booking_id: BookingId,

    /// Head visitor name, for human-readable log scanning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_name: Option<String>,

    /// JSON snapshot of the booking at the time of the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Build an entry for a booking, snapshotting it as JSON.
    ///
    /// A booking that fails to serialize still produces an entry, just
    /// without the snapshot.
    pub fn for_booking(operation: Operation, booking: &Booking) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            booking_id: booking.id,
            head_name: Some(booking.head_visitor().name.clone()),
            snapshot: serde_json::to_value(booking).ok(),
        }
    }
}
