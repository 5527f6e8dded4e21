//! Audit logging for ledger mutations
//!
//! Provides an append-only, line-delimited JSON log of booking creates
//! and deletes, so the volatile in-memory ledger still leaves a durable
//! trail of what was recorded and removed during a session.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
