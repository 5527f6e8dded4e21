//! Booking repository
//!
//! Owns the authoritative, ordered collection of bookings for the
//! session, most-recent-first. All mutation funnels through `create`,
//! `delete_one`, and `delete_many`; everything else reads borrowed
//! snapshots. Storage is volatile by design; the JSON export is the
//! snapshot format for anything that needs to survive the session.

use std::collections::HashSet;

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Booking, BookingId};

/// In-memory collection of bookings, most-recent-first
#[derive(Debug, Default)]
pub struct Ledger {
    bookings: Vec<Booking>,
    audit: Option<AuditLogger>,
}

impl Ledger {
    /// Create an empty ledger with no audit trail
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ledger whose mutations are audited
    pub fn with_audit(audit: AuditLogger) -> Self {
        Self {
            bookings: Vec::new(),
            audit: Some(audit),
        }
    }

    /// Rebuild a ledger from a snapshot, newest entry first.
    ///
    /// Rejects duplicate booking ids; reloads are not audited.
    pub fn from_bookings(bookings: Vec<Booking>) -> LedgerResult<Self> {
        let mut seen = HashSet::with_capacity(bookings.len());
        for booking in &bookings {
            if !seen.insert(booking.id) {
                return Err(LedgerError::duplicate_booking(booking.id.to_string()));
            }
        }
        Ok(Self {
            bookings,
            audit: None,
        })
    }

    /// Record a fully-formed booking at the front of the collection.
    ///
    /// The caller has already produced the visitor group and frozen the
    /// financial figures; the ledger only guards id uniqueness.
    pub fn create(&mut self, booking: Booking) -> LedgerResult<BookingId> {
        if self.get(booking.id).is_some() {
            return Err(LedgerError::duplicate_booking(booking.id.to_string()));
        }

        if let Some(audit) = &self.audit {
            audit.log(&AuditEntry::for_booking(Operation::Create, &booking))?;
        }

        let id = booking.id;
        self.bookings.insert(0, booking);
        Ok(id)
    }

    /// Delete the booking with the given id.
    ///
    /// Returns whether anything was removed; a missing id is a silent
    /// no-op, consistent with idempotent delete semantics. As with
    /// `create`, the audit entry is written before the mutation, so an
    /// audit failure leaves the collection unchanged.
    pub fn delete_one(&mut self, id: BookingId) -> LedgerResult<bool> {
        let Some(position) = self.bookings.iter().position(|b| b.id == id) else {
            return Ok(false);
        };

        if let Some(audit) = &self.audit {
            let entry = AuditEntry::for_booking(Operation::Delete, &self.bookings[position]);
            audit.log(&entry)?;
        }
        self.bookings.remove(position);
        Ok(true)
    }

    /// Delete every booking whose id is in the given set, in a single
    /// pass over the collection. Returns the number removed; absent ids
    /// are silently skipped.
    pub fn delete_many(&mut self, ids: &HashSet<BookingId>) -> LedgerResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        if let Some(audit) = &self.audit {
            let entries: Vec<_> = self
                .bookings
                .iter()
                .filter(|b| ids.contains(&b.id))
                .map(|b| AuditEntry::for_booking(Operation::Delete, b))
                .collect();
            audit.log_batch(&entries)?;
        }

        let before = self.bookings.len();
        self.bookings.retain(|b| !ids.contains(&b.id));
        Ok(before - self.bookings.len())
    }

    /// The current ordered collection, as a read-only snapshot
    pub fn list(&self) -> &[Booking] {
        &self.bookings
    }

    /// Look up a booking by id
    pub fn get(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// Number of bookings in the ledger
    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    /// Whether the ledger holds no bookings
    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostSheet, Visitor, VisitorGroup};
    use chrono::{NaiveDate, NaiveTime};
    use tempfile::TempDir;

    fn booking(head: &str) -> Booking {
        Booking::new(
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
            VisitorGroup::solo(Visitor::new(head, format!("ID-{}", head))),
            "Pranjal Gogoi",
            "Kaziranga Eco Camp",
            CostSheet::default(),
        )
    }

    #[test]
    fn test_create_inserts_at_front() {
        let mut ledger = Ledger::new();
        ledger.create(booking("First")).unwrap();
        ledger.create(booking("Second")).unwrap();

        let heads: Vec<_> = ledger
            .list()
            .iter()
            .map(|b| b.head_visitor().name.clone())
            .collect();
        assert_eq!(heads, vec!["Second", "First"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut ledger = Ledger::new();
        let first = booking("A");
        let mut clone = booking("B");
        clone.id = first.id;

        ledger.create(first).unwrap();
        let err = ledger.create(clone).unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_delete_one_is_idempotent() {
        let mut ledger = Ledger::new();
        let id = ledger.create(booking("A")).unwrap();

        assert!(ledger.delete_one(id).unwrap());
        assert!(!ledger.delete_one(id).unwrap());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_delete_many_single_pass() {
        let mut ledger = Ledger::new();
        let a = ledger.create(booking("A")).unwrap();
        let _b = ledger.create(booking("B")).unwrap();
        let c = ledger.create(booking("C")).unwrap();

        let mut ids: HashSet<_> = [a, c].into_iter().collect();
        ids.insert(BookingId::new()); // absent id, silently skipped

        assert_eq!(ledger.delete_many(&ids).unwrap(), 2);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.list()[0].head_visitor().name, "B");
    }

    #[test]
    fn test_delete_many_empty_set() {
        let mut ledger = Ledger::new();
        ledger.create(booking("A")).unwrap();
        assert_eq!(ledger.delete_many(&HashSet::new()).unwrap(), 0);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_get_by_id() {
        let mut ledger = Ledger::new();
        let id = ledger.create(booking("A")).unwrap();
        assert_eq!(ledger.get(id).unwrap().head_visitor().name, "A");
        assert!(ledger.get(BookingId::new()).is_none());
    }

    #[test]
    fn test_from_bookings_rejects_duplicates() {
        let first = booking("A");
        let mut second = booking("B");
        second.id = first.id;

        let err = Ledger::from_bookings(vec![first, second]).unwrap_err();
        assert!(err.is_duplicate());
    }

    #[test]
    fn test_mutations_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let reader = AuditLogger::new(temp_dir.path().join("audit.log"));

        let mut ledger = Ledger::with_audit(logger);
        let a = ledger.create(booking("A")).unwrap();
        let b = ledger.create(booking("B")).unwrap();
        ledger.delete_one(a).unwrap();
        ledger.delete_many(&[b].into_iter().collect()).unwrap();

        let entries = reader.read_all().unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[2].operation, Operation::Delete);
        assert_eq!(entries[2].booking_id, a);
        assert_eq!(entries[3].booking_id, b);
    }

    #[test]
    fn test_failed_audit_leaves_ledger_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));

        let mut ledger = Ledger::with_audit(logger);
        let a = ledger.create(booking("A")).unwrap();
        let b = ledger.create(booking("B")).unwrap();

        // Once the log destination is gone every append fails, and the
        // failed operation must not have mutated the collection.
        std::fs::remove_dir_all(temp_dir.path()).unwrap();

        assert!(ledger.create(booking("C")).is_err());
        assert!(ledger.delete_one(a).is_err());
        assert!(ledger.delete_many(&[b].into_iter().collect()).is_err());
        assert_eq!(ledger.len(), 2);
    }
}
