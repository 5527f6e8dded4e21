//! Free-text filtering and multi-select state
//!
//! Derives a filtered view over the ledger and manages a transient
//! selection set scoped to that view, without ever mutating the
//! repository itself.

use std::collections::HashSet;

use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::models::{Booking, BookingId};

/// Filter bookings by a free-text query, case-insensitively.
///
/// A booking matches when the query is a substring of the head visitor's
/// name, the guide name, or the partner name. An empty query matches
/// everything. Returns borrowed references in the input order.
pub fn filter_bookings<'a>(bookings: &'a [Booking], query: &str) -> Vec<&'a Booking> {
    let needle = query.to_lowercase();
    bookings
        .iter()
        .filter(|b| {
            b.head_visitor().name.to_lowercase().contains(&needle)
                || b.guide_name.to_lowercase().contains(&needle)
                || b.partner_name.to_lowercase().contains(&needle)
        })
        .collect()
}

/// The ids of a filtered view, in view order.
///
/// Selection and bulk-delete operations are scoped to these ids rather
/// than to borrowed bookings, so the ledger can be mutated afterwards.
pub fn view_ids(view: &[&Booking]) -> Vec<BookingId> {
    view.iter().map(|b| b.id).collect()
}

/// Transient multi-select state over the current filtered view
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: HashSet<BookingId>,
}

impl Selection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle one booking in or out of the selection.
    ///
    /// Returns whether the booking is selected afterwards.
    pub fn toggle(&mut self, id: BookingId) -> bool {
        if !self.ids.insert(id) {
            self.ids.remove(&id);
            return false;
        }
        true
    }

    /// Replace the selection with every id in the given view
    pub fn select_all(&mut self, view: impl IntoIterator<Item = BookingId>) {
        self.ids = view.into_iter().collect();
    }

    /// Two-state "select all" toggle: when every booking in the view is
    /// already selected, clears the selection; otherwise selects the
    /// whole view.
    pub fn toggle_select_all(&mut self, view: &[BookingId]) {
        if !view.is_empty() && view.iter().all(|id| self.ids.contains(id)) {
            self.clear();
        } else {
            self.select_all(view.iter().copied());
        }
    }

    /// Drop the whole selection
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Whether a booking is currently selected
    pub fn is_selected(&self, id: BookingId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of selected bookings
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The selected ids
    pub fn ids(&self) -> &HashSet<BookingId> {
        &self.ids
    }
}

/// Bulk-delete the selected bookings.
///
/// Only ids present in the current filtered view are deleted, so stale
/// selections from an earlier filter can never remove rows the operator
/// is not looking at. The selection is cleared afterwards regardless of
/// how many bookings were removed.
pub fn delete_selected(
    ledger: &mut Ledger,
    selection: &mut Selection,
    view: &[BookingId],
) -> LedgerResult<usize> {
    let in_view: HashSet<BookingId> = view
        .iter()
        .copied()
        .filter(|id| selection.is_selected(*id))
        .collect();

    let removed = ledger.delete_many(&in_view)?;
    selection.clear();
    Ok(removed)
}
