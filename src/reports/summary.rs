//! Ledger summary
//!
//! Rolls a booking subset up into the totals the dashboard and report
//! surfaces display. A single O(n) reduction; the result is independent
//! of subset ordering.

use serde::{Deserialize, Serialize};

use crate::models::Booking;

/// Summary totals over a booking subset
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Number of bookings in the subset
    pub booking_count: usize,

    /// Total visitors across all groups
    pub total_visitors: usize,

    /// Sum of frozen invoice amounts (gross revenue)
    pub total_revenue: f64,

    /// Sum of frozen profit amounts (operator margin)
    pub total_profit: f64,

    /// Sum of base logistics across bookings: the third-party payouts,
    /// distinct from profit. The service charge is excluded, matching
    /// the cost model's base.
    pub total_operational_costs: f64,
}

impl LedgerSummary {
    /// Compute the summary for a booking subset
    pub fn from_bookings<'a>(subset: impl IntoIterator<Item = &'a Booking>) -> Self {
        subset.into_iter().fold(Self::default(), |mut acc, booking| {
            acc.booking_count += 1;
            acc.total_visitors += booking.group_size();
            acc.total_revenue += booking.invoice_amount;
            acc.total_profit += booking.profit_amount;
            acc.total_operational_costs += booking.costs.base_logistics();
            acc
        })
    }
}
