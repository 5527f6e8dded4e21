//! Booking model
//!
//! One recorded excursion: the visitor group, the guide and lodging
//! partner, the itemized cost sheet, and the financial figures frozen at
//! creation time.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::costs::CostSheet;
use super::group::{GroupError, VisitorGroup};
use super::ids::BookingId;
use super::visitor::Visitor;

/// One recorded excursion event
///
/// `invoice_amount` and `profit_amount` are computed from the cost sheet
/// once, at construction, and stored. Editing a cost sheet elsewhere
/// never retroactively changes a recorded booking's figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier, assigned at creation and immutable
    pub id: BookingId,

    /// Date of the excursion
    pub date: NaiveDate,

    /// Start time of the excursion
    pub time: NaiveTime,

    /// The visitor group (ordered, non-empty, exactly one head)
    pub visitors: VisitorGroup,

    /// Guide name; free text, optionally drawn from the suggestion list
    pub guide_name: String,

    /// Lodging/operator partner name; free text
    pub partner_name: String,

    /// Itemized cost sheet the figures below were derived from
    pub costs: CostSheet,

    /// Total billed to the customer, frozen at creation
    pub invoice_amount: f64,

    /// Operator margin, frozen at creation
    pub profit_amount: f64,

    /// When the booking was recorded (UTC)
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Record a new booking, freezing the invoice and profit figures
    /// from the cost sheet.
    ///
    /// The caller supplies a fully-formed visitor group; there are no
    /// partial or draft bookings.
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        visitors: VisitorGroup,
        guide_name: impl Into<String>,
        partner_name: impl Into<String>,
        costs: CostSheet,
    ) -> Self {
        let breakdown = costs.breakdown();
        Self {
            id: BookingId::new(),
            date,
            time,
            visitors,
            guide_name: guide_name.into(),
            partner_name: partner_name.into(),
            costs,
            invoice_amount: breakdown.invoice_amount,
            profit_amount: breakdown.profit_amount,
            created_at: Utc::now(),
        }
    }

    /// Convenience constructor taking a raw visitor list
    pub fn from_visitors(
        date: NaiveDate,
        time: NaiveTime,
        visitors: Vec<Visitor>,
        guide_name: impl Into<String>,
        partner_name: impl Into<String>,
        costs: CostSheet,
    ) -> Result<Self, GroupError> {
        Ok(Self::new(
            date,
            time,
            VisitorGroup::new(visitors)?,
            guide_name,
            partner_name,
            costs,
        ))
    }

    /// The head visitor (invoice contact)
    pub fn head_visitor(&self) -> &Visitor {
        self.visitors.head()
    }

    /// Number of visitors in the group
    pub fn group_size(&self) -> usize {
        self.visitors.len()
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({} pax)",
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M"),
            self.head_visitor().name,
            self.group_size()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_booking() -> Booking {
        let mut head = Visitor::new("Anjali Sarma", "AS-102938");
        head.phone = "98640-12345".into();
        head.address = "Guwahati, Assam".into();
        let mut group = VisitorGroup::solo(head);
        group.add(Visitor::new("Rohan Sarma", "AS-102939"));

        Booking::new(
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
            group,
            "Pranjal Gogoi",
            "Kaziranga Eco Camp",
            CostSheet::default(),
        )
    }

    #[test]
    fn test_figures_frozen_at_creation() {
        let booking = sample_booking();
        assert_eq!(booking.invoice_amount, 11980.0);
        assert_eq!(booking.profit_amount, 2180.0);
    }

    #[test]
    fn test_frozen_figures_ignore_later_cost_edits() {
        let mut booking = sample_booking();
        booking.costs.guide_fee = 50000.0;

        // The stored figures are a snapshot, not a live view
        assert_eq!(booking.invoice_amount, 11980.0);
        assert_eq!(booking.profit_amount, 2180.0);
    }

    #[test]
    fn test_head_visitor() {
        let booking = sample_booking();
        assert_eq!(booking.head_visitor().name, "Anjali Sarma");
        assert_eq!(booking.group_size(), 2);
    }

    #[test]
    fn test_from_visitors_rejects_empty_list() {
        let result = Booking::from_visitors(
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
            vec![],
            "Pranjal Gogoi",
            "Kaziranga Eco Camp",
            CostSheet::default(),
        );
        assert_eq!(result.unwrap_err(), GroupError::Empty);
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(sample_booking().id, sample_booking().id);
    }

    #[test]
    fn test_serialization_round_trip() {
        let booking = sample_booking();
        let json = serde_json::to_string(&booking).unwrap();
        let deserialized: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(booking, deserialized);
    }

    #[test]
    fn test_display() {
        let booking = sample_booking();
        assert_eq!(
            format!("{}", booking),
            "2024-06-10 06:30 Anjali Sarma (2 pax)"
        );
    }
}
