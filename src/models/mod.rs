//! Core data models for the excursion ledger
//!
//! This module contains the data structures that represent the booking
//! domain: visitors, visitor groups, cost sheets, and bookings.

pub mod booking;
pub mod costs;
pub mod group;
pub mod ids;
pub mod visitor;

pub use booking::Booking;
pub use costs::{CostBreakdown, CostSheet};
pub use group::{GroupError, VisitorGroup};
pub use ids::BookingId;
pub use visitor::{age_on, Gender, Visitor, VisitorPatch, VisitorValidationError};
