//! Excursion Ledger - operations ledger for an eco-tourism operator
//!
//! This library is the bookkeeping core behind an excursion operator's
//! front office: it records excursion bookings (a visitor group sharing
//! one trip), derives billing and profit figures from itemized
//! operational costs, and supports searching, multi-select bulk
//! management, and CSV/JSON export of the recorded bookings.
//!
//! Presentation surfaces (dashboards, entry forms, printable reports)
//! are external collaborators that consume this crate's data and
//! commands; the one outbound integration, pre-filling a visitor's
//! fields from a scanned ID document, is abstracted behind the
//! [`extract::DocumentExtractor`] trait.
//!
//! # Architecture
//!
//! - `config`: operator settings and form suggestion lists
//! - `error`: custom error types
//! - `models`: core data models (visitors, groups, cost sheets, bookings)
//! - `ledger`: the in-memory booking repository
//! - `query`: free-text filtering and multi-select state
//! - `export`: CSV and JSON snapshot encoders
//! - `reports`: summary aggregation for dashboards and reports
//! - `extract`: document-extraction collaborator boundary
//! - `audit`: append-only audit log of ledger mutations
//!
//! # Example
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use excursion_ledger::ledger::Ledger;
//! use excursion_ledger::models::{Booking, CostSheet, Visitor, VisitorGroup};
//! use excursion_ledger::query::{filter_bookings, view_ids};
//!
//! let mut ledger = Ledger::new();
//! let mut head = Visitor::new("Anjali Sarma", "AS-102938");
//! head.phone = "98640-12345".into();
//! head.address = "Guwahati, Assam".into();
//!
//! let booking = Booking::new(
//!     NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
//!     NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
//!     VisitorGroup::solo(head),
//!     "Pranjal Gogoi",
//!     "Kaziranga Eco Camp",
//!     CostSheet::default(),
//! );
//! let id = ledger.create(booking).unwrap();
//!
//! let view = filter_bookings(ledger.list(), "kaziranga");
//! assert_eq!(view_ids(&view), vec![id]);
//! ```

pub mod audit;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod ledger;
pub mod models;
pub mod query;
pub mod reports;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
