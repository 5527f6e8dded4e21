//! Cost model
//!
//! Converts the itemized operational costs of one excursion into an
//! invoice total and the operator's profit. All derivations are total
//! functions over `f64`: negative or out-of-range inputs (including a
//! commission percentage outside 0–100) are accepted and simply produce
//! the arithmetic result. No rounding is applied; display formatting is
//! a presentation concern.

use serde::{Deserialize, Serialize};

/// Itemized cost sheet for one excursion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostSheet {
    /// Guide fee
    pub guide_fee: f64,

    /// Vehicle charge
    pub vehicle_charge: f64,

    /// Boat charge
    pub boat_charge: f64,

    /// Boat crew / rafting charge
    pub boat_crew_charge: f64,

    /// Forest-entry permission fee
    pub forest_permission: f64,

    /// Forest guard charge
    pub forest_guard_charge: f64,

    /// Community contribution
    pub community_contribution: f64,

    /// Flat operator service charge (excluded from base logistics)
    pub service_charge: f64,

    /// Commission percentage applied to base logistics
    pub commission_percentage: f64,
}

impl CostSheet {
    /// Sum of every itemized cost except the service charge; the amount
    /// commission is computed against.
    pub fn base_logistics(&self) -> f64 {
        self.guide_fee
            + self.vehicle_charge
            + self.boat_charge
            + self.boat_crew_charge
            + self.forest_permission
            + self.forest_guard_charge
            + self.community_contribution
    }

    /// Percentage-based markup on base logistics
    pub fn commission_amount(&self) -> f64 {
        self.commission_percentage / 100.0 * self.base_logistics()
    }

    /// Total billed to the customer
    pub fn invoice_amount(&self) -> f64 {
        self.base_logistics() + self.commission_amount() + self.service_charge
    }

    /// The operator's margin: service charge plus commission only.
    /// Base logistics pass through at cost, so this is not
    /// `invoice - costs`.
    pub fn profit_amount(&self) -> f64 {
        self.service_charge + self.commission_amount()
    }

    /// All four derived figures, computed together
    pub fn breakdown(&self) -> CostBreakdown {
        let base_logistics = self.base_logistics();
        let commission_amount = self.commission_percentage / 100.0 * base_logistics;
        CostBreakdown {
            base_logistics,
            commission_amount,
            invoice_amount: base_logistics + commission_amount + self.service_charge,
            profit_amount: self.service_charge + commission_amount,
        }
    }
}

impl Default for CostSheet {
    /// The operator's standard rate card, used to seed a new entry
    fn default() -> Self {
        Self {
            guide_fee: 2000.0,
            vehicle_charge: 3500.0,
            boat_charge: 1500.0,
            boat_crew_charge: 800.0,
            forest_permission: 1000.0,
            forest_guard_charge: 500.0,
            community_contribution: 500.0,
            service_charge: 1200.0,
            commission_percentage: 10.0,
        }
    }
}

/// Derived financial figures for one cost sheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Sum of itemized costs excluding the service charge
    pub base_logistics: f64,

    /// Commission on base logistics
    pub commission_amount: f64,

    /// Total billed to the customer
    pub invoice_amount: f64,

    /// Operator margin (service charge + commission)
    pub profit_amount: f64,
}
