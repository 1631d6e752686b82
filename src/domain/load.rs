// ==========================================
// Load Distribution Engine - Load Domain Model
// ==========================================
// Responsibility: one freight shipment to be distributed
// Written by: the external posting workflow
// Read by: the engine (read-only, never mutated here)
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Load - one posted freight shipment
// ==========================================
// Invariant: id/origin/destination/equipment/rate must be present
// before distribution starts; absence is a fail-fast error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Load {
    // ===== Identity =====
    pub id: String, // caller-assigned unique id

    // ===== Route =====
    pub origin: String,      // free-text pickup location
    pub destination: String, // free-text delivery location

    // ===== Schedule =====
    pub pickup_date: Option<NaiveDate>, // pickup date, if already fixed

    // ===== Freight =====
    pub equipment: String,           // equipment category tag, e.g. "Dry Van"
    pub rate: f64,                   // offered rate, currency units
    pub distance_miles: Option<f64>, // route distance, if known
    pub weight: Option<String>,      // free-text weight, e.g. "42,000 lbs"

    // ===== Notes =====
    pub special_instructions: Option<String>, // posting notes, if any
}

impl Load {
    /// Check the required-field invariant for distribution.
    ///
    /// # Returns
    /// Names of every missing required field, in declaration order.
    /// Empty means the load may be distributed.
    ///
    /// A rate that is zero, negative, or NaN counts as absent.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if self.id.trim().is_empty() {
            missing.push("id");
        }
        if self.origin.trim().is_empty() {
            missing.push("origin");
        }
        if self.destination.trim().is_empty() {
            missing.push("destination");
        }
        if self.equipment.trim().is_empty() {
            missing.push("equipment");
        }
        if !(self.rate > 0.0) {
            missing.push("rate");
        }

        missing
    }
}
