// ==========================================
// Load Distribution Engine - Priority Ranker
// ==========================================
// Responsibility: order eligible candidates by suitability score
// Input: filter output (already eligible)
// Output: the same candidates, score-descending, stable on ties
// The score orders candidates only; it never gates eligibility
// ==========================================

use crate::domain::candidate::{CarrierProfile, DriverProfile};
use crate::domain::load::Load;
use std::cmp::Ordering;

// ==========================================
// PriorityRanker
// ==========================================
pub struct PriorityRanker {
    // stateless engine, no injected dependencies
}

impl PriorityRanker {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // Core methods
    // ==========================================

    /// Rank drivers by suitability, highest score first.
    ///
    /// Ties preserve the filter-output order (stable sort).
    pub fn rank_drivers(&self, mut drivers: Vec<DriverProfile>) -> Vec<DriverProfile> {
        drivers.sort_by(|a, b| compare_scores(Self::driver_score(a), Self::driver_score(b)));
        drivers
    }

    /// Rank carriers by suitability for the given load, highest first.
    ///
    /// Ties preserve the filter-output order (stable sort).
    pub fn rank_carriers(&self, mut carriers: Vec<CarrierProfile>, load: &Load) -> Vec<CarrierProfile> {
        carriers.sort_by(|a, b| {
            compare_scores(Self::carrier_score(a, load), Self::carrier_score(b, load))
        });
        carriers
    }

    // ==========================================
    // Score functions
    // ==========================================

    /// Driver suitability score.
    ///
    /// `rating * 0.4 + acceptance_rate * 0.003` - the weights put a 5.0
    /// rating and a 100% acceptance rate on comparable footing, with the
    /// acceptance rate dominating at the margins as the finer-grained
    /// signal.
    pub fn driver_score(driver: &DriverProfile) -> f64 {
        driver.rating * 0.4 + driver.acceptance_rate * 0.003
    }

    /// Carrier suitability score.
    ///
    /// `rating * 0.6 + (load.rate / preferred_rate) * 0.4` - the rate
    /// ratio rewards carriers whose floor sits well below the offer.
    /// A zero floor publishes no minimum, so the ratio term is fixed at
    /// the neutral 1.0 instead of dividing by zero.
    pub fn carrier_score(carrier: &CarrierProfile, load: &Load) -> f64 {
        let rate_ratio = if carrier.preferred_rate == 0.0 {
            1.0
        } else {
            load.rate / carrier.preferred_rate
        };
        carrier.rating * 0.6 + rate_ratio * 0.4
    }
}

impl Default for PriorityRanker {
    fn default() -> Self {
        Self::new()
    }
}

/// Descending comparison; incomparable scores (NaN) rank as equal so the
/// stable sort leaves their relative order untouched.
fn compare_scores(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
