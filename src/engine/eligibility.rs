// ==========================================
// Load Distribution Engine - Eligibility Filter
// ==========================================
// Responsibility: reduce the full candidate pools to those legally and
// practically able to carry the load
// Input: load + candidate pool + per-call config
// Output: surviving candidates, in pool order
// No side effects; deterministic given identical inputs; an empty
// result is a normal, reportable outcome, not a failure
// ==========================================

use crate::config::DistributionConfig;
use crate::domain::candidate::{CarrierProfile, DriverProfile};
use crate::domain::load::Load;
use crate::domain::types::Availability;
use crate::engine::geo::GeoDistanceEstimator;
use std::sync::Arc;
use tracing::debug;

// ==========================================
// EligibilityFilter
// ==========================================
pub struct EligibilityFilter<G>
where
    G: GeoDistanceEstimator,
{
    geo: Arc<G>,
}

impl<G> EligibilityFilter<G>
where
    G: GeoDistanceEstimator,
{
    /// # Parameters
    /// - geo: distance capability used for radius filtering
    pub fn new(geo: Arc<G>) -> Self {
        Self { geo }
    }

    /// Filter the driver pool for one load.
    ///
    /// A driver passes iff:
    /// 1) availability is AVAILABLE
    /// 2) equipment matches, when `config.equipment_matching` is set
    /// 3) home base is within `config.radius_miles` of the origin,
    ///    when the radius is positive and a distance estimate exists
    pub fn filter_drivers(
        &self,
        load: &Load,
        candidates: Vec<DriverProfile>,
        config: &DistributionConfig,
    ) -> Vec<DriverProfile> {
        candidates
            .into_iter()
            .filter(|driver| self.driver_eligible(load, driver, config))
            .collect()
    }

    /// Filter the carrier pool for one load.
    ///
    /// A carrier passes iff it is active, hauls the load's equipment
    /// category, and the offered rate clears its published floor.
    pub fn filter_carriers(
        &self,
        load: &Load,
        candidates: Vec<CarrierProfile>,
        _config: &DistributionConfig,
    ) -> Vec<CarrierProfile> {
        candidates
            .into_iter()
            .filter(|carrier| Self::carrier_eligible(load, carrier))
            .collect()
    }

    // ==========================================
    // Per-candidate checks
    // ==========================================

    fn driver_eligible(&self, load: &Load, driver: &DriverProfile, config: &DistributionConfig) -> bool {
        if driver.availability != Availability::Available {
            debug!(
                driver_id = %driver.id,
                availability = %driver.availability,
                "driver rejected: not available"
            );
            return false;
        }

        if config.equipment_matching && !tag_match(&driver.preferred_equipment, &load.equipment) {
            debug!(
                driver_id = %driver.id,
                equipment = %load.equipment,
                "driver rejected: equipment mismatch"
            );
            return false;
        }

        if config.radius_miles > 0.0 {
            // No estimate means within radius: the distance capability is
            // external and may be absent (see engine::geo)
            if let Some(miles) = self.geo.estimate_miles(&load.origin, &driver.home_location) {
                if miles > config.radius_miles {
                    debug!(
                        driver_id = %driver.id,
                        miles,
                        radius = config.radius_miles,
                        "driver rejected: outside radius"
                    );
                    return false;
                }
            }
        }

        true
    }

    fn carrier_eligible(load: &Load, carrier: &CarrierProfile) -> bool {
        if !carrier.is_active {
            debug!(carrier_id = %carrier.id, "carrier rejected: inactive");
            return false;
        }

        if !tag_match(&carrier.equipment_types, &load.equipment) {
            debug!(
                carrier_id = %carrier.id,
                equipment = %load.equipment,
                "carrier rejected: equipment mismatch"
            );
            return false;
        }

        if load.rate < carrier.preferred_rate {
            debug!(
                carrier_id = %carrier.id,
                rate = load.rate,
                floor = carrier.preferred_rate,
                "carrier rejected: rate below floor"
            );
            return false;
        }

        true
    }
}

/// Case-insensitive equipment tag membership.
fn tag_match(tags: &[String], wanted: &str) -> bool {
    tags.iter().any(|tag| tag.eq_ignore_ascii_case(wanted))
}
