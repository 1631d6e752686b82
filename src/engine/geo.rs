// ==========================================
// Load Distribution Engine - Geographic Distance Capability
// ==========================================
// Responsibility: estimate the distance between a load origin and a
// driver's home base for radius filtering
// Note: real geocoding is an external capability. The default
// estimator reports no estimate, and the eligibility filter then
// treats every candidate as within radius. This is the product's
// documented approximation, not a silent stub.
// ==========================================

use crate::domain::candidate::{GeoPoint, HomeLocation};

/// Mean earth radius in miles, for great-circle distances.
const EARTH_RADIUS_MILES: f64 = 3958.8;

// ==========================================
// GeoDistanceEstimator Trait
// ==========================================
// Implementors with a geocoder can resolve the free-text origin and
// return a real estimate; the engine never depends on one existing
pub trait GeoDistanceEstimator: Send + Sync {
    /// Estimated distance in miles from the load's free-text origin to
    /// the candidate's home location.
    ///
    /// # Returns
    /// - `Some(miles)`: a usable estimate
    /// - `None`: no estimate available for this pair
    fn estimate_miles(&self, origin: &str, home: &HomeLocation) -> Option<f64>;
}

/// Default estimator: never produces an estimate.
///
/// With this estimator installed, radius filtering admits every
/// candidate regardless of `radius_miles`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownDistanceEstimator;

impl GeoDistanceEstimator for UnknownDistanceEstimator {
    fn estimate_miles(&self, _origin: &str, _home: &HomeLocation) -> Option<f64> {
        None
    }
}

/// Great-circle distance in miles between two coordinate pairs.
///
/// Helper for estimator implementations that geocode the origin.
pub fn haversine_miles(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_MILES * h.sqrt().asin()
}
