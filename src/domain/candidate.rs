// ==========================================
// Load Distribution Engine - Candidate Domain Models
// ==========================================
// Responsibility: driver and carrier candidate records
// Written by: the Directory Provider (external collaborator)
// Read by: the engine (read-only)
// ==========================================

use crate::domain::types::Availability;
use serde::{Deserialize, Serialize};

// ==========================================
// GeoPoint - coordinate pair
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

// ==========================================
// HomeLocation - driver home base
// ==========================================
// The coordinate pair is optional: directory records imported from the
// roster frequently carry only city/state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeLocation {
    pub point: Option<GeoPoint>,
    pub city: String,
    pub state: String,
}

// ==========================================
// DriverProfile - candidate individual carrier
// ==========================================
// Invariant: rating is 0.0-5.0, acceptance_rate is 0-100;
// availability is the authoritative eligibility gate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverProfile {
    // ===== Identity =====
    pub id: String,
    pub name: String,            // display name for recipient descriptors
    pub contact_address: String, // phone or email target for the gateway

    // ===== Fit signals =====
    pub preferred_equipment: Vec<String>, // equipment category tags
    pub home_location: HomeLocation,

    // ===== Eligibility & reputation =====
    pub availability: Availability,
    pub rating: f64,          // 0.0-5.0
    pub acceptance_rate: f64, // 0-100, share of past offers accepted
}

// ==========================================
// CarrierProfile - candidate carrier organization
// ==========================================
// Invariant: is_active must be true to be eligible;
// preferred_rate is the minimum rate the carrier will take
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierProfile {
    // ===== Identity =====
    pub id: String,
    pub name: String,
    pub contact_address: String,

    // ===== Fit signals =====
    pub equipment_types: Vec<String>, // equipment category tags
    pub service_areas: Vec<String>,   // region tags

    // ===== Eligibility & reputation =====
    pub rating: f64,         // 0.0-5.0
    pub preferred_rate: f64, // minimum acceptable rate; 0 = no floor published
    pub is_active: bool,
}
