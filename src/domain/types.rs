// ==========================================
// Load Distribution Engine - Domain Types
// ==========================================
// Responsibility: shared enums for candidate state and recipient kinds
// Serialization format: SCREAMING_SNAKE_CASE (matches the posting workflow)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Availability - driver availability state
// ==========================================
// Invariant: AVAILABLE is the only state eligible for dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Availability {
    Available,   // ready to take a load
    Busy,        // currently under a load
    Unavailable, // off duty / out of service
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Available => write!(f, "AVAILABLE"),
            Availability::Busy => write!(f, "BUSY"),
            Availability::Unavailable => write!(f, "UNAVAILABLE"),
        }
    }
}

// ==========================================
// RecipientKind - notification recipient class
// ==========================================
// Drivers get an acceptance call-to-action, carriers a booking reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecipientKind {
    Driver,
    Carrier,
}

impl fmt::Display for RecipientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipientKind::Driver => write!(f, "DRIVER"),
            RecipientKind::Carrier => write!(f, "CARRIER"),
        }
    }
}
