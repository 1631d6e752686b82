// ==========================================
// Load Distribution Engine - Domain Layer
// ==========================================
// Responsibility: entities and value types, no business rules
// ==========================================

pub mod candidate;
pub mod distribution;
pub mod load;
pub mod types;

pub use candidate::{CarrierProfile, DriverProfile, GeoPoint, HomeLocation};
pub use distribution::{DistributionResult, SendOutcome};
pub use load::Load;
pub use types::{Availability, RecipientKind};
