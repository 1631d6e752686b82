// ==========================================
// Load Distribution Engine - Core Library
// ==========================================
// Given a newly posted freight load: select a bounded set of eligible
// drivers and carriers, rank them by suitability, fan out notifications
// with bounded concurrency, and report the aggregated outcome -
// tolerating partial failure of individual sends without losing track
// of what succeeded.
// The surrounding brokerage product (forms, invoices, rosters, auth)
// is an external collaborator: it supplies Load and DistributionConfig
// and consumes DistributionResult.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and value types
pub mod domain;

// Directory access layer - candidate pools
pub mod repository;

// Engine layer - business rules
pub mod engine;

// Distribution policy config
pub mod config;

// Logging setup
pub mod logging;

// ==========================================
// Re-export the core types
// ==========================================

// Domain types
pub use domain::types::{Availability, RecipientKind};

// Domain entities
pub use domain::{
    CarrierProfile, DistributionResult, DriverProfile, GeoPoint, HomeLocation, Load, SendOutcome,
};

// Policy config
pub use config::{ConfigError, DistributionConfig};

// Directory access
pub use repository::{DirectoryError, DirectoryProvider, DirectoryResult, InMemoryDirectory};

// Engines
pub use engine::{
    DispatchOrchestrator, EligibilityFilter, GatewayError, GeoDistanceEstimator, MessageComposer,
    NoOpNotificationGateway, NotificationGateway, PriorityRanker, SelectedRecipients,
    SelectionCapper, SendReceipt, UnknownDistanceEstimator, MAX_CONCURRENT_SENDS, SEND_TIMEOUT,
};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Product name
pub const APP_NAME: &str = "Freight Load Dispatch";
