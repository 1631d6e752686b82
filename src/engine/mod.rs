// ==========================================
// Load Distribution Engine - Engine Layer
// ==========================================
// Responsibility: the business rules of load distribution
// Red line: every rejection and failure is reported with its reason;
// nothing is silently dropped
// ==========================================

pub mod eligibility;
pub mod gateway;
pub mod geo;
pub mod messages;
pub mod orchestrator;
pub mod priority;
pub mod selection;

// Re-export the core engines
pub use eligibility::EligibilityFilter;
pub use gateway::{GatewayError, NoOpNotificationGateway, NotificationGateway, SendReceipt};
pub use geo::{haversine_miles, GeoDistanceEstimator, UnknownDistanceEstimator};
pub use messages::MessageComposer;
pub use orchestrator::{
    DispatchOrchestrator, SelectedRecipients, MAX_CONCURRENT_SENDS, SEND_TIMEOUT,
};
pub use priority::PriorityRanker;
pub use selection::SelectionCapper;
