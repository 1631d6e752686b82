// ==========================================
// Load Distribution Engine - Notification Gateway Seam
// ==========================================
// Responsibility: define the send interface the orchestrator dispatches
// through; the SMS/email transport itself is an external collaborator
// Note: the engine defines the trait, transports implement it - the
// engine never depends on a concrete gateway
// ==========================================

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

// ==========================================
// SendReceipt - one attempt's outcome as reported by the gateway
// ==========================================
// A receipt with delivered == false is a per-recipient failure even
// though the transport call itself succeeded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendReceipt {
    pub delivered: bool,
    pub message_id: Option<String>, // gateway-assigned id, when delivered
    pub error_text: Option<String>, // gateway-reported failure detail
}

impl SendReceipt {
    /// Receipt for a confirmed delivery.
    pub fn delivered(message_id: impl Into<String>) -> Self {
        Self {
            delivered: true,
            message_id: Some(message_id.into()),
            error_text: None,
        }
    }

    /// Receipt for a delivery the gateway could not confirm.
    pub fn undelivered(error_text: impl Into<String>) -> Self {
        Self {
            delivered: false,
            message_id: None,
            error_text: Some(error_text.into()),
        }
    }
}

/// Gateway transport error type
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("send rejected by gateway: {0}")]
    Rejected(String),

    #[error("gateway transport error: {0}")]
    Transport(String),

    #[error("send timed out after {0:?}")]
    Timeout(Duration),
}

// ==========================================
// NotificationGateway Trait
// ==========================================
// The gateway's own retry/backoff policy is its concern; the
// orchestrator treats one call as one attempt
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Attempt delivery of one message to one contact target.
    async fn send(&self, target: &str, message: &str) -> Result<SendReceipt, GatewayError>;
}

/// No-transport gateway: logs the message and reports it delivered.
///
/// Used by the demo bin and by tests that only care about selection
/// and aggregation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpNotificationGateway;

#[async_trait]
impl NotificationGateway for NoOpNotificationGateway {
    async fn send(&self, target: &str, message: &str) -> Result<SendReceipt, GatewayError> {
        debug!(
            target = %target,
            preview = %message.lines().next().unwrap_or_default(),
            "NoOpNotificationGateway: skipping real delivery"
        );
        Ok(SendReceipt::delivered(Uuid::new_v4().to_string()))
    }
}
