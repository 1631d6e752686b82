// ==========================================
// Load Distribution Engine - Distribution Output Models
// ==========================================
// Responsibility: the aggregated outcome of one distribute_load call
// Invariant: constructed once per call, returned to the caller,
// never mutated afterward
// ==========================================

use crate::domain::types::RecipientKind;
use serde::{Deserialize, Serialize};

// ==========================================
// SendOutcome - per-recipient dispatch record
// ==========================================
// One entry per attempted send, indexed by original selection position
// so the aggregated result is reproducible under concurrent dispatch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendOutcome {
    pub kind: RecipientKind,
    pub name: String,   // recipient display name
    pub target: String, // contact address the gateway was given
    pub delivered: bool,
    pub message_id: Option<String>, // gateway-assigned id, when delivered
    pub error_text: Option<String>, // failure detail, when not delivered
}

impl SendOutcome {
    /// Human-readable descriptor for the `recipients` list.
    pub fn recipient_descriptor(&self) -> String {
        format!("{} ({})", self.name, self.target)
    }

    /// Human-readable descriptor for the `errors` list,
    /// prefixed with the recipient's display name for manual follow-up.
    pub fn error_descriptor(&self) -> String {
        let detail = self
            .error_text
            .as_deref()
            .unwrap_or("delivery not confirmed by gateway");
        format!("{}: {}", self.name, detail)
    }
}

// ==========================================
// DistributionResult - the sole output artifact
// ==========================================
// success is true iff at least one message was confirmed sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionResult {
    pub success: bool,
    pub messages_sent: usize,
    pub recipients: Vec<String>, // successful sends, in selection order
    pub errors: Vec<String>,     // failed sends / top-level failures, in order
}

impl DistributionResult {
    /// Result for a call that never reached dispatch: policy rejection,
    /// validation failure, or directory acquisition failure.
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            messages_sent: 0,
            recipients: Vec::new(),
            errors: vec![error.into()],
        }
    }

    /// Aggregate per-recipient outcomes, preserving their order.
    pub fn from_outcomes(outcomes: &[SendOutcome]) -> Self {
        let mut recipients = Vec::new();
        let mut errors = Vec::new();

        for outcome in outcomes {
            if outcome.delivered {
                recipients.push(outcome.recipient_descriptor());
            } else {
                errors.push(outcome.error_descriptor());
            }
        }

        Self {
            success: !recipients.is_empty(),
            messages_sent: recipients.len(),
            recipients,
            errors,
        }
    }
}
