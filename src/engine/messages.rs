// ==========================================
// Load Distribution Engine - Message Composition
// ==========================================
// Responsibility: compose the notification body for one recipient
// Pure string formatting, no I/O
// Drivers get an acceptance call-to-action; carriers get the same load
// summary with a booking reference line instead
// ==========================================

use crate::domain::load::Load;

// ==========================================
// MessageComposer
// ==========================================
pub struct MessageComposer {
    // stateless engine, no injected dependencies
}

impl MessageComposer {
    pub fn new() -> Self {
        Self {}
    }

    /// Notification body for a selected driver.
    pub fn compose_driver_message(&self, load: &Load) -> String {
        let mut lines = vec![format!(
            "NEW LOAD {} - Reply YES {} to accept",
            load.id, load.id
        )];
        lines.extend(load_summary_lines(load));
        lines.join("\n")
    }

    /// Notification body for a selected carrier.
    pub fn compose_carrier_message(&self, load: &Load) -> String {
        let mut lines = vec![format!("LOAD AVAILABLE {}", load.id)];
        lines.extend(load_summary_lines(load));
        lines.push(format!(
            "Ref {} - Contact dispatch to book this load",
            load.id
        ));
        lines.join("\n")
    }
}

impl Default for MessageComposer {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared load-summary block; optional lines are omitted when the
/// posting left them blank.
fn load_summary_lines(load: &Load) -> Vec<String> {
    let mut lines = vec![
        format!("Route: {} -> {}", load.origin, load.destination),
        format!(
            "Pickup: {}",
            load.pickup_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "TBD".to_string())
        ),
        format!("Equipment: {}", load.equipment),
        format!("Rate: ${:.2}", load.rate),
    ];

    if let Some(miles) = load.distance_miles {
        lines.push(format!("Distance: {miles:.0} mi"));
    }
    if let Some(weight) = &load.weight {
        lines.push(format!("Weight: {weight}"));
    }
    if let Some(notes) = &load.special_instructions {
        lines.push(format!("Notes: {notes}"));
    }

    lines
}
