// ==========================================
// Load Distribution Engine - Selection Capper
// ==========================================
// Responsibility: truncate a ranked list to the configured fan-out cap
// No scoring logic; pure truncation
// ==========================================

// ==========================================
// SelectionCapper
// ==========================================
pub struct SelectionCapper {
    // stateless engine, no injected dependencies
}

impl SelectionCapper {
    pub fn new() -> Self {
        Self {}
    }

    /// Keep the first `max_recipients` entries of a ranked list.
    ///
    /// The cap applies to the driver list and the carrier list
    /// independently, so one load's combined fan-out can reach twice
    /// the cap. That per-pool behavior is deliberate product behavior
    /// carried over from the posting workflow; see DESIGN.md before
    /// changing it.
    pub fn cap<T>(&self, mut ranked: Vec<T>, max_recipients: usize) -> Vec<T> {
        ranked.truncate(max_recipients);
        ranked
    }
}

impl Default for SelectionCapper {
    fn default() -> Self {
        Self::new()
    }
}
