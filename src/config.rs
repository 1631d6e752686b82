// ==========================================
// Load Distribution Engine - Distribution Policy Config
// ==========================================
// Responsibility: caller-supplied policy for one distribution call
// Invariant: threaded explicitly through every call, never ambient
// state, so concurrent calls with different configs cannot interfere
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// ==========================================
// DistributionConfig - per-call policy
// ==========================================
// Missing fields in a config file fall back to the product defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionConfig {
    pub auto_send_enabled: bool,       // global kill switch
    pub max_recipients_per_load: usize, // fan-out cap, applied per pool
    pub radius_miles: f64,             // 0 = no geographic filtering
    pub equipment_matching: bool,      // require equipment tag match for drivers
    pub priority_drivers_first: bool,  // informational tie-break preference
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            auto_send_enabled: true,
            max_recipients_per_load: 5,
            radius_miles: 250.0,
            equipment_matching: true,
            priority_drivers_first: true,
        }
    }
}

impl DistributionConfig {
    /// Validate the policy invariants.
    ///
    /// # Errors
    /// - cap must be positive
    /// - radius must be a finite, non-negative number of miles
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_recipients_per_load == 0 {
            return Err(ConfigError::Invalid(
                "max_recipients_per_load must be at least 1".to_string(),
            ));
        }
        if !self.radius_miles.is_finite() || self.radius_miles < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "radius_miles must be a non-negative number, got {}",
                self.radius_miles
            )));
        }
        Ok(())
    }

    /// Load and validate a config from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Parse and validate a config from a JSON string.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
}

/// Config layer error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_product_policy() {
        let config = DistributionConfig::default();
        assert!(config.auto_send_enabled);
        assert_eq!(config.max_recipients_per_load, 5);
        assert_eq!(config.radius_miles, 250.0);
        assert!(config.equipment_matching);
        assert!(config.priority_drivers_first);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config =
            DistributionConfig::from_json_str(r#"{"max_recipients_per_load": 2}"#).unwrap();
        assert_eq!(config.max_recipients_per_load, 2);
        assert_eq!(config.radius_miles, 250.0);
        assert!(config.auto_send_enabled);
    }

    #[test]
    fn test_zero_cap_rejected() {
        let err = DistributionConfig::from_json_str(r#"{"max_recipients_per_load": 0}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_negative_radius_rejected() {
        let mut config = DistributionConfig::default();
        config.radius_miles = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_round_trip() {
        let config = DistributionConfig::default();
        let raw = serde_json::to_string(&config).unwrap();
        let parsed = DistributionConfig::from_json_str(&raw).unwrap();
        assert_eq!(parsed, config);
    }
}
