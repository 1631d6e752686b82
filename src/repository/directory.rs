// ==========================================
// Load Distribution Engine - Candidate Directory
// ==========================================
// Responsibility: supply the full driver and carrier candidate pools
// The provider trait is the engine's only view of the directory;
// the in-memory implementation covers the product's current contract
// (persistent storage design is out of scope)
// ==========================================

use crate::domain::candidate::{CarrierProfile, DriverProfile};
use crate::repository::error::DirectoryResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::sync::RwLock;

// ==========================================
// DirectoryProvider Trait
// ==========================================
// Implementors: InMemoryDirectory (tests, demo bin); a persistent
// directory service can be swapped in without touching the engine
#[async_trait]
pub trait DirectoryProvider: Send + Sync {
    /// Full driver candidate pool.
    async fn get_drivers(&self) -> DirectoryResult<Vec<DriverProfile>>;

    /// Full carrier candidate pool.
    async fn get_carriers(&self) -> DirectoryResult<Vec<CarrierProfile>>;
}

// ==========================================
// DirectorySnapshot - serialized directory contents
// ==========================================
// Fixture format for the demo bin and tests
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectorySnapshot {
    #[serde(default)]
    pub drivers: Vec<DriverProfile>,
    #[serde(default)]
    pub carriers: Vec<CarrierProfile>,
}

// ==========================================
// InMemoryDirectory
// ==========================================
pub struct InMemoryDirectory {
    drivers: RwLock<Vec<DriverProfile>>,
    carriers: RwLock<Vec<CarrierProfile>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self {
            drivers: RwLock::new(Vec::new()),
            carriers: RwLock::new(Vec::new()),
        }
    }

    /// Build a directory pre-populated with the given candidate pools.
    pub fn with_candidates(drivers: Vec<DriverProfile>, carriers: Vec<CarrierProfile>) -> Self {
        Self {
            drivers: RwLock::new(drivers),
            carriers: RwLock::new(carriers),
        }
    }

    /// Load a directory from a JSON snapshot file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> DirectoryResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Load a directory from a JSON snapshot string.
    pub fn from_json_str(raw: &str) -> DirectoryResult<Self> {
        let snapshot: DirectorySnapshot = serde_json::from_str(raw)?;
        Ok(Self::with_candidates(snapshot.drivers, snapshot.carriers))
    }

    /// Insert a driver, replacing any existing record with the same id.
    pub async fn upsert_driver(&self, driver: DriverProfile) {
        let mut drivers = self.drivers.write().await;
        match drivers.iter_mut().find(|d| d.id == driver.id) {
            Some(existing) => *existing = driver,
            None => drivers.push(driver),
        }
    }

    /// Insert a carrier, replacing any existing record with the same id.
    pub async fn upsert_carrier(&self, carrier: CarrierProfile) {
        let mut carriers = self.carriers.write().await;
        match carriers.iter_mut().find(|c| c.id == carrier.id) {
            Some(existing) => *existing = carrier,
            None => carriers.push(carrier),
        }
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectoryProvider for InMemoryDirectory {
    async fn get_drivers(&self) -> DirectoryResult<Vec<DriverProfile>> {
        Ok(self.drivers.read().await.clone())
    }

    async fn get_carriers(&self) -> DirectoryResult<Vec<CarrierProfile>> {
        Ok(self.carriers.read().await.clone())
    }
}
