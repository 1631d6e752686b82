// ==========================================
// Distribution flow integration tests
// ==========================================
// Responsibility: exercise the full pipeline end to end -
// policy gate, validation, selection, composition, dispatch,
// aggregation - against in-memory collaborators
// ==========================================

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use freight_dispatch::{
    Availability, CarrierProfile, DirectoryProvider, DirectoryResult, DispatchOrchestrator,
    DistributionConfig, DriverProfile, GatewayError, HomeLocation, InMemoryDirectory, Load,
    NotificationGateway, PriorityRanker, SendReceipt, UnknownDistanceEstimator,
};

// ==========================================
// Test collaborators
// ==========================================

/// Gateway that records every (target, message) pair and confirms all.
#[derive(Default)]
struct RecordingGateway {
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingGateway {
    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationGateway for RecordingGateway {
    async fn send(&self, target: &str, message: &str) -> Result<SendReceipt, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((target.to_string(), message.to_string()));
        Ok(SendReceipt::delivered(format!("msg-{target}")))
    }
}

/// Directory wrapper that counts pool queries.
struct CountingDirectory {
    inner: InMemoryDirectory,
    queries: AtomicUsize,
}

impl CountingDirectory {
    fn new(inner: InMemoryDirectory) -> Self {
        Self {
            inner,
            queries: AtomicUsize::new(0),
        }
    }

    fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DirectoryProvider for CountingDirectory {
    async fn get_drivers(&self) -> DirectoryResult<Vec<DriverProfile>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner.get_drivers().await
    }

    async fn get_carriers(&self) -> DirectoryResult<Vec<CarrierProfile>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner.get_carriers().await
    }
}

// ==========================================
// Test helpers
// ==========================================

fn create_test_load() -> Load {
    Load {
        id: "L1".to_string(),
        origin: "Atlanta, GA".to_string(),
        destination: "Miami, FL".to_string(),
        pickup_date: NaiveDate::from_ymd_opt(2026, 9, 1),
        equipment: "Dry Van".to_string(),
        rate: 2000.0,
        distance_miles: Some(662.0),
        weight: Some("42,000 lbs".to_string()),
        special_instructions: None,
    }
}

fn create_test_driver(id: &str, rating: f64, acceptance_rate: f64) -> DriverProfile {
    DriverProfile {
        id: id.to_string(),
        name: format!("Driver {id}"),
        contact_address: format!("+1555{id}"),
        preferred_equipment: vec!["Dry Van".to_string()],
        home_location: HomeLocation {
            point: None,
            city: "Atlanta".to_string(),
            state: "GA".to_string(),
        },
        availability: Availability::Available,
        rating,
        acceptance_rate,
    }
}

fn create_test_carrier(id: &str, rating: f64, preferred_rate: f64) -> CarrierProfile {
    CarrierProfile {
        id: id.to_string(),
        name: format!("Carrier {id}"),
        contact_address: format!("dispatch@{id}.example.com"),
        equipment_types: vec!["Dry Van".to_string()],
        service_areas: vec!["Southeast".to_string()],
        rating,
        preferred_rate,
        is_active: true,
    }
}

fn orchestrator_with(
    directory: CountingDirectory,
    gateway: RecordingGateway,
) -> (
    DispatchOrchestrator<CountingDirectory, RecordingGateway, UnknownDistanceEstimator>,
    Arc<CountingDirectory>,
    Arc<RecordingGateway>,
) {
    let directory = Arc::new(directory);
    let gateway = Arc::new(gateway);
    let orchestrator = DispatchOrchestrator::new(
        Arc::clone(&directory),
        Arc::clone(&gateway),
        Arc::new(UnknownDistanceEstimator),
    );
    (orchestrator, directory, gateway)
}

// ==========================================
// Test 1: disabled auto-send performs zero external calls
// ==========================================
#[tokio::test]
async fn test_disabled_auto_send_is_a_pure_short_circuit() {
    let directory = CountingDirectory::new(InMemoryDirectory::with_candidates(
        vec![create_test_driver("D1", 4.5, 85.0)],
        vec![],
    ));
    let (orchestrator, directory, gateway) = orchestrator_with(directory, RecordingGateway::default());

    let mut config = DistributionConfig::default();
    config.auto_send_enabled = false;

    let result = orchestrator.distribute_load(&create_test_load(), &config).await;

    assert!(!result.success);
    assert_eq!(result.messages_sent, 0);
    assert_eq!(result.errors, vec!["Auto-distribution is disabled"]);
    assert_eq!(directory.query_count(), 0);
    assert!(gateway.calls().is_empty());
}

// ==========================================
// Test 2: missing rate yields exactly one error and zero sends
// ==========================================
#[tokio::test]
async fn test_missing_rate_fails_fast() {
    let directory = CountingDirectory::new(InMemoryDirectory::with_candidates(
        vec![create_test_driver("D1", 4.5, 85.0)],
        vec![],
    ));
    let (orchestrator, directory, gateway) = orchestrator_with(directory, RecordingGateway::default());

    let mut load = create_test_load();
    load.rate = 0.0;

    let result = orchestrator
        .distribute_load(&load, &DistributionConfig::default())
        .await;

    assert!(!result.success);
    assert_eq!(result.messages_sent, 0);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("rate"));
    assert_eq!(directory.query_count(), 0);
    assert!(gateway.calls().is_empty());
}

// ==========================================
// Test 3: ranking scenario - top two of three drivers, score order
// ==========================================
#[tokio::test]
async fn test_top_two_drivers_selected_in_score_order() {
    // scores: D1 = 2.055, D2 = 1.47, D3 = 2.10
    let drivers = vec![
        create_test_driver("D1", 4.5, 85.0),
        create_test_driver("D2", 3.0, 90.0),
        create_test_driver("D3", 4.8, 60.0),
    ];
    let directory = CountingDirectory::new(InMemoryDirectory::with_candidates(drivers, vec![]));
    let (orchestrator, _, gateway) = orchestrator_with(directory, RecordingGateway::default());

    let mut config = DistributionConfig::default();
    config.max_recipients_per_load = 2;
    config.radius_miles = 0.0;

    let result = orchestrator
        .distribute_load(&create_test_load(), &config)
        .await;

    assert!(result.success);
    assert_eq!(result.messages_sent, 2);
    assert_eq!(
        result.recipients,
        vec!["Driver D3 (+1555D3)", "Driver D1 (+1555D1)"]
    );
    assert!(result.errors.is_empty());

    // every recorded message carries the acceptance call-to-action
    let calls = gateway.calls();
    assert_eq!(calls.len(), 2);
    for (_, message) in &calls {
        assert!(message.contains("Reply YES L1"));
        assert!(message.contains("Route: Atlanta, GA -> Miami, FL"));
    }
}

// ==========================================
// Test 4: the cap applies per pool, combined fan-out at most 2x
// ==========================================
#[tokio::test]
async fn test_cap_is_per_pool() {
    let drivers: Vec<_> = (0..10)
        .map(|i| create_test_driver(&format!("D{i}"), 4.0, 80.0))
        .collect();
    let carriers: Vec<_> = (0..10)
        .map(|i| create_test_carrier(&format!("C{i}"), 4.0, 1000.0))
        .collect();
    let directory = CountingDirectory::new(InMemoryDirectory::with_candidates(drivers, carriers));
    let (orchestrator, _, gateway) = orchestrator_with(directory, RecordingGateway::default());

    let mut config = DistributionConfig::default();
    config.max_recipients_per_load = 3;

    let result = orchestrator
        .distribute_load(&create_test_load(), &config)
        .await;

    // 3 drivers + 3 carriers, never more than 2 * cap
    assert_eq!(result.messages_sent, 6);
    assert_eq!(gateway.calls().len(), 6);
    assert!(result.recipients.len() <= 2 * config.max_recipients_per_load);
}

// ==========================================
// Test 5: preview selection sends nothing
// ==========================================
#[tokio::test]
async fn test_select_recipients_is_side_effect_free() {
    let drivers: Vec<_> = (0..5)
        .map(|i| create_test_driver(&format!("D{i}"), 4.0 + (i as f64) * 0.1, 80.0))
        .collect();
    let directory = CountingDirectory::new(InMemoryDirectory::with_candidates(
        drivers,
        vec![create_test_carrier("C1", 4.0, 1000.0)],
    ));
    let (orchestrator, _, gateway) = orchestrator_with(directory, RecordingGateway::default());

    let mut config = DistributionConfig::default();
    config.max_recipients_per_load = 2;

    let selected = orchestrator
        .select_recipients(&create_test_load(), &config)
        .await
        .unwrap();

    assert_eq!(selected.drivers.len(), 2);
    assert_eq!(selected.carriers.len(), 1);
    assert!(selected.total() <= 2 * config.max_recipients_per_load);
    // highest-rated driver first
    assert_eq!(selected.drivers[0].id, "D4");
    assert!(gateway.calls().is_empty());

    // selection output is sorted non-increasing by score
    for pair in selected.drivers.windows(2) {
        assert!(PriorityRanker::driver_score(&pair[0]) >= PriorityRanker::driver_score(&pair[1]));
    }
}

// ==========================================
// Test 6: carriers get the booking reference, not the accept CTA
// ==========================================
#[tokio::test]
async fn test_carrier_messages_use_booking_reference() {
    let directory = CountingDirectory::new(InMemoryDirectory::with_candidates(
        vec![],
        vec![create_test_carrier("C1", 4.0, 1000.0)],
    ));
    let (orchestrator, _, gateway) = orchestrator_with(directory, RecordingGateway::default());

    let result = orchestrator
        .distribute_load(&create_test_load(), &DistributionConfig::default())
        .await;

    assert!(result.success);
    let calls = gateway.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "dispatch@C1.example.com");
    assert!(calls[0].1.contains("Ref L1 - Contact dispatch to book this load"));
    assert!(!calls[0].1.contains("Reply YES"));
}

// ==========================================
// Test 7: no eligible candidates is a normal, quiet outcome
// ==========================================
#[tokio::test]
async fn test_no_eligible_candidates_is_not_an_error() {
    let mut busy = create_test_driver("D1", 4.5, 85.0);
    busy.availability = Availability::Busy;
    let directory =
        CountingDirectory::new(InMemoryDirectory::with_candidates(vec![busy], vec![]));
    let (orchestrator, _, gateway) = orchestrator_with(directory, RecordingGateway::default());

    let result = orchestrator
        .distribute_load(&create_test_load(), &DistributionConfig::default())
        .await;

    assert!(!result.success);
    assert_eq!(result.messages_sent, 0);
    assert!(result.recipients.is_empty());
    assert!(result.errors.is_empty());
    assert!(gateway.calls().is_empty());
}
