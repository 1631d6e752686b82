// ==========================================
// Load Distribution Engine - Demo Entry Point
// ==========================================
// Usage: freight-dispatch <load.json> [directory.json] [config.json]
// Runs one distribution against the in-memory directory with the
// no-transport gateway and prints the aggregated result as JSON.
// ==========================================

use std::sync::Arc;

use freight_dispatch::{
    logging, Availability, CarrierProfile, DispatchOrchestrator, DistributionConfig,
    DriverProfile, HomeLocation, InMemoryDirectory, Load, NoOpNotificationGateway,
    UnknownDistanceEstimator,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", freight_dispatch::APP_NAME);
    tracing::info!("version: {}", freight_dispatch::VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().collect();
    let Some(load_path) = args.get(1) else {
        eprintln!("usage: freight-dispatch <load.json> [directory.json] [config.json]");
        std::process::exit(2);
    };

    let load: Load = serde_json::from_str(&std::fs::read_to_string(load_path)?)?;
    tracing::info!(load_id = %load.id, "load posting read");

    let directory = match args.get(2) {
        Some(path) => {
            tracing::info!(path = %path, "loading candidate directory");
            InMemoryDirectory::from_json_file(path)?
        }
        None => {
            tracing::info!("no directory file given, using the sample directory");
            sample_directory()
        }
    };

    let config = match args.get(3) {
        Some(path) => DistributionConfig::from_json_file(path)?,
        None => DistributionConfig::default(),
    };
    config.validate()?;

    let orchestrator = DispatchOrchestrator::new(
        Arc::new(directory),
        Arc::new(NoOpNotificationGateway),
        Arc::new(UnknownDistanceEstimator),
    );

    let result = orchestrator.distribute_load(&load, &config).await;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Small built-in candidate pool for trying the engine without a
/// directory file.
fn sample_directory() -> InMemoryDirectory {
    let drivers = vec![
        DriverProfile {
            id: "D001".to_string(),
            name: "John Smith".to_string(),
            contact_address: "+15550100001".to_string(),
            preferred_equipment: vec!["Dry Van".to_string(), "Reefer".to_string()],
            home_location: HomeLocation {
                point: None,
                city: "Atlanta".to_string(),
                state: "GA".to_string(),
            },
            availability: Availability::Available,
            rating: 4.8,
            acceptance_rate: 92.0,
        },
        DriverProfile {
            id: "D002".to_string(),
            name: "Maria Santos".to_string(),
            contact_address: "+15550100002".to_string(),
            preferred_equipment: vec!["Dry Van".to_string()],
            home_location: HomeLocation {
                point: None,
                city: "Macon".to_string(),
                state: "GA".to_string(),
            },
            availability: Availability::Available,
            rating: 4.5,
            acceptance_rate: 85.0,
        },
    ];

    let carriers = vec![CarrierProfile {
        id: "C001".to_string(),
        name: "Southeast Freight LLC".to_string(),
        contact_address: "dispatch@sefreight.example.com".to_string(),
        equipment_types: vec!["Dry Van".to_string(), "Flatbed".to_string()],
        service_areas: vec!["Southeast".to_string()],
        rating: 4.2,
        preferred_rate: 1500.0,
        is_active: true,
    }];

    InMemoryDirectory::with_candidates(drivers, carriers)
}
