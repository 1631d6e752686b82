// ==========================================
// Load Distribution Engine - Dispatch Orchestrator
// ==========================================
// Responsibility: run one load through the full distribution pipeline
// Gate -> Validate -> Acquire -> Filter/Rank/Cap -> Compose -> Dispatch
// -> Aggregate, with two early-exit terminal states (disabled, invalid
// input) and one normal terminal state (aggregated result)
// No persistent state across calls; safe to invoke concurrently for
// different loads
// All failures surface in the returned DistributionResult - no error
// crosses this boundary as Err or panic
// ==========================================

use crate::config::DistributionConfig;
use crate::domain::candidate::{CarrierProfile, DriverProfile};
use crate::domain::distribution::{DistributionResult, SendOutcome};
use crate::domain::load::Load;
use crate::domain::types::RecipientKind;
use crate::engine::eligibility::EligibilityFilter;
use crate::engine::gateway::{GatewayError, NotificationGateway};
use crate::engine::geo::GeoDistanceEstimator;
use crate::engine::messages::MessageComposer;
use crate::engine::priority::PriorityRanker;
use crate::engine::selection::SelectionCapper;
use crate::repository::directory::DirectoryProvider;
use crate::repository::error::DirectoryResult;
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, error, info, instrument, warn};

/// Upper bound on in-flight gateway calls within one dispatch batch.
pub const MAX_CONCURRENT_SENDS: usize = 8;

/// Per-recipient send deadline; an elapsed send is a failure for that
/// recipient only, never for the batch.
pub const SEND_TIMEOUT: Duration = Duration::from_secs(5);

// ==========================================
// SelectedRecipients - filter/rank/cap output per pool
// ==========================================
#[derive(Debug, Clone)]
pub struct SelectedRecipients {
    pub drivers: Vec<DriverProfile>,
    pub carriers: Vec<CarrierProfile>,
}

impl SelectedRecipients {
    /// Combined fan-out size; at most twice the per-pool cap.
    pub fn total(&self) -> usize {
        self.drivers.len() + self.carriers.len()
    }
}

// One composed notification awaiting dispatch.
struct DispatchJob {
    kind: RecipientKind,
    name: String,
    target: String,
    message: String,
}

// ==========================================
// DispatchOrchestrator
// ==========================================
pub struct DispatchOrchestrator<D, G, E>
where
    D: DirectoryProvider,
    G: NotificationGateway,
    E: GeoDistanceEstimator,
{
    directory: Arc<D>,
    gateway: Arc<G>,
    filter: EligibilityFilter<E>,
    ranker: PriorityRanker,
    capper: SelectionCapper,
    composer: MessageComposer,
}

impl<D, G, E> DispatchOrchestrator<D, G, E>
where
    D: DirectoryProvider,
    G: NotificationGateway,
    E: GeoDistanceEstimator,
{
    /// # Parameters
    /// - directory: candidate pool provider
    /// - gateway: notification transport
    /// - geo: distance capability for radius filtering
    pub fn new(directory: Arc<D>, gateway: Arc<G>, geo: Arc<E>) -> Self {
        Self {
            directory,
            gateway,
            filter: EligibilityFilter::new(geo),
            ranker: PriorityRanker::new(),
            capper: SelectionCapper::new(),
            composer: MessageComposer::new(),
        }
    }

    /// Distribute one load: select recipients, fan out notifications,
    /// and report the aggregated outcome.
    #[instrument(skip(self, load, config), fields(load_id = %load.id))]
    pub async fn distribute_load(
        &self,
        load: &Load,
        config: &DistributionConfig,
    ) -> DistributionResult {
        // ==========================================
        // Step 1: policy gate - side-effect-free short-circuit
        // ==========================================
        if !config.auto_send_enabled {
            info!("auto-distribution disabled, skipping dispatch");
            return DistributionResult::rejected("Auto-distribution is disabled");
        }

        // ==========================================
        // Step 2: input validation - the only fail-fast path left
        // ==========================================
        let missing = load.missing_required_fields();
        if !missing.is_empty() {
            warn!(missing = ?missing, "load rejected: missing required fields");
            return DistributionResult::rejected(format!(
                "Load is missing required fields: {}",
                missing.join(", ")
            ));
        }

        // ==========================================
        // Steps 3-4: acquire pools, then filter -> rank -> cap per pool
        // ==========================================
        let selected = match self.select_recipients(load, config).await {
            Ok(selected) => selected,
            Err(e) => {
                error!(error = %e, "candidate acquisition failed");
                return DistributionResult::rejected(format!(
                    "Candidate directory unavailable: {e}"
                ));
            }
        };

        if selected.total() == 0 {
            // a normal outcome: nothing qualified, nothing to send
            info!("no eligible recipients for load");
            return DistributionResult {
                success: false,
                messages_sent: 0,
                recipients: Vec::new(),
                errors: Vec::new(),
            };
        }

        // ==========================================
        // Step 5: message composition - pure formatting, no I/O
        // ==========================================
        let mut jobs = Vec::with_capacity(selected.total());
        for driver in &selected.drivers {
            jobs.push(DispatchJob {
                kind: RecipientKind::Driver,
                name: driver.name.clone(),
                target: driver.contact_address.clone(),
                message: self.composer.compose_driver_message(load),
            });
        }
        for carrier in &selected.carriers {
            jobs.push(DispatchJob {
                kind: RecipientKind::Carrier,
                name: carrier.name.clone(),
                target: carrier.contact_address.clone(),
                message: self.composer.compose_carrier_message(load),
            });
        }

        info!(
            drivers = selected.drivers.len(),
            carriers = selected.carriers.len(),
            "dispatching load notifications"
        );

        // ==========================================
        // Step 6: bounded concurrent dispatch
        // ==========================================
        let outcomes = self.dispatch_all(&load.id, jobs).await;

        // ==========================================
        // Step 7: aggregation, in selection order
        // ==========================================
        let result = DistributionResult::from_outcomes(&outcomes);

        info!(
            messages_sent = result.messages_sent,
            failed = result.errors.len(),
            success = result.success,
            "load distribution complete"
        );

        result
    }

    /// Run acquisition and selection without composing or sending.
    ///
    /// Backs preview surfaces that show who a load would go to before
    /// committing to a send.
    pub async fn select_recipients(
        &self,
        load: &Load,
        config: &DistributionConfig,
    ) -> DirectoryResult<SelectedRecipients> {
        debug!(load_id = %load.id, "acquiring candidate pools");
        let driver_pool = self.directory.get_drivers().await?;
        let carrier_pool = self.directory.get_carriers().await?;
        debug!(
            drivers = driver_pool.len(),
            carriers = carrier_pool.len(),
            "candidate pools acquired"
        );

        let drivers = self.filter.filter_drivers(load, driver_pool, config);
        let carriers = self.filter.filter_carriers(load, carrier_pool, config);

        let drivers = self.ranker.rank_drivers(drivers);
        let carriers = self.ranker.rank_carriers(carriers, load);

        let drivers = self.capper.cap(drivers, config.max_recipients_per_load);
        let carriers = self.capper.cap(carriers, config.max_recipients_per_load);

        info!(
            load_id = %load.id,
            selected_drivers = drivers.len(),
            selected_carriers = carriers.len(),
            "recipient selection complete"
        );

        Ok(SelectedRecipients { drivers, carriers })
    }

    // ==========================================
    // Dispatch internals
    // ==========================================

    /// Send every composed job with bounded parallelism.
    ///
    /// Outcomes are indexed by original job position so the aggregated
    /// result keeps a stable, reproducible order regardless of which
    /// sends finish first.
    async fn dispatch_all(&self, load_id: &str, jobs: Vec<DispatchJob>) -> Vec<SendOutcome> {
        let total = jobs.len();
        let mut slots: Vec<Option<SendOutcome>> =
            std::iter::repeat_with(|| None).take(total).collect();

        let indexed: Vec<(usize, SendOutcome)> =
            futures::stream::iter(jobs.into_iter().enumerate())
                .map(|(position, job)| async move {
                    (position, self.send_one(load_id, job).await)
                })
                .buffer_unordered(MAX_CONCURRENT_SENDS)
                .collect()
                .await;

        for (position, outcome) in indexed {
            slots[position] = Some(outcome);
        }

        slots.into_iter().flatten().collect()
    }

    /// One gateway attempt for one recipient, bounded by SEND_TIMEOUT.
    ///
    /// Never fails the batch: every path resolves to a SendOutcome.
    #[instrument(skip(self, job), fields(load_id = %load_id, recipient = %job.name, kind = %job.kind))]
    async fn send_one(&self, load_id: &str, job: DispatchJob) -> SendOutcome {
        let attempt = timeout(SEND_TIMEOUT, self.gateway.send(&job.target, &job.message)).await;

        let (delivered, message_id, error_text) = match attempt {
            Ok(Ok(receipt)) if receipt.delivered => {
                debug!(message_id = ?receipt.message_id, "notification delivered");
                (true, receipt.message_id, None)
            }
            Ok(Ok(receipt)) => {
                let detail = receipt
                    .error_text
                    .unwrap_or_else(|| "delivery not confirmed by gateway".to_string());
                warn!(error = %detail, "notification not delivered");
                (false, None, Some(detail))
            }
            Ok(Err(e)) => {
                warn!(error = %e, "notification send failed");
                (false, None, Some(e.to_string()))
            }
            Err(_) => {
                let e = GatewayError::Timeout(SEND_TIMEOUT);
                warn!(error = %e, "notification send timed out");
                (false, None, Some(e.to_string()))
            }
        };

        SendOutcome {
            kind: job.kind,
            name: job.name,
            target: job.target,
            delivered,
            message_id,
            error_text,
        }
    }
}
