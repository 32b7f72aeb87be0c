//! ledgermap Reconcile - integration mapping reconciliation
//!
//! Given a submitted mapping form, decides and performs the one mutation
//! needed to bring the billing API's mapping row in line with it:
//! - [`plan`]: extraction, classification and payload assembly (pure)
//! - [`execute`]: dispatch of the plan to a [`MappingGateway`]
//! - [`Reconciler`]: both, plus per-billing-entity batches
//!
//! # Example
//!
//! ```rust,ignore
//! use ledgermap_reconcile::{Reconciler, ReconcileConfig, ReconcileRequest};
//!
//! # async fn example(gateway: impl ledgermap_reconcile::MappingGateway, request: ReconcileRequest) {
//! let reconciler = Reconciler::new(gateway, ReconcileConfig::default());
//! let outcome = reconciler.reconcile(&request).await;
//! assert!(outcome.is_success());
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod dispatch;
pub mod error;
pub mod gateway;
pub mod input;
pub mod outcome;
pub mod plan;

pub use config::ReconcileConfig;
pub use dispatch::execute;
pub use error::{ConfigError, GatewayError, ReconcileError};
pub use gateway::{ErrorLocation, GraphQlError, MappingGateway, MutationResponse};
pub use input::{
    CreateCollectionMappingInput, CreateItemMappingInput, DeleteMappingInput,
    UpdateCollectionMappingInput, UpdateItemMappingInput,
};
pub use outcome::{BatchReport, EntityOutcome, ReconcileOutcome};
pub use plan::{plan, MutationPlan, Operation, ReconcileRequest};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reconcile one submission
///
/// Never fails: every path ends in a [`ReconcileOutcome`].
pub async fn reconcile<G>(
    request: &ReconcileRequest,
    gateway: &G,
    config: &ReconcileConfig,
) -> ReconcileOutcome
where
    G: MappingGateway + ?Sized,
{
    reconcile_detailed(request, gateway, config).await.into()
}

/// Reconcile one submission, keeping the typed error
///
/// # Errors
/// Any [`ReconcileError`] raised while planning or dispatching
pub async fn reconcile_detailed<G>(
    request: &ReconcileRequest,
    gateway: &G,
    config: &ReconcileConfig,
) -> Result<Operation, ReconcileError>
where
    G: MappingGateway + ?Sized,
{
    let plan = plan(request, config).map_err(|e| {
        tracing::debug!(
            provider = %request.provider,
            billing_entity = %request.billing_entity.key,
            "planning failed: {}",
            e
        );
        e
    })?;

    if plan.is_remote() {
        tracing::info!(
            provider = %request.provider,
            integration_id = %request.integration_id,
            billing_entity = %request.billing_entity.key,
            target = %request.target,
            "Dispatching {}",
            plan.operation()
        );
    } else {
        tracing::debug!(
            provider = %request.provider,
            integration_id = %request.integration_id,
            billing_entity = %request.billing_entity.key,
            target = %request.target,
            plan = ?plan,
            "No mutation required"
        );
    }

    execute(plan, gateway).await
}

/// Reconciler bound to a gateway and configuration
#[derive(Debug)]
pub struct Reconciler<G> {
    gateway: G,
    config: ReconcileConfig,
}

impl<G: MappingGateway> Reconciler<G> {
    /// Create a new reconciler
    #[inline]
    #[must_use]
    pub fn new(gateway: G, config: ReconcileConfig) -> Self {
        Self { gateway, config }
    }

    /// Plan without executing
    ///
    /// # Errors
    /// See [`plan`]
    pub fn plan(&self, request: &ReconcileRequest) -> Result<MutationPlan, ReconcileError> {
        plan(request, &self.config)
    }

    /// Reconcile one submission
    pub async fn reconcile(&self, request: &ReconcileRequest) -> ReconcileOutcome {
        reconcile(request, &self.gateway, &self.config).await
    }

    /// Reconcile one submission per billing entity
    ///
    /// Entities are processed in order and independently; a failure for one
    /// never stops the others.
    pub async fn reconcile_all(&self, requests: &[ReconcileRequest]) -> BatchReport {
        let mut outcomes = Vec::with_capacity(requests.len());

        for request in requests {
            let result = reconcile_detailed(request, &self.gateway, &self.config).await;
            if let Err(e) = &result {
                tracing::warn!(
                    billing_entity = %request.billing_entity.key,
                    "Reconciliation failed: {}",
                    e
                );
            }
            outcomes.push(EntityOutcome::new(request, result));
        }

        let report = BatchReport { outcomes };
        tracing::info!(
            entities = requests.len(),
            applied = report.mutations_applied(),
            failed = report.failures().count(),
            "Batch reconciliation finished"
        );
        report
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Get gateway
    #[inline]
    #[must_use]
    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}
