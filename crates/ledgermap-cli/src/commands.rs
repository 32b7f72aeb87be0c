//! `plan` and `apply`

use ledgermap_core::MappingTarget;
use ledgermap_reconcile::{
    plan, BatchReport, MappingGateway, MutationPlan, ReconcileConfig, ReconcileOutcome,
    ReconcileRequest, Reconciler,
};
use serde::{Deserialize, Serialize};

/// Dry-run result for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    pub billing_entity: String,
    pub target: MappingTarget,
    /// The call `apply` would make; absent when planning failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<MutationPlan>,
    pub outcome: ReconcileOutcome,
}

/// Dry-run results, in request order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    pub entries: Vec<PlanEntry>,
}

impl PlanReport {
    /// Whether every request planned cleanly
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.entries.iter().all(|e| e.outcome.is_success())
    }
}

/// Plan every request without touching the network
#[must_use]
pub fn plan_all(requests: &[ReconcileRequest], config: &ReconcileConfig) -> PlanReport {
    let entries = requests
        .iter()
        .map(|request| {
            let result = plan(request, config);
            let (plan, outcome) = match result {
                Ok(plan) => (Some(plan), ReconcileOutcome::success()),
                Err(e) => {
                    tracing::warn!(
                        billing_entity = %request.billing_entity.key,
                        target = %request.target,
                        "Planning failed: {}",
                        e
                    );
                    (None, e.into())
                }
            };
            PlanEntry {
                billing_entity: request.billing_entity.key.clone(),
                target: request.target.clone(),
                plan,
                outcome,
            }
        })
        .collect();

    PlanReport { entries }
}

/// Reconcile every request against a gateway
pub async fn apply<G: MappingGateway>(
    gateway: G,
    config: ReconcileConfig,
    requests: &[ReconcileRequest],
) -> BatchReport {
    Reconciler::new(gateway, config).reconcile_all(requests).await
}
