//! Caller-facing outcomes
//!
//! `{ "success": true }` or
//! `{ "success": false, "reasons"?: [...], "errors"?: [...] }`.

use crate::error::ReconcileError;
use crate::gateway::GraphQlError;
use crate::plan::{Operation, ReconcileRequest};
use ledgermap_core::MappingTarget;
use serde::{Deserialize, Serialize};

/// Normalised reconciliation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconcileOutcome {
    pub success: bool,
    /// Local failure reasons
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasons: Option<Vec<String>>,
    /// Remote GraphQL errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQlError>>,
}

impl ReconcileOutcome {
    /// Successful outcome
    #[inline]
    #[must_use]
    pub fn success() -> Self {
        Self {
            success: true,
            reasons: None,
            errors: None,
        }
    }

    /// Whether the reconciliation succeeded
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }
}

impl From<ReconcileError> for ReconcileOutcome {
    fn from(error: ReconcileError) -> Self {
        let reasons = error.reasons();
        let errors = match error {
            ReconcileError::Remote(errors) => Some(errors),
            _ => None,
        };
        Self {
            success: false,
            reasons,
            errors,
        }
    }
}

impl<T> From<Result<T, ReconcileError>> for ReconcileOutcome {
    fn from(result: Result<T, ReconcileError>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(error) => error.into(),
        }
    }
}

/// Outcome for one billing entity in a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityOutcome {
    pub billing_entity: String,
    pub target: MappingTarget,
    /// Operation performed, when it got that far
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,
    pub outcome: ReconcileOutcome,
}

impl EntityOutcome {
    pub(crate) fn new(
        request: &ReconcileRequest,
        result: Result<Operation, ReconcileError>,
    ) -> Self {
        let operation = result.as_ref().ok().copied();
        Self {
            billing_entity: request.billing_entity.key.clone(),
            target: request.target.clone(),
            operation,
            outcome: result.into(),
        }
    }
}

/// Aggregated outcomes of a multi-entity reconciliation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub outcomes: Vec<EntityOutcome>,
}

impl BatchReport {
    /// Whether every entity succeeded
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(|o| o.outcome.is_success())
    }

    /// Entities that failed
    pub fn failures(&self) -> impl Iterator<Item = &EntityOutcome> {
        self.outcomes.iter().filter(|o| !o.outcome.is_success())
    }

    /// Number of remote mutations that were issued successfully
    #[must_use]
    pub fn mutations_applied(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.outcome.is_success())
            .filter(|o| o.operation.is_some_and(|op| op != Operation::Skipped))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_serializes_minimal() {
        assert_eq!(
            serde_json::to_value(ReconcileOutcome::success()).unwrap(),
            json!({ "success": true })
        );
    }

    #[test]
    fn local_failure_has_reasons_only() {
        let outcome = ReconcileOutcome::from(ReconcileError::MissingMappingId);
        assert_eq!(
            serde_json::to_value(outcome).unwrap(),
            json!({ "success": false, "reasons": ["No initial mapping ID found"] })
        );
    }

    #[test]
    fn remote_failure_has_errors_only() {
        let outcome =
            ReconcileOutcome::from(ReconcileError::Remote(vec![GraphQlError::new("taken")]));
        assert_eq!(
            serde_json::to_value(outcome).unwrap(),
            json!({ "success": false, "errors": [{ "message": "taken" }] })
        );
    }
}
