//! Reconciliation planning
//!
//! Turns a submission into the single gateway call it requires, without
//! performing it. Planning is pure: extraction, classification and payload
//! assembly only.

use crate::config::ReconcileConfig;
use crate::error::ReconcileError;
use crate::input::{
    CreateCollectionMappingInput, CreateItemMappingInput, DeleteMappingInput,
    UpdateCollectionMappingInput, UpdateItemMappingInput,
};
use ledgermap_core::value::is_truthy;
use ledgermap_core::{
    extract, BillingEntity, Decision, InitialMapping, MappingTarget, Provider, SkipReason,
};
use serde::{Deserialize, Serialize};

/// One form submission to reconcile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileRequest {
    pub provider: Provider,
    pub integration_id: String,
    pub target: MappingTarget,
    pub billing_entity: BillingEntity,
    /// Row before this submission; `None` when the caller has none
    #[serde(default)]
    pub initial_mapping: Option<InitialMapping>,
    /// Raw form values
    #[serde(default)]
    pub input_values: serde_json::Value,
}

/// The gateway call a reconciliation makes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", content = "input", rename_all = "snake_case")]
pub enum MutationPlan {
    /// No call
    Skip(SkipReason),
    CreateCollection(CreateCollectionMappingInput),
    CreateItem(CreateItemMappingInput),
    UpdateCollection(UpdateCollectionMappingInput),
    UpdateItem(UpdateItemMappingInput),
    DeleteCollection(DeleteMappingInput),
    DeleteItem(DeleteMappingInput),
}

/// Operation kind of a plan, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Skipped,
    CreateCollection,
    CreateItem,
    UpdateCollection,
    UpdateItem,
    DeleteCollection,
    DeleteItem,
}

impl MutationPlan {
    /// Operation kind
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            Self::Skip(_) => Operation::Skipped,
            Self::CreateCollection(_) => Operation::CreateCollection,
            Self::CreateItem(_) => Operation::CreateItem,
            Self::UpdateCollection(_) => Operation::UpdateCollection,
            Self::UpdateItem(_) => Operation::UpdateItem,
            Self::DeleteCollection(_) => Operation::DeleteCollection,
            Self::DeleteItem(_) => Operation::DeleteItem,
        }
    }

    /// Whether executing the plan calls the gateway
    #[inline]
    #[must_use]
    pub fn is_remote(&self) -> bool {
        !matches!(self, Self::Skip(_))
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::Skipped => "skipped",
            Operation::CreateCollection => "create_collection",
            Operation::CreateItem => "create_item",
            Operation::UpdateCollection => "update_collection",
            Operation::UpdateItem => "update_item",
            Operation::DeleteCollection => "delete_collection",
            Operation::DeleteItem => "delete_item",
        };
        f.write_str(name)
    }
}

/// Plan the gateway call for a submission
///
/// # Errors
/// - `ReconcileError::InvalidInput` if the input values do not fit the provider
/// - `ReconcileError::Classify` if no action fits
/// - `ReconcileError::MappingKindMismatch` if the stored row kind does not
///   belong to the target
/// - `ReconcileError::MissingMappingId` if an update or delete has no row id
pub fn plan(
    request: &ReconcileRequest,
    config: &ReconcileConfig,
) -> Result<MutationPlan, ReconcileError> {
    let initial = request.initial_mapping.as_ref();

    if initial.is_some_and(|row| !row.fits_target(&request.target)) {
        tracing::debug!(
            provider = %request.provider,
            target = %request.target,
            "initial mapping kind does not fit target"
        );
        return Err(ReconcileError::MappingKindMismatch);
    }

    // A blank form with nothing stored needs no validation.
    if is_blank_form(&request.input_values) && !initial.is_some_and(InitialMapping::has_data) {
        tracing::debug!(provider = %request.provider, "blank submission, nothing stored");
        return Ok(MutationPlan::Skip(SkipReason::NothingToMap));
    }

    let parameters = extract(&request.input_values, request.provider)?;

    let decision = config.classifier().classify(
        &parameters,
        initial,
        &request.target,
        request.provider,
    )?;

    let integration_id = request.integration_id.clone();
    let fields = parameters.to_external_fields();
    let existing_id = || {
        initial
            .and_then(InitialMapping::existing_item_id)
            .map(str::to_string)
            .ok_or(ReconcileError::MissingMappingId)
    };

    let plan = match (decision, &request.target) {
        (Decision::Skip(reason), _) => MutationPlan::Skip(reason),

        (Decision::Delete, MappingTarget::Collection(_)) => {
            MutationPlan::DeleteCollection(DeleteMappingInput { id: existing_id()? })
        }
        (Decision::Delete, MappingTarget::Item { .. }) => {
            MutationPlan::DeleteItem(DeleteMappingInput { id: existing_id()? })
        }

        (Decision::Create, MappingTarget::Collection(mapping_type)) => {
            MutationPlan::CreateCollection(CreateCollectionMappingInput {
                integration_id,
                mapping_type: *mapping_type,
                billing_entity_id: request.billing_entity.association_id().map(str::to_string),
                fields,
            })
        }
        (
            Decision::Create,
            MappingTarget::Item {
                mappable_type,
                entity_id,
            },
        ) => MutationPlan::CreateItem(CreateItemMappingInput {
            integration_id,
            mappable_type: *mappable_type,
            mappable_id: mappable_id(initial, entity_id),
            billing_entity_id: request.billing_entity.association_id().map(str::to_string),
            fields,
        }),

        (Decision::Update, MappingTarget::Collection(mapping_type)) => {
            MutationPlan::UpdateCollection(UpdateCollectionMappingInput {
                id: existing_id()?,
                integration_id,
                mapping_type: *mapping_type,
                fields,
            })
        }
        (
            Decision::Update,
            MappingTarget::Item {
                mappable_type,
                entity_id,
            },
        ) => MutationPlan::UpdateItem(UpdateItemMappingInput {
            id: existing_id()?,
            integration_id,
            mappable_type: *mappable_type,
            mappable_id: mappable_id(initial, entity_id),
            fields,
        }),
    };

    Ok(plan)
}

/// Object whose values are all falsy (including `{}`)
fn is_blank_form(input: &serde_json::Value) -> bool {
    input
        .as_object()
        .is_some_and(|values| !values.values().any(is_truthy))
}

/// Stored row's entity id, else the target's
fn mappable_id(initial: Option<&InitialMapping>, entity_id: &str) -> Option<String> {
    initial
        .and_then(InitialMapping::mappable_id)
        .or(Some(entity_id).filter(|id| !id.is_empty()))
        .map(str::to_string)
}
