//! Action classification
//!
//! Decides which single mutation, if any, reconciles the remote mapping row
//! with the submitted parameters.
//!
//! # Decision table
//! - nothing submitted and nothing stored: skip
//! - placeholder row (no `item_id`) and complete values: create
//! - stored data and complete values: update, or skip when unchanged
//! - stored row and incomplete values: delete
//! - anything else: [`ClassifyError::UndeterminedAction`]
//!
//! An absent initial mapping never classifies as create. Callers are
//! expected to pass a placeholder row for entities that are not mapped yet.

use crate::error::ClassifyError;
use crate::mapping::InitialMapping;
use crate::parameters::ProviderParameters;
use crate::types::{MappingTarget, Provider};
use serde::{Deserialize, Serialize};

/// Outcome of classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// No remote call needed
    Skip(SkipReason),
    /// Create a new row
    Create,
    /// Update the existing row
    Update,
    /// Delete the existing row
    Delete,
}

/// Why no remote call is needed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No values submitted and no row stored
    NothingToMap,
    /// Stored row already holds the submitted values
    Unchanged,
}

/// Classifier settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    /// Skip updates that would not change the stored row
    pub skip_unchanged_edits: bool,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            skip_unchanged_edits: true,
        }
    }
}

impl Classifier {
    /// Classify a submission
    ///
    /// # Errors
    /// `ClassifyError::UndeterminedAction` when no action fits
    pub fn classify(
        &self,
        parameters: &ProviderParameters,
        initial: Option<&InitialMapping>,
        target: &MappingTarget,
        provider: Provider,
    ) -> Result<Decision, ClassifyError> {
        let has_initial_data = initial.is_some_and(InitialMapping::has_data);
        let has_item_values = parameters.has_item_values(target);

        if !has_item_values && !has_initial_data {
            tracing::debug!(%provider, %target, "nothing to map");
            return Ok(Decision::Skip(SkipReason::NothingToMap));
        }

        let existing_id = initial.and_then(InitialMapping::existing_item_id);

        let is_create = initial.is_some() && existing_id.is_none() && has_item_values;
        let is_edit = !is_create && has_initial_data && has_item_values;
        let is_delete = !is_create
            && !is_edit
            && !has_item_values
            && initial.is_some()
            && existing_id.is_some();

        let decision = if is_create {
            Decision::Create
        } else if is_edit {
            if self.skip_unchanged_edits && initial.is_some_and(|m| m.matches(parameters)) {
                Decision::Skip(SkipReason::Unchanged)
            } else {
                Decision::Update
            }
        } else if is_delete {
            Decision::Delete
        } else {
            tracing::debug!(
                %provider,
                %target,
                has_initial_data,
                has_item_values,
                "no action fits submission"
            );
            return Err(ClassifyError::UndeterminedAction);
        };

        tracing::debug!(%provider, %target, ?decision, "classified submission");
        Ok(decision)
    }
}

/// Classify with default settings
///
/// # Errors
/// `ClassifyError::UndeterminedAction` when no action fits
pub fn classify(
    parameters: &ProviderParameters,
    initial: Option<&InitialMapping>,
    target: &MappingTarget,
    provider: Provider,
) -> Result<Decision, ClassifyError> {
    Classifier::default().classify(parameters, initial, target, provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{ItemMapping, MappableItemMapping, TaxFields, TaxItemMapping};
    use crate::parameters::{AvalaraAndAnrokParameters, NetsuiteParameters};
    use crate::types::{CollectionMappingType, MappableType};

    fn coupon() -> MappingTarget {
        MappingTarget::Collection(CollectionMappingType::Coupon)
    }

    fn anrok(id: Option<&str>, name: Option<&str>) -> ProviderParameters {
        ProviderParameters::AvalaraAndAnrok(AvalaraAndAnrokParameters {
            external_id: id.map(Into::into),
            external_name: name.map(Into::into),
        })
    }

    fn stored(item_id: Option<&str>, external_id: Option<&str>) -> InitialMapping {
        InitialMapping::NonTax(ItemMapping {
            item_id: item_id.map(Into::into),
            item_external_id: external_id.map(Into::into),
            item_external_name: external_id.map(|_| "Name".into()),
            item_external_code: None,
        })
    }

    #[test]
    fn nothing_submitted_nothing_stored_skips() {
        let decision = classify(&anrok(None, None), None, &coupon(), Provider::Anrok).unwrap();
        assert_eq!(decision, Decision::Skip(SkipReason::NothingToMap));

        let placeholder = InitialMapping::NonTax(ItemMapping::default());
        let decision =
            classify(&anrok(None, None), Some(&placeholder), &coupon(), Provider::Anrok).unwrap();
        assert_eq!(decision, Decision::Skip(SkipReason::NothingToMap));
    }

    #[test]
    fn absent_initial_mapping_never_creates() {
        let result = classify(&anrok(Some("x"), Some("y")), None, &coupon(), Provider::Anrok);
        assert_eq!(result, Err(ClassifyError::UndeterminedAction));
    }

    #[test]
    fn placeholder_with_values_creates() {
        let placeholder = InitialMapping::NonTax(ItemMapping::default());
        let decision = classify(
            &anrok(Some("x"), Some("y")),
            Some(&placeholder),
            &coupon(),
            Provider::Anrok,
        )
        .unwrap();
        assert_eq!(decision, Decision::Create);
    }

    #[test]
    fn stored_row_with_new_values_updates() {
        let row = stored(Some("m-1"), Some("old"));
        let decision = classify(
            &anrok(Some("new"), Some("Name")),
            Some(&row),
            &coupon(),
            Provider::Anrok,
        )
        .unwrap();
        assert_eq!(decision, Decision::Update);
    }

    #[test]
    fn stored_row_with_same_values_is_unchanged() {
        let row = stored(Some("m-1"), Some("same"));
        let params = anrok(Some("same"), Some("Name"));
        let decision = classify(&params, Some(&row), &coupon(), Provider::Anrok).unwrap();
        assert_eq!(decision, Decision::Skip(SkipReason::Unchanged));

        let eager = Classifier {
            skip_unchanged_edits: false,
        };
        let decision = eager
            .classify(&params, Some(&row), &coupon(), Provider::Anrok)
            .unwrap();
        assert_eq!(decision, Decision::Update);
    }

    #[test]
    fn stored_row_with_cleared_values_deletes() {
        let row = stored(Some("m-1"), Some("old"));
        let decision =
            classify(&anrok(Some("x"), None), Some(&row), &coupon(), Provider::Anrok).unwrap();
        assert_eq!(decision, Decision::Delete);
    }

    #[test]
    fn stale_data_without_id_and_no_values_is_undetermined() {
        let row = stored(None, Some("orphan"));
        let result = classify(&anrok(None, None), Some(&row), &coupon(), Provider::Anrok);
        assert_eq!(result, Err(ClassifyError::UndeterminedAction));
    }

    #[test]
    fn unmapped_mappable_placeholder_with_no_values_is_undetermined() {
        let row = InitialMapping::Mappable(MappableItemMapping {
            mappable_id: Some("add-on-1".into()),
            ..Default::default()
        });
        let target = MappingTarget::item(MappableType::AddOn, "add-on-1");
        let result = classify(&anrok(None, None), Some(&row), &target, Provider::Anrok);
        assert_eq!(result, Err(ClassifyError::UndeterminedAction));
    }

    #[test]
    fn netsuite_tax_mapping_uses_tax_triple() {
        let target = MappingTarget::Collection(CollectionMappingType::Tax);
        let row = InitialMapping::Tax(TaxItemMapping {
            item: ItemMapping {
                item_id: Some("m-1".into()),
                ..Default::default()
            },
            tax: TaxFields {
                tax_code: Some("A".into()),
                tax_nexus: Some("US".into()),
                tax_type: Some("SALES".into()),
            },
        });
        let cleared = ProviderParameters::Netsuite(NetsuiteParameters {
            external_id: Some("ext".into()),
            external_name: Some("Name".into()),
            external_account_code: Some("ACC".into()),
            tax_code: None,
            tax_nexus: Some("US".into()),
            tax_type: Some("SALES".into()),
        });
        let decision = classify(&cleared, Some(&row), &target, Provider::Netsuite).unwrap();
        assert_eq!(decision, Decision::Delete);
    }
}
