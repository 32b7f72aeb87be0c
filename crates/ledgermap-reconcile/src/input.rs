//! Mutation inputs
//!
//! Typed payloads for the six gateway operations. They serialise to the
//! camelCase `input` object of the corresponding GraphQL mutation, with the
//! provider's external fields spread in and absent fields left out.

use ledgermap_core::{CollectionMappingType, ExternalFields, MappableType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollectionMappingInput {
    pub integration_id: String,
    pub mapping_type: CollectionMappingType,
    /// Omitted for the default billing entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_entity_id: Option<String>,
    #[serde(flatten)]
    pub fields: ExternalFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemMappingInput {
    pub integration_id: String,
    pub mappable_type: MappableType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mappable_id: Option<String>,
    /// Omitted for the default billing entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_entity_id: Option<String>,
    #[serde(flatten)]
    pub fields: ExternalFields,
}

/// Update never re-associates the billing entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCollectionMappingInput {
    pub id: String,
    pub integration_id: String,
    pub mapping_type: CollectionMappingType,
    #[serde(flatten)]
    pub fields: ExternalFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemMappingInput {
    pub id: String,
    pub integration_id: String,
    pub mappable_type: MappableType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mappable_id: Option<String>,
    #[serde(flatten)]
    pub fields: ExternalFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteMappingInput {
    pub id: String,
}
