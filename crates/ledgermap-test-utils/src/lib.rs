//! Testing utilities for the ledgermap workspace
//!
//! Shared fixtures and a recording gateway.

#![allow(missing_docs)]

use async_trait::async_trait;
use ledgermap_core::{
    BillingEntity, CollectionMappingType, InitialMapping, ItemMapping, MappableItemMapping,
    MappableType, MappingTarget, Provider, TaxItemMapping,
};
use ledgermap_reconcile::{
    CreateCollectionMappingInput, CreateItemMappingInput, DeleteMappingInput, GatewayError,
    GraphQlError, MappingGateway, MutationResponse, ReconcileRequest,
    UpdateCollectionMappingInput, UpdateItemMappingInput,
};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::VecDeque;

pub const INTEGRATION_ID: &str = "integration-123";

/// A gateway call as received
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    CreateCollection(CreateCollectionMappingInput),
    CreateItem(CreateItemMappingInput),
    UpdateCollection(UpdateCollectionMappingInput),
    UpdateItem(UpdateItemMappingInput),
    DeleteCollection(DeleteMappingInput),
    DeleteItem(DeleteMappingInput),
}

/// Gateway that records calls and replays scripted responses
///
/// Without scripted responses every call succeeds.
#[derive(Debug, Default)]
pub struct RecordingGateway {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<VecDeque<Result<MutationResponse, GatewayError>>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next call
    pub fn respond_with(self, response: Result<MutationResponse, GatewayError>) -> Self {
        self.responses.lock().push_back(response);
        self
    }

    /// Queue GraphQL errors for the next call
    pub fn fail_next_with(self, errors: Vec<GraphQlError>) -> Self {
        self.respond_with(Ok(MutationResponse::with_errors(errors)))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn record(&self, call: RecordedCall) -> Result<MutationResponse, GatewayError> {
        self.calls.lock().push(call);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(MutationResponse::ok()))
    }
}

#[async_trait]
impl MappingGateway for RecordingGateway {
    async fn create_collection(
        &self,
        input: CreateCollectionMappingInput,
    ) -> Result<MutationResponse, GatewayError> {
        self.record(RecordedCall::CreateCollection(input))
    }

    async fn create_item(
        &self,
        input: CreateItemMappingInput,
    ) -> Result<MutationResponse, GatewayError> {
        self.record(RecordedCall::CreateItem(input))
    }

    async fn update_collection(
        &self,
        input: UpdateCollectionMappingInput,
    ) -> Result<MutationResponse, GatewayError> {
        self.record(RecordedCall::UpdateCollection(input))
    }

    async fn update_item(
        &self,
        input: UpdateItemMappingInput,
    ) -> Result<MutationResponse, GatewayError> {
        self.record(RecordedCall::UpdateItem(input))
    }

    async fn delete_collection(
        &self,
        input: DeleteMappingInput,
    ) -> Result<MutationResponse, GatewayError> {
        self.record(RecordedCall::DeleteCollection(input))
    }

    async fn delete_item(
        &self,
        input: DeleteMappingInput,
    ) -> Result<MutationResponse, GatewayError> {
        self.record(RecordedCall::DeleteItem(input))
    }
}

pub fn billing_entity() -> BillingEntity {
    BillingEntity::new("billing-entity-123", "acme-eu", "Acme EU")
}

pub fn default_billing_entity() -> BillingEntity {
    BillingEntity::default_entity("default", "Default")
}

pub fn tax_target() -> MappingTarget {
    MappingTarget::Collection(CollectionMappingType::Tax)
}

pub fn add_on_target() -> MappingTarget {
    MappingTarget::item(MappableType::AddOn, "add-on-1")
}

/// Tax row that has never been mapped
pub fn empty_tax_mapping() -> InitialMapping {
    InitialMapping::Tax(TaxItemMapping::default())
}

/// Non-tax collection row that has never been mapped
pub fn empty_collection_mapping() -> InitialMapping {
    InitialMapping::NonTax(ItemMapping::default())
}

/// Stored non-tax collection row
pub fn stored_collection_mapping(id: &str, external_id: &str, name: &str) -> InitialMapping {
    InitialMapping::NonTax(ItemMapping {
        item_id: Some(id.to_string()),
        item_external_id: Some(external_id.to_string()),
        item_external_name: Some(name.to_string()),
        item_external_code: None,
    })
}

/// Unmapped add-on placeholder
pub fn add_on_placeholder() -> InitialMapping {
    InitialMapping::Mappable(MappableItemMapping {
        item: ItemMapping::default(),
        mappable_id: Some("add-on-1".to_string()),
        mappable_name: Some("Premium support".to_string()),
    })
}

pub fn request(
    provider: Provider,
    target: MappingTarget,
    initial_mapping: Option<InitialMapping>,
    input_values: Value,
) -> ReconcileRequest {
    ReconcileRequest {
        provider,
        integration_id: INTEGRATION_ID.to_string(),
        target,
        billing_entity: billing_entity(),
        initial_mapping,
        input_values,
    }
}
