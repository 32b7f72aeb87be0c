//! Mapping gateway
//!
//! The six remote mutations reconciliation can issue, behind one trait.
//! Implementations forward each input to the billing API and hand back the
//! GraphQL `errors` array untouched.

use crate::error::GatewayError;
use crate::input::{
    CreateCollectionMappingInput, CreateItemMappingInput, DeleteMappingInput,
    UpdateCollectionMappingInput, UpdateItemMappingInput,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Remote mutation operations for integration mappings
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingGateway: Send + Sync {
    /// Create a collection mapping
    async fn create_collection(
        &self,
        input: CreateCollectionMappingInput,
    ) -> Result<MutationResponse, GatewayError>;

    /// Create a per-entity mapping
    async fn create_item(
        &self,
        input: CreateItemMappingInput,
    ) -> Result<MutationResponse, GatewayError>;

    /// Update a collection mapping
    async fn update_collection(
        &self,
        input: UpdateCollectionMappingInput,
    ) -> Result<MutationResponse, GatewayError>;

    /// Update a per-entity mapping
    async fn update_item(
        &self,
        input: UpdateItemMappingInput,
    ) -> Result<MutationResponse, GatewayError>;

    /// Delete a collection mapping
    async fn delete_collection(
        &self,
        input: DeleteMappingInput,
    ) -> Result<MutationResponse, GatewayError>;

    /// Delete a per-entity mapping
    async fn delete_item(&self, input: DeleteMappingInput)
        -> Result<MutationResponse, GatewayError>;
}

/// Result of one mutation call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    /// GraphQL errors; empty on success
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl MutationResponse {
    /// Successful response
    #[inline]
    #[must_use]
    pub fn ok() -> Self {
        Self::default()
    }

    /// Response carrying errors
    #[inline]
    #[must_use]
    pub fn with_errors(errors: Vec<GraphQlError>) -> Self {
        Self { errors }
    }

    /// Whether the mutation failed remotely
    #[inline]
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Formatted GraphQL error, passed through verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<ErrorLocation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Map<String, serde_json::Value>>,
}

impl GraphQlError {
    /// Error with only a message
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: None,
            path: None,
            extensions: None,
        }
    }

    /// Attach an `extensions.code`
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.extensions
            .get_or_insert_with(serde_json::Map::new)
            .insert("code".to_string(), serde_json::Value::String(code.into()));
        self
    }

    /// `extensions.code`, if present
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .and_then(serde_json::Value::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLocation {
    pub line: u32,
    pub column: u32,
}
