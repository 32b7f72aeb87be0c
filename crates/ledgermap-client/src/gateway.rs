//! HTTP gateway
//!
//! Posts `{ operationName, query, variables: { input } }` and reads back the
//! GraphQL `errors` array. Non-2xx statuses and unreadable bodies are
//! transport failures, never GraphQL errors.

use crate::config::ClientConfig;
use crate::mutation::Mutation;
use async_trait::async_trait;
use ledgermap_reconcile::{
    CreateCollectionMappingInput, CreateItemMappingInput, DeleteMappingInput, GatewayError,
    GraphQlError, MappingGateway, MutationResponse, UpdateCollectionMappingInput,
    UpdateItemMappingInput,
};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};

/// Header scoping a request to one organization
pub const ORGANIZATION_HEADER: &str = "x-lago-organization";

/// Gateway construction errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A configured value cannot be sent as a header
    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),

    /// HTTP client could not be built
    #[error("http client error: {0}")]
    Build(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRequest<'a, I> {
    operation_name: &'static str,
    query: String,
    variables: Variables<'a, I>,
}

#[derive(Debug, Serialize)]
struct Variables<'a, I> {
    input: &'a I,
}

/// Servers may send `"errors": null` on success
#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

/// Mapping gateway backed by the billing GraphQL API
#[derive(Debug, Clone)]
pub struct GraphQlMappingGateway {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphQlMappingGateway {
    /// Build a gateway from configuration
    ///
    /// # Errors
    /// `ClientError` if headers are invalid or the client cannot be built
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = &config.api_key {
            let mut value = HeaderValue::from_str(&format!("Bearer {api_key}"))
                .map_err(|_| ClientError::InvalidHeader("authorization"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        if let Some(organization_id) = &config.organization_id {
            let value = HeaderValue::from_str(organization_id)
                .map_err(|_| ClientError::InvalidHeader(ORGANIZATION_HEADER))?;
            headers.insert(ORGANIZATION_HEADER, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint,
        })
    }

    /// Endpoint URL
    #[inline]
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send<I: Serialize + Sync>(
        &self,
        mutation: Mutation,
        input: &I,
    ) -> Result<MutationResponse, GatewayError> {
        let body = GraphQlRequest {
            operation_name: mutation.name(),
            query: mutation.document(),
            variables: Variables { input },
        };

        tracing::debug!(mutation = mutation.name(), endpoint = %self.endpoint, "posting mutation");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Transport(format!("{} timed out", mutation.name()))
                } else {
                    GatewayError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GraphQlResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;

        Ok(MutationResponse::with_errors(payload.errors.unwrap_or_default()))
    }
}

#[async_trait]
impl MappingGateway for GraphQlMappingGateway {
    async fn create_collection(
        &self,
        input: CreateCollectionMappingInput,
    ) -> Result<MutationResponse, GatewayError> {
        self.send(Mutation::CreateCollection, &input).await
    }

    async fn create_item(
        &self,
        input: CreateItemMappingInput,
    ) -> Result<MutationResponse, GatewayError> {
        self.send(Mutation::CreateItem, &input).await
    }

    async fn update_collection(
        &self,
        input: UpdateCollectionMappingInput,
    ) -> Result<MutationResponse, GatewayError> {
        self.send(Mutation::UpdateCollection, &input).await
    }

    async fn update_item(
        &self,
        input: UpdateItemMappingInput,
    ) -> Result<MutationResponse, GatewayError> {
        self.send(Mutation::UpdateItem, &input).await
    }

    async fn delete_collection(
        &self,
        input: DeleteMappingInput,
    ) -> Result<MutationResponse, GatewayError> {
        self.send(Mutation::DeleteCollection, &input).await
    }

    async fn delete_item(
        &self,
        input: DeleteMappingInput,
    ) -> Result<MutationResponse, GatewayError> {
        self.send(Mutation::DeleteItem, &input).await
    }
}
