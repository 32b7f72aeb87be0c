//! Client configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// GraphQL endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// GraphQL endpoint URL
    pub endpoint: String,
    /// Bearer token
    pub api_key: Option<String>,
    /// Organization scoping header value
    pub organization_id: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Configuration for an endpoint
    #[inline]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// With API key
    #[inline]
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// With organization id
    #[inline]
    #[must_use]
    pub fn with_organization(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    /// With request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Request timeout
    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3000/graphql".to_string(),
            api_key: None,
            organization_id: None,
            timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let config = ClientConfig::new("https://api.example.com/graphql")
            .with_api_key("key")
            .with_organization("org-1")
            .with_timeout_secs(5);
        assert_eq!(config.api_key.as_deref(), Some("key"));
        assert_eq!(config.organization_id.as_deref(), Some("org-1"));
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn missing_keys_default() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"endpoint":"https://api.example.com/graphql"}"#).unwrap();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.api_key, None);
    }
}
