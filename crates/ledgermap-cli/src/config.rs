//! CLI configuration file

use ledgermap_client::ClientConfig;
use ledgermap_reconcile::{ConfigError, ReconcileConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contents of `--config`
///
/// Both tables are optional; missing keys take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub reconcile: ReconcileConfig,
    pub client: ClientConfig,
}

impl CliConfig {
    /// Parse from a TOML document
    ///
    /// # Errors
    /// `ConfigError::Parse` if the document is not valid
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// `ConfigError::Io` if the file cannot be read, `ConfigError::Parse` if
    /// it is not valid
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Apply command-line overrides to the client table
    #[must_use]
    pub fn with_overrides(
        mut self,
        endpoint: Option<String>,
        api_key: Option<String>,
        organization_id: Option<String>,
    ) -> Self {
        if let Some(endpoint) = endpoint {
            self.client.endpoint = endpoint;
        }
        if api_key.is_some() {
            self.client.api_key = api_key;
        }
        if organization_id.is_some() {
            self.client.organization_id = organization_id;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_uses_defaults() {
        let config = CliConfig::from_toml_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(config.reconcile.skip_unchanged_edits);
    }

    #[test]
    fn reads_both_tables() {
        let config = CliConfig::from_toml_str(
            r#"
            [reconcile]
            skip_unchanged_edits = false

            [client]
            endpoint = "https://billing.example.com/graphql"
            timeout_secs = 10
            "#,
        )
        .unwrap();
        assert!(!config.reconcile.skip_unchanged_edits);
        assert_eq!(config.client.endpoint, "https://billing.example.com/graphql");
        assert_eq!(config.client.timeout_secs, 10);
        assert_eq!(config.client.api_key, None);
    }

    #[test]
    fn flags_override_file() {
        let config = CliConfig::from_toml_str("[client]\napi_key = \"from-file\"\n")
            .unwrap()
            .with_overrides(Some("http://other/graphql".into()), None, Some("org-9".into()));
        assert_eq!(config.client.endpoint, "http://other/graphql");
        assert_eq!(config.client.api_key.as_deref(), Some("from-file"));
        assert_eq!(config.client.organization_id.as_deref(), Some("org-9"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(matches!(CliConfig::load(&missing), Err(ConfigError::Io { .. })));

        let path = dir.path().join("ledgermap.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[client]\ntimeout_secs = 3").unwrap();
        assert_eq!(CliConfig::load(&path).unwrap().client.timeout_secs, 3);
    }
}
