//! Reconciliation configuration

use crate::error::ConfigError;
use ledgermap_core::classify::Classifier;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Reconciler configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Skip the update when the stored row already holds the submitted values
    pub skip_unchanged_edits: bool,
}

impl ReconcileConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With unchanged-edit skipping on or off
    #[inline]
    #[must_use]
    pub fn with_skip_unchanged_edits(mut self, skip: bool) -> Self {
        self.skip_unchanged_edits = skip;
        self
    }

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

    /// Classifier matching this configuration
    #[inline]
    #[must_use]
    pub fn classifier(&self) -> Classifier {
        Classifier {
            skip_unchanged_edits: self.skip_unchanged_edits,
        }
    }
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            skip_unchanged_edits: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ReconcileConfig::from_toml_str("").unwrap();
        assert_eq!(config, ReconcileConfig::default());
        assert!(config.skip_unchanged_edits);
    }

    #[test]
    fn parses_flag() {
        let config = ReconcileConfig::from_toml_str("skip_unchanged_edits = false").unwrap();
        assert!(!config.skip_unchanged_edits);
        assert!(!config.classifier().skip_unchanged_edits);
    }

    #[test]
    fn rejects_wrong_types() {
        let err = ReconcileConfig::from_toml_str("skip_unchanged_edits = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "skip_unchanged_edits = false").unwrap();
        let config = ReconcileConfig::load(file.path()).unwrap();
        assert_eq!(config, ReconcileConfig::new().with_skip_unchanged_edits(false));

        let missing = ReconcileConfig::load("/nonexistent/ledgermap.toml").unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }
}
