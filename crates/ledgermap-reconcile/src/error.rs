//! Error types for reconciliation
//!
//! Two families:
//! - Local failures (`reasons`): invalid input, undetermined action,
//!   missing mapping id, gateway transport failures
//! - Remote failures (`errors`): GraphQL errors returned by a mutation

use crate::gateway::GraphQlError;
use ledgermap_core::{ClassifyError, ExtractError};
use std::path::PathBuf;

/// Main reconciliation error type
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    /// Raw input values do not fit the provider
    #[error("{0}")]
    InvalidInput(#[from] ExtractError),

    /// No action fits the submission
    #[error("{0}")]
    Classify(#[from] ClassifyError),

    /// Update or delete without a stored row id
    #[error("No initial mapping ID found")]
    MissingMappingId,

    /// Stored row kind does not belong to the target
    #[error("Initial mapping does not match the mapping target")]
    MappingKindMismatch,

    /// The mutation returned GraphQL errors
    #[error("remote mutation failed with {} error(s)", .0.len())]
    Remote(Vec<GraphQlError>),

    /// The gateway could not complete the call
    #[error("{0}")]
    Gateway(#[from] GatewayError),
}

impl ReconcileError {
    /// Whether the failure happened before or instead of a remote mutation
    #[inline]
    #[must_use]
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::Remote(_))
    }

    /// Reasons reported to the caller for local failures
    #[must_use]
    pub fn reasons(&self) -> Option<Vec<String>> {
        match self {
            Self::Remote(_) => None,
            other => Some(vec![other.to_string()]),
        }
    }

    /// GraphQL errors for remote failures
    #[must_use]
    pub fn remote_errors(&self) -> Option<&[GraphQlError]> {
        match self {
            Self::Remote(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Gateway transport errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    /// Request could not be sent or timed out
    #[error("transport failure: {0}")]
    Transport(String),

    /// Non-success HTTP status
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body could not be read
    #[error("undecodable response: {0}")]
    Decode(String),
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for this configuration
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
