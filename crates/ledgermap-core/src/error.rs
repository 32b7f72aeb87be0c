//! Error types for ledgermap Core
//!
//! Local, synchronous failures raised before any remote call:
//! - Input values that do not fit the provider's shape
//! - Classification that cannot settle on an action
//! - Xero selection values that cannot be encoded safely

use crate::types::Provider;

/// Raw input values rejected by the provider parameter extractor
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// Input is not an object, or required keys are missing
    #[error("Invalid input values")]
    InvalidInput {
        /// Provider whose shape was expected
        provider: Provider,
        /// What was wrong with the input
        detail: String,
    },
}

impl ExtractError {
    /// Create an invalid-input error
    #[inline]
    pub fn invalid(provider: Provider, detail: impl Into<String>) -> Self {
        Self::InvalidInput {
            provider,
            detail: detail.into(),
        }
    }

    /// Human-readable detail (not part of the reported reason)
    #[inline]
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::InvalidInput { detail, .. } => detail,
        }
    }
}

/// Classification failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// Initial mapping and parameters fit none of create, edit or delete
    #[error("Could not determine action to perform")]
    UndeterminedAction,
}

/// Xero selection encoding errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// A field contains the reserved delimiter and would corrupt the split
    #[error("field `{field}` contains the reserved delimiter `{delimiter}`")]
    DelimiterCollision {
        /// Field name
        field: &'static str,
        /// Delimiter token
        delimiter: &'static str,
    },
}
