//! Core types for mapping reconciliation
//!
//! Defines the fundamental identifiers:
//! - Accounting/tax providers
//! - Mapping targets (collection category or per-entity item)
//! - Billing entities

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// External accounting or tax system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Anrok tax engine
    Anrok,
    /// Avalara tax engine
    Avalara,
    /// Netsuite ERP
    Netsuite,
    /// Xero accounting
    Xero,
}

impl Provider {
    /// All supported providers
    pub const ALL: [Provider; 4] = [
        Provider::Anrok,
        Provider::Avalara,
        Provider::Netsuite,
        Provider::Xero,
    ];

    /// Lowercase identifier
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Anrok => "anrok",
            Provider::Avalara => "avalara",
            Provider::Netsuite => "netsuite",
            Provider::Xero => "xero",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown provider identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown provider: {0}")]
pub struct ParseProviderError(pub String);

impl FromStr for Provider {
    type Err = ParseProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseProviderError(s.to_string()))
    }
}

/// Fixed collection-level mapping categories
///
/// At most one mapping per billing entity per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionMappingType {
    FallbackItem,
    Coupon,
    SubscriptionFee,
    MinimumCommitment,
    Tax,
    PrepaidCredit,
    CreditNote,
    Account,
    Currencies,
}

/// Per-entity mappable domain types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MappableType {
    /// Add-on
    AddOn,
    /// Billable metric
    BillableMetric,
}

/// What a mapping row is attached to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MappingTarget {
    /// Collection-scoped category
    Collection(CollectionMappingType),
    /// One specific domain entity
    #[serde(rename_all = "camelCase")]
    Item {
        /// Kind of entity
        mappable_type: MappableType,
        /// Entity id
        entity_id: String,
    },
}

impl MappingTarget {
    /// Item target for an entity
    #[inline]
    pub fn item(mappable_type: MappableType, entity_id: impl Into<String>) -> Self {
        Self::Item {
            mappable_type,
            entity_id: entity_id.into(),
        }
    }

    /// Whether this is a collection-scoped category
    #[inline]
    #[must_use]
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Collection(_))
    }

    /// Whether this is the tax collection category
    #[inline]
    #[must_use]
    pub fn is_tax(&self) -> bool {
        matches!(self, Self::Collection(CollectionMappingType::Tax))
    }
}

impl std::fmt::Display for MappingTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Collection(kind) => write!(f, "collection:{kind:?}"),
            Self::Item {
                mappable_type,
                entity_id,
            } => write!(f, "{mappable_type:?}:{entity_id}"),
        }
    }
}

/// Sub-organisation unit owning mapping overrides
///
/// `id` is `None` for the default entity, which has no backing row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingEntity {
    pub id: Option<String>,
    pub key: String,
    pub name: String,
}

impl BillingEntity {
    /// Entity backed by a row
    #[inline]
    pub fn new(id: impl Into<String>, key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            key: key.into(),
            name: name.into(),
        }
    }

    /// The default logical entity
    #[inline]
    pub fn default_entity(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            key: key.into(),
            name: name.into(),
        }
    }

    /// Id to send with a create mutation, if any
    #[inline]
    #[must_use]
    pub fn association_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
