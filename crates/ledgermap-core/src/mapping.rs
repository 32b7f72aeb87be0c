//! Initial mapping rows
//!
//! The mapping as it existed before a submission. `item_id` is set if and
//! only if the row exists remotely; an unmapped entity is represented by a
//! placeholder row with no `item_id`.

use crate::parameters::{FieldKey, ProviderParameters};
use crate::types::MappingTarget;
use serde::{Deserialize, Serialize};

/// Fields shared by every mapping row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMapping {
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub item_external_id: Option<String>,
    #[serde(default)]
    pub item_external_name: Option<String>,
    #[serde(default)]
    pub item_external_code: Option<String>,
}

impl ItemMapping {
    fn has_data(&self) -> bool {
        self.item_id.is_some()
            || self.item_external_id.is_some()
            || self.item_external_name.is_some()
            || self.item_external_code.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxFields {
    #[serde(default)]
    pub tax_code: Option<String>,
    #[serde(default)]
    pub tax_nexus: Option<String>,
    #[serde(default)]
    pub tax_type: Option<String>,
}

/// Row of a tax collection mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxItemMapping {
    #[serde(flatten)]
    pub item: ItemMapping,
    #[serde(flatten)]
    pub tax: TaxFields,
}

/// Row of a per-entity mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappableItemMapping {
    #[serde(flatten)]
    pub item: ItemMapping,
    #[serde(default)]
    pub mappable_id: Option<String>,
    #[serde(default)]
    pub mappable_name: Option<String>,
}

/// Mapping row prior to this operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum InitialMapping {
    /// Tax collection mapping
    Tax(TaxItemMapping),
    /// Any other collection mapping
    NonTax(ItemMapping),
    /// Per-entity mapping
    Mappable(MappableItemMapping),
}

impl InitialMapping {
    /// Shared item fields
    #[must_use]
    pub fn item(&self) -> &ItemMapping {
        match self {
            Self::Tax(m) => &m.item,
            Self::NonTax(m) => m,
            Self::Mappable(m) => &m.item,
        }
    }

    /// Remote row id, if the row exists
    #[inline]
    #[must_use]
    pub fn item_id(&self) -> Option<&str> {
        self.item().item_id.as_deref()
    }

    /// Remote row id when it is non-empty
    #[inline]
    #[must_use]
    pub fn existing_item_id(&self) -> Option<&str> {
        self.item_id().filter(|id| !id.is_empty())
    }

    /// Domain entity id for per-entity rows
    #[must_use]
    pub fn mappable_id(&self) -> Option<&str> {
        match self {
            Self::Mappable(m) => m.mappable_id.as_deref(),
            _ => None,
        }
    }

    /// Whether any field of the row holds a value
    #[must_use]
    pub fn has_data(&self) -> bool {
        match self {
            Self::Tax(m) => {
                m.item.has_data()
                    || m.tax.tax_code.is_some()
                    || m.tax.tax_nexus.is_some()
                    || m.tax.tax_type.is_some()
            }
            Self::NonTax(m) => m.has_data(),
            Self::Mappable(m) => {
                m.item.has_data() || m.mappable_id.is_some() || m.mappable_name.is_some()
            }
        }
    }

    /// Row fields paired with the parameter key they map to
    #[must_use]
    pub fn comparable_fields(&self) -> Vec<(FieldKey, Option<&str>)> {
        let item = self.item();
        let mut fields = vec![
            (FieldKey::ExternalId, item.item_external_id.as_deref()),
            (FieldKey::ExternalName, item.item_external_name.as_deref()),
            (FieldKey::ExternalAccountCode, item.item_external_code.as_deref()),
        ];
        if let Self::Tax(m) = self {
            fields.extend([
                (FieldKey::TaxCode, m.tax.tax_code.as_deref()),
                (FieldKey::TaxNexus, m.tax.tax_nexus.as_deref()),
                (FieldKey::TaxType, m.tax.tax_type.as_deref()),
            ]);
        }
        fields
    }

    /// Whether this row kind belongs to `target`
    ///
    /// Tax rows sit on the tax collection, mappable rows on item targets and
    /// non-tax rows on every other collection.
    #[must_use]
    pub fn fits_target(&self, target: &MappingTarget) -> bool {
        match self {
            Self::Tax(_) => target.is_tax(),
            Self::NonTax(_) => target.is_collection() && !target.is_tax(),
            Self::Mappable(_) => !target.is_collection(),
        }
    }

    /// Whether the row already holds the submitted parameters
    ///
    /// Only fields present on both sides are compared. Empty string and
    /// absent are treated as the same value.
    #[must_use]
    pub fn matches(&self, parameters: &ProviderParameters) -> bool {
        fn blank(v: Option<&str>) -> Option<&str> {
            v.filter(|s| !s.is_empty())
        }

        self.comparable_fields()
            .into_iter()
            .filter_map(|(key, current)| parameters.get(key).map(|next| (current, next)))
            .all(|(current, next)| blank(current) == blank(next))
    }
}
