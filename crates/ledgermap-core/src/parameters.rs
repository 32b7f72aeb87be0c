//! Provider parameter records
//!
//! Normalised external-system fields, one shape per provider family.
//! Every field is optional; `Some("")` is kept distinct from `None` because
//! Netsuite basic fields default to the empty string.

use crate::types::MappingTarget;
use crate::value::is_filled;
use serde::{Deserialize, Serialize};

/// Names of the external fields a parameter record can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    ExternalId,
    ExternalName,
    ExternalAccountCode,
    TaxCode,
    TaxNexus,
    TaxType,
}

impl FieldKey {
    /// Wire name of the field
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::ExternalId => "externalId",
            FieldKey::ExternalName => "externalName",
            FieldKey::ExternalAccountCode => "externalAccountCode",
            FieldKey::TaxCode => "taxCode",
            FieldKey::TaxNexus => "taxNexus",
            FieldKey::TaxType => "taxType",
        }
    }
}

/// Anrok and Avalara share one shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvalaraAndAnrokParameters {
    pub external_id: Option<String>,
    pub external_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetsuiteParameters {
    pub external_id: Option<String>,
    pub external_name: Option<String>,
    pub external_account_code: Option<String>,
    pub tax_code: Option<String>,
    pub tax_nexus: Option<String>,
    pub tax_type: Option<String>,
}

/// Decoded from the composite `selectedElementValue`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XeroParameters {
    pub external_id: Option<String>,
    pub external_account_code: Option<String>,
    pub external_name: Option<String>,
}

/// Provider-specific normalised parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderParameters {
    /// Anrok or Avalara
    AvalaraAndAnrok(AvalaraAndAnrokParameters),
    /// Netsuite
    Netsuite(NetsuiteParameters),
    /// Xero
    Xero(XeroParameters),
}

impl ProviderParameters {
    /// Keys carried by this shape, in wire order
    #[must_use]
    pub fn keys(&self) -> &'static [FieldKey] {
        match self {
            Self::AvalaraAndAnrok(_) => &[FieldKey::ExternalId, FieldKey::ExternalName],
            Self::Netsuite(_) => &[
                FieldKey::ExternalId,
                FieldKey::ExternalName,
                FieldKey::ExternalAccountCode,
                FieldKey::TaxCode,
                FieldKey::TaxNexus,
                FieldKey::TaxType,
            ],
            Self::Xero(_) => &[
                FieldKey::ExternalId,
                FieldKey::ExternalAccountCode,
                FieldKey::ExternalName,
            ],
        }
    }

    /// Value of a field
    ///
    /// Outer `None` when the shape has no such key.
    #[must_use]
    pub fn get(&self, key: FieldKey) -> Option<Option<&str>> {
        let field = match (self, key) {
            (Self::AvalaraAndAnrok(p), FieldKey::ExternalId) => &p.external_id,
            (Self::AvalaraAndAnrok(p), FieldKey::ExternalName) => &p.external_name,
            (Self::Netsuite(p), FieldKey::ExternalId) => &p.external_id,
            (Self::Netsuite(p), FieldKey::ExternalName) => &p.external_name,
            (Self::Netsuite(p), FieldKey::ExternalAccountCode) => &p.external_account_code,
            (Self::Netsuite(p), FieldKey::TaxCode) => &p.tax_code,
            (Self::Netsuite(p), FieldKey::TaxNexus) => &p.tax_nexus,
            (Self::Netsuite(p), FieldKey::TaxType) => &p.tax_type,
            (Self::Xero(p), FieldKey::ExternalId) => &p.external_id,
            (Self::Xero(p), FieldKey::ExternalAccountCode) => &p.external_account_code,
            (Self::Xero(p), FieldKey::ExternalName) => &p.external_name,
            _ => return None,
        };
        Some(field.as_deref())
    }

    /// Whether the record is complete enough to persist for this target
    ///
    /// Netsuite tax mappings need the tax triple, other Netsuite mappings
    /// the basic triple. Other providers need every field.
    #[must_use]
    pub fn has_item_values(&self, target: &MappingTarget) -> bool {
        let filled = |keys: &[FieldKey]| {
            keys.iter()
                .all(|key| is_filled(self.get(*key).flatten()))
        };

        match self {
            Self::Netsuite(_) if target.is_tax() => {
                filled(&[FieldKey::TaxCode, FieldKey::TaxNexus, FieldKey::TaxType])
            }
            Self::Netsuite(_) => filled(&[
                FieldKey::ExternalId,
                FieldKey::ExternalName,
                FieldKey::ExternalAccountCode,
            ]),
            _ => filled(self.keys()),
        }
    }

    /// Flatten into the mutation payload fields
    #[must_use]
    pub fn to_external_fields(&self) -> ExternalFields {
        let owned = |key| self.get(key).flatten().map(str::to_string);
        ExternalFields {
            external_id: owned(FieldKey::ExternalId),
            external_name: owned(FieldKey::ExternalName),
            external_account_code: owned(FieldKey::ExternalAccountCode),
            tax_code: owned(FieldKey::TaxCode),
            tax_nexus: owned(FieldKey::TaxNexus),
            tax_type: owned(FieldKey::TaxType),
        }
    }
}

/// External fields spread into a mutation input
///
/// `None` fields are left out of the serialised payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_account_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_nexus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_type: Option<String>,
}
