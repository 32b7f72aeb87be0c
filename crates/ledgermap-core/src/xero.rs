//! Xero composite selection codec
//!
//! The Xero mapping form stores one selected element as a single string:
//! `externalId:::externalAccountCode:::externalName`. The delimiter is
//! reserved and is not escaped. Encoding refuses fields that contain it;
//! decoding reports extra segments but keeps the first three as they are.

use crate::error::CodecError;
use crate::parameters::XeroParameters;

/// Reserved separator between selection components
pub const SELECTION_DELIMITER: &str = ":::";

/// Decoded Xero selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XeroSelection {
    pub external_id: Option<String>,
    pub external_account_code: Option<String>,
    pub external_name: Option<String>,
}

impl XeroSelection {
    /// Join the components into a selection value
    ///
    /// # Errors
    /// `CodecError::DelimiterCollision` if a component contains the delimiter
    pub fn encode(
        external_id: &str,
        external_account_code: &str,
        external_name: &str,
    ) -> Result<String, CodecError> {
        for (field, value) in [
            ("externalId", external_id),
            ("externalAccountCode", external_account_code),
            ("externalName", external_name),
        ] {
            if value.contains(SELECTION_DELIMITER) {
                return Err(CodecError::DelimiterCollision {
                    field,
                    delimiter: SELECTION_DELIMITER,
                });
            }
        }

        Ok([external_id, external_account_code, external_name].join(SELECTION_DELIMITER))
    }

    /// Split a selection value into its components
    ///
    /// Empty or missing segments decode to `None`.
    #[must_use]
    pub fn decode(value: &str) -> Self {
        let mut segments = value.split(SELECTION_DELIMITER);
        let mut next = || {
            segments
                .next()
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let selection = Self {
            external_id: next(),
            external_account_code: next(),
            external_name: next(),
        };

        let extra = value.split(SELECTION_DELIMITER).count().saturating_sub(3);
        if extra > 0 {
            tracing::warn!(
                extra_segments = extra,
                "Xero selection carries the reserved delimiter inside a field; trailing segments dropped"
            );
        }

        selection
    }
}

impl From<XeroSelection> for XeroParameters {
    fn from(selection: XeroSelection) -> Self {
        Self {
            external_id: selection.external_id,
            external_account_code: selection.external_account_code,
            external_name: selection.external_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn decode_three_segments() {
        let selection = XeroSelection::decode("id:::code:::name");
        assert_eq!(selection.external_id.as_deref(), Some("id"));
        assert_eq!(selection.external_account_code.as_deref(), Some("code"));
        assert_eq!(selection.external_name.as_deref(), Some("name"));
    }

    #[test]
    fn decode_malformed_yields_none() {
        assert_eq!(XeroSelection::decode(""), XeroSelection::default());

        let partial = XeroSelection::decode("only-id");
        assert_eq!(partial.external_id.as_deref(), Some("only-id"));
        assert_eq!(partial.external_account_code, None);
        assert_eq!(partial.external_name, None);

        let gap = XeroSelection::decode("id::::::name");
        assert_eq!(gap.external_account_code, None);
        assert_eq!(gap.external_name.as_deref(), Some("name"));
    }

    #[test]
    fn decode_keeps_first_three_on_collision() {
        let selection = XeroSelection::decode("id:::code:::Sales:::EU");
        assert_eq!(selection.external_name.as_deref(), Some("Sales"));
    }

    #[test]
    fn encode_rejects_delimiter() {
        let err = XeroSelection::encode("id", "200", "Sales:::EU").unwrap_err();
        assert_eq!(
            err,
            CodecError::DelimiterCollision {
                field: "externalName",
                delimiter: SELECTION_DELIMITER,
            }
        );
    }

    proptest! {
        #[test]
        fn encoded_components_survive_decode(
            id in "[a-zA-Z0-9_-]{1,16}",
            code in "[0-9]{1,6}",
            name in "[a-zA-Z ]{1,24}",
        ) {
            let encoded = XeroSelection::encode(&id, &code, &name).unwrap();
            let decoded = XeroSelection::decode(&encoded);
            prop_assert_eq!(decoded.external_id, Some(id));
            prop_assert_eq!(decoded.external_account_code, Some(code));
            prop_assert_eq!(decoded.external_name, Some(name));
        }

        #[test]
        fn encode_never_accepts_a_colliding_field(prefix in "[a-z]{0,8}", suffix in "[a-z]{0,8}") {
            let field = format!("{prefix}{SELECTION_DELIMITER}{suffix}");
            prop_assert!(XeroSelection::encode("id", &field, "name").is_err());
        }
    }
}
