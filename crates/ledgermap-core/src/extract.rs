//! Provider parameter extraction
//!
//! Validates raw form values against each provider's required keys and
//! normalises them into a [`ProviderParameters`] record. Key *presence* is
//! what is validated; values may be empty.

use crate::error::ExtractError;
use crate::parameters::{
    AvalaraAndAnrokParameters, NetsuiteParameters, ProviderParameters, XeroParameters,
};
use crate::types::Provider;
use crate::value::coerce_field;
use crate::xero::XeroSelection;
use serde_json::{Map, Value};

const BASIC_KEYS: [&str; 3] = ["externalId", "externalName", "externalAccountCode"];
const TAX_KEYS: [&str; 3] = ["taxCode", "taxNexus", "taxType"];
const SELECTED_ELEMENT_KEY: &str = "selectedElementValue";

/// Extract provider parameters from raw form values
///
/// # Errors
/// `ExtractError::InvalidInput` if `input` is not an object or misses the
/// keys the provider requires
pub fn extract(input: &Value, provider: Provider) -> Result<ProviderParameters, ExtractError> {
    let Some(values) = input.as_object() else {
        return Err(ExtractError::invalid(provider, "input values are not an object"));
    };

    match provider {
        Provider::Anrok | Provider::Avalara => extract_avalara_and_anrok(values, provider),
        Provider::Netsuite => extract_netsuite(values),
        Provider::Xero => extract_xero(values),
    }
}

fn has_all(values: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter().all(|key| values.contains_key(*key))
}

fn extract_avalara_and_anrok(
    values: &Map<String, Value>,
    provider: Provider,
) -> Result<ProviderParameters, ExtractError> {
    if !has_all(values, &["externalId", "externalName"]) {
        return Err(ExtractError::invalid(
            provider,
            "externalId and externalName are required",
        ));
    }

    Ok(ProviderParameters::AvalaraAndAnrok(AvalaraAndAnrokParameters {
        external_id: coerce_field(values.get("externalId")),
        external_name: coerce_field(values.get("externalName")),
    }))
}

fn extract_netsuite(values: &Map<String, Value>) -> Result<ProviderParameters, ExtractError> {
    if !has_all(values, &TAX_KEYS) && !has_all(values, &BASIC_KEYS) {
        return Err(ExtractError::invalid(
            Provider::Netsuite,
            "either taxCode, taxNexus and taxType or externalId, externalName and externalAccountCode are required",
        ));
    }

    // Basic fields default to "" rather than None.
    let basic = |key: &str| Some(coerce_field(values.get(key)).unwrap_or_default());

    Ok(ProviderParameters::Netsuite(NetsuiteParameters {
        external_id: basic("externalId"),
        external_name: basic("externalName"),
        external_account_code: basic("externalAccountCode"),
        tax_code: coerce_field(values.get("taxCode")),
        tax_nexus: coerce_field(values.get("taxNexus")),
        tax_type: coerce_field(values.get("taxType")),
    }))
}

fn extract_xero(values: &Map<String, Value>) -> Result<ProviderParameters, ExtractError> {
    let Some(Value::String(selected)) = values.get(SELECTED_ELEMENT_KEY) else {
        return Err(ExtractError::invalid(
            Provider::Xero,
            "selectedElementValue must be a string",
        ));
    };

    Ok(ProviderParameters::Xero(XeroParameters::from(
        XeroSelection::decode(selected),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn rejects_non_objects() {
        for provider in Provider::ALL {
            for input in [json!(null), json!("x"), json!(1), json!([])] {
                assert!(extract(&input, provider).is_err(), "{provider} accepted {input}");
            }
        }
    }

    #[test]
    fn anrok_and_avalara_require_both_keys() {
        for provider in [Provider::Anrok, Provider::Avalara] {
            assert!(extract(&json!({}), provider).is_err());
            assert!(extract(&json!({ "externalId": "x" }), provider).is_err());

            let params =
                extract(&json!({ "externalId": "x", "externalName": "y" }), provider).unwrap();
            assert_eq!(
                params,
                ProviderParameters::AvalaraAndAnrok(AvalaraAndAnrokParameters {
                    external_id: Some("x".into()),
                    external_name: Some("y".into()),
                })
            );
        }
    }

    #[test]
    fn anrok_present_but_falsy_values_collapse() {
        let params = extract(
            &json!({ "externalId": 0, "externalName": null }),
            Provider::Anrok,
        )
        .unwrap();
        assert_eq!(
            params,
            ProviderParameters::AvalaraAndAnrok(AvalaraAndAnrokParameters::default())
        );

        let params = extract(
            &json!({ "externalId": 12, "externalName": false }),
            Provider::Avalara,
        )
        .unwrap();
        assert_eq!(
            params,
            ProviderParameters::AvalaraAndAnrok(AvalaraAndAnrokParameters {
                external_id: Some("12".into()),
                external_name: None,
            })
        );
    }

    #[test]
    fn netsuite_tax_keys_leave_basic_fields_empty() {
        let params = extract(
            &json!({ "taxCode": "a", "taxNexus": "b", "taxType": "c" }),
            Provider::Netsuite,
        )
        .unwrap();
        assert_eq!(
            params,
            ProviderParameters::Netsuite(NetsuiteParameters {
                external_id: Some(String::new()),
                external_name: Some(String::new()),
                external_account_code: Some(String::new()),
                tax_code: Some("a".into()),
                tax_nexus: Some("b".into()),
                tax_type: Some("c".into()),
            })
        );
    }

    #[test]
    fn netsuite_basic_keys_leave_tax_fields_absent() {
        let params = extract(
            &json!({ "externalId": 101, "externalName": "Fee", "externalAccountCode": "" }),
            Provider::Netsuite,
        )
        .unwrap();
        assert_eq!(
            params,
            ProviderParameters::Netsuite(NetsuiteParameters {
                external_id: Some("101".into()),
                external_name: Some("Fee".into()),
                external_account_code: Some(String::new()),
                tax_code: None,
                tax_nexus: None,
                tax_type: None,
            })
        );
    }

    #[test]
    fn netsuite_needs_a_full_triple() {
        assert!(extract(&json!({ "externalId": "a" }), Provider::Netsuite).is_err());
        assert!(extract(
            &json!({ "externalId": "a", "externalName": "b", "taxCode": "c", "taxNexus": "d" }),
            Provider::Netsuite
        )
        .is_err());
    }

    #[test]
    fn xero_decodes_selection() {
        let params = extract(
            &json!({ "selectedElementValue": "id:::code:::name" }),
            Provider::Xero,
        )
        .unwrap();
        assert_eq!(
            params,
            ProviderParameters::Xero(XeroParameters {
                external_id: Some("id".into()),
                external_account_code: Some("code".into()),
                external_name: Some("name".into()),
            })
        );
    }

    #[test]
    fn xero_requires_string_selection() {
        assert!(extract(&json!({}), Provider::Xero).is_err());
        assert!(extract(&json!({ "selectedElementValue": 3 }), Provider::Xero).is_err());

        let empty = extract(&json!({ "selectedElementValue": "" }), Provider::Xero).unwrap();
        assert_eq!(empty, ProviderParameters::Xero(XeroParameters::default()));
    }

    proptest! {
        #[test]
        fn string_values_pass_through(id in "[a-z0-9]{1,12}", name in "[A-Za-z ]{1,20}") {
            let params = extract(
                &json!({ "externalId": id.clone(), "externalName": name.clone() }),
                Provider::Anrok,
            ).unwrap();
            let ProviderParameters::AvalaraAndAnrok(p) = params else {
                panic!("wrong shape");
            };
            prop_assert_eq!(p.external_id, Some(id));
            prop_assert_eq!(p.external_name, Some(name));
        }
    }
}
