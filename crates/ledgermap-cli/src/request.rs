//! Request files

use anyhow::Context;
use ledgermap_reconcile::ReconcileRequest;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum RequestFile {
    Many(Vec<ReconcileRequest>),
    One(Box<ReconcileRequest>),
}

/// Parse a request document holding one request or an array of them
///
/// # Errors
/// If the document is not valid JSON or not shaped like a request
pub fn parse_requests(raw: &str) -> anyhow::Result<Vec<ReconcileRequest>> {
    let file: RequestFile =
        serde_json::from_str(raw).context("request file is not a request or array of requests")?;
    Ok(match file {
        RequestFile::Many(requests) => requests,
        RequestFile::One(request) => vec![*request],
    })
}

/// Read and parse a request file
///
/// # Errors
/// If the file cannot be read or parsed
pub fn load_requests(path: impl AsRef<Path>) -> anyhow::Result<Vec<ReconcileRequest>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read request file {}", path.display()))?;
    parse_requests(&raw).with_context(|| format!("in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgermap_core::{CollectionMappingType, MappingTarget, Provider};

    const SINGLE: &str = r#"{
        "provider": "netsuite",
        "integrationId": "integration-123",
        "target": { "collection": "tax" },
        "billingEntity": { "id": "be-1", "key": "acme-eu", "name": "Acme EU" },
        "initialMapping": { "kind": "tax" },
        "inputValues": { "taxCode": "T1", "taxNexus": "US", "taxType": "SALES" }
    }"#;

    #[test]
    fn single_object() {
        let requests = parse_requests(SINGLE).unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].provider, Provider::Netsuite);
        assert_eq!(
            requests[0].target,
            MappingTarget::Collection(CollectionMappingType::Tax)
        );
        assert!(requests[0].initial_mapping.is_some());
    }

    #[test]
    fn array_of_requests() {
        let raw = format!("[{SINGLE}, {SINGLE}]");
        assert_eq!(parse_requests(&raw).unwrap().len(), 2);
    }

    #[test]
    fn optional_fields_default() {
        let requests = parse_requests(
            r#"{
                "provider": "anrok",
                "integrationId": "integration-123",
                "target": { "collection": "coupon" },
                "billingEntity": { "key": "default", "name": "Default" }
            }"#,
        )
        .unwrap();
        assert_eq!(requests[0].initial_mapping, None);
        assert!(requests[0].input_values.is_null());
    }

    #[test]
    fn rejects_unknown_provider() {
        let raw = SINGLE.replace("netsuite", "quickbooks");
        assert!(parse_requests(&raw).is_err());
    }

    #[test]
    fn missing_file_names_path() {
        let err = load_requests("/nonexistent/requests.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/requests.json"));
    }
}
