//! Request File Tests
//!
//! Request files on disk through to plan reports.

use ledgermap_cli::{load_requests, plan_all, CliConfig};
use ledgermap_reconcile::Operation;
use pretty_assertions::assert_eq;
use std::io::Write;

const REQUESTS: &str = r#"[
    {
        "provider": "netsuite",
        "integrationId": "integration-123",
        "target": { "collection": "tax" },
        "billingEntity": { "id": "be-1", "key": "acme-eu", "name": "Acme EU" },
        "initialMapping": {
            "kind": "tax",
            "itemId": "m-1",
            "itemExternalId": "ext-123",
            "itemExternalName": "External Name",
            "itemExternalCode": "ACC-123",
            "taxCode": "TAX-001",
            "taxNexus": "US",
            "taxType": "SALES"
        },
        "inputValues": {
            "externalId": "ext-123",
            "externalName": "External Name",
            "externalAccountCode": "ACC-123",
            "taxCode": "TAX-001",
            "taxNexus": "US",
            "taxType": "SALES"
        }
    },
    {
        "provider": "xero",
        "integrationId": "integration-123",
        "target": { "item": { "mappableType": "AddOn", "entityId": "add-on-1" } },
        "billingEntity": { "key": "default", "name": "Default" },
        "initialMapping": { "kind": "mappable", "mappableId": "add-on-1" },
        "inputValues": { "selectedElementValue": "xero-1:::200:::Consulting" }
    }
]"#;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_plan_from_file() {
    let file = write_temp(REQUESTS);
    let requests = load_requests(file.path()).unwrap();
    let config = CliConfig::default();

    let report = plan_all(&requests, &config.reconcile);

    let operations: Vec<_> = report
        .entries
        .iter()
        .map(|e| e.plan.as_ref().map(|p| p.operation()))
        .collect();
    assert_eq!(
        operations,
        vec![Some(Operation::Skipped), Some(Operation::CreateItem)]
    );
    assert!(report.all_succeeded());
}

#[test]
fn test_config_disables_unchanged_skip() {
    let requests = load_requests(write_temp(REQUESTS).path()).unwrap();
    let config = write_temp("[reconcile]\nskip_unchanged_edits = false\n");
    let config = CliConfig::load(config.path()).unwrap();

    let report = plan_all(&requests[..1], &config.reconcile);

    assert_eq!(
        report.entries[0].plan.as_ref().map(|p| p.operation()),
        Some(Operation::UpdateCollection)
    );
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_temp("{ \"provider\": ");
    assert!(load_requests(file.path()).is_err());
}
