//! A beacon answering requests against an in-memory variant table.

use beacon_api::{Beacon, BeaconAlleleRequest, BeaconConfig};
use beacon_core::QueryConfig;
use beacon_core::sql::TableId;
use beacon_io::VariantTable;

use pretty_assertions::assert_eq;
use rstest::*;

const VARIANTS: &str = "1\t99\t100\tA\tG\n\
                        1\t1000\t1002\tAT\tA,ATT\n\
                        13\t32914437\t32914438\tT\tC\n";

fn beacon(query: QueryConfig) -> Beacon<VariantTable> {
    let config = BeaconConfig::builder()
        .with_project_id("proj".to_string())
        .with_table_id("proj.ds.variants".to_string())
        .with_query_config(query)
        .finish_with(|_| None)
        .unwrap();
    let table = VariantTable::from_reader(
        VARIANTS.as_bytes(),
        TableId::parse("proj.ds.variants").unwrap(),
    )
    .unwrap();
    Beacon::new(config, table)
}

#[fixture]
fn allele_beacon() -> Beacon<VariantTable> {
    beacon(QueryConfig::allele())
}

#[rstest]
fn test_json_request(allele_beacon: Beacon<VariantTable>) {
    let request = BeaconAlleleRequest::from_json(
        r#"{"referenceName": "1", "referenceBases": "AT", "alternateBases": "ATT", "start": 1000, "end": 1002}"#,
    )
    .unwrap();

    let response = allele_beacon.query(request.clone());

    assert_eq!(response.exists, Some(true));
    assert_eq!(response.error, None);
    assert_eq!(response.allele_request, request);
    assert_eq!(response.api_version, "v0.0.1");
}

#[rstest]
fn test_form_request_absent(allele_beacon: Beacon<VariantTable>) {
    let request = BeaconAlleleRequest::from_form([
        ("referenceName", "1"),
        ("referenceBases", "A"),
        ("alternateBases", "T"),
        ("start", "99"),
    ])
    .unwrap();

    let response = allele_beacon.query(request);

    assert_eq!(response.exists, Some(false));
}

#[rstest]
fn test_invalid_request(allele_beacon: Beacon<VariantTable>) {
    let request = BeaconAlleleRequest::from_form([
        ("referenceName", "1"),
        ("referenceBases", "A"),
        ("startMin", "10"),
    ])
    .unwrap();

    let response = allele_beacon.query(request);

    assert_eq!(response.exists, None);
    let error = response.error.unwrap();
    assert_eq!(error.code, "400");
    assert_eq!(
        error.message,
        "validating input: restrictions not met for provided coordinates"
    );
}

#[rstest]
fn test_legacy_beacon() {
    let beacon = beacon(QueryConfig::legacy());
    let request = BeaconAlleleRequest::from_form([
        ("chromosome", "13"),
        ("allele", "T"),
        ("coordinate", "32914437"),
    ])
    .unwrap();

    assert_eq!(beacon.query(request).exists, Some(true));
}

#[rstest]
fn test_strict_beacon_requires_alternate() {
    let beacon = beacon(QueryConfig::strict());
    let request = BeaconAlleleRequest::from_form([("referenceName", "1"), ("referenceBases", "A")])
        .unwrap();

    let response = beacon.query(request);

    assert_eq!(
        response.error.unwrap().message,
        "validating input: missing alternate bases"
    );
}

#[rstest]
fn test_response_json_shape(allele_beacon: Beacon<VariantTable>) {
    let request = BeaconAlleleRequest::from_form([("referenceName", "1"), ("referenceBases", "A")])
        .unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&allele_beacon.query(request).to_json().unwrap()).unwrap();

    assert_eq!(json["exists"], true);
    assert!(json["error"].is_null());
    assert_eq!(json["alleleRequest"]["referenceBases"], "A");
}
