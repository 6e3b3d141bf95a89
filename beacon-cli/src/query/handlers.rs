use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use beacon_api::{Beacon, BeaconAlleleRequest, BeaconAlleleResponse, RequestError, xml_response};
use beacon_io::VariantTable;

use crate::args::{config_from_matches, request_from_matches};

/// Run one allele query against a local table and print the response.
pub fn run_query(matches: &ArgMatches) -> Result<()> {
    let table_path = matches
        .get_one::<String>("table")
        .expect("A path to a variant table is required.");

    let default_format = "json".to_string();
    let format = matches
        .get_one::<String>("format")
        .unwrap_or(&default_format);

    let config = config_from_matches(matches)?;
    let table = VariantTable::from_path(Path::new(table_path), config.table.clone())
        .with_context(|| format!("Failed to load variant table: {}", table_path))?;
    let beacon = Beacon::new(config, table);

    let response = match request_from_matches(matches) {
        Ok(request) => beacon.query(request),
        Err(err) => match err.downcast_ref::<RequestError>() {
            Some(request_err) => beacon.reject(BeaconAlleleRequest::default(), request_err),
            None => return Err(err),
        },
    };

    println!("{}", render(&response, format)?);
    Ok(())
}

fn render(response: &BeaconAlleleResponse, format: &str) -> Result<String> {
    match format {
        "xml" => match (&response.exists, &response.error) {
            (Some(exists), _) => Ok(xml_response(*exists)),
            (None, Some(error)) => Err(anyhow::anyhow!("{}", error.message)),
            (None, None) => unreachable!("response without result or error"),
        },
        _ => Ok(response.to_json_pretty()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use beacon_api::BeaconError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn response(exists: Option<bool>, error: Option<BeaconError>) -> BeaconAlleleResponse {
        BeaconAlleleResponse {
            beacon_id: "b".to_string(),
            api_version: "v0.0.1".to_string(),
            allele_request: BeaconAlleleRequest::default(),
            exists,
            error,
        }
    }

    #[rstest]
    fn test_render_xml() {
        assert_eq!(
            render(&response(Some(true), None), "xml").unwrap(),
            "<BEACONResponse>\n  <exists>true</exists>\n</BEACONResponse>"
        );
    }

    #[rstest]
    fn test_render_xml_error() {
        let err = render(
            &response(None, Some(BeaconError::bad_request("validating input: missing coordinate"))),
            "xml",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "validating input: missing coordinate");
    }

    #[rstest]
    fn test_render_json() {
        let json = render(&response(Some(false), None), "json").unwrap();
        assert!(json.contains("\"exists\": false"));
    }
}
