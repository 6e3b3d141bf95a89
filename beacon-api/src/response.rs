use serde::{Deserialize, Serialize};

use crate::consts::{BAD_REQUEST, INTERNAL_ERROR};
use crate::request::BeaconAlleleRequest;

/// Error payload of a beacon response.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BeaconError {
    #[serde(rename = "errorCode")]
    pub code: String,
    #[serde(rename = "errorMessage")]
    pub message: String,
}

impl BeaconError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        BeaconError {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(INTERNAL_ERROR, message)
    }

    /// The numeric code, when it is one.
    pub fn status(&self) -> Option<u16> {
        self.code.parse().ok()
    }
}

///
/// Answer to an allele request. Exactly one of `exists` and `error` is set.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BeaconAlleleResponse {
    pub beacon_id: String,
    pub api_version: String,
    pub allele_request: BeaconAlleleRequest,
    pub exists: Option<bool>,
    pub error: Option<BeaconError>,
}

impl BeaconAlleleResponse {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

///
/// The XML answer of the legacy beacon protocol: a bare `exists` flag.
///
pub fn xml_response(exists: bool) -> String {
    format!(
        "<BEACONResponse>\n  <exists>{}</exists>\n</BEACONResponse>",
        exists
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_error_response_json() {
        let response = BeaconAlleleResponse {
            beacon_id: "b1".to_string(),
            api_version: "v0.0.1".to_string(),
            allele_request: BeaconAlleleRequest::default(),
            exists: None,
            error: Some(BeaconError::bad_request("validating input: missing reference name")),
        };
        let json: serde_json::Value = serde_json::from_str(&response.to_json().unwrap()).unwrap();

        assert_eq!(json["beaconId"], "b1");
        assert!(json["exists"].is_null());
        assert_eq!(json["error"]["errorCode"], "400");
        assert_eq!(
            json["error"]["errorMessage"],
            "validating input: missing reference name"
        );
        assert_eq!(json["alleleRequest"]["referenceName"], "");
    }

    #[rstest]
    fn test_status() {
        assert_eq!(BeaconError::internal("boom").status(), Some(500));
    }

    #[rstest]
    #[case(true, "<BEACONResponse>\n  <exists>true</exists>\n</BEACONResponse>")]
    #[case(false, "<BEACONResponse>\n  <exists>false</exists>\n</BEACONResponse>")]
    fn test_xml_response(#[case] exists: bool, #[case] expected: &str) {
        assert_eq!(xml_response(exists), expected);
    }
}
