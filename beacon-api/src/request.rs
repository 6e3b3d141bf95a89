use std::num::ParseIntError;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use beacon_core::AlleleQuery;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("parsing {field}: parsing value as integer: {source}")]
    InvalidInteger {
        field: &'static str,
        value: String,
        source: ParseIntError,
    },

    #[error("decoding request body: {0}")]
    Json(#[from] serde_json::Error),
}

///
/// An allele request as sent by a beacon client, either as URL parameters or as a JSON
/// body. It is echoed back in the response.
///
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct BeaconAlleleRequest {
    #[serde(alias = "chromosome", deserialize_with = "null_as_empty")]
    pub reference_name: String,
    #[serde(alias = "allele", deserialize_with = "null_as_empty")]
    pub reference_bases: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub alternate_bases: String,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub start_min: Option<i64>,
    pub start_max: Option<i64>,
    pub end_min: Option<i64>,
    pub end_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<i64>,
}

impl BeaconAlleleRequest {
    ///
    /// Build a request from URL-encoded form fields.
    ///
    /// Empty values count as absent and the first non-empty value of a field wins.
    /// Unknown fields are ignored.
    ///
    pub fn from_form<I, K, V>(pairs: I) -> Result<Self, RequestError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut request = BeaconAlleleRequest::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "referenceName" | "chromosome" => set_text(&mut request.reference_name, value),
                "referenceBases" | "allele" => set_text(&mut request.reference_bases, value),
                "alternateBases" => set_text(&mut request.alternate_bases, value),
                "start" => set_int(&mut request.start, "start", value)?,
                "end" => set_int(&mut request.end, "end", value)?,
                "startMin" => set_int(&mut request.start_min, "startMin", value)?,
                "startMax" => set_int(&mut request.start_max, "startMax", value)?,
                "endMin" => set_int(&mut request.end_min, "endMin", value)?,
                "endMax" => set_int(&mut request.end_max, "endMax", value)?,
                "coordinate" => set_int(&mut request.coordinate, "coordinate", value)?,
                _ => {}
            }
        }
        Ok(request)
    }

    /// Build a request from a JSON body.
    pub fn from_json(body: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn to_query(&self) -> AlleleQuery {
        AlleleQuery {
            reference_name: self.reference_name.clone(),
            reference_bases: self.reference_bases.clone(),
            alternate_bases: self.alternate_bases.clone(),
            start: self.start,
            end: self.end,
            start_min: self.start_min,
            start_max: self.start_max,
            end_min: self.end_min,
            end_max: self.end_max,
            coordinate: self.coordinate,
        }
    }
}

/// JSON `null` decodes to an empty string, which validation reports as missing.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn set_text(slot: &mut String, value: &str) {
    if slot.is_empty() {
        *slot = value.to_string();
    }
}

fn set_int(slot: &mut Option<i64>, field: &'static str, value: &str) -> Result<(), RequestError> {
    if slot.is_some() {
        return Ok(());
    }
    let parsed = value
        .parse::<i64>()
        .map_err(|source| RequestError::InvalidInteger {
            field,
            value: value.to_string(),
            source,
        })?;
    *slot = Some(parsed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use beacon_core::errors::{Field, ValidationError};
    use beacon_core::{QueryConfig, validate};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_from_form() {
        let request = BeaconAlleleRequest::from_form([
            ("referenceName", "1"),
            ("referenceBases", "A"),
            ("alternateBases", "G"),
            ("start", "0"),
            ("end", ""),
            ("unknown", "ignored"),
        ])
        .unwrap();

        assert_eq!(request.reference_name, "1");
        assert_eq!(request.alternate_bases, "G");
        assert_eq!(request.start, Some(0));
        assert_eq!(request.end, None);
    }

    #[rstest]
    fn test_from_form_legacy_names() {
        let request = BeaconAlleleRequest::from_form([
            ("chromosome", "13"),
            ("allele", "T"),
            ("coordinate", "32914437"),
        ])
        .unwrap();
        assert_eq!(request.reference_name, "13");
        assert_eq!(request.reference_bases, "T");
        assert_eq!(request.coordinate, Some(32914437));
    }

    #[rstest]
    fn test_from_form_first_value_wins() {
        let request = BeaconAlleleRequest::from_form([("start", "5"), ("start", "6")]).unwrap();
        assert_eq!(request.start, Some(5));
    }

    #[rstest]
    #[case("startMin", "ten")]
    #[case("end", "1.5")]
    #[case("coordinate", "99999999999999999999")]
    fn test_from_form_invalid_integer(#[case] key: &str, #[case] value: &str) {
        let err = BeaconAlleleRequest::from_form([(key, value)]).unwrap_err();
        match err {
            RequestError::InvalidInteger { field, value: got, .. } => {
                assert_eq!(field, key);
                assert_eq!(got, value);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[rstest]
    fn test_from_json() {
        let request = BeaconAlleleRequest::from_json(
            r#"{"referenceName": "1", "referenceBases": "A", "startMin": 10, "startMax": 20, "endMin": 30, "endMax": 40}"#,
        )
        .unwrap();
        assert_eq!(request.start_min, Some(10));
        assert_eq!(request.end_max, Some(40));
        assert_eq!(request.start, None);
    }

    #[rstest]
    fn test_from_json_legacy_names() {
        let body = r#"{"chromosome": "1", "allele": "A", "coordinate": 99}"#;
        let request = BeaconAlleleRequest::from_json(body).unwrap();
        assert_eq!(request.to_query().coordinate, Some(99));
        assert_eq!(request.to_query().reference_bases, "A");
    }

    #[rstest]
    fn test_from_json_null_text_fields() {
        let body = r#"{"referenceName": null, "referenceBases": "A", "alternateBases": null}"#;
        let request = BeaconAlleleRequest::from_json(body).unwrap();

        assert_eq!(request.reference_name, "");
        assert_eq!(request.alternate_bases, "");
        assert_eq!(
            validate(&request.to_query(), &QueryConfig::allele()).unwrap_err(),
            ValidationError::MissingField(Field::ReferenceName)
        );
    }

    #[rstest]
    fn test_from_json_invalid() {
        assert!(matches!(
            BeaconAlleleRequest::from_json("{\"start\": \"x\"}"),
            Err(RequestError::Json(_))
        ));
    }

    #[rstest]
    fn test_echo_serialization() {
        let request = BeaconAlleleRequest {
            reference_name: "1".to_string(),
            start: Some(3),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["referenceName"], "1");
        assert_eq!(json["start"], 3);
        assert!(json["end"].is_null());
        assert!(json.get("coordinate").is_none());
    }
}
