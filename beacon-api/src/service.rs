use thiserror::Error;

use beacon_core::errors::ValidationError;
use beacon_core::{AlleleQuery, QueryExecutor, build, exists, validate};

use crate::config::BeaconConfig;
use crate::info::BeaconInfo;
use crate::request::{BeaconAlleleRequest, RequestError};
use crate::response::{BeaconAlleleResponse, BeaconError};

/// Failure to answer an allele query.
#[derive(Error, Debug)]
pub enum QueryError<E: std::error::Error + 'static> {
    #[error("validating input: {0}")]
    Validation(#[from] ValidationError),

    #[error("computing result: {0}")]
    Execution(#[source] E),
}

impl<E: std::error::Error + 'static> QueryError<E> {
    /// Validation failures are the client's fault; the rest are ours.
    pub fn to_beacon_error(&self) -> BeaconError {
        match self {
            QueryError::Validation(_) => BeaconError::bad_request(self.to_string()),
            QueryError::Execution(_) => BeaconError::internal(self.to_string()),
        }
    }
}

///
/// A beacon over one variant table.
///
/// Each request is validated, turned into a predicate and handed to the executor; nothing
/// is shared between requests.
///
pub struct Beacon<E> {
    config: BeaconConfig,
    executor: E,
}

impl<E: QueryExecutor> Beacon<E> {
    pub fn new(config: BeaconConfig, executor: E) -> Self {
        Beacon { config, executor }
    }

    pub fn config(&self) -> &BeaconConfig {
        &self.config
    }

    pub fn about(&self) -> &BeaconInfo {
        &self.config.beacon
    }

    /// Validate, build and execute a single allele query.
    pub fn exists(&self, query: &AlleleQuery) -> Result<bool, QueryError<E::Error>> {
        let validated = validate(query, &self.config.query)?;
        let predicate = build(&validated);
        exists(
            &self.executor,
            &predicate,
            &self.config.table,
            &self.config.project_id,
        )
        .map_err(QueryError::Execution)
    }

    /// Answer a decoded request with a full beacon response.
    pub fn query(&self, request: BeaconAlleleRequest) -> BeaconAlleleResponse {
        match self.exists(&request.to_query()) {
            Ok(found) => {
                log::info!(
                    "{}:{:?} {}>{} exists={}",
                    request.reference_name,
                    request.start.or(request.coordinate),
                    request.reference_bases,
                    request.alternate_bases,
                    found
                );
                self.respond(request, Some(found), None)
            }
            Err(err) => {
                match &err {
                    QueryError::Validation(_) => log::warn!("rejected query: {}", err),
                    QueryError::Execution(_) => log::error!("query failed: {}", err),
                }
                let error = err.to_beacon_error();
                self.respond(request, None, Some(error))
            }
        }
    }

    /// Response for a request that could not even be decoded.
    pub fn reject(&self, request: BeaconAlleleRequest, err: &RequestError) -> BeaconAlleleResponse {
        log::warn!("rejected request: {}", err);
        self.respond(
            request,
            None,
            Some(BeaconError::bad_request(format!("parsing input: {}", err))),
        )
    }

    fn respond(
        &self,
        allele_request: BeaconAlleleRequest,
        exists: Option<bool>,
        error: Option<BeaconError>,
    ) -> BeaconAlleleResponse {
        BeaconAlleleResponse {
            beacon_id: self.config.beacon.id.clone(),
            api_version: self.config.beacon.api_version.clone(),
            allele_request,
            exists,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use beacon_core::predicate::Predicate;
    use beacon_core::sql::TableId;
    use beacon_core::QueryConfig;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[derive(Debug, Error)]
    #[error("warehouse unavailable")]
    struct Unavailable;

    struct Down;

    impl QueryExecutor for Down {
        type Error = Unavailable;

        fn execute(&self, _: &Predicate, _: &TableId, _: &str) -> Result<u64, Self::Error> {
            Err(Unavailable)
        }
    }

    #[fixture]
    fn config() -> BeaconConfig {
        BeaconConfig::builder()
            .with_project_id("p".to_string())
            .with_table_id("p.d.t".to_string())
            .with_query_config(QueryConfig::allele())
            .finish_with(|_| None)
            .unwrap()
    }

    #[rstest]
    fn test_execution_error_is_internal(config: BeaconConfig) {
        let beacon = Beacon::new(config, Down);
        let request = BeaconAlleleRequest {
            reference_name: "1".to_string(),
            reference_bases: "A".to_string(),
            ..Default::default()
        };

        let response = beacon.query(request);

        assert_eq!(response.exists, None);
        let error = response.error.unwrap();
        assert_eq!(error.code, "500");
        assert_eq!(error.message, "computing result: warehouse unavailable");
    }

    #[rstest]
    fn test_validation_error_is_bad_request(config: BeaconConfig) {
        let beacon = Beacon::new(config, Down);
        let response = beacon.query(BeaconAlleleRequest::default());

        let error = response.error.unwrap();
        assert_eq!(error.code, "400");
        assert_eq!(error.message, "validating input: missing reference name");
    }

    #[rstest]
    fn test_reject(config: BeaconConfig) {
        let beacon = Beacon::new(config, Down);
        let err = BeaconAlleleRequest::from_form([("start", "x")]).unwrap_err();

        let response = beacon.reject(BeaconAlleleRequest::default(), &err);

        assert_eq!(response.error.unwrap().status(), Some(400));
        assert_eq!(response.api_version, "v0.0.1");
    }
}
