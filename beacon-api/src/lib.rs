//! # GA4GH beacon API
//!
//! The request and response shapes of a beacon, its deployment configuration, and the
//! [`Beacon`] service that answers allele requests with any
//! [`beacon_core::QueryExecutor`].
//!
//! Transport (routing, CORS, HTTP status lines) is left to the embedding server.
pub mod config;
pub mod consts;
pub mod info;
pub mod request;
pub mod response;
pub mod service;

pub use config::{BeaconConfig, BeaconConfigBuilder, ConfigError, ConfigFile};
pub use info::{BeaconInfo, BeaconOrganization};
pub use request::{BeaconAlleleRequest, RequestError};
pub use response::{BeaconAlleleResponse, BeaconError, xml_response};
pub use service::{Beacon, QueryError};
