//! Constants for beacon configuration.

/// Version of the GA4GH beacon API this crate implements.
pub const API_VERSION: &str = "v0.0.1";

// Environment variable names

/// Overrides the advertised API version.
pub const API_VERSION_ENV: &str = "BEACON_API_VERSION";

/// Cloud project the variant warehouse is billed to.
pub const PROJECT_ENV: &str = "GOOGLE_CLOUD_PROJECT";

/// Fully qualified variant table, `project.dataset.table`.
pub const TABLE_ENV: &str = "GOOGLE_BIGQUERY_TABLE";

/// Older name for [`TABLE_ENV`], consulted when it is unset.
pub const DATASET_ENV: &str = "VARIANTS_DATASET";

/// Error code reported for malformed or invalid requests.
pub const BAD_REQUEST: u16 = 400;

/// Error code reported when the variant store fails.
pub const INTERNAL_ERROR: u16 = 500;
