//! # Allele existence queries for GA4GH beacons
//!
//! This crate holds the query side of a beacon: the representation of an incoming
//! allele query, the rules that decide whether it is well formed, and the translation of
//! an accepted query into a conjunctive predicate over a variant table.
//!
//! The usual flow is:
//!
//! ```rust
//! use beacon_core::models::{AlleleQuery, QueryConfig};
//! use beacon_core::predicate::build;
//! use beacon_core::validate::validate;
//!
//! let config = QueryConfig::allele();
//! let query = AlleleQuery {
//!     reference_name: "1".to_string(),
//!     reference_bases: "A".to_string(),
//!     alternate_bases: "G".to_string(),
//!     start: Some(100),
//!     end: Some(101),
//!     ..Default::default()
//! };
//!
//! let validated = validate(&query, &config).unwrap();
//! let predicate = build(&validated);
//! assert_eq!(predicate.len(), 5);
//! ```
//!
//! Executing the predicate is left to a [`executor::QueryExecutor`]. The [`sql`] module
//! renders a predicate to parameterized SQL for warehouse-backed executors.
pub mod alleles;
pub mod errors;
pub mod executor;
pub mod models;
pub mod predicate;
pub mod sql;
pub mod validate;

// re-expose the common entry points
pub use errors::*;
pub use executor::{QueryExecutor, exists};
pub use models::{AlleleQuery, AlternateBasesLayout, CoordinateMode, QueryConfig};
pub use predicate::{Predicate, build};
pub use validate::{Coordinates, ValidatedQuery, validate};
