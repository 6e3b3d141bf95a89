//! # Local variant tables for beacon
//!
//! Reads a tab separated variant table from disk (plain or gzipped) into memory and
//! answers beacon predicates against it. Useful for small deployments and for testing
//! a beacon without a data warehouse.
//!
pub mod error;
pub mod reader;
pub mod table;

// re-expose core functions
pub use error::*;
pub use reader::get_dynamic_reader;
pub use table::*;
