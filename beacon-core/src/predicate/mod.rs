//! Structured selection predicates over a variant table.
//!
//! A [`Predicate`] is a conjunction of typed [`Constraint`]s. It is never rendered to
//! text here; see [`crate::sql`] for the parameterized SQL form.
pub mod ast;
pub mod build;
pub mod eval;

pub use ast::{Column, CompareOp, Constraint, Predicate, Value};
pub use build::build;
pub use eval::{ColumnValue, Row};
