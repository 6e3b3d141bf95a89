pub mod config;
pub mod query;

// re-export for cleaner imports
pub use self::config::{AlternateBasesLayout, CoordinateMode, QueryConfig};
pub use self::query::AlleleQuery;
