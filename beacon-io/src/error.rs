use std::io;
use thiserror::Error;

/// Error type for beacon-io operations.
#[derive(Error, Debug)]
pub enum TableError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A line of the variant table could not be parsed.
    #[error("Error parsing variant table at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The predicate was sent to a table this executor doesn't hold.
    #[error("Unknown table: {0}")]
    UnknownTable(String),
}

/// Result type alias for beacon-io operations.
pub type Result<T> = std::result::Result<T, TableError>;
