use std::fmt::{self, Display};

use thiserror::Error;

/// Request fields that validation can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ReferenceName,
    ReferenceBases,
    AlternateBases,
    Coordinate,
}

impl Field {
    /// The field name as it appears in a beacon request.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ReferenceName => "referenceName",
            Field::ReferenceBases => "referenceBases",
            Field::AlternateBases => "alternateBases",
            Field::Coordinate => "coordinate",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::ReferenceName => write!(f, "reference name"),
            Field::ReferenceBases => write!(f, "reference bases"),
            Field::AlternateBases => write!(f, "alternate bases"),
            Field::Coordinate => write!(f, "coordinate"),
        }
    }
}

/// Why an allele query was rejected.
///
/// Only the first violated rule is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing {0}")]
    MissingField(Field),

    #[error("invalid value for {0}: {1}")]
    InvalidAlleleSyntax(Field, String),

    #[error("please query either precise or imprecise position")]
    ConflictingCoordinateModes,

    #[error("restrictions not met for provided coordinates")]
    IncompleteCoordinateSpecification,
}

impl ValidationError {
    /// Short machine readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingField(_) => "MissingField",
            ValidationError::InvalidAlleleSyntax(..) => "InvalidAlleleSyntax",
            ValidationError::ConflictingCoordinateModes => "ConflictingCoordinateModes",
            ValidationError::IncompleteCoordinateSpecification => {
                "IncompleteCoordinateSpecification"
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SqlError {
    #[error("Invalid table identifier: {0:?}. Expected `project.dataset.table`")]
    InvalidTableId(String),
}

pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(ValidationError::MissingField(Field::ReferenceName), "missing reference name")]
    #[case(ValidationError::MissingField(Field::Coordinate), "missing coordinate")]
    #[case(
        ValidationError::InvalidAlleleSyntax(Field::AlternateBases, "act".to_string()),
        "invalid value for alternate bases: act"
    )]
    #[case(
        ValidationError::ConflictingCoordinateModes,
        "please query either precise or imprecise position"
    )]
    fn test_display(#[case] err: ValidationError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[rstest]
    fn test_kind_and_field_names() {
        assert_eq!(
            ValidationError::IncompleteCoordinateSpecification.kind(),
            "IncompleteCoordinateSpecification"
        );
        assert_eq!(Field::ReferenceBases.as_str(), "referenceBases");
    }
}
