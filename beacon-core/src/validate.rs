//! Query validation.
//!
//! Rules run in a fixed order and the first failure is returned:
//!
//! 1. `referenceName` is non-empty
//! 2. `referenceBases` is non-empty when the deployment requires it
//! 3. non-empty `referenceBases` is a valid allele
//! 4. `alternateBases` is present when required, and a valid allele when non-empty
//! 5. the coordinate fields describe exactly one coordinate mode
use crate::alleles::is_valid_allele;
use crate::errors::{Field, Result, ValidationError};
use crate::models::{AlleleQuery, AlternateBasesLayout, CoordinateMode, QueryConfig};

/// The coordinate constraint a query resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinates {
    /// Exact start, and exact end when given.
    Exact { start: i64, end: Option<i64> },
    /// Independent closed ranges on start and end.
    Range {
        start_min: i64,
        start_max: i64,
        end_min: i64,
        end_max: i64,
    },
    /// Legacy point lookup: `start <= point < end`.
    Point(i64),
    /// No positional constraint.
    Unconstrained,
}

/// A query that passed validation, paired with its resolved coordinates and the table
/// layout of the rules it was checked against.
///
/// Only [`validate`] creates one, so holding a `ValidatedQuery` is proof the rules held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedQuery<'a> {
    query: &'a AlleleQuery,
    coordinates: Coordinates,
    alternate_bases: AlternateBasesLayout,
}

impl<'a> ValidatedQuery<'a> {
    pub fn query(&self) -> &'a AlleleQuery {
        self.query
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn alternate_bases_layout(&self) -> AlternateBasesLayout {
        self.alternate_bases
    }
}

impl AlleleQuery {
    /// Check the query against `config` without keeping the resolved coordinates.
    pub fn validate(&self, config: &QueryConfig) -> Result<()> {
        validate(self, config).map(|_| ())
    }
}

///
/// Validate a query against the rules of the deployment.
///
/// # Arguments
/// - query: the query built from the inbound request
/// - config: the deployment's query rules
///
/// # Returns
/// The validated query, or the first rule it broke.
///
pub fn validate<'a>(query: &'a AlleleQuery, config: &QueryConfig) -> Result<ValidatedQuery<'a>> {
    if query.reference_name.is_empty() {
        return Err(ValidationError::MissingField(Field::ReferenceName));
    }

    if config.require_reference_bases && query.reference_bases.is_empty() {
        return Err(ValidationError::MissingField(Field::ReferenceBases));
    }
    check_bases(Field::ReferenceBases, &query.reference_bases)?;

    if config.require_alternate_bases && query.alternate_bases.is_empty() {
        return Err(ValidationError::MissingField(Field::AlternateBases));
    }
    check_bases(Field::AlternateBases, &query.alternate_bases)?;

    let coordinates = match config.coordinates {
        CoordinateMode::Interval => interval_coordinates(query)?,
        CoordinateMode::SinglePoint => point_coordinates(query)?,
    };

    Ok(ValidatedQuery {
        query,
        coordinates,
        alternate_bases: config.alternate_bases,
    })
}

fn check_bases(field: Field, bases: &str) -> Result<()> {
    if !bases.is_empty() && !is_valid_allele(bases) {
        return Err(ValidationError::InvalidAlleleSyntax(field, bases.to_string()));
    }
    Ok(())
}

fn interval_coordinates(query: &AlleleQuery) -> Result<Coordinates> {
    if query.coordinate.is_some() {
        return Err(ValidationError::ConflictingCoordinateModes);
    }

    let range_fields = [query.start_min, query.start_max, query.end_min, query.end_max];
    let exact_fields = [query.start, query.end];

    match (query.is_precise(), query.is_imprecise()) {
        (true, true) => Err(ValidationError::ConflictingCoordinateModes),
        // a complete mode plus a partial set of the other one
        (true, false) if range_fields.iter().any(Option::is_some) => {
            Err(ValidationError::IncompleteCoordinateSpecification)
        }
        (false, true) if exact_fields.iter().any(Option::is_some) => {
            Err(ValidationError::IncompleteCoordinateSpecification)
        }
        (true, false) => match query.start {
            Some(start) => Ok(Coordinates::Exact {
                start,
                end: query.end,
            }),
            None => unreachable!("precise position without start"),
        },
        (false, true) => match (
            query.start_min,
            query.start_max,
            query.end_min,
            query.end_max,
        ) {
            (Some(start_min), Some(start_max), Some(end_min), Some(end_max)) => {
                Ok(Coordinates::Range {
                    start_min,
                    start_max,
                    end_min,
                    end_max,
                })
            }
            _ => unreachable!("imprecise position without all bounds"),
        },
        (false, false) if query.has_interval_fields() => {
            Err(ValidationError::IncompleteCoordinateSpecification)
        }
        (false, false) => Ok(Coordinates::Unconstrained),
    }
}

fn point_coordinates(query: &AlleleQuery) -> Result<Coordinates> {
    if query.has_interval_fields() {
        return Err(ValidationError::ConflictingCoordinateModes);
    }
    query
        .coordinate
        .map(Coordinates::Point)
        .ok_or(ValidationError::MissingField(Field::Coordinate))
}
