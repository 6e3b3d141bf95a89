use crate::models::AlternateBasesLayout;
use crate::validate::{Coordinates, ValidatedQuery};

use super::ast::{Column, CompareOp, Predicate, Value};

///
/// Turn a validated query into a conjunctive predicate.
///
/// Constraints are emitted in a fixed order: reference name, reference bases, alternate
/// bases, coordinates. Empty optional fields produce no constraint.
///
/// The alternate-bases comparison follows the layout of the rules the query was validated
/// with.
///
pub fn build(validated: &ValidatedQuery<'_>) -> Predicate {
    let query = validated.query();
    let mut predicate = Predicate::new();

    predicate.and(
        Column::ReferenceName,
        CompareOp::Eq,
        Value::Text(query.reference_name.clone()),
    );

    if !query.reference_bases.is_empty() {
        predicate.and(
            Column::ReferenceBases,
            CompareOp::Eq,
            Value::Text(query.reference_bases.clone()),
        );
    }

    if !query.alternate_bases.is_empty() {
        let op = match validated.alternate_bases_layout() {
            AlternateBasesLayout::Repeated => CompareOp::Contains,
            AlternateBasesLayout::Scalar => CompareOp::Eq,
        };
        predicate.and(
            Column::AlternateBases,
            op,
            Value::Text(query.alternate_bases.clone()),
        );
    }

    match validated.coordinates() {
        Coordinates::Exact { start, end } => {
            predicate.and(Column::Start, CompareOp::Eq, Value::Int(start));
            if let Some(end) = end {
                predicate.and(Column::End, CompareOp::Eq, Value::Int(end));
            }
        }
        // start is inclusive, end is exclusive
        Coordinates::Point(point) => {
            predicate.and(Column::Start, CompareOp::Lte, Value::Int(point));
            predicate.and(Column::End, CompareOp::Gt, Value::Int(point));
        }
        Coordinates::Range {
            start_min,
            start_max,
            end_min,
            end_max,
        } => {
            predicate.and(Column::Start, CompareOp::Gte, Value::Int(start_min));
            predicate.and(Column::Start, CompareOp::Lte, Value::Int(start_max));
            predicate.and(Column::End, CompareOp::Gte, Value::Int(end_min));
            predicate.and(Column::End, CompareOp::Lte, Value::Int(end_max));
        }
        Coordinates::Unconstrained => {}
    }

    log::debug!("built predicate: {}", predicate);
    predicate
}
