use std::cmp::Ordering;

use super::ast::{Column, CompareOp, Constraint, Predicate, Value};

/// A borrowed column value of one table row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColumnValue<'a> {
    Text(&'a str),
    Int(i64),
    List(&'a [String]),
}

/// One row of a variant table.
pub trait Row {
    fn column(&self, column: Column) -> ColumnValue<'_>;
}

impl Predicate {
    /// Evaluate the conjunction against a row.
    pub fn matches<R: Row + ?Sized>(&self, row: &R) -> bool {
        self.constraints()
            .iter()
            .all(|constraint| eval_constraint(row, constraint))
    }
}

fn eval_constraint<R: Row + ?Sized>(row: &R, constraint: &Constraint) -> bool {
    let actual = row.column(constraint.column);
    match constraint.op {
        CompareOp::Contains => contains(actual, &constraint.value),
        op => match compare(actual, &constraint.value) {
            Some(ordering) => match op {
                CompareOp::Eq => ordering == Ordering::Equal,
                CompareOp::Lt => ordering == Ordering::Less,
                CompareOp::Lte => ordering != Ordering::Greater,
                CompareOp::Gt => ordering == Ordering::Greater,
                CompareOp::Gte => ordering != Ordering::Less,
                CompareOp::Contains => unreachable!(),
            },
            None => false,
        },
    }
}

/// Order `actual` relative to `expected`; `None` when the types don't line up.
fn compare(actual: ColumnValue<'_>, expected: &Value) -> Option<Ordering> {
    match (actual, expected) {
        (ColumnValue::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (ColumnValue::Text(a), Value::Text(b)) => Some(a.cmp(b.as_str())),
        // a one-element list compares like its element
        (ColumnValue::List([only]), Value::Text(b)) => Some(only.as_str().cmp(b.as_str())),
        _ => None,
    }
}

fn contains(actual: ColumnValue<'_>, expected: &Value) -> bool {
    match (actual, expected) {
        (ColumnValue::List(items), Value::Text(b)) => items.iter().any(|item| item == b),
        (ColumnValue::Text(a), Value::Text(b)) => a == b,
        _ => false,
    }
}
