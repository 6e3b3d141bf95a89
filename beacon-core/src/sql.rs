//! Parameterized SQL for warehouse-backed executors.
//!
//! User supplied values never appear in the query text. Each constraint value becomes a
//! named parameter (`@p0`, `@p1`, ...) that the warehouse client binds separately. The
//! table identifier is the only interpolated piece and is restricted to
//! `[A-Za-z0-9_-]` segments.
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::SqlError;
use crate::predicate::{Column, CompareOp, Predicate, Value};

/// Alias of the table inside the rendered query.
pub const TABLE_ALIAS: &str = "v";

/// A `project.dataset.table` identifier (one to three segments).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableId(String);

impl TableId {
    pub fn parse(id: &str) -> Result<Self, SqlError> {
        let segments: Vec<&str> = id.split('.').collect();
        let valid = segments.len() <= 3
            && segments.iter().all(|segment| {
                !segment.is_empty()
                    && segment
                        .bytes()
                        .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
            });
        if valid {
            Ok(TableId(id.to_string()))
        } else {
            Err(SqlError::InvalidTableId(id.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TableId {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableId::parse(s)
    }
}

impl Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameter {
    pub name: String,
    pub value: Value,
}

/// Query text plus the values to bind to its named parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlQuery {
    pub text: String,
    pub params: Vec<QueryParameter>,
}

///
/// Render an existence query for `predicate` against `table`.
///
/// The query counts at most one matching row; the caller maps `count > 0` to existence.
///
pub fn render(predicate: &Predicate, table: &TableId) -> SqlQuery {
    let mut clauses = Vec::with_capacity(predicate.len());
    let mut params = Vec::with_capacity(predicate.len());

    for (i, constraint) in predicate.constraints().iter().enumerate() {
        let name = format!("p{}", i);
        let column = qualified(constraint.column);
        let clause = match constraint.op {
            CompareOp::Contains => format!("@{} IN UNNEST({})", name, column),
            op => format!("{} {} @{}", column, op.symbol(), name),
        };
        clauses.push(clause);
        params.push(QueryParameter {
            name,
            value: constraint.value.clone(),
        });
    }

    let where_clause = if clauses.is_empty() {
        "TRUE".to_string()
    } else {
        clauses.join(" AND ")
    };

    let text = format!(
        "SELECT count({alias}.reference_name) AS count\nFROM `{table}` AS {alias}\nWHERE {where_clause}\nLIMIT 1",
        alias = TABLE_ALIAS,
        table = table,
        where_clause = where_clause,
    );

    SqlQuery { text, params }
}

fn qualified(column: Column) -> String {
    format!("{}.{}", TABLE_ALIAS, column.name())
}
