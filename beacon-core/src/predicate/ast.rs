use std::fmt::{self, Display};

/// Columns of the variant table a predicate can constrain.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Column {
    ReferenceName,
    ReferenceBases,
    AlternateBases,
    Start,
    End,
}

impl Column {
    pub fn name(&self) -> &'static str {
        match self {
            Column::ReferenceName => "reference_name",
            Column::ReferenceBases => "reference_bases",
            Column::AlternateBases => "alternate_bases",
            Column::Start => "start",
            Column::End => "end",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Lt,
    Lte,
    Gt,
    Gte,
    /// The column holds a collection that contains the value.
    Contains,
}

impl CompareOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
            CompareOp::Contains => "CONTAINS",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{:?}", text),
            Value::Int(int) => write!(f, "{}", int),
        }
    }
}

/// `column op value`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constraint {
    pub column: Column,
    pub op: CompareOp,
    pub value: Value,
}

impl Constraint {
    pub fn new(column: Column, op: CompareOp, value: Value) -> Self {
        Constraint { column, op, value }
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column.name(), self.op.symbol(), self.value)
    }
}

/// A conjunction of constraints, kept in emission order.
///
/// An empty predicate selects every row.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Predicate {
    constraints: Vec<Constraint>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(&mut self, column: Column, op: CompareOp, value: Value) {
        self.constraints.push(Constraint::new(column, op, value));
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// True when some constraint touches `column`.
    pub fn constrains(&self, column: Column) -> bool {
        self.constraints.iter().any(|c| c.column == column)
    }
}

impl Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.constraints.is_empty() {
            return write!(f, "TRUE");
        }
        for (i, constraint) in self.constraints.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{}", constraint)?;
        }
        Ok(())
    }
}
