use std::io::BufRead;
use std::path::Path;

use fxhash::FxHashMap as HashMap;

use beacon_core::executor::QueryExecutor;
use beacon_core::predicate::{Column, ColumnValue, CompareOp, Predicate, Row, Value};
use beacon_core::sql::TableId;

use crate::error::{Result, TableError};
use crate::reader::get_dynamic_reader;

/// Marks a missing alternate allele in the `alternate_bases` column.
pub const NO_ALTERNATE: &str = ".";

///
/// One row of a variant table.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct VariantRecord {
    pub reference_name: String,
    pub start: i64,
    pub end: i64,
    pub reference_bases: String,
    pub alternate_bases: Vec<String>,
}

impl VariantRecord {
    ///
    /// Parse one tab separated line:
    /// `reference_name  start  end  reference_bases  alternate_bases`
    ///
    /// Alternate bases are comma separated; `.` or an empty column means none.
    ///
    pub fn parse_line(line: &str) -> std::result::Result<Self, String> {
        let mut fields = line.split('\t');

        let reference_name = fields.next().ok_or("Missing reference_name field")?;
        let start = fields.next().ok_or("Missing start field")?;
        let end = fields.next().ok_or("Missing end field")?;
        let reference_bases = fields.next().ok_or("Missing reference_bases field")?;
        let alternate_bases = fields.next().unwrap_or("");

        let start = start
            .parse::<i64>()
            .map_err(|e| format!("Invalid start {:?}: {}", start, e))?;
        let end = end
            .parse::<i64>()
            .map_err(|e| format!("Invalid end {:?}: {}", end, e))?;

        let alternate_bases = alternate_bases
            .split(',')
            .filter(|alt| !alt.is_empty() && *alt != NO_ALTERNATE)
            .map(str::to_string)
            .collect();

        Ok(VariantRecord {
            reference_name: reference_name.to_string(),
            start,
            end,
            reference_bases: reference_bases.to_string(),
            alternate_bases,
        })
    }
}

impl Row for VariantRecord {
    fn column(&self, column: Column) -> ColumnValue<'_> {
        match column {
            Column::ReferenceName => ColumnValue::Text(&self.reference_name),
            Column::ReferenceBases => ColumnValue::Text(&self.reference_bases),
            Column::AlternateBases => ColumnValue::List(&self.alternate_bases),
            Column::Start => ColumnValue::Int(self.start),
            Column::End => ColumnValue::Int(self.end),
        }
    }
}

///
/// An in-memory variant table, rows grouped by reference name.
///
#[derive(Debug, Clone)]
pub struct VariantTable {
    id: TableId,
    rows: HashMap<String, Vec<VariantRecord>>,
}

impl VariantTable {
    pub fn new(id: TableId) -> Self {
        VariantTable {
            id,
            rows: HashMap::default(),
        }
    }

    ///
    /// Load a table from a tab separated file, gzipped when it ends in `.gz`.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    pub fn from_path(path: &Path, id: TableId) -> Result<Self> {
        let reader = get_dynamic_reader(path)?;
        let table = Self::from_reader(reader, id)?;
        log::info!(
            "loaded {} variants from {} as table {}",
            table.len(),
            path.display(),
            table.id
        );
        Ok(table)
    }

    pub fn from_reader<R: BufRead>(reader: R, id: TableId) -> Result<Self> {
        let mut table = VariantTable::new(id);
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim_end();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let record = VariantRecord::parse_line(trimmed)
                .map_err(|message| TableError::Parse { line: i + 1, message })?;
            table.insert(record);
        }
        Ok(table)
    }

    pub fn insert(&mut self, record: VariantRecord) {
        self.rows
            .entry(record.reference_name.clone())
            .or_default()
            .push(record);
    }

    pub fn id(&self) -> &TableId {
        &self.id
    }

    pub fn len(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.values().all(Vec::is_empty)
    }

    /// Rows worth testing: one contig when the predicate pins the reference name.
    fn candidates<'a>(
        &'a self,
        predicate: &Predicate,
    ) -> Box<dyn Iterator<Item = &'a VariantRecord> + 'a> {
        let pinned = predicate
            .constraints()
            .iter()
            .find_map(|c| match (&c.column, &c.op, &c.value) {
                (Column::ReferenceName, CompareOp::Eq, Value::Text(name)) => Some(name),
                _ => None,
            });

        match pinned {
            Some(name) => match self.rows.get(name) {
                Some(rows) => Box::new(rows.iter()),
                None => Box::new(std::iter::empty()),
            },
            None => Box::new(self.rows.values().flatten()),
        }
    }
}

impl QueryExecutor for VariantTable {
    type Error = TableError;

    /// Counts at most one matching row, like `LIMIT 1`.
    fn execute(&self, predicate: &Predicate, table: &TableId, _project_id: &str) -> Result<u64> {
        if table != &self.id {
            return Err(TableError::UnknownTable(table.to_string()));
        }
        let hit = self.candidates(predicate).any(|row| predicate.matches(row));
        Ok(u64::from(hit))
    }
}
