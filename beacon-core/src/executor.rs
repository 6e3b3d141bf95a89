use crate::predicate::Predicate;
use crate::sql::TableId;

/// Runs predicates against a variant store.
///
/// Implementations return how many rows matched. They may stop counting after the
/// first match.
pub trait QueryExecutor {
    type Error: std::error::Error + Send + Sync + 'static;

    fn execute(
        &self,
        predicate: &Predicate,
        table: &TableId,
        project_id: &str,
    ) -> Result<u64, Self::Error>;
}

/// Whether at least one row satisfies `predicate`.
pub fn exists<E: QueryExecutor + ?Sized>(
    executor: &E,
    predicate: &Predicate,
    table: &TableId,
    project_id: &str,
) -> Result<bool, E::Error> {
    let row_count = executor.execute(predicate, table, project_id)?;
    log::debug!("{} matching row(s) in {}", row_count, table);
    Ok(row_count > 0)
}
