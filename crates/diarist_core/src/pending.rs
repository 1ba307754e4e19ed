//! Pending-set resolution.

use crate::WorkingTable;

/// Ids of rows that still need generation, in table order.
///
/// A row is pending iff its result is absent. The order is the original
/// insertion order, so a rerun after a partial failure resumes in the same
/// sequence.
///
/// # Examples
///
/// ```
/// use diarist_core::{pending, TableSchema, WorkingTable};
///
/// let header = vec!["生成プロンプト".to_string(), "生成結果".to_string()];
/// let records = vec![
///     vec!["P1".to_string(), "done".to_string()],
///     vec!["P2".to_string(), String::new()],
///     vec!["P3".to_string(), String::new()],
/// ];
/// let table = WorkingTable::from_records(TableSchema::default(), header, records, "results.csv")?;
///
/// assert_eq!(pending(&table), vec![1, 2]);
/// # Ok::<(), diarist_error::DiaristError>(())
/// ```
pub fn pending(table: &WorkingTable) -> Vec<usize> {
    table
        .items()
        .iter()
        .filter(|item| item.is_pending())
        .map(|item| *item.id())
        .collect()
}
