//! Row store trait and CSV implementation.

use crate::{read_table, write_table_atomic};
use diarist_core::{TableSchema, WorkingTable};
use diarist_error::{DiaristResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// Loads and persists the working table.
///
/// Implementations must make `save` all-or-nothing: after it returns, a
/// subsequent `load` sees either the previous table or the new one, never a
/// mixture.
#[async_trait::async_trait]
pub trait TableStore: Send + Sync {
    /// Load the table to process.
    async fn load(&self) -> DiaristResult<WorkingTable>;

    /// Persist the whole table.
    async fn save(&self, table: &WorkingTable) -> DiaristResult<()>;
}

/// CSV-backed row store.
///
/// `load` resumes from the output artifact when it exists and otherwise
/// starts from the input artifact with every row pending. `save` always
/// targets the output artifact; the input is never written.
#[derive(Debug, Clone)]
pub struct CsvRowStore {
    input: PathBuf,
    output: PathBuf,
    schema: TableSchema,
}

impl CsvRowStore {
    /// Create a store over the given artifacts.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, schema: TableSchema) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            schema,
        }
    }

    /// Input artifact path.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Output artifact path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Column layout used to interpret both artifacts.
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }
}

#[async_trait::async_trait]
impl TableStore for CsvRowStore {
    #[tracing::instrument(skip(self), fields(input = %self.input.display(), output = %self.output.display()))]
    async fn load(&self) -> DiaristResult<WorkingTable> {
        if let Some(table) = read_table(&self.output, &self.schema).await? {
            tracing::info!(
                rows = table.len(),
                done = table.completed_count(),
                "Resuming from existing output"
            );
            return Ok(table);
        }

        match read_table(&self.input, &self.schema).await? {
            Some(table) => {
                tracing::info!(rows = table.len(), "Starting from input");
                Ok(table)
            }
            None => Err(StorageError::new(StorageErrorKind::NotFound(
                self.input.display().to_string(),
            ))
            .into()),
        }
    }

    #[tracing::instrument(skip(self, table), fields(output = %self.output.display(), rows = table.len()))]
    async fn save(&self, table: &WorkingTable) -> DiaristResult<()> {
        write_table_atomic(&self.output, table).await
    }
}
