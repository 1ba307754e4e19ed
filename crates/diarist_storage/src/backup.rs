//! Single-generation snapshot of the working table.

use crate::{read_table, write_table_atomic};
use diarist_core::{TableSchema, WorkingTable};
use diarist_error::{DiaristResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// Writes the pre-run snapshot and restores it over the output artifact.
///
/// Only one snapshot is kept; each run overwrites the previous one.
#[derive(Debug, Clone)]
pub struct BackupManager {
    backup: PathBuf,
    output: PathBuf,
    schema: TableSchema,
}

impl BackupManager {
    /// Create a manager writing snapshots to `backup` and restoring to `output`.
    pub fn new(backup: impl Into<PathBuf>, output: impl Into<PathBuf>, schema: TableSchema) -> Self {
        Self {
            backup: backup.into(),
            output: output.into(),
            schema,
        }
    }

    /// Backup artifact path.
    pub fn backup_path(&self) -> &Path {
        &self.backup
    }

    /// Whether a snapshot exists on disk.
    pub async fn has_backup(&self) -> bool {
        tokio::fs::try_exists(&self.backup).await.unwrap_or(false)
    }

    /// Write a full copy of `table` to the backup path.
    #[tracing::instrument(skip(self, table), fields(backup = %self.backup.display(), rows = table.len()))]
    pub async fn snapshot(&self, table: &WorkingTable) -> DiaristResult<()> {
        write_table_atomic(&self.backup, table).await?;
        tracing::info!("Backup written");
        Ok(())
    }

    /// Copy the snapshot over the output artifact and return it.
    ///
    /// # Errors
    ///
    /// Returns [`StorageErrorKind::NoBackup`] if no snapshot has been written.
    #[tracing::instrument(skip(self), fields(backup = %self.backup.display(), output = %self.output.display()))]
    pub async fn restore(&self) -> DiaristResult<WorkingTable> {
        let table = read_table(&self.backup, &self.schema).await?.ok_or_else(|| {
            StorageError::new(StorageErrorKind::NoBackup(self.backup.display().to_string()))
        })?;

        write_table_atomic(&self.output, &table).await?;
        tracing::info!(rows = table.len(), "Restored output from backup");
        Ok(table)
    }
}
