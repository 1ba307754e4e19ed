//! Progress summary of the working table.

use diarist_error::{DiaristResult, StorageError, StorageErrorKind};
use diarist_rate_limit::DiaristConfig;
use crate::backup_manager;
use diarist_storage::read_table;
use serde::Serialize;
use std::path::PathBuf;

/// Which artifact a status was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ArtifactSource {
    /// Resumable output of an earlier run
    Output,
    /// Untouched input; no run has saved yet
    Input,
}

/// Row counts of the table the next run would load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableStatus {
    /// Artifact the counts come from
    pub source: ArtifactSource,
    /// Path of that artifact
    pub path: PathBuf,
    /// Rows in the table
    pub total: usize,
    /// Rows with a result, including error markers
    pub done: usize,
    /// Rows the next run would process
    pub pending: usize,
    /// Rows whose result is an error marker; blank them to retry
    pub error_marked: usize,
    /// Whether a backup snapshot exists
    pub backup_present: bool,
}

impl TableStatus {
    /// Read the table the next run would load and count its rows.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when neither artifact exists, or a parse error.
    #[tracing::instrument(skip(config))]
    pub async fn collect(config: &DiaristConfig) -> DiaristResult<Self> {
        let candidates = [
            (ArtifactSource::Output, &config.paths.output),
            (ArtifactSource::Input, &config.paths.input),
        ];

        for (source, path) in candidates {
            if let Some(table) = read_table(path, &config.table).await? {
                return Ok(Self {
                    source,
                    path: path.clone(),
                    total: table.len(),
                    done: table.completed_count(),
                    pending: table.pending_count(),
                    error_marked: table.error_marked_count(),
                    backup_present: backup_manager(config).has_backup().await,
                });
            }
        }

        Err(StorageError::new(StorageErrorKind::NotFound(
            config.paths.input.display().to_string(),
        ))
        .into())
    }

    /// Pretty-printed JSON for scripts.
    ///
    /// # Errors
    ///
    /// Returns a `Serialize` storage error if rendering fails.
    pub fn to_json(&self) -> DiaristResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            StorageError::new(StorageErrorKind::Serialize(format!("status: {}", e))).into()
        })
    }
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Source:       {} ({})", self.source, self.path.display())?;
        writeln!(f, "Rows:         {}", self.total)?;
        writeln!(f, "Done:         {}", self.done)?;
        writeln!(f, "Pending:      {}", self.pending)?;
        writeln!(f, "Error-marked: {}", self.error_marked)?;
        write!(
            f,
            "Backup:       {}",
            if self.backup_present { "present" } else { "none" }
        )
    }
}
