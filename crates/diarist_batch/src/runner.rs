//! Sequential, paced, checkpointed processing of pending rows.

use crate::{RunOutcome, RunPhase, RunReport};
use diarist_core::{EMPTY_PROMPT_MARKER, WorkingTable, pending};
use diarist_error::{BatchError, BatchErrorKind, DiaristResult};
use diarist_interface::{DiaryGenerator, GenerationOutcome};
use diarist_rate_limit::Pacing;
use diarist_storage::{BackupManager, TableStore};
use std::sync::Mutex;
use tracing::{error, info, instrument, warn};

const PROMPT_PREVIEW_CHARS: usize = 50;
const RESULT_PREVIEW_CHARS: usize = 100;

/// Drives a generator over the pending rows of a table.
///
/// One row at a time, in table order: generate, store the text, checkpoint
/// every `checkpoint_interval` processed rows, then sleep for the pacing
/// delay. Rows with no prompt get the empty-prompt marker without a
/// generation call or a delay. A failed generation is stored like any other
/// result and does not stop the batch.
///
/// # Example
///
/// ```no_run
/// use diarist_batch::BatchRunner;
/// use diarist_core::TableSchema;
/// use diarist_models::LocalGenerator;
/// use diarist_rate_limit::Pacing;
/// use diarist_storage::{BackupManager, CsvRowStore};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let schema = TableSchema::default();
/// let runner = BatchRunner::new(
///     LocalGenerator::new(&schema, None),
///     CsvRowStore::new("prompts.csv", "results.csv", schema.clone()),
///     BackupManager::new("backup.csv", "results.csv", schema.clone()),
///     Pacing::unthrottled(10)?,
/// );
/// let report = runner.run().await?;
/// println!("{} rows processed", report.processed());
/// # Ok(())
/// # }
/// ```
pub struct BatchRunner<G, S> {
    generator: G,
    store: S,
    backup: BackupManager,
    pacing: Pacing,
    phase: Mutex<RunPhase>,
}

impl<G, S> BatchRunner<G, S>
where
    G: DiaryGenerator,
    S: TableStore,
{
    /// Create a runner.
    pub fn new(generator: G, store: S, backup: BackupManager, pacing: Pacing) -> Self {
        Self {
            generator,
            store,
            backup,
            pacing,
            phase: Mutex::new(RunPhase::Idle),
        }
    }

    /// The generator rows are sent to.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// The store the table is loaded from and checkpointed to.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Pacing and checkpoint cadence.
    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    /// Phase the latest run reached, `Idle` before the first run.
    pub fn phase(&self) -> RunPhase {
        *self.phase.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn enter(&self, next: RunPhase) {
        self.phase
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .advance(next);
    }

    /// Process every pending row.
    ///
    /// # Errors
    ///
    /// Load and snapshot failures are returned as-is, with the output left
    /// untouched. Failures after this run's snapshot (persistence,
    /// bookkeeping) trigger a restore of that snapshot, then the original
    /// error is returned; a failed restore is logged, not returned.
    #[instrument(
        skip(self),
        fields(
            provider = self.generator.provider_name(),
            model = self.generator.model_name(),
            checkpoint_interval = *self.pacing.checkpoint_interval(),
        )
    )]
    pub async fn run(&self) -> DiaristResult<RunReport> {
        *self.phase.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = RunPhase::Idle;
        self.enter(RunPhase::Loading);
        let mut table = self.store.load().await?;

        self.enter(RunPhase::Resolving);
        let work = pending(&table);
        let mut report = RunReport::new(table.len(), work.len());

        info!(
            total = table.len(),
            done = table.completed_count(),
            pending = work.len(),
            "Resolved pending rows"
        );

        if work.is_empty() {
            self.enter(RunPhase::Done);
            info!("All rows already have results, nothing to do");
            report.finish(RunOutcome::NothingToDo);
            return Ok(report);
        }

        self.enter(RunPhase::BackingUp);
        if let Err(e) = self.backup.snapshot(&table).await {
            // The output is untouched; an older snapshot must not replace it
            error!(error = %e, "Snapshot failed, nothing was processed");
            return Err(e);
        }

        match self.process(&mut table, &work, &mut report).await {
            Ok(()) => {
                self.enter(RunPhase::Done);
                report.finish(RunOutcome::Completed);
                info!(
                    processed = *report.processed(),
                    failed = *report.failed(),
                    checkpoints = *report.checkpoints(),
                    "Batch complete"
                );
                Ok(report)
            }
            Err(e) => {
                self.enter(RunPhase::Aborting);
                error!(
                    error = %e,
                    processed = *report.processed(),
                    "Batch aborted, restoring backup"
                );

                self.enter(RunPhase::Restoring);
                match self.backup.restore().await {
                    Ok(restored) => info!(rows = restored.len(), "Output restored from backup"),
                    Err(restore_err) => error!(error = %restore_err, "Restore from backup failed"),
                }
                Err(e)
            }
        }
    }

    async fn process(
        &self,
        table: &mut WorkingTable,
        work: &[usize],
        report: &mut RunReport,
    ) -> DiaristResult<()> {
        self.enter(RunPhase::Processing);
        for (position, &id) in work.iter().enumerate() {
            let (prompt, context) = {
                let item = table
                    .get(id)
                    .ok_or_else(|| BatchError::new(BatchErrorKind::UnknownRow(id)))?;
                (item.prompt().clone(), item.context().clone())
            };

            let (text, failed, called) = match prompt.as_deref() {
                None => {
                    warn!(row = id + 1, "Row has no prompt");
                    (EMPTY_PROMPT_MARKER.to_string(), true, false)
                }
                Some(prompt) => match self.generator.generate(prompt, &context).await {
                    GenerationOutcome::Generated(text) => (text, false, true),
                    GenerationOutcome::Failed(text) => (text, true, true),
                },
            };

            info!(
                row = id + 1,
                progress = %format!("{}/{}", position + 1, work.len()),
                prompt = %preview(prompt.as_deref().unwrap_or_default(), PROMPT_PREVIEW_CHARS),
                result = %preview(&text, RESULT_PREVIEW_CHARS),
                failed,
                "Processed row"
            );

            table.set_result(id, text)?;
            report.record(failed);

            if self.pacing.is_checkpoint(*report.processed()) {
                self.store.save(table).await?;
                report.record_checkpoint();
                info!(
                    processed = *report.processed(),
                    done = table.completed_count(),
                    "Checkpoint saved"
                );
            }

            if called {
                self.pacing.pause().await;
            }
        }

        self.enter(RunPhase::Flushing);
        self.store.save(table).await?;
        info!(rows = table.len(), "Final save complete");
        Ok(())
    }
}

/// First `max_chars` characters of `text`, with `...` when cut.
fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
