//! Wiring configuration into a runnable batch.

use diarist_batch::BatchRunner;
use diarist_error::DiaristResult;
use diarist_interface::DiaryGenerator;
use diarist_models::build_generator;
use diarist_rate_limit::{DiaristConfig, GeneratorKind};
use diarist_storage::{BackupManager, CsvRowStore};

/// Batch runner over a generator chosen at runtime.
pub type DynRunner = BatchRunner<Box<dyn DiaryGenerator>, CsvRowStore>;

/// Row store over the configured input and output artifacts.
pub fn row_store(config: &DiaristConfig) -> CsvRowStore {
    CsvRowStore::new(
        &config.paths.input,
        &config.paths.output,
        config.table.clone(),
    )
}

/// Backup manager over the configured backup and output artifacts.
pub fn backup_manager(config: &DiaristConfig) -> BackupManager {
    BackupManager::new(
        &config.paths.backup,
        &config.paths.output,
        config.table.clone(),
    )
}

/// Build a runner for `kind` from `config`.
///
/// # Errors
///
/// Fails if the configuration is invalid or the generator cannot be built
/// (for example, a missing API key for the remote backend). Nothing on disk
/// is touched.
#[tracing::instrument(skip(config))]
pub fn build_runner(kind: GeneratorKind, config: &DiaristConfig) -> DiaristResult<DynRunner> {
    config.validate()?;
    let pacing = config.pacing(kind)?;
    let generator = build_generator(kind, config)?;

    tracing::info!(
        generator = %kind,
        model = generator.model_name(),
        delay_ms = pacing.delay().as_millis() as u64,
        checkpoint_interval = *pacing.checkpoint_interval(),
        input = %config.paths.input.display(),
        output = %config.paths.output.display(),
        "Batch configured"
    );

    Ok(BatchRunner::new(
        generator,
        row_store(config),
        backup_manager(config),
        pacing,
    ))
}
