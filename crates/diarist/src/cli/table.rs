//! Status and restore command handlers.

use super::commands::{OutputFormat, PathArgs};
use diarist::{DiaristConfig, DiaristResult, TableStatus, backup_manager};

/// Execute `diarist status`.
pub async fn show_status(
    paths: &PathArgs,
    format: OutputFormat,
    config: DiaristConfig,
) -> DiaristResult<()> {
    let config = paths.apply(config);
    let status = TableStatus::collect(&config).await?;

    match format {
        OutputFormat::Human => println!("{}", status),
        OutputFormat::Json => println!("{}", status.to_json()?),
    }

    Ok(())
}

/// Execute `diarist restore`.
pub async fn restore_backup(paths: &PathArgs, config: DiaristConfig) -> DiaristResult<()> {
    let config = paths.apply(config);
    let table = backup_manager(&config).restore().await?;

    println!(
        "Restored {} rows from {} to {}",
        table.len(),
        config.paths.backup.display(),
        config.paths.output.display()
    );
    Ok(())
}
