//! Environment check.

use super::commands::PathArgs;
use diarist::{DiaristConfig, DiaristResult, backup_manager};
use std::path::Path;

/// Execute `diarist check`.
///
/// Reports every problem instead of stopping at the first one, and fails
/// only when the configuration itself is invalid.
pub async fn run_check(paths: &PathArgs, config: DiaristConfig) -> DiaristResult<()> {
    let config = paths.apply(config);

    println!("Configuration:");
    match config.validate() {
        Ok(()) => println!("  [ok] settings valid"),
        Err(e) => {
            println!("  [error] {}", e);
            return Err(e);
        }
    }
    println!("  model {} at {} rpm", config.gemini.model, config.gemini.requests_per_minute);
    println!(
        "  prompt column '{}', result column '{}'",
        config.table.prompt_column(),
        config.table.result_column()
    );

    println!("Credential:");
    if config.api_key().is_some() {
        println!("  [ok] GEMINI_API_KEY set");
    } else {
        println!("  [warn] GEMINI_API_KEY not set; only the local generator is available");
    }

    println!("Artifacts:");
    for (label, path) in [("input", &config.paths.input), ("output", &config.paths.output)] {
        let present = tokio::fs::try_exists(path).await.unwrap_or(false);
        report_artifact(label, path, present);
    }
    let has_backup = backup_manager(&config).has_backup().await;
    report_artifact("backup", &config.paths.backup, has_backup);

    Ok(())
}

fn report_artifact(label: &str, path: &Path, present: bool) {
    if present {
        println!("  [ok] {} {}", label, path.display());
    } else {
        println!("  [--] {} {} (not present)", label, path.display());
    }
}
