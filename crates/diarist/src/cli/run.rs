//! Batch run command handler.

use super::commands::RunArgs;
use diarist::{DiaristConfig, DiaristResult, RunOutcome, build_runner};

/// Execute `diarist run`.
#[tracing::instrument(skip_all, fields(generator = %args.generator))]
pub async fn run_batch(args: &RunArgs, config: DiaristConfig) -> DiaristResult<()> {
    let config = args.apply(config);
    let runner = build_runner(args.generator, &config)?;

    tracing::info!(
        generator = %args.generator,
        model = runner.generator().model_name(),
        requests_per_minute = config.gemini.requests_per_minute,
        "Starting batch"
    );

    let report = runner.run().await?;

    match report.outcome() {
        RunOutcome::NothingToDo => {
            println!(
                "All {} rows already have results. Nothing to do.",
                report.total()
            );
        }
        RunOutcome::Completed => {
            println!("Batch complete: {}", config.paths.output.display());
            println!("  Rows:        {}", report.total());
            println!("  Processed:   {}", report.processed());
            println!("  Succeeded:   {}", report.succeeded());
            println!("  Failed:      {}", report.failed());
            println!("  Checkpoints: {}", report.checkpoints());
            if *report.failed() > 0 {
                println!("Blank the failed result cells and run again to retry them.");
            }
        }
    }

    Ok(())
}
