//! Diarist CLI binary.
//!
//! This binary provides command-line access to Diarist's functionality:
//! - Run a resumable batch with the local or Gemini generator
//! - Inspect progress and restore the backup snapshot
//! - Check the environment and the Gemini connection

use clap::Parser;
use diarist::{DiaristConfig, init_tracing};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use cli::{Cli, Commands, restore_backup, run_batch, run_check, run_ping, show_status};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    init_tracing(cli.verbose)?;

    let mut config = DiaristConfig::load_with(cli.config.as_deref())?;
    if let Ok(api_key) = std::env::var("GEMINI_API_KEY") {
        config = config.with_api_key(api_key);
    }

    match cli.command {
        Commands::Run(args) => run_batch(&args, config).await?,
        Commands::Status { paths, format } => show_status(&paths, format, config).await?,
        Commands::Restore { paths } => restore_backup(&paths, config).await?,
        Commands::Ping { model, message } => run_ping(model.as_deref(), &message, config).await?,
        Commands::Check { paths } => run_check(&paths, config).await?,
    }

    Ok(())
}
