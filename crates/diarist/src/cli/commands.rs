//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use diarist::{DiaristConfig, GeneratorKind};
use std::path::PathBuf;

/// Diarist - resumable batch diary generation from CSV prompts
#[derive(Parser, Debug)]
#[command(name = "diarist")]
#[command(about = "Resumable, checkpointed batch diary generation from CSV prompts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Extra configuration file, applied over the standard layers
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate results for every pending row
    Run(RunArgs),

    /// Show progress of the working table
    Status {
        #[command(flatten)]
        paths: PathArgs,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Copy the backup snapshot over the output artifact
    Restore {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Send one greeting to the Gemini API and print the reply
    Ping {
        /// Model to call instead of the configured one
        #[arg(long)]
        model: Option<String>,

        /// Text to send
        #[arg(long, default_value = "こんにちは")]
        message: String,
    },

    /// Check configuration, credential and artifacts
    Check {
        #[command(flatten)]
        paths: PathArgs,
    },
}

/// Artifact path overrides shared by every table command.
#[derive(Args, Debug, Clone, Default)]
pub struct PathArgs {
    /// Input CSV with the prompt column
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output CSV, written on every checkpoint and resumed from
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Backup snapshot CSV
    #[arg(long)]
    pub backup: Option<PathBuf>,
}

impl PathArgs {
    /// Replace configured paths with any given on the command line.
    pub fn apply(&self, mut config: DiaristConfig) -> DiaristConfig {
        if let Some(input) = &self.input {
            config.paths.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.paths.output = output.clone();
        }
        if let Some(backup) = &self.backup {
            config.paths.backup = backup.clone();
        }
        config
    }
}

/// Arguments of `diarist run`.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Generator backend (local, gemini)
    #[arg(short, long, default_value = "local")]
    pub generator: GeneratorKind,

    #[command(flatten)]
    pub paths: PathArgs,

    /// Rows processed between checkpoints
    #[arg(long)]
    pub checkpoint_interval: Option<usize>,

    /// Gemini requests per minute; sets the pause between calls
    #[arg(long)]
    pub rpm: Option<u32>,

    /// Gemini model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// Retries on transient Gemini errors (0 disables)
    #[arg(long)]
    pub max_retries: Option<usize>,

    /// Pause between local rows, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for reproducible local output
    #[arg(long)]
    pub seed: Option<u64>,
}

impl RunArgs {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: DiaristConfig) -> DiaristConfig {
        let mut config = self.paths.apply(config);

        if let Some(interval) = self.checkpoint_interval {
            match self.generator {
                GeneratorKind::Local => config.local.checkpoint_interval = interval,
                GeneratorKind::Gemini => config.gemini.checkpoint_interval = interval,
            }
        }
        if let Some(rpm) = self.rpm {
            config.gemini.requests_per_minute = rpm;
        }
        if let Some(model) = &self.model {
            config.gemini.model = model.clone();
        }
        if let Some(retries) = self.max_retries {
            config.gemini.max_retries = retries;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.local.delay_ms = delay_ms;
        }
        if self.seed.is_some() {
            config.local.seed = self.seed;
        }
        config
    }
}

/// Output format for status
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn run_overrides_target_selected_generator() {
        let cli = Cli::parse_from([
            "diarist",
            "run",
            "--generator",
            "gemini",
            "--checkpoint-interval",
            "3",
            "--rpm",
            "30",
            "--output",
            "out.csv",
        ]);
        let Commands::Run(args) = cli.command else {
            panic!("expected run command");
        };

        let config = args.apply(DiaristConfig::default());
        assert_eq!(config.gemini.checkpoint_interval, 3);
        assert_eq!(config.local.checkpoint_interval, 10);
        assert_eq!(config.gemini.requests_per_minute, 30);
        assert_eq!(config.paths.output, PathBuf::from("out.csv"));
        assert_eq!(config.paths.input, PathBuf::from("prompts.csv"));
    }
}
