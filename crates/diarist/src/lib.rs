//! Diarist - resumable batch diary generation
//!
//! Diarist turns a CSV table of prompts into a table of diary entries, one
//! row at a time, either from local templates or through the Google Gemini
//! API. Runs are checkpointed and resumable: rows that already have a result
//! are never sent again, and a fatal error puts the pre-run snapshot back.
//!
//! # Quick Start
//!
//! ```no_run
//! use diarist::{DiaristConfig, GeneratorKind, build_runner};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DiaristConfig::load()?;
//! let runner = build_runner(GeneratorKind::Local, &config)?;
//! let report = runner.run().await?;
//! println!("{} processed, {} failed", report.processed(), report.failed());
//! # Ok(())
//! # }
//! ```
//!
//! # Cargo Features
//!
//! - `gemini` - Google Gemini backend (default)
//!
//! # Architecture
//!
//! - `diarist_error` - Error types
//! - `diarist_core` - Working table, schema, markers and date line
//! - `diarist_interface` - `DiaryGenerator` trait
//! - `diarist_rate_limit` - Configuration, pacing and retry
//! - `diarist_storage` - CSV row store and backups
//! - `diarist_models` - Local and Gemini generators
//! - `diarist_batch` - Batch runner
//!
//! This crate re-exports everything for convenience.

mod assemble;
mod status;

pub use assemble::{DynRunner, backup_manager, build_runner, row_store};
pub use status::{ArtifactSource, TableStatus};

// Error types
pub use diarist_error::{
    BatchError, BatchErrorKind, BuilderError, BuilderErrorKind, ConfigError, DiaristError,
    DiaristErrorKind, DiaristResult, GeminiError, GeminiErrorKind, GenerationError,
    RetryableError, StorageError, StorageErrorKind,
};

// Core types
pub use diarist_core::{
    DATE_LINE_FORMAT, EMPTY_PROMPT_MARKER, ItemContext, LOCAL_ERROR_PREFIX, REMOTE_ERROR_PREFIX,
    TableSchema, WorkItem, WorkingTable, date_line, init_tracing, is_error_marked, pending,
    prepend_date_line, today_line,
};

// Generator trait
pub use diarist_interface::{DiaryGenerator, GenerationOutcome};

// Configuration, pacing, retry
pub use diarist_rate_limit::{
    DiaristConfig, GeminiConfig, GeneratorKind, LocalConfig, Pacing, PacingBuilder, PathsConfig,
    execute_with_retry,
};

// Storage
pub use diarist_storage::{BackupManager, CsvRowStore, TableStore, read_table};

// Generators
pub use diarist_models::{LocalGenerator, build_generator};
#[cfg(feature = "gemini")]
pub use diarist_models::{GeminiGenerator, build_instruction};

// Batch runner
pub use diarist_batch::{BatchRunner, RunOutcome, RunPhase, RunReport};
