//! Error types for the Diarist library.
//!
//! This crate provides the foundation error types used throughout the Diarist workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use diarist_error::{DiaristResult, StorageError, StorageErrorKind};
//!
//! fn load_rows() -> DiaristResult<Vec<String>> {
//!     Err(StorageError::new(StorageErrorKind::NotFound("prompts.csv".to_string())))?
//! }
//!
//! match load_rows() {
//!     Ok(rows) => println!("Got {} rows", rows.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod batch;
mod builder;
mod config;
mod error;
mod gemini;
mod generation;
mod storage;

pub use batch::{BatchError, BatchErrorKind};
pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{DiaristError, DiaristErrorKind, DiaristResult};
pub use gemini::{GeminiError, GeminiErrorKind, RetryableError, TRANSIENT_STATUS_CODES};
pub use generation::GenerationError;
pub use storage::{StorageError, StorageErrorKind};
