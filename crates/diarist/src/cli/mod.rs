//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the diarist binary.

mod check;
mod commands;
mod ping;
mod run;
mod table;

pub use check::run_check;
pub use commands::{Cli, Commands};
pub use ping::run_ping;
pub use run::run_batch;
pub use table::{restore_backup, show_status};
