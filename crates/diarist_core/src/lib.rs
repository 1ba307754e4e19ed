//! Core data types for the Diarist batch diary generator.
//!
//! This crate provides the working table model shared by every other crate:
//! rows ([`WorkItem`]), the ordered table ([`WorkingTable`]), the column
//! layout ([`TableSchema`]), the fixed result markers, and the pending-set
//! resolver that decides which rows still need generation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod date;
mod item;
mod markers;
mod pending;
mod schema;
mod table;
mod telemetry;

pub use date::{DATE_LINE_FORMAT, date_line, prepend_date_line, today_line};
pub use item::{ItemContext, WorkItem};
pub use markers::{EMPTY_PROMPT_MARKER, LOCAL_ERROR_PREFIX, REMOTE_ERROR_PREFIX, is_error_marked};
pub use pending::pending;
pub use schema::TableSchema;
pub use table::WorkingTable;
pub use telemetry::init_tracing;
