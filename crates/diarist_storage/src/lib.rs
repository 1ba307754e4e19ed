//! Persistence for the working table.
//!
//! [`CsvRowStore`] loads the table (resuming from the output artifact when it
//! exists) and checkpoints it with a temp-file-then-rename write, so a reader
//! never sees a torn file. [`BackupManager`] keeps a single snapshot taken
//! before a run mutates anything and can put it back over the output.

mod backup;
mod codec;
mod store;

pub use backup::BackupManager;
pub use codec::{decode_table, encode_table, read_table, write_table_atomic};
pub use store::{CsvRowStore, TableStore};
