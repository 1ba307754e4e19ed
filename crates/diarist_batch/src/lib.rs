//! Resumable batch runner.
//!
//! [`BatchRunner`] walks the pending rows of a working table in order, asks a
//! [`DiaryGenerator`](diarist_interface::DiaryGenerator) for each one, and
//! writes the text back into the table. Progress is checkpointed every N rows
//! so an interrupted run resumes where it stopped. A fatal error after this
//! run's snapshot restores that snapshot before it is returned.
//!
//! ```text
//! Idle -> Loading -> Resolving -> BackingUp -> Processing -> Flushing -> Done
//!                        |                           |            |
//!                        |                           +------------+-> Aborting -> Restoring
//!                        +-> Done (nothing to do)
//! ```

mod phase;
mod report;
mod runner;

pub use phase::RunPhase;
pub use report::{RunOutcome, RunReport};
pub use runner::BatchRunner;
