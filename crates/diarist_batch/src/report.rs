//! Run summary.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// How a run ended.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RunOutcome {
    /// Every row already had a result; nothing was written
    #[default]
    NothingToDo,
    /// Every pending row was processed and the table flushed
    Completed,
}

/// Counters for one run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct RunReport {
    /// Rows in the table
    total: usize,
    /// Rows without a result when the run started
    pending_at_start: usize,
    /// Rows given a result this run
    processed: usize,
    /// Processed rows whose result is an error marker
    failed: usize,
    /// Interval saves written (the final flush is not counted)
    checkpoints: usize,
    /// How the run ended
    outcome: RunOutcome,
}

impl RunReport {
    pub(crate) fn new(total: usize, pending_at_start: usize) -> Self {
        Self {
            total,
            pending_at_start,
            ..Self::default()
        }
    }

    pub(crate) fn record(&mut self, failed: bool) {
        self.processed += 1;
        if failed {
            self.failed += 1;
        }
    }

    pub(crate) fn record_checkpoint(&mut self) {
        self.checkpoints += 1;
    }

    pub(crate) fn finish(&mut self, outcome: RunOutcome) {
        self.outcome = outcome;
    }

    /// Rows that received a diary this run.
    pub fn succeeded(&self) -> usize {
        self.processed - self.failed
    }
}
