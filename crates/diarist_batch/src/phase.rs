//! Run state machine.

use serde::{Deserialize, Serialize};

/// Where a batch run is.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum RunPhase {
    /// No run started yet
    #[default]
    Idle,
    /// Reading the table from the row store
    Loading,
    /// Computing the pending rows
    Resolving,
    /// Writing the pre-run snapshot
    BackingUp,
    /// Generating pending rows
    Processing,
    /// Final save
    Flushing,
    /// Finished successfully
    Done,
    /// A fatal error escaped processing
    Aborting,
    /// Putting the snapshot back over the output
    Restoring,
}

impl RunPhase {
    /// Whether the runner may move from `self` to `next`.
    pub fn can_advance_to(self, next: RunPhase) -> bool {
        use RunPhase::*;
        matches!(
            (self, next),
            (Idle, Loading)
                | (Loading, Resolving)
                | (Resolving, BackingUp)
                | (Resolving, Done)
                | (BackingUp, Processing)
                | (Processing, Flushing)
                | (Flushing, Done)
                | (Processing | Flushing, Aborting)
                | (Aborting, Restoring)
        )
    }

    /// Move to `next`, logging the transition.
    pub(crate) fn advance(&mut self, next: RunPhase) {
        debug_assert!(
            self.can_advance_to(next),
            "invalid run transition {} -> {}",
            self,
            next
        );
        tracing::debug!(from = %self, to = %next, "Run phase transition");
        *self = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_is_valid() {
        let mut phase = RunPhase::default();
        for next in [
            RunPhase::Loading,
            RunPhase::Resolving,
            RunPhase::BackingUp,
            RunPhase::Processing,
            RunPhase::Flushing,
            RunPhase::Done,
        ] {
            phase.advance(next);
        }
        assert_eq!(phase, RunPhase::Done);
    }

    #[test]
    fn abort_only_after_mutation_starts() {
        assert!(!RunPhase::Loading.can_advance_to(RunPhase::Aborting));
        assert!(!RunPhase::Resolving.can_advance_to(RunPhase::Aborting));
        assert!(!RunPhase::BackingUp.can_advance_to(RunPhase::Aborting));
        assert!(RunPhase::Processing.can_advance_to(RunPhase::Aborting));
        assert!(!RunPhase::Done.can_advance_to(RunPhase::Restoring));
    }

    #[test]
    fn display_is_snake_case() {
        assert_eq!(RunPhase::BackingUp.to_string(), "backing_up");
    }
}
