use tracing::info;

use super::store::ResultsStore;
use super::summary::QuizSummary;

/// Signals the moment every catalog region first has a result.
///
/// Call [`observe`](Self::observe) after each store mutation. It returns a
/// summary only on the mutation that flips the store from incomplete to
/// complete; overwrites of already-completed regions stay silent until the
/// store is cleared.
#[derive(Debug, Default)]
pub struct CompletionMonitor {
    was_complete: bool,
}

impl CompletionMonitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, store: &ResultsStore) -> Option<QuizSummary> {
        let complete = store.is_complete();
        let newly_complete = complete && !self.was_complete;
        self.was_complete = complete;

        if !newly_complete {
            return None;
        }
        let summary = store.summary();
        info!(
            regions = summary.region_count,
            correct = summary.total_correct,
            possible = summary.total_possible,
            perfect = summary.perfect,
            "all regions completed"
        );
        Some(summary)
    }

    /// Forget the previous boundary state (explicit restart).
    pub fn reset(&mut self) {
        self.was_complete = false;
    }

    #[must_use]
    pub fn was_complete(&self) -> bool {
        self.was_complete
    }
}
