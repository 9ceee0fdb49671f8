use serde::Serialize;

/// Totals shown in the completion dialog.
///
/// Presentation-agnostic: the UI renders `total_correct/total_possible` and
/// `perfect/region_count` however it likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizSummary {
    pub total_correct: u32,
    pub total_possible: u32,
    pub perfect: usize,
    pub region_count: usize,
}

/// Counters for the always-visible header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderStats {
    pub completed: usize,
    pub region_count: usize,
    pub perfect: usize,
}

impl HeaderStats {
    /// The perfect-count badge is hidden until the first perfect region.
    #[must_use]
    pub fn show_perfect_badge(&self) -> bool {
        self.perfect > 0
    }
}
