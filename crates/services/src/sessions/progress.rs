/// Aggregated view of session progress, useful for the popup header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    /// 1-based number of the question on screen.
    pub question_number: usize,
    pub total: usize,
    pub score: u32,
    pub is_last_question: bool,
    pub is_finished: bool,
}
