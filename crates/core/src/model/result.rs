use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Ratio at or above which a non-perfect result counts as `Good`.
pub const DEFAULT_GOOD_RATIO: f64 = 0.66;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegionResultError {
    #[error("result total must be > 0")]
    ZeroTotal,

    #[error("score ({score}) exceeds total ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },
}

//
// ─── RESULT ────────────────────────────────────────────────────────────────────
//

/// Finalized outcome of one quiz attempt on a region.
///
/// Invariant: `0 < total` and `score <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionResult {
    score: u32,
    total: u32,
}

impl RegionResult {
    /// # Errors
    ///
    /// Returns `RegionResultError` if `total` is zero or `score > total`.
    pub fn new(score: u32, total: u32) -> Result<Self, RegionResultError> {
        if total == 0 {
            return Err(RegionResultError::ZeroTotal);
        }
        if score > total {
            return Err(RegionResultError::ScoreExceedsTotal { score, total });
        }
        Ok(Self { score, total })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        f64::from(self.score) / f64::from(self.total)
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.score == self.total
    }
}

impl fmt::Display for RegionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.score, self.total)
    }
}

//
// ─── TIER ──────────────────────────────────────────────────────────────────────
//

/// Display tier of a region, derived from its latest result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultTier {
    /// Every question answered correctly.
    Perfect,
    /// Ratio at or above the good threshold.
    Good,
    /// Anything below the good threshold, including zero.
    Poor,
    /// No recorded result; rendered without color or badge.
    Unattempted,
}

impl ResultTier {
    /// Classifies a result by its closed `score/total` ratio (no rounding).
    #[must_use]
    pub fn classify(result: Option<&RegionResult>, good_ratio: f64) -> Self {
        match result {
            None => ResultTier::Unattempted,
            Some(r) if r.is_perfect() => ResultTier::Perfect,
            Some(r) if r.ratio() >= good_ratio => ResultTier::Good,
            Some(_) => ResultTier::Poor,
        }
    }

    /// The tiers that get a colored overlay, in legend order.
    #[must_use]
    pub fn colored() -> [ResultTier; 3] {
        [ResultTier::Perfect, ResultTier::Good, ResultTier::Poor]
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(score: u32) -> ResultTier {
        let r = RegionResult::new(score, 3).unwrap();
        ResultTier::classify(Some(&r), DEFAULT_GOOD_RATIO)
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(classify(3), ResultTier::Perfect);
        assert_eq!(classify(2), ResultTier::Good);
        assert_eq!(classify(1), ResultTier::Poor);
        assert_eq!(classify(0), ResultTier::Poor);
        assert_eq!(
            ResultTier::classify(None, DEFAULT_GOOD_RATIO),
            ResultTier::Unattempted
        );
    }

    #[test]
    fn threshold_is_not_rounded() {
        let r = RegionResult::new(2, 3).unwrap();
        assert_eq!(ResultTier::classify(Some(&r), 0.67), ResultTier::Poor);
    }

    #[test]
    fn rejects_invalid_results() {
        assert_eq!(
            RegionResult::new(4, 3).unwrap_err(),
            RegionResultError::ScoreExceedsTotal { score: 4, total: 3 }
        );
        assert_eq!(RegionResult::new(0, 0).unwrap_err(), RegionResultError::ZeroTotal);
    }

    #[test]
    fn display_is_score_over_total() {
        assert_eq!(RegionResult::new(2, 3).unwrap().to_string(), "2/3");
    }
}
