use std::collections::{BTreeMap, BTreeSet, HashMap};

use geoquiz_core::model::{
    QUESTIONS_PER_REGION, QuizSettings, RegionId, RegionResult, ResultTier,
};
use storage::CatalogRepository;
use tracing::{debug, warn};

use super::summary::{HeaderStats, QuizSummary};

/// Owned, point-in-time copy of every recorded result.
pub type ResultsSnapshot = BTreeMap<RegionId, RegionResult>;

/// Latest result per catalog region, plus the aggregates derived from them.
///
/// Lifecycle: created empty for a catalog, mutated only by
/// [`record_result`](Self::record_result) and [`clear`](Self::clear), read by
/// everything else. Entries are replaced wholesale, never merged.
#[derive(Debug, Clone)]
pub struct ResultsStore {
    region_ids: BTreeSet<RegionId>,
    good_ratio: f64,
    results: HashMap<RegionId, RegionResult>,
}

impl ResultsStore {
    /// Empty store scoped to the regions of `catalog`.
    #[must_use]
    pub fn new(catalog: &dyn CatalogRepository, settings: &QuizSettings) -> Self {
        Self::with_region_ids(catalog.region_ids(), settings)
    }

    #[must_use]
    pub fn with_region_ids(
        region_ids: impl IntoIterator<Item = RegionId>,
        settings: &QuizSettings,
    ) -> Self {
        Self {
            region_ids: region_ids.into_iter().collect(),
            good_ratio: settings.good_ratio(),
            results: HashMap::new(),
        }
    }

    /// Store `(score, total)` as the region's latest result.
    ///
    /// Any previous entry is discarded. Unknown ids and invalid scores are
    /// logged and ignored. Returns whether the store changed.
    pub fn record_result(&mut self, region_id: &RegionId, score: u32, total: u32) -> bool {
        if !self.region_ids.contains(region_id) {
            warn!(region = %region_id, score, total, "ignoring result for region outside the catalog");
            return false;
        }
        let result = match RegionResult::new(score, total) {
            Ok(result) => result,
            Err(err) => {
                warn!(region = %region_id, error = %err, "ignoring invalid region result");
                return false;
            }
        };

        let previous = self.results.insert(region_id.clone(), result);
        debug!(region = %region_id, %result, replaced = previous.is_some(), "region result recorded");
        true
    }

    #[must_use]
    pub fn get(&self, region_id: &RegionId) -> Option<&RegionResult> {
        self.results.get(region_id)
    }

    #[must_use]
    pub fn catalog_size(&self) -> usize {
        self.region_ids.len()
    }

    pub fn region_ids(&self) -> impl Iterator<Item = &RegionId> {
        self.region_ids.iter()
    }

    /// Number of regions with a recorded result.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.results.len()
    }

    /// Number of regions whose latest result is perfect.
    #[must_use]
    pub fn perfect_count(&self) -> usize {
        self.results.values().filter(|r| r.is_perfect()).count()
    }

    /// Sum of the latest scores across regions.
    #[must_use]
    pub fn total_correct(&self) -> u32 {
        self.results.values().map(RegionResult::score).sum()
    }

    /// Every catalog question, attempted or not.
    #[must_use]
    pub fn total_possible(&self) -> u32 {
        let per_region = QUESTIONS_PER_REGION as u32;
        u32::try_from(self.catalog_size())
            .unwrap_or(u32::MAX)
            .saturating_mul(per_region)
    }

    #[must_use]
    pub fn classify(&self, region_id: &RegionId) -> ResultTier {
        ResultTier::classify(self.get(region_id), self.good_ratio)
    }

    #[must_use]
    pub fn good_ratio(&self) -> f64 {
        self.good_ratio
    }

    /// Every catalog region has a result (and the catalog is not empty).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.catalog_size() > 0 && self.completed_count() == self.catalog_size()
    }

    /// Drop every result (explicit restart).
    pub fn clear(&mut self) {
        debug!(cleared = self.results.len(), "results cleared");
        self.results.clear();
    }

    #[must_use]
    pub fn snapshot(&self) -> ResultsSnapshot {
        self.results
            .iter()
            .map(|(id, result)| (id.clone(), *result))
            .collect()
    }

    #[must_use]
    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            total_correct: self.total_correct(),
            total_possible: self.total_possible(),
            perfect: self.perfect_count(),
            region_count: self.catalog_size(),
        }
    }

    #[must_use]
    pub fn header_stats(&self) -> HeaderStats {
        HeaderStats {
            completed: self.completed_count(),
            region_count: self.catalog_size(),
            perfect: self.perfect_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> RegionId {
        RegionId::new(s).unwrap()
    }

    fn store() -> ResultsStore {
        ResultsStore::with_region_ids(
            [id("vidin"), id("montana"), id("vratsa")],
            &QuizSettings::default(),
        )
    }

    #[test]
    fn empty_store_aggregates() {
        let store = store();
        assert_eq!(store.completed_count(), 0);
        assert_eq!(store.perfect_count(), 0);
        assert_eq!(store.total_correct(), 0);
        assert_eq!(store.total_possible(), 9);
        assert!(!store.is_complete());
        assert_eq!(store.classify(&id("vidin")), ResultTier::Unattempted);
    }

    #[test]
    fn overwrite_keeps_only_latest() {
        let mut store = store();
        assert!(store.record_result(&id("vidin"), 3, 3));
        assert!(store.record_result(&id("vidin"), 1, 3));

        assert_eq!(store.completed_count(), 1);
        assert_eq!(store.get(&id("vidin")), Some(&RegionResult::new(1, 3).unwrap()));
        assert_eq!(store.perfect_count(), 0);
        assert_eq!(store.classify(&id("vidin")), ResultTier::Poor);
    }

    #[test]
    fn unknown_region_is_ignored() {
        let mut store = store();
        assert!(!store.record_result(&id("varna"), 3, 3));
        assert_eq!(store.completed_count(), 0);
        assert!(store.get(&id("varna")).is_none());
    }

    #[test]
    fn invalid_score_is_ignored() {
        let mut store = store();
        assert!(!store.record_result(&id("vidin"), 4, 3));
        assert!(store.get(&id("vidin")).is_none());
    }

    #[test]
    fn aggregates_across_regions() {
        let mut store = store();
        store.record_result(&id("vidin"), 3, 3);
        store.record_result(&id("montana"), 2, 3);
        store.record_result(&id("vratsa"), 0, 3);

        assert!(store.is_complete());
        assert_eq!(
            store.summary(),
            QuizSummary {
                total_correct: 5,
                total_possible: 9,
                perfect: 1,
                region_count: 3,
            }
        );
        assert_eq!(store.classify(&id("montana")), ResultTier::Good);
        assert_eq!(store.classify(&id("vratsa")), ResultTier::Poor);

        let header = store.header_stats();
        assert_eq!(header.completed, 3);
        assert!(header.show_perfect_badge());
    }

    #[test]
    fn clear_empties_results_but_keeps_catalog() {
        let mut store = store();
        store.record_result(&id("vidin"), 3, 3);
        store.clear();

        assert_eq!(store.completed_count(), 0);
        assert_eq!(store.catalog_size(), 3);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn snapshot_is_detached_copy() {
        let mut store = store();
        store.record_result(&id("vidin"), 2, 3);
        let snapshot = store.snapshot();
        store.record_result(&id("vidin"), 3, 3);

        assert_eq!(snapshot[&id("vidin")].score(), 2);
        assert_eq!(store.get(&id("vidin")).unwrap().score(), 3);
    }
}
