//! Presentation-agnostic data for the map and legend collaborators.
//!
//! No colors or localized strings here; the UI maps tiers to its own palette.

use serde::Serialize;

use geoquiz_core::model::{RegionId, RegionResult, ResultTier};
use storage::CatalogRepository;

use crate::results::ResultsStore;

/// Badge drawn on top of an attempted region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegionBadge {
    Checkmark,
    Score { score: u32, total: u32 },
}

impl RegionBadge {
    #[must_use]
    pub fn for_result(result: &RegionResult) -> Self {
        if result.is_perfect() {
            RegionBadge::Checkmark
        } else {
            RegionBadge::Score {
                score: result.score(),
                total: result.total(),
            }
        }
    }
}

/// Overlay state of one region on the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionMarker {
    pub id: RegionId,
    pub name: String,
    pub tier: ResultTier,
    pub badge: Option<RegionBadge>,
}

/// One row of the map legend: a colored tier and the scores it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub tier: ResultTier,
    pub min_score: u32,
    pub max_score: u32,
    pub total: u32,
}

/// Markers for every catalog region, in catalog order.
#[must_use]
pub fn region_markers(catalog: &dyn CatalogRepository, results: &ResultsStore) -> Vec<RegionMarker> {
    catalog
        .region_ids()
        .into_iter()
        .filter_map(|id| {
            let region = catalog.region(&id)?;
            let result = results.get(&id);
            Some(RegionMarker {
                name: region.name().to_owned(),
                tier: results.classify(&id),
                badge: result.map(RegionBadge::for_result),
                id,
            })
        })
        .collect()
}

/// Legend rows for a region of `total` questions under `good_ratio`.
///
/// Score ranges are derived by classifying each possible score, so they always
/// agree with [`ResultTier::classify`]. Tiers no score can reach are omitted.
#[must_use]
pub fn legend(total: u32, good_ratio: f64) -> Vec<LegendEntry> {
    ResultTier::colored()
        .into_iter()
        .filter_map(|tier| {
            let mut scores = (0..=total).filter(|&score| {
                RegionResult::new(score, total)
                    .map(|r| ResultTier::classify(Some(&r), good_ratio) == tier)
                    .unwrap_or(false)
            });
            let min_score = scores.next()?;
            let max_score = scores.last().unwrap_or(min_score);
            Some(LegendEntry {
                tier,
                min_score,
                max_score,
                total,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoquiz_core::model::{DEFAULT_GOOD_RATIO, QuizSettings, RegionData, RegionQuestion};
    use storage::InMemoryCatalog;

    fn region(id: &str, name: &str) -> RegionData {
        let questions = (0..3)
            .map(|_| RegionQuestion::new("Q", vec!["a".into(), "b".into(), "c".into()], 0).unwrap())
            .collect();
        RegionData::new(RegionId::new(id).unwrap(), name, questions).unwrap()
    }

    #[test]
    fn markers_reflect_results() {
        let catalog = InMemoryCatalog::from_regions([
            region("burgas", "Бургас"),
            region("yambol", "Ямбол"),
            region("sliven", "Сливен"),
        ])
        .unwrap();
        let mut results = ResultsStore::new(&catalog, &QuizSettings::default());
        results.record_result(&RegionId::new("burgas").unwrap(), 3, 3);
        results.record_result(&RegionId::new("yambol").unwrap(), 1, 3);

        let markers = region_markers(&catalog, &results);
        let by_id = |id: &str| markers.iter().find(|m| m.id.as_str() == id).unwrap();

        assert_eq!(markers.len(), 3);
        assert_eq!(by_id("burgas").tier, ResultTier::Perfect);
        assert_eq!(by_id("burgas").badge, Some(RegionBadge::Checkmark));
        assert_eq!(by_id("yambol").tier, ResultTier::Poor);
        assert_eq!(
            by_id("yambol").badge,
            Some(RegionBadge::Score { score: 1, total: 3 })
        );
        assert_eq!(by_id("sliven").tier, ResultTier::Unattempted);
        assert_eq!(by_id("sliven").badge, None);
        assert_eq!(by_id("sliven").name, "Сливен");
    }

    #[test]
    fn default_legend_matches_three_question_regions() {
        let rows = legend(3, DEFAULT_GOOD_RATIO);
        let ranges: Vec<_> = rows
            .iter()
            .map(|r| (r.tier, r.min_score, r.max_score))
            .collect();
        assert_eq!(
            ranges,
            [
                (ResultTier::Perfect, 3, 3),
                (ResultTier::Good, 2, 2),
                (ResultTier::Poor, 0, 1),
            ]
        );
    }

    #[test]
    fn badge_serializes_with_kind_tag() {
        let json = serde_json::to_string(&RegionBadge::Score { score: 2, total: 3 }).unwrap();
        assert_eq!(json, r#"{"kind":"score","score":2,"total":3}"#);
    }
}
