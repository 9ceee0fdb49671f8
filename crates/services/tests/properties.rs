use proptest::prelude::*;

use geoquiz_core::model::{
    AnswerIndex, QuizSettings, RegionData, RegionId, RegionQuestion, ResultTier,
};
use geoquiz_core::time::fixed_now;
use services::{CompletionMonitor, QuizSession, ResultsStore, SessionAction, Transition};

fn region(correct: [u8; 3]) -> RegionData {
    let questions = correct
        .iter()
        .map(|&c| RegionQuestion::new("Q", vec!["a".into(), "b".into(), "c".into()], c).unwrap())
        .collect();
    RegionData::new(RegionId::new("haskovo").unwrap(), "Haskovo", questions).unwrap()
}

fn action() -> impl Strategy<Value = SessionAction> {
    prop_oneof![
        (0u8..3).prop_map(|i| SessionAction::Select(AnswerIndex::new(i).unwrap())),
        Just(SessionAction::Confirm),
        Just(SessionAction::Advance),
        Just(SessionAction::Close),
    ]
}

fn region_ids(n: usize) -> Vec<RegionId> {
    (0..n)
        .map(|i| RegionId::new(format!("r{i}")).unwrap())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[test]
    fn finalized_score_is_bounded(
        correct in prop::array::uniform3(0u8..3),
        actions in prop::collection::vec(action(), 0..40),
    ) {
        let region = region(correct);
        let mut session = QuizSession::start(&region, fixed_now());
        let mut finals = 0;
        for action in actions {
            if let Transition::Finalized { score, total } = session.apply(action) {
                finals += 1;
                prop_assert_eq!(total, 3);
                prop_assert!(score <= total);
            }
            let state = session.state();
            prop_assert!(
                state.score() as usize
                    <= state.question_index() + usize::from(state.is_revealed()),
                "score {} at index {} (revealed: {}, phase: {:?})",
                state.score(),
                state.question_index(),
                state.is_revealed(),
                state.phase()
            );
        }
        prop_assert!(finals <= 1);
    }

    #[test]
    fn score_counts_matching_answers(
        correct in prop::array::uniform3(0u8..3),
        answers in prop::array::uniform3(0u8..3),
    ) {
        let region = region(correct);
        let mut session = QuizSession::start(&region, fixed_now());
        let mut last = Transition::Applied;
        for a in answers {
            session.select_option(AnswerIndex::new(a).unwrap());
            session.confirm();
            last = session.advance();
        }
        let expected = correct.iter().zip(answers.iter()).filter(|(c, a)| c == a).count() as u32;
        prop_assert_eq!(last, Transition::Finalized { score: expected, total: 3 });
    }

    #[test]
    fn overwrite_keeps_second_result(first in 0u32..=3, second in 0u32..=3) {
        let ids = region_ids(1);
        let mut store = ResultsStore::with_region_ids(ids.clone(), &QuizSettings::default());
        store.record_result(&ids[0], first, 3);
        store.record_result(&ids[0], second, 3);

        prop_assert_eq!(store.completed_count(), 1);
        prop_assert_eq!(store.get(&ids[0]).map(|r| r.score()), Some(second));
        let expected = match second {
            3 => ResultTier::Perfect,
            2 => ResultTier::Good,
            _ => ResultTier::Poor,
        };
        prop_assert_eq!(store.classify(&ids[0]), expected);
    }

    #[test]
    fn completion_fires_once_per_fill(
        order in Just((0..4usize).collect::<Vec<_>>()).prop_shuffle(),
        extra in prop::collection::vec((0usize..4, 0u32..=3), 0..10),
    ) {
        let ids = region_ids(4);
        let mut store = ResultsStore::with_region_ids(ids.clone(), &QuizSettings::default());
        let mut monitor = CompletionMonitor::new();
        let mut signals = 0;

        for i in order {
            store.record_result(&ids[i], 1, 3);
            signals += usize::from(monitor.observe(&store).is_some());
        }
        prop_assert_eq!(signals, 1);

        for (i, score) in extra {
            store.record_result(&ids[i], score, 3);
            prop_assert!(monitor.observe(&store).is_none());
        }

        store.clear();
        monitor.reset();
        for id in &ids {
            store.record_result(id, 3, 3);
            signals += usize::from(monitor.observe(&store).is_some());
        }
        prop_assert_eq!(signals, 2);
    }
}
