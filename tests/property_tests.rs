//! Property-based tests for the match engine and practice drill.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use oche::builder::MatchBuilder;
use oche::checkout::{get_suggestion, Checkout};
use oche::core::{is_finish_possible, is_valid_visit, FinishCategory, MatchPhase, State};
use oche::doubles::DoublesDrill;
use oche::x01::{MatchError, X01Match};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_match()(
        players in 2usize..=4,
        starting_score in prop::sample::select(vec![101u32, 301, 501]),
        legs_to_win_set in 1u32..=3,
    ) -> X01Match {
        let names: Vec<String> = (1..=players).map(|n| format!("P{n}")).collect();
        MatchBuilder::new()
            .players(names)
            .starting_score(starting_score)
            .legs_to_win_set(legs_to_win_set)
            .build()
            .unwrap()
    }
}

fn visit() -> impl Strategy<Value = u32> {
    (0u32..=180).prop_filter("valid visit", |s| is_valid_visit(*s))
}

proptest! {
    #[test]
    fn score_and_leg_score_add_up_to_start(
        mut game in arbitrary_match(),
        visits in prop::collection::vec(visit(), 0..80),
    ) {
        let start = game.config().starting_score;
        for v in visits {
            game.enter_score(v).unwrap();
            for p in game.players() {
                prop_assert_eq!(p.score + p.leg_score, start);
                prop_assert_ne!(p.score, 1);
            }
        }
    }

    #[test]
    fn every_visit_throws_three_darts(
        mut game in arbitrary_match(),
        visits in prop::collection::vec(visit(), 0..80),
    ) {
        let count = visits.len() as u32;
        for v in visits {
            game.enter_score(v).unwrap();
        }
        let darts: u32 = game.players().iter().map(|p| p.match_darts).sum();
        prop_assert_eq!(darts, count * 3);
        prop_assert_eq!(game.undo_depth(), count as usize);
    }

    #[test]
    fn undoing_everything_restores_the_new_match(
        mut game in arbitrary_match(),
        visits in prop::collection::vec(visit(), 0..60),
    ) {
        let fresh = game.clone();
        for v in &visits {
            game.enter_score(*v).unwrap();
        }
        for _ in &visits {
            prop_assert!(game.undo_last_turn().is_some());
        }
        prop_assert!(game.undo_last_turn().is_none());
        prop_assert_eq!(game, fresh);
    }

    #[test]
    fn rejected_scores_leave_the_match_untouched(
        mut game in arbitrary_match(),
        visits in prop::collection::vec(visit(), 0..30),
        bad in prop_oneof![181u32..10_000, prop::sample::select(vec![163u32, 166, 169, 172, 179])],
    ) {
        for v in visits {
            game.enter_score(v).unwrap();
        }
        let before = game.clone();
        prop_assert_eq!(game.enter_score(bad), Err(MatchError::InvalidScore(bad)));
        prop_assert_eq!(game, before);
    }

    #[test]
    fn leg_history_tracks_completed_legs(
        mut game in arbitrary_match(),
        visits in prop::collection::vec(visit(), 0..120),
    ) {
        for v in visits {
            game.enter_score(v).unwrap();
        }
        prop_assert_eq!(game.leg_history().len() as u32, game.legs_completed());
        let won: u32 = game.players().iter().map(|p| p.legs_won_count).sum();
        prop_assert_eq!(won, game.legs_completed());
        prop_assert_eq!(game.phase(), MatchPhase::InPlay);
        prop_assert!(!game.phase().is_final());
    }

    #[test]
    fn drill_targets_are_always_finishes(seed in any::<u64>(), visits in 1usize..50) {
        let mut drill = DoublesDrill::from_seed(seed);
        drill.init();
        for i in 0..visits {
            let target = drill.current_target().unwrap();
            prop_assert!(FinishCategory::of(target).is_some());
            prop_assert!(is_finish_possible(target));
            if i % 2 == 0 {
                drill.hit();
            } else {
                drill.miss();
            }
        }
        let stats = drill.get_stats();
        prop_assert_eq!(stats.total_attempts() as usize, visits);
        prop_assert_eq!(stats.total_successes() as usize, visits.div_ceil(2));
    }

    #[test]
    fn suggestions_exist_exactly_for_finishable_scores(score in 0u32..400) {
        prop_assert_eq!(get_suggestion(score).is_some(), is_finish_possible(score));
        if let Some(route) = get_suggestion(score) {
            let checkout = Checkout::parse(route).unwrap();
            prop_assert_eq!(checkout.total(), score);
            prop_assert!(checkout.ends_on_double());
            prop_assert!(checkout.darts().len() <= 3);
        }
    }
}
