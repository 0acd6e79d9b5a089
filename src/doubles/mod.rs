//! Doubles practice drill.
//!
//! The drill shows a random finish, the player records whether the visit
//! checked it out, and a new target is rolled. Attempts and successes are
//! counted for the category of the target just attempted.
//!
//! # Example
//!
//! ```rust
//! use oche::core::FinishCategory;
//! use oche::doubles::DoublesDrill;
//!
//! let mut drill = DoublesDrill::from_seed(7);
//! drill.init();
//! let target = drill.current_target().unwrap();
//!
//! let outcome = drill.hit().unwrap();
//! assert_eq!(outcome.target, target);
//! assert_eq!(drill.get_stats().total_successes(), 1);
//! ```

pub mod targets;

use crate::core::{CheckoutTally, FinishCategory};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Result of recording one practice visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrillOutcome {
    pub target: u32,
    pub category: FinishCategory,
    pub hit: bool,
    /// Target rolled for the next visit
    pub next_target: u32,
}

/// Practice session state.
#[derive(Clone, Debug)]
pub struct DoublesDrill<R = ChaCha8Rng> {
    /// Target on show and the category it was rolled from
    current: Option<(u32, FinishCategory)>,
    tally: CheckoutTally,
    rng: R,
}

impl DoublesDrill<ChaCha8Rng> {
    /// Drill with reproducible targets.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Drill seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> DoublesDrill<R> {
    /// A drill with no target yet; call [`init`](Self::init) to roll one.
    pub fn new(rng: R) -> Self {
        Self {
            current: None,
            tally: CheckoutTally::default(),
            rng,
        }
    }

    pub fn current_target(&self) -> Option<u32> {
        self.current.map(|(target, _)| target)
    }

    pub fn current_category(&self) -> Option<FinishCategory> {
        self.current.map(|(_, category)| category)
    }

    /// Roll a new target without counting an attempt.
    pub fn next_target(&mut self) -> u32 {
        let category = targets::random_category(&mut self.rng);
        let target = targets::random_in_category(&mut self.rng, category);
        self.current = Some((target, category));
        target
    }

    /// Roll a target if there is none.
    pub fn init(&mut self) {
        if self.current.is_none() {
            self.next_target();
        }
    }

    /// Record a visit that scored `score`.
    ///
    /// The visit is a hit when `score` equals the target. Without a target
    /// nothing is counted; a target is rolled and `None` returned.
    pub fn enter_score(&mut self, score: u32) -> Option<DrillOutcome> {
        self.attempt(|target| score == target)
    }

    /// Record a checkout of the current target.
    pub fn hit(&mut self) -> Option<DrillOutcome> {
        self.attempt(|_| true)
    }

    /// Record a visit that missed the current target.
    pub fn miss(&mut self) -> Option<DrillOutcome> {
        self.attempt(|_| false)
    }

    fn attempt(&mut self, is_hit: impl FnOnce(u32) -> bool) -> Option<DrillOutcome> {
        match self.current {
            Some((target, category)) => Some(self.record(target, category, is_hit(target))),
            None => {
                self.next_target();
                None
            }
        }
    }

    pub fn get_stats(&self) -> CheckoutTally {
        self.tally
    }

    /// Clear every counter and roll a fresh target.
    pub fn reset(&mut self) {
        self.tally = CheckoutTally::default();
        self.current = None;
        self.next_target();
    }

    fn record(&mut self, target: u32, category: FinishCategory, hit: bool) -> DrillOutcome {
        self.tally.record_attempt(category);
        if hit {
            self.tally.record_success(category);
        }
        let next_target = self.next_target();
        debug!(target, hit, next_target, "practice visit recorded");
        DrillOutcome {
            target,
            category,
            hit,
            next_target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drill_has_no_target() {
        let drill = DoublesDrill::from_seed(1);
        assert!(drill.current_target().is_none());
        assert!(drill.current_category().is_none());
        assert_eq!(drill.get_stats().total_attempts(), 0);
    }

    #[test]
    fn init_rolls_once() {
        let mut drill = DoublesDrill::from_seed(1);
        drill.init();
        let target = drill.current_target();
        assert!(target.is_some());
        drill.init();
        assert_eq!(drill.current_target(), target);
    }

    #[test]
    fn entering_without_target_only_rolls() {
        let mut drill = DoublesDrill::from_seed(2);
        assert!(drill.enter_score(40).is_none());
        assert!(drill.current_target().is_some());
        assert_eq!(drill.get_stats().total_attempts(), 0);
    }

    #[test]
    fn next_target_does_not_count_attempts() {
        let mut drill = DoublesDrill::from_seed(3);
        for _ in 0..5 {
            drill.next_target();
        }
        assert_eq!(drill.get_stats().total_attempts(), 0);
    }

    #[test]
    fn hit_counts_attempt_and_success_for_target_category() {
        let mut drill = DoublesDrill::from_seed(4);
        drill.init();
        let target = drill.current_target().unwrap();
        let category = FinishCategory::of(target).unwrap();

        let outcome = drill.enter_score(target).unwrap();
        assert!(outcome.hit);
        assert_eq!(outcome.category, category);
        assert_eq!(drill.get_stats().get(category).attempts, 1);
        assert_eq!(drill.get_stats().get(category).successes, 1);
        assert_eq!(drill.current_target(), Some(outcome.next_target));
    }

    #[test]
    fn outcome_carries_the_rolled_category() {
        let mut drill = DoublesDrill::from_seed(12);
        drill.init();
        for _ in 0..40 {
            let target = drill.current_target().unwrap();
            let category = drill.current_category().unwrap();
            assert_eq!(FinishCategory::of(target), Some(category));

            let outcome = drill.miss().unwrap();
            assert_eq!(outcome.target, target);
            assert_eq!(outcome.category, category);
        }
        let stats = drill.get_stats();
        assert_eq!(
            FinishCategory::ALL.iter().map(|c| stats.get(*c).attempts).sum::<u32>(),
            40
        );
    }

    #[test]
    fn miss_counts_attempt_only() {
        let mut drill = DoublesDrill::from_seed(5);
        drill.init();
        let target = drill.current_target().unwrap();

        let outcome = drill.miss().unwrap();
        assert!(!outcome.hit);
        assert_eq!(outcome.target, target);
        assert_eq!(drill.get_stats().total_attempts(), 1);
        assert_eq!(drill.get_stats().total_successes(), 0);
    }

    #[test]
    fn wrong_score_is_a_miss() {
        let mut drill = DoublesDrill::from_seed(6);
        drill.init();
        let target = drill.current_target().unwrap();
        let outcome = drill.enter_score(target + 1).unwrap();
        assert!(!outcome.hit);
    }

    #[test]
    fn reset_clears_counters_and_rolls() {
        let mut drill = DoublesDrill::from_seed(8);
        drill.init();
        drill.hit();
        drill.miss();

        drill.reset();
        assert_eq!(drill.get_stats(), CheckoutTally::default());
        assert!(drill.current_target().is_some());
    }

    #[test]
    fn attempts_add_up_over_many_visits() {
        let mut drill = DoublesDrill::from_seed(10);
        drill.init();
        for i in 0..60 {
            if i % 3 == 0 {
                drill.hit();
            } else {
                drill.miss();
            }
        }
        let stats = drill.get_stats();
        assert_eq!(stats.total_attempts(), 60);
        assert_eq!(stats.total_successes(), 20);
    }
}
