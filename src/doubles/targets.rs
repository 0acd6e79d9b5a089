//! Random practice targets.

use crate::core::{FinishCategory, IMPOSSIBLE_FINISHES, MAX_FINISH};
use rand::Rng;

/// One of the 20 doubles or the bull, uniformly.
pub fn random_one_dart<R: Rng>(rng: &mut R) -> u32 {
    let idx: u32 = rng.gen_range(0..21);
    if idx == 20 {
        50
    } else {
        2 + idx * 2
    }
}

/// Uniform in 41..=100, skipping 50 and 99.
pub fn random_two_dart<R: Rng>(rng: &mut R) -> u32 {
    loop {
        let score = rng.gen_range(41..=100);
        if score != 50 && score != 99 {
            return score;
        }
    }
}

/// Uniform in 101..=170, skipping scores that cannot be finished.
pub fn random_three_dart<R: Rng>(rng: &mut R) -> u32 {
    loop {
        let score = rng.gen_range(101..=MAX_FINISH);
        if !IMPOSSIBLE_FINISHES.contains(&score) {
            return score;
        }
    }
}

/// A target from `category`.
pub fn random_in_category<R: Rng>(rng: &mut R, category: FinishCategory) -> u32 {
    match category {
        FinishCategory::OneDart => random_one_dart(rng),
        FinishCategory::TwoDart => random_two_dart(rng),
        FinishCategory::ThreeDart => random_three_dart(rng),
    }
}

pub fn random_category<R: Rng>(rng: &mut R) -> FinishCategory {
    FinishCategory::ALL[rng.gen_range(0..FinishCategory::ALL.len())]
}

/// Pick a category uniformly, then a target within it.
pub fn random_target<R: Rng>(rng: &mut R) -> u32 {
    let category = random_category(rng);
    random_in_category(rng, category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn one_dart_targets_cover_doubles_and_bull() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let seen: HashSet<u32> = (0..2000).map(|_| random_one_dart(&mut rng)).collect();

        let expected: HashSet<u32> = (1..=20).map(|n| n * 2).chain([50]).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn two_dart_targets_stay_in_category() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..2000 {
            let score = random_two_dart(&mut rng);
            assert_eq!(FinishCategory::of(score), Some(FinishCategory::TwoDart));
        }
    }

    #[test]
    fn three_dart_targets_are_finishable() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..2000 {
            let score = random_three_dart(&mut rng);
            assert_eq!(FinishCategory::of(score), Some(FinishCategory::ThreeDart));
        }
    }

    #[test]
    fn random_target_spreads_over_categories() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let categories: HashSet<FinishCategory> = (0..300)
            .filter_map(|_| FinishCategory::of(random_target(&mut rng)))
            .collect();
        assert_eq!(categories.len(), 3);
    }

    #[test]
    fn same_seed_same_targets() {
        let mut a = ChaCha8Rng::seed_from_u64(123);
        let mut b = ChaCha8Rng::seed_from_u64(123);
        let first: Vec<u32> = (0..20).map(|_| random_target(&mut a)).collect();
        let second: Vec<u32> = (0..20).map(|_| random_target(&mut b)).collect();
        assert_eq!(first, second);
    }
}
