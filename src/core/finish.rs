//! Finish classification.
//!
//! Every remaining score a player can check out from falls into one of three
//! categories depending on the minimum number of darts the finish needs.
//! These predicates are pure and shared by the match engine, the checkout
//! table and the doubles drill.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest score a single visit of three darts can make.
pub const MAX_VISIT: u32 = 180;

/// Highest score that can be finished in one visit (T20 T20 Bull).
pub const MAX_FINISH: u32 = 170;

/// Scores in 2..=170 that no three-dart route can finish on a double.
pub const IMPOSSIBLE_FINISHES: [u32; 7] = [159, 162, 163, 165, 166, 168, 169];

/// Visit totals in 0..=180 that three darts cannot add up to.
pub const IMPOSSIBLE_VISITS: [u32; 9] = [163, 166, 169, 172, 173, 175, 176, 178, 179];

/// Game played by a scoring session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    X01,
    Doubles,
}

/// Minimum number of darts a finish needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FinishCategory {
    /// A single double or the bull.
    OneDart,
    /// 41..=100 except 50 and 99.
    TwoDart,
    /// 101..=170 except the impossible finishes.
    ThreeDart,
}

impl FinishCategory {
    pub const ALL: [FinishCategory; 3] = [Self::OneDart, Self::TwoDart, Self::ThreeDart];

    /// Classify a remaining score.
    ///
    /// Returns `None` for scores that are not a finish in the minimum number
    /// of darts of any category (odd scores up to 40, 99, out of range).
    ///
    /// # Example
    ///
    /// ```rust
    /// use oche::core::FinishCategory;
    ///
    /// assert_eq!(FinishCategory::of(40), Some(FinishCategory::OneDart));
    /// assert_eq!(FinishCategory::of(50), Some(FinishCategory::OneDart));
    /// assert_eq!(FinishCategory::of(41), Some(FinishCategory::TwoDart));
    /// assert_eq!(FinishCategory::of(170), Some(FinishCategory::ThreeDart));
    /// assert_eq!(FinishCategory::of(99), None);
    /// assert_eq!(FinishCategory::of(39), None);
    /// ```
    pub fn of(score: u32) -> Option<Self> {
        match score {
            2..=40 if score % 2 == 0 => Some(Self::OneDart),
            50 => Some(Self::OneDart),
            41..=100 if score != 99 => Some(Self::TwoDart),
            101..=MAX_FINISH if !IMPOSSIBLE_FINISHES.contains(&score) => Some(Self::ThreeDart),
            _ => None,
        }
    }

    /// Short label used in summaries ("1D", "2D", "3D").
    pub fn label(&self) -> &'static str {
        match self {
            Self::OneDart => "1D",
            Self::TwoDart => "2D",
            Self::ThreeDart => "3D",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::OneDart => 0,
            Self::TwoDart => 1,
            Self::ThreeDart => 2,
        }
    }
}

impl fmt::Display for FinishCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether `score` can be finished in a single visit.
pub fn is_finish_possible(score: u32) -> bool {
    (2..=MAX_FINISH).contains(&score) && !IMPOSSIBLE_FINISHES.contains(&score)
}

/// Whether three darts can total `score`.
pub fn is_valid_visit(score: u32) -> bool {
    score <= MAX_VISIT && !IMPOSSIBLE_VISITS.contains(&score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_dart_finishes_are_even_up_to_forty_and_bull() {
        for score in (2..=40).step_by(2) {
            assert_eq!(FinishCategory::of(score), Some(FinishCategory::OneDart));
        }
        assert_eq!(FinishCategory::of(50), Some(FinishCategory::OneDart));
    }

    #[test]
    fn odd_low_scores_have_no_category() {
        for score in (1..=39).step_by(2) {
            assert_eq!(FinishCategory::of(score), None);
        }
        assert_eq!(FinishCategory::of(0), None);
    }

    #[test]
    fn two_dart_range_excludes_bull_and_ninety_nine() {
        assert_eq!(FinishCategory::of(41), Some(FinishCategory::TwoDart));
        assert_eq!(FinishCategory::of(100), Some(FinishCategory::TwoDart));
        assert_eq!(FinishCategory::of(99), None);
    }

    #[test]
    fn three_dart_range_excludes_impossible_finishes() {
        assert_eq!(FinishCategory::of(101), Some(FinishCategory::ThreeDart));
        assert_eq!(FinishCategory::of(170), Some(FinishCategory::ThreeDart));
        for score in IMPOSSIBLE_FINISHES {
            assert_eq!(FinishCategory::of(score), None, "score {score}");
        }
        assert_eq!(FinishCategory::of(171), None);
    }

    #[test]
    fn finish_possible_bounds() {
        assert!(!is_finish_possible(0));
        assert!(!is_finish_possible(1));
        assert!(is_finish_possible(2));
        assert!(is_finish_possible(3));
        assert!(is_finish_possible(99));
        assert!(is_finish_possible(170));
        assert!(!is_finish_possible(171));
        assert!(!is_finish_possible(165));
    }

    #[test]
    fn every_categorized_score_is_a_possible_finish() {
        for score in 0..=200 {
            if FinishCategory::of(score).is_some() {
                assert!(is_finish_possible(score), "score {score}");
            }
        }
    }

    #[test]
    fn visit_validity() {
        assert!(is_valid_visit(0));
        assert!(is_valid_visit(180));
        assert!(is_valid_visit(177));
        assert!(is_valid_visit(174));
        assert!(!is_valid_visit(179));
        assert!(!is_valid_visit(163));
        assert!(!is_valid_visit(181));
    }

    #[test]
    fn category_labels() {
        assert_eq!(FinishCategory::OneDart.to_string(), "1D");
        assert_eq!(FinishCategory::TwoDart.label(), "2D");
        assert_eq!(FinishCategory::ThreeDart.label(), "3D");
    }
}
