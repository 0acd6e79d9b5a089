//! Attempt/success counters per finish category.

use super::finish::FinishCategory;
use serde::{Deserialize, Serialize};

/// Attempts and successes for one finish category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub attempts: u32,
    pub successes: u32,
}

impl CategoryCount {
    /// Success rate in percent, 0 when nothing was attempted.
    pub fn percent(&self) -> f64 {
        percent(self.successes, self.attempts)
    }
}

/// Checkout attempts and successes split by [`FinishCategory`].
///
/// # Example
///
/// ```rust
/// use oche::core::{CheckoutTally, FinishCategory};
///
/// let mut tally = CheckoutTally::default();
/// tally.record_attempt(FinishCategory::OneDart);
/// tally.record_attempt(FinishCategory::OneDart);
/// tally.record_success(FinishCategory::OneDart);
///
/// assert_eq!(tally.get(FinishCategory::OneDart).attempts, 2);
/// assert_eq!(tally.total_successes(), 1);
/// assert_eq!(tally.percent(), 50.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutTally {
    counts: [CategoryCount; 3],
}

impl CheckoutTally {
    pub fn get(&self, category: FinishCategory) -> CategoryCount {
        self.counts[category.index()]
    }

    pub fn record_attempt(&mut self, category: FinishCategory) {
        self.counts[category.index()].attempts += 1;
    }

    pub fn record_success(&mut self, category: FinishCategory) {
        self.counts[category.index()].successes += 1;
    }

    pub fn total_attempts(&self) -> u32 {
        self.counts.iter().map(|c| c.attempts).sum()
    }

    pub fn total_successes(&self) -> u32 {
        self.counts.iter().map(|c| c.successes).sum()
    }

    /// Overall success rate in percent, 0 when nothing was attempted.
    pub fn percent(&self) -> f64 {
        percent(self.total_successes(), self.total_attempts())
    }

    /// Add another tally into this one.
    pub fn absorb(&mut self, other: &CheckoutTally) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            mine.attempts += theirs.attempts;
            mine.successes += theirs.successes;
        }
    }
}

fn percent(successes: u32, attempts: u32) -> f64 {
    if attempts == 0 {
        0.0
    } else {
        f64::from(successes) / f64::from(attempts) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tally_reports_zero_percent() {
        let tally = CheckoutTally::default();
        assert_eq!(tally.total_attempts(), 0);
        assert_eq!(tally.percent(), 0.0);
        assert_eq!(tally.get(FinishCategory::TwoDart).percent(), 0.0);
    }

    #[test]
    fn categories_are_counted_separately() {
        let mut tally = CheckoutTally::default();
        tally.record_attempt(FinishCategory::OneDart);
        tally.record_attempt(FinishCategory::ThreeDart);
        tally.record_attempt(FinishCategory::ThreeDart);
        tally.record_success(FinishCategory::ThreeDart);

        assert_eq!(tally.get(FinishCategory::OneDart).attempts, 1);
        assert_eq!(tally.get(FinishCategory::TwoDart).attempts, 0);
        assert_eq!(tally.get(FinishCategory::ThreeDart).attempts, 2);
        assert_eq!(tally.get(FinishCategory::ThreeDart).percent(), 50.0);
        assert_eq!(tally.total_attempts(), 3);
    }

    #[test]
    fn absorb_adds_counts() {
        let mut career = CheckoutTally::default();
        career.record_attempt(FinishCategory::TwoDart);

        let mut game = CheckoutTally::default();
        game.record_attempt(FinishCategory::TwoDart);
        game.record_success(FinishCategory::TwoDart);

        career.absorb(&game);
        assert_eq!(
            career.get(FinishCategory::TwoDart),
            CategoryCount {
                attempts: 2,
                successes: 1
            }
        );
    }
}
