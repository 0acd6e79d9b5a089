//! Leg history tracking.
//!
//! Provides immutable tracking of completed legs over the course of a match.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single completed leg.
///
/// # Example
///
/// ```rust
/// use oche::core::LegRecord;
/// use chrono::Utc;
///
/// let leg = LegRecord {
///     winner_index: 0,
///     darts_thrown: 15,
///     set_number: 1,
///     leg_number: 1,
///     finished_at: Utc::now(),
/// };
/// assert_eq!(leg.darts_thrown, 15);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegRecord {
    /// Index of the player who checked out
    pub winner_index: usize,
    /// Darts the winner threw in the leg
    pub darts_thrown: u32,
    /// 1-based set the leg belongs to
    pub set_number: u32,
    /// 1-based position of the leg within its set
    pub leg_number: u32,
    /// When the checkout was entered
    pub finished_at: DateTime<Utc>,
}

/// Ordered history of completed legs.
///
/// History is immutable - the `record` method returns a new history
/// with the leg added.
///
/// # Example
///
/// ```rust
/// use oche::core::{LegHistory, LegRecord};
/// use chrono::Utc;
///
/// let history = LegHistory::new();
/// let history = history.record(LegRecord {
///     winner_index: 1,
///     darts_thrown: 18,
///     set_number: 1,
///     leg_number: 1,
///     finished_at: Utc::now(),
/// });
///
/// assert_eq!(history.legs().len(), 1);
/// assert_eq!(history.legs_won_by(1), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LegHistory {
    legs: Vec<LegRecord>,
}

impl LegHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { legs: Vec::new() }
    }

    /// Record a leg, returning a new history.
    ///
    /// The existing history is left unchanged.
    pub fn record(&self, leg: LegRecord) -> Self {
        let mut legs = self.legs.clone();
        legs.push(leg);
        Self { legs }
    }

    /// All legs in the order they were won.
    pub fn legs(&self) -> &[LegRecord] {
        &self.legs
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Number of legs won by the player at `index`.
    pub fn legs_won_by(&self, index: usize) -> usize {
        self.legs
            .iter()
            .filter(|leg| leg.winner_index == index)
            .count()
    }

    /// The leg won in the fewest darts, earliest first on ties.
    pub fn best_leg(&self) -> Option<&LegRecord> {
        self.legs.iter().min_by_key(|leg| leg.darts_thrown)
    }

    /// Time between the first and the last checkout.
    ///
    /// Returns `None` if no leg has been completed.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.legs.first(), self.legs.last()) {
            let duration = last.finished_at.signed_duration_since(first.finished_at);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
