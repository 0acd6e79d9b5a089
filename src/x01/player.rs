//! Per-match player statistics.

use crate::core::{CheckoutTally, FinishCategory};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A player taking part in an X01 match.
///
/// Leg counters are reset at the start of every leg; match counters run for
/// the whole match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// 1-based seat number
    pub id: usize,
    pub name: String,
    /// Career record this player's results are credited to
    pub roster_id: Option<Uuid>,

    /// Points still required in the current leg
    pub score: u32,
    /// Legs won in the current set
    pub legs_won: u32,
    pub sets_won: u32,

    pub match_score: u32,
    pub match_darts: u32,
    pub leg_score: u32,
    pub leg_darts: u32,
    pub turns_this_leg: u32,
    /// Turns summed over every leg this player won
    pub total_turns_won_legs: u32,
    /// Legs won over the whole match
    pub legs_won_count: u32,

    pub checkout: CheckoutTally,
}

impl Player {
    pub(crate) fn new(id: usize, name: String, roster_id: Option<Uuid>, starting_score: u32) -> Self {
        Self {
            id,
            name,
            roster_id,
            score: starting_score,
            legs_won: 0,
            sets_won: 0,
            match_score: 0,
            match_darts: 0,
            leg_score: 0,
            leg_darts: 0,
            turns_this_leg: 0,
            total_turns_won_legs: 0,
            legs_won_count: 0,
            checkout: CheckoutTally::default(),
        }
    }

    /// Fresh statistics, same seat and name.
    pub(crate) fn cleared(&self, starting_score: u32) -> Self {
        Self::new(self.id, self.name.clone(), self.roster_id, starting_score)
    }

    pub(crate) fn reset_for_leg(&mut self, starting_score: u32) {
        self.score = starting_score;
        self.leg_score = 0;
        self.leg_darts = 0;
        self.turns_this_leg = 0;
    }

    /// Credit a scoring visit of three darts.
    pub(crate) fn add_visit(&mut self, scored: u32) {
        self.match_score += scored;
        self.leg_score += scored;
        self.add_darts(3);
    }

    pub(crate) fn add_darts(&mut self, darts: u32) {
        self.match_darts += darts;
        self.leg_darts += darts;
    }

    /// Average score per three darts over the match, 0 before the first dart.
    pub fn three_dart_average(&self) -> f64 {
        if self.match_darts == 0 {
            0.0
        } else {
            f64::from(self.match_score) / f64::from(self.match_darts) * 3.0
        }
    }

    /// Mean number of turns needed for the legs this player won.
    pub fn turns_per_leg_won(&self) -> f64 {
        if self.legs_won_count == 0 {
            0.0
        } else {
            f64::from(self.total_turns_won_legs) / f64::from(self.legs_won_count)
        }
    }

    /// Checkout success rate rounded to a whole percent.
    pub fn checkout_percent(&self) -> u32 {
        self.checkout.percent().round() as u32
    }

    pub fn averages(&self) -> PlayerAverages {
        let category_percent = |category| self.checkout.get(category).percent();
        PlayerAverages {
            name: self.name.clone(),
            match_average: self.three_dart_average(),
            turns_per_leg_won: self.turns_per_leg_won(),
            checkout_percent: self.checkout_percent(),
            legs_won: self.legs_won,
            sets_won: self.sets_won,
            darts_thrown: self.match_darts,
            one_dart_attempts: self.checkout.get(FinishCategory::OneDart).attempts,
            one_dart_percent: category_percent(FinishCategory::OneDart),
            two_dart_attempts: self.checkout.get(FinishCategory::TwoDart).attempts,
            two_dart_percent: category_percent(FinishCategory::TwoDart),
            three_dart_attempts: self.checkout.get(FinishCategory::ThreeDart).attempts,
            three_dart_percent: category_percent(FinishCategory::ThreeDart),
        }
    }

    /// Match totals to credit to the linked career record.
    pub fn match_result(&self) -> Option<MatchResult> {
        self.roster_id.map(|roster_id| MatchResult {
            roster_id,
            match_score: self.match_score,
            match_darts: self.match_darts,
            legs_won: self.legs_won_count,
            sets_won: self.sets_won,
            total_turns_won_legs: self.total_turns_won_legs,
            checkout: self.checkout,
        })
    }
}

/// Summary line for one player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerAverages {
    pub name: String,
    pub match_average: f64,
    pub turns_per_leg_won: f64,
    pub checkout_percent: u32,
    pub legs_won: u32,
    pub sets_won: u32,
    pub darts_thrown: u32,
    pub one_dart_attempts: u32,
    pub one_dart_percent: f64,
    pub two_dart_attempts: u32,
    pub two_dart_percent: f64,
    pub three_dart_attempts: u32,
    pub three_dart_percent: f64,
}

/// Totals of one match for a player linked to a career record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub roster_id: Uuid,
    pub match_score: u32,
    pub match_darts: u32,
    /// Legs won over the whole match
    pub legs_won: u32,
    pub sets_won: u32,
    pub total_turns_won_legs: u32,
    pub checkout: CheckoutTally,
}
