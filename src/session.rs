//! Scoring session facade.
//!
//! [`Scorer`] is the surface a front end drives: it holds the active
//! [`GameMode`], the running X01 match and the doubles drill, and routes each
//! keypad entry to whichever is active.
//!
//! # Example
//!
//! ```rust
//! use oche::core::GameMode;
//! use oche::enforcement::MatchSetup;
//! use oche::session::{Scorer, ScoreOutcome};
//!
//! let mut scorer = Scorer::with_seed(3);
//! scorer.start_match(MatchSetup::new(["Ann", "Bob"])).unwrap();
//! assert_eq!(scorer.checkout_hint(), None);
//!
//! scorer.set_mode(GameMode::Doubles);
//! let target = scorer.drill().current_target().unwrap();
//! let outcome = scorer.enter_score(target).unwrap();
//! assert!(matches!(outcome, ScoreOutcome::Doubles(Some(o)) if o.hit));
//! ```

use crate::builder::BuildError;
use crate::checkout::get_suggestion;
use crate::config::ScorerConfig;
use crate::core::GameMode;
use crate::doubles::{DoublesDrill, DrillOutcome};
use crate::enforcement::MatchSetup;
use crate::x01::{MatchError, TurnOutcome, UndoneTurn, X01Match};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// X01 mode is active but no match has been started
    #[error("no match in progress")]
    NoMatch,

    #[error(transparent)]
    Match(#[from] MatchError),
}

/// What an entry did in the active mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScoreOutcome {
    X01(TurnOutcome),
    /// `None` when the drill had no target yet and only rolled one
    Doubles(Option<DrillOutcome>),
}

#[derive(Debug)]
pub struct Scorer {
    mode: GameMode,
    x01: Option<X01Match>,
    drill: DoublesDrill,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer {
    pub fn new() -> Self {
        Self::with_drill(DoublesDrill::from_entropy())
    }

    /// Session whose practice targets are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_drill(DoublesDrill::from_seed(seed))
    }

    pub fn from_config(config: &ScorerConfig) -> Self {
        match config.doubles_seed() {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    fn with_drill(drill: DoublesDrill) -> Self {
        Self {
            mode: GameMode::X01,
            x01: None,
            drill,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn game(&self) -> Option<&X01Match> {
        self.x01.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut X01Match> {
        self.x01.as_mut()
    }

    pub fn drill(&self) -> &DoublesDrill {
        &self.drill
    }

    /// Replace any running match and switch to X01.
    pub fn start_match(&mut self, setup: MatchSetup) -> Result<&X01Match, BuildError> {
        let game = X01Match::init_new_match(setup)?;
        self.mode = GameMode::X01;
        Ok(&*self.x01.insert(game))
    }

    /// Resume a match restored from a checkpoint.
    pub fn resume_match(&mut self, game: X01Match) -> &X01Match {
        self.mode = GameMode::X01;
        self.x01.insert(game)
    }

    /// Switch modes. Entering doubles rolls a target if none is showing.
    pub fn set_mode(&mut self, mode: GameMode) {
        if mode == GameMode::Doubles {
            self.drill.init();
        }
        if mode != self.mode {
            info!(?mode, "scoring mode changed");
        }
        self.mode = mode;
    }

    pub fn enter_score(&mut self, score: u32) -> Result<ScoreOutcome, SessionError> {
        match self.mode {
            GameMode::X01 => {
                let game = self.x01.as_mut().ok_or(SessionError::NoMatch)?;
                Ok(ScoreOutcome::X01(game.enter_score(score)?))
            }
            GameMode::Doubles => Ok(ScoreOutcome::Doubles(self.drill.enter_score(score))),
        }
    }

    /// Undo the last X01 visit. Practice visits cannot be undone.
    pub fn undo(&mut self) -> Option<UndoneTurn> {
        match self.mode {
            GameMode::X01 => self.x01.as_mut()?.undo_last_turn(),
            GameMode::Doubles => None,
        }
    }

    /// Route for the score currently being aimed at.
    pub fn checkout_hint(&self) -> Option<&'static str> {
        match self.mode {
            GameMode::X01 => self.x01.as_ref()?.checkout_suggestion(),
            GameMode::Doubles => get_suggestion(self.drill.current_target()?),
        }
    }

    /// Reset the active mode.
    pub fn reset(&mut self) {
        match self.mode {
            GameMode::X01 => {
                if let Some(game) = self.x01.as_mut() {
                    game.reset();
                }
            }
            GameMode::Doubles => self.drill.reset(),
        }
    }

    /// Drop the match, keeping the drill.
    pub fn end_match(&mut self) -> Option<X01Match> {
        self.x01.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FinishCategory;

    fn scorer_with_match(starting_score: u32) -> Scorer {
        let mut scorer = Scorer::with_seed(11);
        let mut setup = MatchSetup::new(["Ann", "Bob"]);
        setup.starting_score = starting_score;
        scorer.start_match(setup).unwrap();
        scorer
    }

    #[test]
    fn x01_entry_without_match_fails() {
        let mut scorer = Scorer::with_seed(1);
        assert_eq!(scorer.enter_score(60), Err(SessionError::NoMatch));
        assert_eq!(scorer.undo(), None);
        assert_eq!(scorer.checkout_hint(), None);
    }

    #[test]
    fn invalid_setup_is_rejected() {
        let mut scorer = Scorer::with_seed(1);
        assert!(scorer.start_match(MatchSetup::new(["Solo"])).is_err());
        assert!(scorer.game().is_none());
    }

    #[test]
    fn x01_entries_reach_the_match() {
        let mut scorer = scorer_with_match(101);
        let outcome = scorer.enter_score(60).unwrap();
        assert!(matches!(
            outcome,
            ScoreOutcome::X01(TurnOutcome::Scored { player: 0, remaining: 41, .. })
        ));
        assert_eq!(
            scorer.enter_score(181),
            Err(SessionError::Match(MatchError::InvalidScore(181)))
        );
    }

    #[test]
    fn checkout_hint_follows_current_player() {
        let mut scorer = scorer_with_match(101);
        assert_eq!(scorer.checkout_hint(), Some("T17 Bull"));
        scorer.enter_score(61).unwrap();
        assert_eq!(scorer.checkout_hint(), Some("T17 Bull"));
        scorer.enter_score(0).unwrap();
        assert_eq!(scorer.checkout_hint(), Some("D20"));
    }

    #[test]
    fn undo_only_applies_to_x01() {
        let mut scorer = scorer_with_match(501);
        scorer.enter_score(100).unwrap();

        scorer.set_mode(GameMode::Doubles);
        assert_eq!(scorer.undo(), None);

        scorer.set_mode(GameMode::X01);
        let undone = scorer.undo().unwrap();
        assert_eq!(undone.entered_score, 100);
        assert_eq!(scorer.game().unwrap().player(0).unwrap().score, 501);
    }

    #[test]
    fn doubles_mode_rolls_and_hints_target() {
        let mut scorer = Scorer::with_seed(5);
        scorer.set_mode(GameMode::Doubles);
        let target = scorer.drill().current_target().unwrap();
        assert_eq!(scorer.checkout_hint(), get_suggestion(target));

        let outcome = scorer.enter_score(0).unwrap();
        match outcome {
            ScoreOutcome::Doubles(Some(o)) => {
                assert_eq!(o.target, target);
                assert!(!o.hit);
                assert_eq!(o.category, FinishCategory::of(target).unwrap());
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn reset_only_touches_active_mode() {
        let mut scorer = scorer_with_match(501);
        scorer.enter_score(100).unwrap();
        scorer.set_mode(GameMode::Doubles);
        scorer.enter_score(1).unwrap();

        scorer.reset();
        assert_eq!(scorer.drill().get_stats().total_attempts(), 0);
        assert_eq!(scorer.game().unwrap().player(0).unwrap().score, 401);

        scorer.set_mode(GameMode::X01);
        scorer.reset();
        assert_eq!(scorer.game().unwrap().player(0).unwrap().score, 501);
        assert_eq!(scorer.game().unwrap().undo_depth(), 0);
    }

    #[test]
    fn starting_a_match_switches_to_x01() {
        let mut scorer = Scorer::with_seed(2);
        scorer.set_mode(GameMode::Doubles);
        scorer.start_match(MatchSetup::new(["Ann", "Bob"])).unwrap();
        assert_eq!(scorer.mode(), GameMode::X01);
    }

    #[test]
    fn resume_and_end_match() {
        let mut scorer = scorer_with_match(301);
        scorer.enter_score(60).unwrap();
        let game = scorer.end_match().unwrap();
        assert!(scorer.game().is_none());

        scorer.resume_match(game.checkpoint().restore().unwrap());
        assert_eq!(scorer.game().unwrap().player(0).unwrap().score, 241);
    }
}
