//! The match setup being validated.

use crate::builder::BuildError;
use crate::enforcement::rules::validate_setup;
use crate::x01::{Entrant, MatchConfig};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

use super::violations::SetupViolation;

/// Everything chosen on the setup screen before a match starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSetup {
    pub players: Vec<Entrant>,
    pub starting_score: u32,
    pub start_player: usize,
    pub legs_to_win_set: u32,
    pub sets_to_win_match: Option<u32>,
}

impl Default for MatchSetup {
    fn default() -> Self {
        let config = MatchConfig::default();
        Self {
            players: Vec::new(),
            starting_score: config.starting_score,
            start_player: config.start_player,
            legs_to_win_set: config.legs_to_win_set,
            sets_to_win_match: config.sets_to_win_match,
        }
    }
}

impl MatchSetup {
    pub fn new<I, E>(players: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Entrant>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Trim names and fill blank ones with `Player N`.
    pub fn normalized(mut self) -> Self {
        for (idx, entrant) in self.players.iter_mut().enumerate() {
            let trimmed = entrant.name.trim();
            entrant.name = if trimmed.is_empty() {
                format!("Player {}", idx + 1)
            } else {
                trimmed.to_string()
            };
        }
        self
    }

    /// Check every rule, collecting all violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<SetupViolation>> {
        validate_setup(self)
    }

    /// Normalize, validate and split into match rules and entrants.
    pub fn into_validated(self) -> Result<(MatchConfig, Vec<Entrant>), BuildError> {
        let setup = self.normalized();
        if let Validation::Failure(errors) = setup.validate() {
            return Err(BuildError::InvalidSetup(errors.iter().cloned().collect()));
        }

        let config = MatchConfig {
            starting_score: setup.starting_score,
            legs_to_win_set: setup.legs_to_win_set,
            sets_to_win_match: setup.sets_to_win_match,
            start_player: setup.start_player,
        };
        Ok((config, setup.players))
    }
}
