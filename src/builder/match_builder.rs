//! Builder for starting X01 matches.

use crate::builder::error::BuildError;
use crate::enforcement::MatchSetup;
use crate::x01::{Entrant, MatchConfig, X01Match};
use uuid::Uuid;

/// Builder for constructing matches with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct MatchBuilder {
    setup: MatchSetup,
}

impl MatchBuilder {
    /// Create a new builder with the default rules (501, first to 3 legs).
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from configured rules instead of the defaults.
    pub fn with_config(config: &MatchConfig) -> Self {
        Self::new()
            .starting_score(config.starting_score)
            .legs_to_win_set(config.legs_to_win_set)
            .start_player(config.start_player)
            .sets_to_win_match(config.sets_to_win_match)
    }

    /// Add a player.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.setup.players.push(Entrant::new(name));
        self
    }

    /// Add a player whose results are credited to a career record.
    pub fn roster_player(mut self, name: impl Into<String>, roster_id: Uuid) -> Self {
        self.setup.players.push(Entrant::linked(name, roster_id));
        self
    }

    /// Add several players at once.
    pub fn players<I, E>(mut self, players: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Entrant>,
    {
        self.setup.players.extend(players.into_iter().map(Into::into));
        self
    }

    pub fn starting_score(mut self, score: u32) -> Self {
        self.setup.starting_score = score;
        self
    }

    pub fn start_player(mut self, index: usize) -> Self {
        self.setup.start_player = index;
        self
    }

    pub fn legs_to_win_set(mut self, legs: u32) -> Self {
        self.setup.legs_to_win_set = legs;
        self
    }

    /// `None` keeps playing sets indefinitely.
    pub fn sets_to_win_match(mut self, sets: Option<u32>) -> Self {
        self.setup.sets_to_win_match = sets;
        self
    }

    /// The setup collected so far.
    pub fn setup(&self) -> &MatchSetup {
        &self.setup
    }

    /// Build the match.
    /// Returns an error listing every setup rule that is broken.
    pub fn build(self) -> Result<X01Match, BuildError> {
        X01Match::init_new_match(self.setup)
    }
}
