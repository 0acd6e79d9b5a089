//! Match rules and entrants.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rules of an X01 match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// 101, 301 or 501
    pub starting_score: u32,
    pub legs_to_win_set: u32,
    /// `None` plays sets until the match is abandoned
    pub sets_to_win_match: Option<u32>,
    /// Index of the player who throws first
    pub start_player: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            starting_score: 501,
            legs_to_win_set: 3,
            sets_to_win_match: None,
            start_player: 0,
        }
    }
}

/// A player joining a match, optionally linked to a career record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrant {
    pub name: String,
    pub roster_id: Option<Uuid>,
}

impl Entrant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roster_id: None,
        }
    }

    pub fn linked(name: impl Into<String>, roster_id: Uuid) -> Self {
        Self {
            name: name.into(),
            roster_id: Some(roster_id),
        }
    }
}

impl From<&str> for Entrant {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Entrant {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
