//! Setup violations.

use thiserror::Error;

/// A rule a match setup breaks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SetupViolation {
    #[error("{count} players entered, a match needs {min} to {max}")]
    PlayerCount { count: usize, min: usize, max: usize },

    #[error("name of player {seat} is {len} characters long (max {max})")]
    NameTooLong { seat: usize, len: usize, max: usize },

    #[error("starting score {0} is not supported")]
    UnsupportedStartingScore(u32),

    #[error("start player {start_player} does not exist among {players} players")]
    StartPlayerOutOfRange { start_player: usize, players: usize },

    #[error("legs to win a set must be at least 1")]
    NoLegsToWin,

    #[error("sets to win the match must be at least 1")]
    NoSetsToWin,
}
