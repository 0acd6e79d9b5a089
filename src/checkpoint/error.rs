//! Checkpoint error types.

use thiserror::Error;

/// Errors raised while saving or restoring a match checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("could not encode match checkpoint: {0}")]
    Encode(String),

    /// The bytes or text are not a match checkpoint
    #[error("not a readable match checkpoint: {0}")]
    Decode(String),

    #[error("checkpoint format v{found} cannot be resumed, this build reads v{supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("checkpointed match cannot be resumed: {0}")]
    CorruptMatch(#[from] MatchCorruption),
}

/// Why a decoded match cannot be played on.
///
/// Any of these would make the next visit or undo index outside the seats.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchCorruption {
    #[error("{count} players seated, a match needs {min} to {max}")]
    PlayerCount { count: usize, min: usize, max: usize },

    /// A seat pointer (thrower, leg or set starter, winner) past the last seat
    #[error("{seat} points at seat {index} but only {players} players are seated")]
    SeatOutOfRange {
        seat: &'static str,
        index: usize,
        players: usize,
    },

    #[error("seat {seat} has {score} left, above the starting score of {start}")]
    ScoreAboveStart { seat: usize, score: u32, start: u32 },

    #[error("legs to win a set is 0")]
    NoLegsToWin,

    #[error("sets to win the match is 0")]
    NoSetsToWin,

    /// Seat count differs between an undo snapshot and the live match
    #[error("{count} players seated but the match has {expected}")]
    SeatCountChanged { count: usize, expected: usize },

    /// Position counts from the bottom of the undo stack
    #[error("undo snapshot {position}: {reason}")]
    Snapshot {
        position: usize,
        reason: Box<MatchCorruption>,
    },
}
