//! Roster error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while reading or writing the career roster
#[derive(Debug, Error)]
pub enum RosterError {
    /// The store could not be read or written
    #[error("Roster store failed: {0}")]
    Store(String),

    /// Stored roster data is not valid JSON for a roster
    #[error("Roster data is corrupt: {0}")]
    Corrupt(String),

    /// No career record with this id
    #[error("No player with id {0}")]
    UnknownPlayer(Uuid),

    /// A career record needs a non-blank name
    #[error("Player name must not be blank")]
    BlankName,
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        Self::Store(err.to_string())
    }
}
