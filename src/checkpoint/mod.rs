//! Checkpoint and resume for X01 matches.
//!
//! A checkpoint captures the whole match, undo stack included, so an
//! interrupted match can be restored exactly where it stopped.
//!
//! # Example
//!
//! ```rust
//! use oche::builder::MatchBuilder;
//! use oche::checkpoint::MatchCheckpoint;
//!
//! let mut game = MatchBuilder::new().players(["Ann", "Bob"]).build().unwrap();
//! game.enter_score(100).unwrap();
//!
//! let json = game.checkpoint().to_json().unwrap();
//! let restored = MatchCheckpoint::from_json(&json).unwrap().restore().unwrap();
//! assert_eq!(restored, game);
//! ```

use crate::x01::X01Match;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::{CheckpointError, MatchCorruption};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchCheckpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// The match as it stood
    pub game: X01Match,
}

impl MatchCheckpoint {
    pub fn new(game: X01Match) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            game,
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::Decode(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::Decode(e.to_string()))
    }

    /// Check the version and structure, then hand back the match.
    pub fn restore(self) -> Result<X01Match, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        self.game.validate_structure()?;
        debug!(id = %self.id, "checkpoint restored");
        Ok(self.game)
    }
}

impl X01Match {
    /// Capture the match as a checkpoint.
    pub fn checkpoint(&self) -> MatchCheckpoint {
        MatchCheckpoint::new(self.clone())
    }

    /// Restore a match from a checkpoint.
    pub fn from_checkpoint(checkpoint: MatchCheckpoint) -> Result<Self, CheckpointError> {
        checkpoint.restore()
    }
}
