//! Phase trait for the scoring state machines.
//!
//! A match moves through a small set of phases. The trait exposes pure
//! inspection methods used by the engines to decide whether input is still
//! accepted.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine phases.
///
/// All methods are pure - no side effects.
///
/// # Required Traits
///
/// - `Clone`: phases are copied into undo snapshots
/// - `PartialEq`: phases are compared when restoring and in tests
/// - `Debug`: phases show up in tracing fields
/// - `Serialize` + `Deserialize`: phases are part of checkpoints
///
/// # Example
///
/// ```rust
/// use oche::core::{MatchPhase, State};
///
/// let phase = MatchPhase::Won { winner: 1 };
/// assert_eq!(phase.name(), "Won");
/// assert!(phase.is_final());
/// assert!(!MatchPhase::InPlay.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name for display/logging.
    fn name(&self) -> &str;

    /// Whether no further input is expected.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether this phase represents a failure.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Phase of an X01 match.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Visits are being scored.
    #[default]
    InPlay,
    /// A player reached the configured number of sets.
    Won { winner: usize },
}

impl MatchPhase {
    /// Index of the winning player, if the match is over.
    pub fn winner(&self) -> Option<usize> {
        match self {
            Self::InPlay => None,
            Self::Won { winner } => Some(*winner),
        }
    }
}

impl State for MatchPhase {
    fn name(&self) -> &str {
        match self {
            Self::InPlay => "InPlay",
            Self::Won { .. } => "Won",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Won { .. })
    }
}
