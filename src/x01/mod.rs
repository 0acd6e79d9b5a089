//! X01 match engine.
//!
//! Players count down from the starting score one visit at a time. A visit
//! that would leave less than zero, exactly one, or zero from a score that
//! cannot be finished is a bust. Checking out wins the leg; enough legs win
//! the set.

mod config;
mod game;
mod outcome;
mod player;
mod undo;

pub use config::{Entrant, MatchConfig};
pub use game::X01Match;
pub use outcome::{MatchError, TurnOutcome};
pub use player::{MatchResult, Player, PlayerAverages};
pub use undo::{Snapshot, UndoStack, UndoneTurn};
