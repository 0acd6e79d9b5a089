//! Core darts vocabulary shared by every engine.
//!
//! This module contains the pure functional core:
//! - Finish classification and visit validity
//! - Checkout attempt/success tallies
//! - The `State` trait and the match phase
//! - Immutable leg history
//!
//! Nothing in this module performs I/O.

mod finish;
mod history;
mod state;
mod tally;

pub use finish::{
    is_finish_possible, is_valid_visit, FinishCategory, GameMode, IMPOSSIBLE_FINISHES,
    IMPOSSIBLE_VISITS, MAX_FINISH, MAX_VISIT,
};
pub use history::{LegHistory, LegRecord};
pub use state::{MatchPhase, State};
pub use tally::{CategoryCount, CheckoutTally};
