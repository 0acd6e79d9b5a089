//! Oche: a scoring core for X01 darts matches and doubles practice
//!
//! The match engine is a pure state machine: every visit goes through
//! [`X01Match::enter_score`], which snapshots the match first so any visit can
//! be undone. I/O stays at the edges, in the roster store, checkpoints and
//! configuration.
//!
//! # Modules
//!
//! - **core**: finish categories, checkout tallies, leg history, match phase
//! - **x01**: the match engine, player statistics and undo
//! - **checkout**: routes for every finishable score
//! - **doubles**: random finish targets and hit/miss counting
//! - **enforcement** / **builder**: setup validation and a fluent builder
//! - **roster**: career records in a key-value store, with effects
//! - **checkpoint**: versioned save and resume of a match
//! - **session**: the [`Scorer`] facade a front end drives
//!
//! # Example
//!
//! ```rust
//! use oche::builder::MatchBuilder;
//! use oche::x01::TurnOutcome;
//!
//! let mut game = MatchBuilder::new()
//!     .players(["Ann", "Bob"])
//!     .starting_score(101)
//!     .legs_to_win_set(1)
//!     .sets_to_win_match(Some(1))
//!     .build()
//!     .unwrap();
//!
//! game.enter_score(60).unwrap();
//! assert_eq!(game.checkout_suggestion(), Some("T17 Bull"));
//! game.enter_score(45).unwrap();
//!
//! let outcome = game.enter_score(41).unwrap();
//! assert!(matches!(outcome, TurnOutcome::MatchWon { player: 0, .. }));
//! assert!(game.is_finished());
//! ```

pub mod builder;
pub mod checkout;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod doubles;
pub mod enforcement;
pub mod roster;
pub mod session;
pub mod x01;

// Re-export commonly used types
pub use builder::{BuildError, MatchBuilder};
pub use checkout::get_suggestion;
pub use checkpoint::{CheckpointError, MatchCheckpoint};
pub use config::ScorerConfig;
pub use core::{CheckoutTally, FinishCategory, GameMode, MatchPhase, State};
pub use doubles::DoublesDrill;
pub use enforcement::MatchSetup;
pub use roster::{CareerRecord, RosterError, RosterRepository};
pub use session::{ScoreOutcome, Scorer, SessionError};
pub use x01::{MatchError, TurnOutcome, X01Match};
