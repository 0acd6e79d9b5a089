//! Builder API for ergonomic match construction.
//!
//! The builder collects a [`MatchSetup`](crate::enforcement::MatchSetup) and
//! validates it in one pass when `build` is called.

pub mod error;
pub mod match_builder;

pub use error::BuildError;
pub use match_builder::MatchBuilder;
