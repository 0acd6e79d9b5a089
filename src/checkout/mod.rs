//! Checkout suggestions.
//!
//! Looks up the preferred route for a remaining score. The table covers every
//! score from 2 to 170 that can be finished in one visit.
//!
//! # Example
//!
//! ```rust
//! use oche::checkout::{get_suggestion, Checkout};
//!
//! assert_eq!(get_suggestion(170), Some("T20 T20 Bull"));
//! assert_eq!(get_suggestion(169), None);
//!
//! let route = Checkout::for_score(81).unwrap();
//! assert_eq!(route.darts().len(), 2);
//! assert_eq!(route.total(), 81);
//! ```

mod dart;
mod table;

pub use crate::core::is_finish_possible;
pub use dart::{Dart, DartParseError};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Suggested route for `score`, `None` when it cannot be finished.
pub fn get_suggestion(score: u32) -> Option<&'static str> {
    table::route(score)
}

/// A parsed checkout route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkout {
    darts: Vec<Dart>,
}

impl Checkout {
    /// Parse a whitespace separated route such as `"T20 T19 D12"`.
    pub fn parse(route: &str) -> Result<Self, DartParseError> {
        let darts = route
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Dart>, _>>()?;
        if darts.is_empty() {
            return Err(DartParseError(route.to_string()));
        }
        Ok(Self { darts })
    }

    /// The table route for `score`.
    pub fn for_score(score: u32) -> Option<Self> {
        get_suggestion(score).and_then(|route| Self::parse(route).ok())
    }

    pub fn darts(&self) -> &[Dart] {
        &self.darts
    }

    pub fn total(&self) -> u32 {
        self.darts.iter().map(Dart::value).sum()
    }

    /// Whether the route finishes on a double or the bull.
    pub fn ends_on_double(&self) -> bool {
        self.darts.last().is_some_and(Dart::is_double)
    }
}

impl fmt::Display for Checkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, dart) in self.darts.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{dart}")?;
        }
        Ok(())
    }
}
