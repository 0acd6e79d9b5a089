//! Single dart notation used by checkout routes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error parsing a dart token such as `T20` or `Bull`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid dart notation '{0}'")]
pub struct DartParseError(pub String);

/// One dart of a checkout route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dart {
    Single(u8),
    Double(u8),
    Treble(u8),
    /// Outer bull, 25.
    OuterBull,
    /// Inner bull, 50. Counts as a double.
    Bull,
}

impl Dart {
    pub fn value(&self) -> u32 {
        match self {
            Self::Single(n) => u32::from(*n),
            Self::Double(n) => 2 * u32::from(*n),
            Self::Treble(n) => 3 * u32::from(*n),
            Self::OuterBull => 25,
            Self::Bull => 50,
        }
    }

    /// Whether the dart may be the last one of a checkout.
    pub fn is_double(&self) -> bool {
        matches!(self, Self::Double(_) | Self::Bull)
    }
}

impl FromStr for Dart {
    type Err = DartParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let err = || DartParseError(token.to_string());
        match token {
            "Bull" => return Ok(Self::Bull),
            "25" => return Ok(Self::OuterBull),
            _ => {}
        }

        let (ctor, digits): (fn(u8) -> Dart, &str) = match token.as_bytes().first() {
            Some(b'T') => (Self::Treble, &token[1..]),
            Some(b'D') => (Self::Double, &token[1..]),
            _ => (Self::Single, token),
        };
        let segment: u8 = digits.parse().map_err(|_| err())?;
        if !(1..=20).contains(&segment) {
            return Err(err());
        }
        Ok(ctor(segment))
    }
}

impl fmt::Display for Dart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(n) => write!(f, "{n}"),
            Self::Double(n) => write!(f, "D{n}"),
            Self::Treble(n) => write!(f, "T{n}"),
            Self::OuterBull => f.write_str("25"),
            Self::Bull => f.write_str("Bull"),
        }
    }
}
