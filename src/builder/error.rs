//! Build errors for matches.

use crate::enforcement::SetupViolation;
use thiserror::Error;

/// Errors that can occur when starting a match.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("invalid match setup: {}", describe(.0))]
    InvalidSetup(Vec<SetupViolation>),
}

impl BuildError {
    /// Every rule the setup broke.
    pub fn violations(&self) -> &[SetupViolation] {
        match self {
            Self::InvalidSetup(violations) => violations,
        }
    }
}

fn describe(violations: &[SetupViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
