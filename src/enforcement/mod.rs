//! Validation-based enforcement of match setup rules.
//!
//! Setup is checked with Stillwater's `Validation` type so that ALL
//! violations are reported at once instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use oche::enforcement::{MatchSetup, SetupViolation};
//! use stillwater::validation::Validation;
//!
//! let mut setup = MatchSetup::new(["Ann"]);
//! setup.starting_score = 401;
//!
//! match setup.validate() {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
//!     Validation::Success(_) => panic!("expected violations"),
//! }
//! ```

pub mod context;
pub mod rules;
pub mod violations;

pub use context::MatchSetup;
pub use rules::{validate_setup, MAX_NAME_LEN, MAX_PLAYERS, MIN_PLAYERS, STARTING_SCORES};
pub use violations::SetupViolation;
