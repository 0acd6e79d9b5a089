//! Results of entering a visit.

use thiserror::Error;

/// What a single accepted visit did to the match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Points were subtracted and play moved on
    Scored {
        player: usize,
        scored: u32,
        remaining: u32,
    },

    /// The visit would have left a negative score, 1, or an unfinishable zero
    Bust { player: usize, remaining: u32 },

    /// The player checked out and a new leg started
    LegWon { player: usize, darts: u32 },

    /// The checkout also won the set and a new set started
    SetWon {
        player: usize,
        darts: u32,
        sets_won: u32,
    },

    /// The checkout won the match
    MatchWon {
        player: usize,
        darts: u32,
        sets_won: u32,
    },
}

impl TurnOutcome {
    /// Index of the player who threw the visit.
    pub fn player(&self) -> usize {
        match self {
            Self::Scored { player, .. }
            | Self::Bust { player, .. }
            | Self::LegWon { player, .. }
            | Self::SetWon { player, .. }
            | Self::MatchWon { player, .. } => *player,
        }
    }

    /// Whether the visit finished a leg.
    pub fn is_checkout(&self) -> bool {
        matches!(
            self,
            Self::LegWon { .. } | Self::SetWon { .. } | Self::MatchWon { .. }
        )
    }
}

/// Errors when entering a visit. The match is left untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("{0} is not a score three darts can make")]
    InvalidScore(u32),

    #[error("match is already won by player {winner}")]
    MatchOver { winner: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_is_reported_for_every_outcome() {
        let outcomes = [
            TurnOutcome::Scored {
                player: 1,
                scored: 60,
                remaining: 441,
            },
            TurnOutcome::Bust {
                player: 1,
                remaining: 20,
            },
            TurnOutcome::LegWon {
                player: 1,
                darts: 12,
            },
        ];
        assert!(outcomes.iter().all(|o| o.player() == 1));
    }

    #[test]
    fn checkout_outcomes() {
        assert!(!TurnOutcome::Bust {
            player: 0,
            remaining: 3
        }
        .is_checkout());
        assert!(TurnOutcome::SetWon {
            player: 0,
            darts: 9,
            sets_won: 1
        }
        .is_checkout());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            MatchError::InvalidScore(181).to_string(),
            "181 is not a score three darts can make"
        );
        assert_eq!(
            MatchError::MatchOver { winner: 0 }.to_string(),
            "match is already won by player 0"
        );
    }
}
