//! Setup rules checked with Validation.

use crate::enforcement::context::MatchSetup;
use crate::enforcement::violations::SetupViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;
pub const MAX_NAME_LEN: usize = 30;
pub const STARTING_SCORES: [u32; 3] = [101, 301, 501];

type Check = Validation<(), NonEmptyVec<SetupViolation>>;

fn check(ok: bool, violation: impl FnOnce() -> SetupViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Enforce every setup rule, accumulating ALL violations.
pub fn validate_setup(setup: &MatchSetup) -> Check {
    let count = setup.players.len();
    let mut checks: Vec<Check> = Vec::new();

    checks.push(check((MIN_PLAYERS..=MAX_PLAYERS).contains(&count), || {
        SetupViolation::PlayerCount {
            count,
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        }
    }));

    for (idx, entrant) in setup.players.iter().enumerate() {
        let len = entrant.name.chars().count();
        checks.push(check(len <= MAX_NAME_LEN, || SetupViolation::NameTooLong {
            seat: idx + 1,
            len,
            max: MAX_NAME_LEN,
        }));
    }

    checks.push(check(STARTING_SCORES.contains(&setup.starting_score), || {
        SetupViolation::UnsupportedStartingScore(setup.starting_score)
    }));

    // An empty roster is already reported by the player count.
    if count > 0 {
        checks.push(check(setup.start_player < count, || {
            SetupViolation::StartPlayerOutOfRange {
                start_player: setup.start_player,
                players: count,
            }
        }));
    }

    checks.push(check(setup.legs_to_win_set >= 1, || SetupViolation::NoLegsToWin));
    checks.push(check(
        setup.sets_to_win_match.map_or(true, |sets| sets >= 1),
        || SetupViolation::NoSetsToWin,
    ));

    Validation::all_vec(checks).map(|_| ())
}
