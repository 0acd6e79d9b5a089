//! X01 match state machine.

use super::config::{Entrant, MatchConfig};
use super::outcome::{MatchError, TurnOutcome};
use super::player::{MatchResult, Player, PlayerAverages};
use super::undo::{Snapshot, UndoStack, UndoneTurn};
use crate::builder::BuildError;
use crate::checkout::get_suggestion;
use crate::checkpoint::MatchCorruption;
use crate::core::{
    is_finish_possible, is_valid_visit, FinishCategory, LegHistory, LegRecord, MatchPhase, State,
};
use crate::enforcement::{MatchSetup, MAX_PLAYERS, MIN_PLAYERS};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A running X01 match.
///
/// Every accepted visit is applied by [`X01Match::enter_score`], which
/// snapshots the match first so [`X01Match::undo_last_turn`] can step back
/// one visit at a time.
///
/// # Example
///
/// ```rust
/// use oche::builder::MatchBuilder;
/// use oche::x01::TurnOutcome;
///
/// let mut game = MatchBuilder::new()
///     .players(["Ann", "Bob"])
///     .starting_score(101)
///     .build()
///     .unwrap();
///
/// game.enter_score(60).unwrap();
/// assert_eq!(game.player(0).unwrap().score, 41);
/// assert_eq!(game.current_player(), 1);
///
/// game.undo_last_turn();
/// assert_eq!(game.player(0).unwrap().score, 101);
/// assert_eq!(game.current_player(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct X01Match {
    config: MatchConfig,
    players: Vec<Player>,
    current_player: usize,
    leg_start_player: usize,
    set_start_player: usize,
    legs_completed: u32,
    leg_history: LegHistory,
    phase: MatchPhase,
    undo: UndoStack,
}

impl X01Match {
    /// Validate `setup` and start a match.
    pub fn init_new_match(setup: MatchSetup) -> Result<Self, BuildError> {
        let (config, entrants) = setup.into_validated()?;
        Ok(Self::start(config, entrants))
    }

    /// Start a match from already validated parts.
    pub(crate) fn start(config: MatchConfig, entrants: Vec<Entrant>) -> Self {
        let players = entrants
            .into_iter()
            .enumerate()
            .map(|(idx, entrant)| {
                Player::new(idx + 1, entrant.name, entrant.roster_id, config.starting_score)
            })
            .collect::<Vec<_>>();

        info!(
            players = players.len(),
            starting_score = config.starting_score,
            start_player = config.start_player,
            "x01 match started"
        );

        Self {
            current_player: config.start_player,
            leg_start_player: config.start_player,
            set_start_player: config.start_player,
            config,
            players,
            legs_completed: 0,
            leg_history: LegHistory::new(),
            phase: MatchPhase::InPlay,
            undo: UndoStack::new(),
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Index of the player to throw next.
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn leg_start_player(&self) -> usize {
        self.leg_start_player
    }

    pub fn set_start_player(&self) -> usize {
        self.set_start_player
    }

    pub fn legs_completed(&self) -> u32 {
        self.legs_completed
    }

    pub fn leg_history(&self) -> &LegHistory {
        &self.leg_history
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_final()
    }

    /// Number of visits that can be undone.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Checkout route for the player to throw next.
    pub fn checkout_suggestion(&self) -> Option<&'static str> {
        self.players
            .get(self.current_player)
            .and_then(|p| get_suggestion(p.score))
    }

    /// Apply one visit of three darts for the current player.
    ///
    /// Rejected entries leave the match unchanged and push no snapshot.
    /// Entering the full remainder of a score that cannot be checked out
    /// (e.g. 165 on 165) is a bust and still counts three darts.
    pub fn enter_score(&mut self, entered: u32) -> Result<TurnOutcome, MatchError> {
        if let MatchPhase::Won { winner } = self.phase {
            return Err(MatchError::MatchOver { winner });
        }
        if !is_valid_visit(entered) {
            return Err(MatchError::InvalidScore(entered));
        }

        let index = self.current_player;
        self.undo.push(self.snapshot(index, entered));

        let player = &mut self.players[index];
        let before = player.score;
        let category = FinishCategory::of(before);
        if let Some(category) = category {
            player.checkout.record_attempt(category);
        }
        player.turns_this_leg += 1;

        let busted = entered > before
            || before - entered == 1
            || (entered == before && !is_finish_possible(before));
        if busted {
            player.add_darts(3);
            debug!(player = index, entered, remaining = before, "bust");
            self.advance();
            return Ok(TurnOutcome::Bust {
                player: index,
                remaining: before,
            });
        }

        if entered == before {
            return Ok(self.check_out(index, entered, category));
        }

        let remaining = before - entered;
        player.score = remaining;
        player.add_visit(entered);
        debug!(player = index, entered, remaining, "visit scored");
        self.advance();
        Ok(TurnOutcome::Scored {
            player: index,
            scored: entered,
            remaining,
        })
    }

    /// Restore the state from before the last accepted visit.
    ///
    /// Returns `None` when there is nothing to undo.
    pub fn undo_last_turn(&mut self) -> Option<UndoneTurn> {
        let snapshot = self.undo.pop()?;
        let undone = UndoneTurn::from(&snapshot);

        self.players = snapshot.players;
        self.current_player = snapshot.current_player;
        self.leg_start_player = snapshot.leg_start_player;
        self.set_start_player = snapshot.set_start_player;
        self.legs_completed = snapshot.legs_completed;
        self.leg_history = snapshot.leg_history;
        self.phase = snapshot.phase;

        debug!(
            player = undone.player_index,
            entered = undone.entered_score,
            "visit undone"
        );
        Some(undone)
    }

    /// Averages for every player in seat order.
    pub fn get_averages(&self) -> Vec<PlayerAverages> {
        self.players.iter().map(Player::averages).collect()
    }

    /// Match totals of every player linked to a career record.
    pub fn match_results(&self) -> Vec<MatchResult> {
        self.players.iter().filter_map(Player::match_result).collect()
    }

    /// Restart the match with the same players and rules.
    pub fn reset(&mut self) {
        let starting_score = self.config.starting_score;
        self.players = self
            .players
            .iter()
            .map(|p| p.cleared(starting_score))
            .collect();
        self.current_player = self.config.start_player;
        self.leg_start_player = self.config.start_player;
        self.set_start_player = self.config.start_player;
        self.legs_completed = 0;
        self.leg_history = LegHistory::new();
        self.phase = MatchPhase::InPlay;
        self.undo.clear();
        info!("x01 match reset");
    }

    /// Structural checks used when a match is loaded from outside.
    ///
    /// Covers the rules, the live position and every undo snapshot, so that
    /// neither the next visit nor any later undo can index past the seats.
    pub(crate) fn validate_structure(&self) -> Result<(), MatchCorruption> {
        if self.config.legs_to_win_set == 0 {
            return Err(MatchCorruption::NoLegsToWin);
        }
        if self.config.sets_to_win_match == Some(0) {
            return Err(MatchCorruption::NoSetsToWin);
        }

        let start = self.config.starting_score;
        check_position(
            &self.players,
            &[
                ("current player", self.current_player),
                ("leg start player", self.leg_start_player),
                ("set start player", self.set_start_player),
                ("start player", self.config.start_player),
            ],
            self.phase,
            start,
        )?;

        let expected = self.players.len();
        for (position, snapshot) in self.undo.iter().enumerate() {
            let seats = &snapshot.players;
            let checked = if seats.len() != expected && check_player_count(seats.len()).is_ok() {
                Err(MatchCorruption::SeatCountChanged {
                    count: seats.len(),
                    expected,
                })
            } else {
                check_position(
                    seats,
                    &[
                        ("visiting player", snapshot.player_index),
                        ("current player", snapshot.current_player),
                        ("leg start player", snapshot.leg_start_player),
                        ("set start player", snapshot.set_start_player),
                    ],
                    snapshot.phase,
                    start,
                )
            };
            checked.map_err(|reason| MatchCorruption::Snapshot {
                position,
                reason: Box::new(reason),
            })?;
        }
        Ok(())
    }

    fn snapshot(&self, player_index: usize, entered_score: u32) -> Snapshot {
        Snapshot {
            player_index,
            entered_score,
            players: self.players.clone(),
            current_player: self.current_player,
            leg_start_player: self.leg_start_player,
            set_start_player: self.set_start_player,
            legs_completed: self.legs_completed,
            leg_history: self.leg_history.clone(),
            phase: self.phase,
        }
    }

    fn advance(&mut self) {
        self.current_player = (self.current_player + 1) % self.players.len();
    }

    fn check_out(
        &mut self,
        index: usize,
        entered: u32,
        category: Option<FinishCategory>,
    ) -> TurnOutcome {
        let set_number = self.players.iter().map(|p| p.sets_won).sum::<u32>() + 1;
        let leg_number = self.players.iter().map(|p| p.legs_won).sum::<u32>() + 1;

        let player = &mut self.players[index];
        if let Some(category) = category {
            player.checkout.record_success(category);
        }
        player.score = 0;
        player.add_visit(entered);
        player.total_turns_won_legs += player.turns_this_leg;
        player.legs_won_count += 1;
        player.legs_won += 1;

        let darts = player.leg_darts;
        let set_won = player.legs_won >= self.config.legs_to_win_set;
        if set_won {
            player.sets_won += 1;
        }
        let sets_won = player.sets_won;

        self.legs_completed += 1;
        self.leg_history = self.leg_history.record(LegRecord {
            winner_index: index,
            darts_thrown: darts,
            set_number,
            leg_number,
            finished_at: Utc::now(),
        });
        info!(player = index, darts, set_number, leg_number, "leg won");

        if !set_won {
            self.start_new_leg(false);
            return TurnOutcome::LegWon {
                player: index,
                darts,
            };
        }

        for p in &mut self.players {
            p.legs_won = 0;
        }

        if self
            .config
            .sets_to_win_match
            .is_some_and(|target| sets_won >= target)
        {
            self.phase = MatchPhase::Won { winner: index };
            info!(player = index, sets_won, "match won");
            return TurnOutcome::MatchWon {
                player: index,
                darts,
                sets_won,
            };
        }

        info!(player = index, sets_won, "set won");
        self.start_new_set();
        TurnOutcome::SetWon {
            player: index,
            darts,
            sets_won,
        }
    }

    fn start_new_leg(&mut self, is_new_set: bool) {
        let starting_score = self.config.starting_score;
        for p in &mut self.players {
            p.reset_for_leg(starting_score);
        }

        self.leg_start_player = if is_new_set {
            self.set_start_player
        } else {
            (self.leg_start_player + 1) % self.players.len()
        };
        self.current_player = self.leg_start_player;
    }

    fn start_new_set(&mut self) {
        self.set_start_player = (self.set_start_player + 1) % self.players.len();
        self.start_new_leg(true);
    }
}

fn check_player_count(count: usize) -> Result<(), MatchCorruption> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(())
    } else {
        Err(MatchCorruption::PlayerCount {
            count,
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        })
    }
}

/// Seat pointers, winner and remaining scores of one position in the match.
fn check_position(
    players: &[Player],
    seats: &[(&'static str, usize)],
    phase: MatchPhase,
    start: u32,
) -> Result<(), MatchCorruption> {
    let count = players.len();
    check_player_count(count)?;

    let winner = phase.winner().map(|index| ("winner", index));
    for &(seat, index) in seats.iter().chain(winner.iter()) {
        if index >= count {
            return Err(MatchCorruption::SeatOutOfRange {
                seat,
                index,
                players: count,
            });
        }
    }
    match players.iter().position(|p| p.score > start) {
        Some(seat) => Err(MatchCorruption::ScoreAboveStart {
            seat,
            score: players[seat].score,
            start,
        }),
        None => Ok(()),
    }
}
