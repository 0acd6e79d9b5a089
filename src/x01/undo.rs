//! Snapshot stack for turn-by-turn undo.

use super::player::Player;
use crate::core::{LegHistory, MatchPhase};
use serde::{Deserialize, Serialize};

/// Deep copy of the mutable match state taken before a visit is applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Player whose visit follows the snapshot
    pub player_index: usize,
    /// Score that was entered for that visit
    pub entered_score: u32,
    pub(crate) players: Vec<Player>,
    pub(crate) current_player: usize,
    pub(crate) leg_start_player: usize,
    pub(crate) set_start_player: usize,
    pub(crate) legs_completed: u32,
    pub(crate) leg_history: LegHistory,
    pub(crate) phase: MatchPhase,
}

/// The visit removed by an undo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UndoneTurn {
    pub player_index: usize,
    pub entered_score: u32,
}

impl From<&Snapshot> for UndoneTurn {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            player_index: snapshot.player_index,
            entered_score: snapshot.entered_score,
        }
    }
}

/// Last-in first-out stack of snapshots, one per accepted visit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UndoStack {
    snapshots: Vec<Snapshot>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop()
    }

    /// The snapshot the next undo would restore.
    pub fn peek(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Snapshots from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(player_index: usize, entered_score: u32) -> Snapshot {
        Snapshot {
            player_index,
            entered_score,
            players: vec![Player::new(1, "Ann".to_string(), None, 501)],
            current_player: player_index,
            leg_start_player: 0,
            set_start_player: 0,
            legs_completed: 0,
            leg_history: LegHistory::new(),
            phase: MatchPhase::InPlay,
        }
    }

    #[test]
    fn stack_is_last_in_first_out() {
        let mut stack = UndoStack::new();
        stack.push(snapshot(0, 60));
        stack.push(snapshot(1, 100));

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek().map(|s| s.entered_score), Some(100));
        assert_eq!(stack.pop().map(|s| s.entered_score), Some(100));
        assert_eq!(stack.pop().map(|s| s.entered_score), Some(60));
        assert!(stack.pop().is_none());
    }

    #[test]
    fn undone_turn_from_snapshot() {
        let turn = UndoneTurn::from(&snapshot(1, 45));
        assert_eq!(
            turn,
            UndoneTurn {
                player_index: 1,
                entered_score: 45
            }
        );
    }

    #[test]
    fn clear_empties_stack() {
        let mut stack = UndoStack::new();
        stack.push(snapshot(0, 1));
        stack.clear();
        assert!(stack.is_empty());
    }
}
