//! Career roster of registered players.
//!
//! Career records accumulate the totals of every finished match a player was
//! linked to. The roster is stored as JSON under a single key of a
//! [`KeyValueStore`].
//!
//! # Example
//!
//! ```rust
//! use oche::roster::{MemoryStore, RosterRepository};
//!
//! let repo = RosterRepository::new(MemoryStore::new());
//! let ann = repo.add("Ann").unwrap();
//! assert_eq!(repo.get_all().unwrap().len(), 1);
//!
//! repo.delete(ann.id).unwrap();
//! assert!(repo.get_all().unwrap().is_empty());
//! ```

pub mod effects;
pub mod error;
pub mod store;

pub use error::RosterError;
pub use store::{FileStore, KeyValueStore, MemoryStore};

use crate::core::{CheckoutTally, FinishCategory};
use crate::x01::MatchResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Store key the roster lives under.
pub const ROSTER_KEY: &str = "dart_scorer_players";

/// Career totals of one registered player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CareerRecord {
    pub id: Uuid,
    pub name: String,
    pub career_score: u64,
    pub career_darts: u64,
    pub legs_won: u64,
    pub sets_won: u64,
    pub career_turns_won_legs: u64,
    pub career_legs_won_count: u64,
    pub checkout: CheckoutTally,
}

impl CareerRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            career_score: 0,
            career_darts: 0,
            legs_won: 0,
            sets_won: 0,
            career_turns_won_legs: 0,
            career_legs_won_count: 0,
            checkout: CheckoutTally::default(),
        }
    }

    /// Career three-dart average.
    pub fn three_dart_average(&self) -> f64 {
        if self.career_darts == 0 {
            0.0
        } else {
            self.career_score as f64 / self.career_darts as f64 * 3.0
        }
    }

    /// Career checkout success rate for one category, in percent.
    pub fn checkout_percent(&self, category: FinishCategory) -> f64 {
        self.checkout.get(category).percent()
    }

    fn absorb(&mut self, result: &MatchResult) {
        self.career_score += u64::from(result.match_score);
        self.career_darts += u64::from(result.match_darts);
        self.legs_won += u64::from(result.legs_won);
        self.sets_won += u64::from(result.sets_won);
        self.career_turns_won_legs += u64::from(result.total_turns_won_legs);
        self.career_legs_won_count += u64::from(result.legs_won);
        self.checkout.absorb(&result.checkout);
    }
}

/// All registered players.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<CareerRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> &[CareerRecord] {
        &self.players
    }

    pub fn get(&self, id: Uuid) -> Option<&CareerRecord> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Register a new player and return the record.
    pub fn add(&mut self, name: &str) -> Result<CareerRecord, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::BlankName);
        }
        let record = CareerRecord::new(name);
        self.players.push(record.clone());
        Ok(record)
    }

    /// Remove a player. Returns whether a record was removed.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        self.players.len() != before
    }

    /// Credit match results to their career records.
    ///
    /// Results for unknown ids are skipped. Returns how many were applied.
    pub fn apply_match_results(&mut self, results: &[MatchResult]) -> usize {
        let mut applied = 0;
        for result in results {
            match self.players.iter_mut().find(|p| p.id == result.roster_id) {
                Some(record) => {
                    record.absorb(result);
                    applied += 1;
                }
                None => debug!(id = %result.roster_id, "no career record for match result"),
            }
        }
        applied
    }
}

/// Roster persisted in a key-value store.
pub struct RosterRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> RosterRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the roster; a missing key is an empty roster.
    pub fn load(&self) -> Result<Roster, RosterError> {
        match self.store.get(ROSTER_KEY)? {
            None => Ok(Roster::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|err| {
                warn!("Failed to parse roster: {}", err);
                RosterError::Corrupt(err.to_string())
            }),
        }
    }

    pub fn save(&self, roster: &Roster) -> Result<(), RosterError> {
        let json = serde_json::to_string(roster).map_err(|err| RosterError::Store(err.to_string()))?;
        self.store.set(ROSTER_KEY, &json)
    }

    pub fn get_all(&self) -> Result<Vec<CareerRecord>, RosterError> {
        Ok(self.load()?.players)
    }

    pub fn add(&self, name: &str) -> Result<CareerRecord, RosterError> {
        let mut roster = self.load()?;
        let record = roster.add(name)?;
        self.save(&roster)?;
        info!(id = %record.id, name = %record.name, "player added to roster");
        Ok(record)
    }

    pub fn delete(&self, id: Uuid) -> Result<(), RosterError> {
        let mut roster = self.load()?;
        if !roster.delete(id) {
            return Err(RosterError::UnknownPlayer(id));
        }
        self.save(&roster)?;
        info!(id = %id, "player removed from roster");
        Ok(())
    }

    pub fn apply_match_results(&self, results: &[MatchResult]) -> Result<usize, RosterError> {
        let mut roster = self.load()?;
        let applied = roster.apply_match_results(results);
        self.save(&roster)?;
        info!(applied, "match results credited to roster");
        Ok(applied)
    }

    /// Drop every career record.
    pub fn reset(&self) -> Result<(), RosterError> {
        self.store.remove(ROSTER_KEY)?;
        info!("roster reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_for(id: Uuid) -> MatchResult {
        let mut checkout = CheckoutTally::default();
        checkout.record_attempt(FinishCategory::OneDart);
        checkout.record_attempt(FinishCategory::OneDart);
        checkout.record_success(FinishCategory::OneDart);
        MatchResult {
            roster_id: id,
            match_score: 501,
            match_darts: 18,
            legs_won: 1,
            sets_won: 0,
            total_turns_won_legs: 6,
            checkout,
        }
    }

    #[test]
    fn add_rejects_blank_names() {
        let mut roster = Roster::new();
        assert!(matches!(roster.add("   "), Err(RosterError::BlankName)));
        let record = roster.add(" Ann ").unwrap();
        assert_eq!(record.name, "Ann");
        assert_eq!(roster.get(record.id), Some(&record));
    }

    #[test]
    fn added_players_get_distinct_ids() {
        let mut roster = Roster::new();
        let a = roster.add("Ann").unwrap();
        let b = roster.add("Ann").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn apply_results_accumulates_and_skips_unknown() {
        let mut roster = Roster::new();
        let ann = roster.add("Ann").unwrap();

        let applied = roster.apply_match_results(&[result_for(ann.id), result_for(Uuid::new_v4())]);
        assert_eq!(applied, 1);
        roster.apply_match_results(&[result_for(ann.id)]);

        let record = roster.get(ann.id).unwrap();
        assert_eq!(record.career_score, 1002);
        assert_eq!(record.career_darts, 36);
        assert_eq!(record.legs_won, 2);
        assert_eq!(record.career_legs_won_count, 2);
        assert_eq!(record.career_turns_won_legs, 12);
        assert_eq!(record.checkout.get(FinishCategory::OneDart).attempts, 4);
        assert_eq!(record.checkout_percent(FinishCategory::OneDart), 50.0);
        assert!((record.three_dart_average() - 83.5).abs() < 1e-9);
    }

    #[test]
    fn missing_key_loads_empty_roster() {
        let repo = RosterRepository::new(MemoryStore::new());
        assert!(repo.load().unwrap().players().is_empty());
    }

    #[test]
    fn repository_persists_changes() {
        let repo = RosterRepository::new(MemoryStore::new());
        let ann = repo.add("Ann").unwrap();
        repo.add("Bob").unwrap();
        repo.apply_match_results(&[result_for(ann.id)]).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].career_score, 501);

        repo.delete(ann.id).unwrap();
        assert_eq!(repo.get_all().unwrap().len(), 1);
        assert!(matches!(
            repo.delete(ann.id),
            Err(RosterError::UnknownPlayer(id)) if id == ann.id
        ));
    }

    #[test]
    fn reset_removes_everything() {
        let repo = RosterRepository::new(MemoryStore::new());
        repo.add("Ann").unwrap();
        repo.reset().unwrap();
        assert!(repo.get_all().unwrap().is_empty());
        assert_eq!(repo.store().get(ROSTER_KEY).unwrap(), None);
    }

    #[test]
    fn corrupt_data_is_reported() {
        let store = MemoryStore::new();
        store.set(ROSTER_KEY, "{not json").unwrap();
        let repo = RosterRepository::new(store);
        assert!(matches!(repo.load(), Err(RosterError::Corrupt(_))));
    }

    #[test]
    fn roster_is_stored_as_a_json_array() {
        let repo = RosterRepository::new(MemoryStore::new());
        repo.add("Ann").unwrap();
        let raw = repo.store().get(ROSTER_KEY).unwrap().unwrap();
        assert!(raw.starts_with('['));
    }
}
