//! Roster operations as Stillwater effects.
//!
//! The pure roster logic lives in [`Roster`]; these effects read and write it
//! through the store carried by [`RosterEnv`]. Each function returns
//! `impl Effect` and does nothing until run against an environment.

use super::{CareerRecord, KeyValueStore, RosterError, RosterRepository};
use crate::x01::{MatchResult, X01Match};
use std::sync::Arc;
use stillwater::effect::Effect;
use stillwater::prelude::*;
use uuid::Uuid;

/// Environment for roster effects.
#[derive(Clone)]
pub struct RosterEnv {
    store: Arc<dyn KeyValueStore>,
}

impl RosterEnv {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_arc(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn repository(&self) -> RosterRepository<Arc<dyn KeyValueStore>> {
        RosterRepository::new(Arc::clone(&self.store))
    }
}

/// Every career record.
pub fn load_roster() -> impl Effect<Output = Vec<CareerRecord>, Error = RosterError, Env = RosterEnv>
{
    from_fn(|env: &RosterEnv| env.repository().get_all())
}

pub fn add_player(
    name: impl Into<String>,
) -> impl Effect<Output = CareerRecord, Error = RosterError, Env = RosterEnv> {
    let name = name.into();
    from_fn(move |env: &RosterEnv| env.repository().add(&name))
}

pub fn delete_player(id: Uuid) -> impl Effect<Output = (), Error = RosterError, Env = RosterEnv> {
    from_fn(move |env: &RosterEnv| env.repository().delete(id))
}

/// Credit match results, returning how many records were updated.
pub fn apply_results(
    results: Vec<MatchResult>,
) -> impl Effect<Output = usize, Error = RosterError, Env = RosterEnv> {
    from_fn(move |env: &RosterEnv| env.repository().apply_match_results(&results))
}

/// Credit the linked players of a finished match.
///
/// A match still in play credits nothing.
pub fn record_match(
    game: &X01Match,
) -> impl Effect<Output = usize, Error = RosterError, Env = RosterEnv> {
    let results = if game.is_finished() {
        game.match_results()
    } else {
        Vec::new()
    };
    apply_results(results)
}

pub fn reset_roster() -> impl Effect<Output = (), Error = RosterError, Env = RosterEnv> {
    from_fn(|env: &RosterEnv| env.repository().reset())
}
