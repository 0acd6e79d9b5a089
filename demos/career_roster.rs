//! Career Roster
//!
//! This demo registers players in a file-backed roster, plays a match between
//! them and credits the result to their careers using roster effects.
//!
//! Key concepts:
//! - Key-value store environment for effects
//! - Linking match players to career records
//! - Accumulating career statistics
//!
//! Run with: cargo run --example career_roster

use oche::builder::MatchBuilder;
use oche::roster::effects::{add_player, load_roster, record_match, RosterEnv};
use oche::roster::FileStore;
use stillwater::effect::Effect;
use stillwater::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Career Roster Demo ===\n");

    let dir = std::env::temp_dir().join("oche-career-roster-demo");
    let store = match FileStore::open(&dir) {
        Ok(store) => store,
        Err(err) => {
            println!("Could not open roster: {}", err);
            return;
        }
    };
    println!("Roster stored in {}\n", dir.display());
    let env = RosterEnv::new(store);

    let (ann, bob) = match (
        add_player("Ann").run(&env).await,
        add_player("Bob").run(&env).await,
    ) {
        (Ok(ann), Ok(bob)) => (ann, bob),
        (Err(err), _) | (_, Err(err)) => {
            println!("Could not add players: {}", err);
            return;
        }
    };

    let mut game = match MatchBuilder::new()
        .roster_player(ann.name.clone(), ann.id)
        .roster_player(bob.name.clone(), bob.id)
        .starting_score(101)
        .legs_to_win_set(1)
        .sets_to_win_match(Some(1))
        .build()
    {
        Ok(game) => game,
        Err(err) => {
            println!("Setup failed: {}", err);
            return;
        }
    };

    for visit in [60, 81, 21, 20] {
        if let Err(err) = game.enter_score(visit) {
            println!("Rejected {}: {}", visit, err);
        }
    }
    println!("Match finished: {}", game.is_finished());

    match record_match(&game).run(&env).await {
        Ok(applied) => println!("Credited {} career records", applied),
        Err(err) => println!("Could not credit results: {}", err),
    }

    println!("\nCareers");
    println!("----------------------------------------");
    match load_roster().run(&env).await {
        Ok(records) => {
            for record in records {
                println!(
                    "  {:<6} avg {:>6.2}  legs {}  sets {}",
                    record.name,
                    record.three_dart_average(),
                    record.legs_won,
                    record.sets_won
                );
            }
        }
        Err(err) => println!("Could not load roster: {}", err),
    }

    println!("\n=== Demo Complete ===");
}
