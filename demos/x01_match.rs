//! X01 Match
//!
//! This demo plays a short 301 match and prints the scoreboard after each
//! visit.
//!
//! Key concepts:
//! - Building a match with validated setup
//! - Busts, checkouts and leg/set progression
//! - Undoing a mistyped visit
//! - Checkpointing a match and resuming it
//!
//! Run with: cargo run --example x01_match

use oche::builder::MatchBuilder;
use oche::checkpoint::MatchCheckpoint;
use oche::x01::{TurnOutcome, X01Match};
use tracing_subscriber::EnvFilter;

fn scoreboard(game: &X01Match) {
    for (idx, p) in game.players().iter().enumerate() {
        let marker = if idx == game.current_player() { ">" } else { " " };
        println!(
            "  {} {:<6} {:>3}  legs {}  sets {}",
            marker, p.name, p.score, p.legs_won, p.sets_won
        );
    }
    if let Some(route) = game.checkout_suggestion() {
        println!("  Checkout: {}", route);
    }
}

fn describe(outcome: &TurnOutcome, game: &X01Match) -> String {
    let name = |idx: usize| game.players()[idx].name.clone();
    match outcome {
        TurnOutcome::Scored { player, scored, remaining } => {
            format!("{} scores {} ({} left)", name(*player), scored, remaining)
        }
        TurnOutcome::Bust { player, remaining } => {
            format!("{} busts, stays on {}", name(*player), remaining)
        }
        TurnOutcome::LegWon { player, darts } => {
            format!("{} wins the leg in {} darts", name(*player), darts)
        }
        TurnOutcome::SetWon { player, sets_won, .. } => {
            format!("{} wins the set ({} sets)", name(*player), sets_won)
        }
        TurnOutcome::MatchWon { player, sets_won, .. } => {
            format!("{} wins the match with {} sets", name(*player), sets_won)
        }
    }
}

fn play(game: &mut X01Match, visits: &[u32]) {
    for &visit in visits {
        match game.enter_score(visit) {
            Ok(outcome) => println!("{}", describe(&outcome, game)),
            Err(err) => println!("Rejected {}: {}", visit, err),
        }
        scoreboard(game);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== X01 Match Demo ===\n");

    let mut game = match MatchBuilder::new()
        .players(["Ann", "Bob"])
        .starting_score(301)
        .legs_to_win_set(2)
        .sets_to_win_match(Some(1))
        .build()
    {
        Ok(game) => game,
        Err(err) => {
            println!("Setup failed: {}", err);
            return;
        }
    };

    println!("Leg 1");
    println!("----------------------------------------");
    play(&mut game, &[100, 60, 140, 45, 200, 25]);

    println!("\nOops, Ann's 25 should have been 21. Undoing.");
    if let Some(undone) = game.undo_last_turn() {
        println!("Undid {} for player {}", undone.entered_score, undone.player_index + 1);
    }
    play(&mut game, &[21, 58]);

    println!("\nSaving a checkpoint mid-leg...");
    let json = match game.checkpoint().to_json() {
        Ok(json) => json,
        Err(err) => {
            println!("Checkpoint failed: {}", err);
            return;
        }
    };
    let mut game = match MatchCheckpoint::from_json(&json).and_then(MatchCheckpoint::restore) {
        Ok(game) => game,
        Err(err) => {
            println!("Resume failed: {}", err);
            return;
        }
    };
    println!("Resumed with {} undoable visits\n", game.undo_depth());
    play(&mut game, &[40]);

    println!("\nLeg 2");
    println!("----------------------------------------");
    play(&mut game, &[180, 100, 81, 100, 40]);

    println!("\nLeg 3");
    println!("----------------------------------------");
    play(&mut game, &[180, 0, 81, 0, 40]);
    play(&mut game, &[60]);

    println!("\nSummary");
    println!("----------------------------------------");
    for avg in game.get_averages() {
        println!(
            "  {:<6} avg {:>6.2}  checkout {:>3}%  darts {}",
            avg.name, avg.match_average, avg.checkout_percent, avg.darts_thrown
        );
    }

    println!("\n=== Demo Complete ===");
}
