//! Doubles Practice
//!
//! This demo runs a seeded doubles drill and prints the hit rate per finish
//! category.
//!
//! Key concepts:
//! - Reproducible targets from a seed
//! - Hit and miss counting per category
//! - Checkout routes for each target
//!
//! Run with: cargo run --example doubles_practice

use oche::checkout::get_suggestion;
use oche::core::FinishCategory;
use oche::doubles::DoublesDrill;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Doubles Practice Demo ===\n");

    let mut drill = DoublesDrill::from_seed(2024);
    drill.init();

    for visit in 1..=12 {
        let Some(target) = drill.current_target() else {
            break;
        };
        let route = get_suggestion(target).unwrap_or("-");
        // Pretend we hit every third target.
        let outcome = if visit % 3 == 0 { drill.hit() } else { drill.miss() };
        if let Some(outcome) = outcome {
            println!(
                "  {:>2}. {:>3} [{}] {:<14} {}",
                visit,
                target,
                outcome.category,
                route,
                if outcome.hit { "HIT" } else { "miss" }
            );
        }
    }

    println!("\nStats");
    println!("----------------------------------------");
    let stats = drill.get_stats();
    for category in FinishCategory::ALL {
        let count = stats.get(category);
        println!(
            "  {}: {}/{} ({:.0}%)",
            category.label(),
            count.successes,
            count.attempts,
            count.percent()
        );
    }
    println!("  Overall: {:.0}%", stats.percent());

    println!("\n=== Demo Complete ===");
}
