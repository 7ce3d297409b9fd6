//! Stats command handler

use super::open_store;
use shotlog::config::Config;
use shotlog::core::stats::{Statistics, StatsView};
use shotlog::error;

/// Run the stats command.
///
/// A failed read still prints the last known (here: empty) statistics,
/// with a warning on stderr.
pub fn run(json: bool, config: &Config) {
    let mut view = StatsView::new();
    match open_store(config) {
        Some(store) => {
            if let Err(e) = view.refresh(&store) {
                eprintln!("⚠ Could not load shots ({e}); showing last known statistics");
            }
        }
        None => eprintln!("⚠ Showing last known statistics"),
    }

    if json {
        match serde_json::to_string_pretty(view.statistics()) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                error!("Failed to serialize statistics: {e}");
                eprintln!("✗ Failed to serialize statistics: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print_statistics(view.statistics());
    }
}

fn print_statistics(stats: &Statistics) {
    println!("\n=== Overview ===\n");
    println!("  Total shots:      {}", stats.total_shots);
    println!("  Average distance: {} yd", stats.avg_distance);
    println!("  Accuracy:         {}%", stats.accuracy);

    if stats.is_empty() {
        println!("\nNo shots recorded yet.");
        return;
    }

    println!("\n=== Recent Sessions ===\n");
    for session in &stats.recent_sessions {
        println!(
            "  {}  {:>4} shots  {:>4} yd avg",
            session.date, session.shot_count, session.avg_distance
        );
    }

    println!("\n=== Clubs ===\n");
    for club in &stats.club_stats {
        println!(
            "  {:<8} {:>4} shots  {:>4} yd avg  {:>3}% accurate",
            club.club,
            club.shot_count,
            club.avg_distance,
            club.accuracy
        );
    }
}
