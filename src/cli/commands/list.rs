//! List command handler

use super::{open_store, record::describe};
use shotlog::config::Config;
use shotlog::core::models::{Club, Mode};
use shotlog::core::stats::local_date;
use shotlog::core::store::{ShotQuery, ShotStore, SortOrder};
use shotlog::{error, warn};

/// Run the list command.
pub fn run(
    mode: Option<Mode>,
    club: Option<Club>,
    limit: Option<usize>,
    oldest_first: bool,
    config: &Config,
) {
    let Some(store) = open_store(config) else {
        std::process::exit(1);
    };

    let order = if oldest_first {
        SortOrder::Ascending
    } else {
        SortOrder::Descending
    };
    let query = ShotQuery {
        mode,
        club,
        sort: Some(order),
        limit,
    };

    let records = match store.fetch_all(&query) {
        Ok(records) => records,
        Err(e) => {
            error!("Failed to load shots: {e}");
            eprintln!("✗ Failed to load shots: {e}");
            std::process::exit(1);
        }
    };

    if records.is_empty() {
        println!("No shots recorded yet. Add one with `shotlog record`.");
        return;
    }

    for record in &records {
        let date = local_date(record.timestamp, &chrono::Local);
        println!(
            "#{:<5} {date}  {:<12} {}",
            record.id,
            record.mode(),
            describe(record)
        );
        if !record.notes.is_empty() {
            println!("       {}", record.notes);
        }
    }

    let total = total_shots(&store, records.len());
    if records.len() < total {
        println!("\nShowing {} of {total} shots", records.len());
    }
}

/// Stored shot count, or `shown` when the store cannot count.
fn total_shots<S: ShotStore + ?Sized>(store: &S, shown: usize) -> usize {
    match store.count() {
        Ok(total) => total,
        Err(e) => {
            warn!("Failed to count shots: {e}");
            shown
        }
    }
}
