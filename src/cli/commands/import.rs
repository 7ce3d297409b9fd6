//! Import command handler

use super::open_store;
use shotlog::config::Config;
use shotlog::core::export::import_json_file;
use shotlog::{error, info};
use std::path::Path;

/// Run the import command.
pub fn run(file: &Path, config: &Config) {
    let Some(mut store) = open_store(config) else {
        std::process::exit(1);
    };

    match import_json_file(&mut store, file) {
        Ok(summary) => {
            info!(
                "Imported {} shots from {} ({} migrated)",
                summary.imported,
                file.display(),
                summary.migrated
            );
            println!("✓ Imported {} shots", summary.imported);
            if summary.migrated > 0 {
                println!("  {} upgraded from an older format", summary.migrated);
            }
        }
        Err(e) => {
            error!("Import of {} failed: {e}", file.display());
            eprintln!("✗ Import failed: {e}");
            std::process::exit(1);
        }
    }
}
