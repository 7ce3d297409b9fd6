//! CLI command handlers for `shotlog`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod config;
pub mod export;
pub mod glossary;
pub mod import;
pub mod list;
pub mod record;
pub mod report;
pub mod stats;

use shotlog::config::Config;
use shotlog::core::store::SqliteStore;
use shotlog::{debug, error};
use std::path::PathBuf;

/// Open the configured database, reporting failures to the user.
pub fn open_store(config: &Config) -> Option<SqliteStore> {
    let path = config.database_path();
    debug!("Opening shot database {}", path.display());
    match SqliteStore::open(&path) {
        Ok(store) => Some(store),
        Err(e) => {
            error!("Failed to open shot database {}: {e}", path.display());
            eprintln!("✗ Failed to open shot database {}: {e}", path.display());
            None
        }
    }
}

/// Default output file `<dir>/<stem>-<date>.<ext>`.
pub fn dated_output(dir: &str, stem: &str, extension: &str) -> PathBuf {
    let date = chrono::Local::now().format("%Y%m%d");
    let dir = if dir.is_empty() { "." } else { dir };
    PathBuf::from(dir).join(format!("{stem}-{date}.{extension}"))
}
