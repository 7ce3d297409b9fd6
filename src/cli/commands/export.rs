//! Export command handler

use super::{dated_output, open_store};
use shotlog::config::Config;
use shotlog::core::export::ExportFormat;
use shotlog::core::store::{ShotQuery, ShotStore, SortOrder};
use shotlog::error;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

/// Run the export command. An output of `-` writes to stdout.
pub fn run(format_str: &str, output: Option<&Path>, config: &Config) {
    let format = match ExportFormat::from_str(format_str) {
        Ok(format) => format,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(2);
        }
    };

    let Some(store) = open_store(config) else {
        std::process::exit(1);
    };
    let records = match store.fetch_all(&ShotQuery::all().sorted(SortOrder::Ascending)) {
        Ok(records) => records,
        Err(e) => {
            error!("Failed to load shots: {e}");
            eprintln!("✗ Failed to load shots: {e}");
            std::process::exit(1);
        }
    };

    let exporter = format.exporter();
    if output == Some(Path::new("-")) {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        if let Err(e) = exporter.write(&records, &mut lock).and_then(|()| Ok(lock.flush()?)) {
            error!("Export failed: {e}");
            eprintln!("✗ Export failed: {e}");
            std::process::exit(1);
        }
        return;
    }

    let path = output.map_or_else(
        || dated_output(&config.paths.exports_dir, "shots", format.extension()),
        Path::to_path_buf,
    );
    match exporter.export(&records, &path) {
        Ok(()) => println!(
            "✓ Exported {} shots as {format}: {}",
            records.len(),
            path.display()
        ),
        Err(e) => {
            error!("Export to {} failed: {e}", path.display());
            eprintln!("✗ Export failed: {e}");
            std::process::exit(1);
        }
    }
}
