//! Report command handler
//!
//! Renders the current statistics as Markdown or HTML.

use super::{dated_output, open_store};
use shotlog::config::Config;
use shotlog::core::report::{reporter_for, ReportContext, ReportFormat};
use shotlog::core::stats::StatsView;
use shotlog::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
pub fn run(format_str: &str, output: Option<&Path>, title: &str, config: &Config) {
    match generate_report(format_str, output, title, config) {
        Ok(path) => println!("✓ Report generated: {}", path.display()),
        Err(err) => {
            error!("Report generation failed: {err}");
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    }
}

fn generate_report(
    format_str: &str,
    output: Option<&Path>,
    title: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str)?;
    let store = open_store(config).ok_or("No shot database available")?;

    let mut view = StatsView::new();
    view.refresh(&store)
        .map_err(|e| format!("Failed to load shots: {e}"))?;

    let path = output.map_or_else(
        || dated_output(&config.paths.reports_dir, "shot-report", format.extension()),
        Path::to_path_buf,
    );

    let ctx = ReportContext::new(title, view.statistics());
    reporter_for(format)
        .generate(&ctx, &path)
        .map_err(|e| format!("Failed to write {format} report {}: {e}", path.display()))?;

    info!("Wrote {format} report to {}", path.display());
    Ok(path)
}
