//! Shot statistics reports
//!
//! Renders the figures from [`crate::core::stats`] as a Markdown or a
//! self-contained HTML document. Both formats are `askama` templates under
//! `templates/`.

pub mod formats;

use crate::core::models::Club;
use crate::core::stats::Statistics;
use chrono::{DateTime, Local};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data handed to report templates
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Report heading
    pub title: String,
    /// Figures to report
    pub stats: &'a Statistics,
    /// When the report was generated
    pub generated_at: DateTime<Local>,
}

impl<'a> ReportContext<'a> {
    /// Context stamped with the current time
    #[must_use]
    pub fn new(title: impl Into<String>, stats: &'a Statistics) -> Self {
        Self::at(title, stats, Local::now())
    }

    /// Context stamped with a fixed time
    #[must_use]
    pub fn at(title: impl Into<String>, stats: &'a Statistics, generated_at: DateTime<Local>) -> Self {
        Self {
            title: title.into(),
            stats,
            generated_at,
        }
    }

    /// Generation time as shown in the report
    #[must_use]
    pub fn generated_label(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M").to_string()
    }

    /// Most used club, if any shots exist
    #[must_use]
    pub fn top_club(&self) -> Option<Club> {
        self.stats.club_stats.first().map(|c| c.club)
    }

    /// Shots covered by the listed sessions
    #[must_use]
    pub fn recent_shot_count(&self) -> usize {
        self.stats.recent_sessions.iter().map(|s| s.shot_count).sum()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if rendering or writing the file fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if the template fails to render
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Generator for `format`
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}
