//! Markdown report generator
//!
//! Plain GitHub-flavoured tables, readable as text and rendered nicely by
//! GitHub, GitLab and VS Code.

use super::percent_bar;
use crate::core::models::Club;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::stats::Statistics;
use askama::Template;
use std::error::Error;

/// One row of the club table
pub(crate) struct ClubRow {
    pub club: Club,
    pub shot_count: usize,
    pub avg_distance: i64,
    pub accuracy: u32,
    pub bar: String,
}

impl ClubRow {
    pub(crate) fn rows(stats: &Statistics) -> Vec<Self> {
        stats
            .club_stats
            .iter()
            .map(|c| Self {
                club: c.club,
                shot_count: c.shot_count,
                avg_distance: c.avg_distance,
                accuracy: c.accuracy,
                bar: percent_bar(c.accuracy),
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "report.md", escape = "none")]
struct MarkdownTemplate<'a> {
    title: &'a str,
    generated: String,
    stats: &'a Statistics,
    top_club: String,
    recent_shots: usize,
    clubs: Vec<ClubRow>,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let template = MarkdownTemplate {
            title: &ctx.title,
            generated: ctx.generated_label(),
            stats: ctx.stats,
            top_club: ctx.top_club().map_or_else(|| "-".to_string(), |c| c.to_string()),
            recent_shots: ctx.recent_shot_count(),
            clubs: ClubRow::rows(ctx.stats),
        };
        Ok(template.render()?)
    }
}
