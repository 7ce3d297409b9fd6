//! HTML report generator
//!
//! The page is self-contained: styles are inlined and there are no scripts.
//! Text from the context is HTML-escaped by the template.

use super::markdown::ClubRow;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::stats::Statistics;
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "report.html")]
struct HtmlTemplate<'a> {
    title: &'a str,
    generated: String,
    stats: &'a Statistics,
    top_club: String,
    clubs: Vec<ClubRow>,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let template = HtmlTemplate {
            title: &ctx.title,
            generated: ctx.generated_label(),
            stats: ctx.stats,
            top_club: ctx.top_club().map_or_else(|| "-".to_string(), |c| c.to_string()),
            clubs: ClubRow::rows(ctx.stats),
        };
        Ok(template.render()?)
    }
}
