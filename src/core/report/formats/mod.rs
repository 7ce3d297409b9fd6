//! Report formats: Markdown and HTML.

pub mod html;
pub mod markdown;

pub use html::HtmlReporter;
pub use markdown::MarkdownReporter;

use std::fmt;
use std::str::FromStr;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Markdown tables
    #[default]
    Markdown,
    /// Self-contained HTML page
    Html,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Ok(Self::Markdown),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Html => write!(f, "html"),
        }
    }
}

/// Width of the text accuracy bar, in characters
pub(crate) const BAR_WIDTH: u32 = 20;

/// Text bar for a percentage, e.g. `██████░░░░` for 60.
pub(crate) fn percent_bar(percent: u32) -> String {
    let filled = (percent.min(100) * BAR_WIDTH + 50) / 100;
    let mut bar = "█".repeat(filled as usize);
    bar.push_str(&"░".repeat((BAR_WIDTH - filled) as usize));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_format_aliases() {
        assert_eq!("MD".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!("htm".parse::<ReportFormat>(), Ok(ReportFormat::Html));
        assert!("pdf".parse::<ReportFormat>().is_err());
        assert_eq!(ReportFormat::Html.extension(), "html");
    }

    #[test]
    fn bar_scales_with_percent() {
        assert_eq!(percent_bar(0).chars().filter(|c| *c == '█').count(), 0);
        assert_eq!(percent_bar(50).chars().filter(|c| *c == '█').count(), 10);
        assert_eq!(percent_bar(100).chars().count(), BAR_WIDTH as usize);
        assert_eq!(percent_bar(250), percent_bar(100));
    }
}
