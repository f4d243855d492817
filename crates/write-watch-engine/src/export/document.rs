use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use super::style::PRINT_STYLESHEET;
use crate::structure::DEFAULT_MIN_CONTENT_LENGTH;

pub const DEFAULT_EXPORT_TITLE: &str = "Write-Watch Notes";

/// How an exported document is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportStyle {
    /// Content in a bare body.
    Minimal,
    /// Header, generation time and the A4 print stylesheet.
    #[default]
    Print,
}

impl FromStr for ExportStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(ExportStyle::Minimal),
            "print" => Ok(ExportStyle::Print),
            other => Err(format!(
                "unknown export style '{other}' (expected 'minimal' or 'print')"
            )),
        }
    }
}

impl fmt::Display for ExportStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportStyle::Minimal => write!(f, "minimal"),
            ExportStyle::Print => write!(f, "print"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub title: String,
    pub style: ExportStyle,
    /// Visible characters required before anything is written.
    pub min_content_length: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_EXPORT_TITLE.to_string(),
            style: ExportStyle::default(),
            min_content_length: DEFAULT_MIN_CONTENT_LENGTH,
        }
    }
}

/// Wraps editor HTML in a complete HTML5 document.
///
/// `content` is embedded verbatim; only the title is escaped.
pub fn standalone_html(
    content: &str,
    options: &ExportOptions,
    generated_at: DateTime<Utc>,
) -> String {
    let title = html_escape::encode_text(&options.title);
    match options.style {
        ExportStyle::Minimal => format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n{content}\n</body>\n</html>\n"
        ),
        ExportStyle::Print => {
            let generated = generated_at.format("%Y-%m-%d %H:%M:%S UTC");
            format!(
                "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{PRINT_STYLESHEET}</style>\n</head>\n<body>\n<div class=\"notes-header\">\n<h1>{title}</h1>\n<p>Generated on: {generated}</p>\n</div>\n<div class=\"content-area\">\n{content}\n</div>\n</body>\n</html>\n"
            )
        }
    }
}
