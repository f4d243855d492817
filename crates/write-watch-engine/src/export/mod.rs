//! Standalone HTML export of the current notes.

pub mod document;
pub mod style;

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

use crate::io::{IoError, write_output};
use crate::structure::is_valid_content;

pub use document::{DEFAULT_EXPORT_TITLE, ExportOptions, ExportStyle, standalone_html};

const FILE_STEM: &str = "video-notes";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No content to export. Please add some notes first.")]
    NothingToExport,
    #[error(transparent)]
    Io(#[from] IoError),
}

/// `video-notes-YYYY-MM-DDTHH-MM-SS.<extension>` for the given UTC time.
pub fn export_file_name(extension: &str, timestamp: DateTime<Utc>) -> String {
    format!(
        "{FILE_STEM}-{}.{extension}",
        timestamp.format("%Y-%m-%dT%H-%M-%S")
    )
}

/// Writes `content` as a standalone HTML document into `dir`.
///
/// Content below `options.min_content_length` visible characters is
/// refused. Returns the path of the written file.
pub fn export_notes(
    content: &str,
    dir: &Path,
    options: &ExportOptions,
    timestamp: DateTime<Utc>,
) -> Result<PathBuf, ExportError> {
    if !is_valid_content(content, options.min_content_length) {
        return Err(ExportError::NothingToExport);
    }

    let path = dir.join(export_file_name("html", timestamp));
    write_output(&path, &standalone_html(content, options, timestamp))?;
    log::info!("Exported notes to {}", path.display());
    Ok(path)
}
