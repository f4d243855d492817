//! Choosing the video the notes are taken against.

use std::fmt;
use url::Url;

const YOUTUBE_HOSTS: [&str; 3] = ["youtube.com", "www.youtube.com", "m.youtube.com"];
const YOUTUBE_SHORT_HOST: &str = "youtu.be";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VideoError {
    #[error("Have you selected a video or a URL?")]
    NothingSelected,
    #[error("Invalid video URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    /// A local file, known by its name only.
    File { name: String },
    Url(Url),
}

impl VideoSource {
    /// The YouTube video id for `watch?v=`, `youtu.be/` and `/embed/` URLs.
    pub fn youtube_id(&self) -> Option<String> {
        let VideoSource::Url(url) = self else {
            return None;
        };
        let host = url.host_str()?;

        let id = if host == YOUTUBE_SHORT_HOST {
            url.path_segments()?.next().map(str::to_string)
        } else if YOUTUBE_HOSTS.contains(&host) {
            let mut segments = url.path_segments()?;
            match segments.next() {
                Some("watch") => url
                    .query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned()),
                Some("embed") => segments.next().map(str::to_string),
                _ => None,
            }
        } else {
            None
        };

        id.filter(|id| !id.is_empty())
    }

    /// Short human readable name for titles.
    pub fn display_name(&self) -> String {
        match self {
            VideoSource::File { name } => name.clone(),
            VideoSource::Url(url) => {
                if let Some(id) = self.youtube_id() {
                    return format!("YouTube {id}");
                }
                url.path_segments()
                    .and_then(|segments| segments.filter(|s| !s.is_empty()).next_back())
                    .or_else(|| url.host_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| url.to_string())
            }
        }
    }
}

impl fmt::Display for VideoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoSource::File { name } => write!(f, "file: {name}"),
            VideoSource::Url(url) => write!(f, "url: {url}"),
        }
    }
}

/// Resolves the user's selection into a [`VideoSource`].
///
/// Blank inputs count as absent. A file wins when both are given, matching
/// a picker where choosing one clears the other.
pub fn select_video(
    file_name: Option<&str>,
    url: Option<&str>,
) -> Result<VideoSource, VideoError> {
    let file_name = file_name.map(str::trim).filter(|s| !s.is_empty());
    let url = url.map(str::trim).filter(|s| !s.is_empty());

    if let Some(name) = file_name {
        if url.is_some() {
            log::debug!("Both a file and a URL were given; using the file");
        }
        return Ok(VideoSource::File {
            name: name.to_string(),
        });
    }

    let Some(raw) = url else {
        return Err(VideoError::NothingSelected);
    };

    let parsed = Url::parse(raw).map_err(|e| VideoError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(VideoError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    Ok(VideoSource::Url(parsed))
}
