/*!
 * Subtitle sources.
 *
 * A source resolves a video URL to its metadata and downloads a subtitle
 * track into a working directory:
 * - `ytdlp`: runs the external yt-dlp program
 * - `mock`: canned responses for tests
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

use crate::errors::SourceError;

pub mod mock;
pub mod ytdlp;

pub use mock::MockSource;
pub use ytdlp::YtDlpSource;

/// Title used when the source reports none
pub const UNTITLED: &str = "untitled";

/// Video metadata needed to name the export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    /// Video title
    pub title: String,
    /// Site specific video id
    pub id: Option<String>,
    /// Duration in seconds
    pub duration_secs: Option<f64>,
}

impl VideoMetadata {
    /// Metadata with just a title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            id: None,
            duration_secs: None,
        }
    }

    /// Read the fields from a yt-dlp style info JSON object
    pub fn from_json(json: &Value) -> Self {
        let title = json
            .get("title")
            .and_then(|v| v.as_str())
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(UNTITLED)
            .to_string();

        let id = json.get("id").and_then(|v| v.as_str()).map(|s| s.to_string());
        let duration_secs = json.get("duration").and_then(|v| v.as_f64());

        Self { title, id, duration_secs }
    }
}

/// Common trait for everything that can supply subtitle tracks
#[async_trait]
pub trait SubtitleSource: Send + Sync + Debug {
    /// Fetch metadata for `url` without downloading any media
    async fn fetch_metadata(&self, url: &str) -> Result<VideoMetadata, SourceError>;

    /// Download the subtitle track of `url` into `work_dir`
    ///
    /// # Returns
    /// * `Ok(Some(path))` - the downloaded subtitle file
    /// * `Ok(None)` - the video has no matching track
    async fn download_subtitles(&self, url: &str, work_dir: &Path) -> Result<Option<PathBuf>, SourceError>;
}
