/*!
 * Mock subtitle source for testing.
 *
 * - `MockSource::with_subtitles(title, srt)` - writes the given track on download
 * - `MockSource::with_raw_subtitles(title, bytes)` - writes arbitrary bytes, e.g. invalid UTF-8
 * - `MockSource::without_subtitles(title)` - reports that no track exists
 * - `MockSource::failing(message)` - every call fails like a broken downloader
 */

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{SubtitleSource, VideoMetadata};
use crate::errors::SourceError;
use crate::file_utils::FileManager;

/// Behavior mode for the mock source
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Metadata and a subtitle track are available
    Subtitles(String),
    /// Like `Subtitles` but with raw track bytes
    RawSubtitles(Vec<u8>),
    /// Metadata is available but the download yields no track
    NoSubtitles,
    /// Every call fails with this stderr text
    Failing(String),
}

/// Subtitle source with canned responses
#[derive(Debug, Clone)]
pub struct MockSource {
    metadata: VideoMetadata,
    behavior: MockBehavior,
    file_prefix: String,
    calls: Arc<AtomicUsize>,
    written: Arc<Mutex<Option<PathBuf>>>,
}

impl MockSource {
    pub fn new(metadata: VideoMetadata, behavior: MockBehavior) -> Self {
        Self {
            metadata,
            behavior,
            file_prefix: "subtitle".to_string(),
            calls: Arc::new(AtomicUsize::new(0)),
            written: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_subtitles(title: &str, content: &str) -> Self {
        Self::new(VideoMetadata::titled(title), MockBehavior::Subtitles(content.to_string()))
    }

    pub fn with_raw_subtitles(title: &str, bytes: &[u8]) -> Self {
        Self::new(VideoMetadata::titled(title), MockBehavior::RawSubtitles(bytes.to_vec()))
    }

    pub fn without_subtitles(title: &str) -> Self {
        Self::new(VideoMetadata::titled(title), MockBehavior::NoSubtitles)
    }

    pub fn failing(message: &str) -> Self {
        Self::new(VideoMetadata::titled(super::UNTITLED), MockBehavior::Failing(message.to_string()))
    }

    /// Number of source calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Path of the last subtitle file written by `download_subtitles`
    pub fn written_path(&self) -> Option<PathBuf> {
        self.written.lock().ok().and_then(|path| path.clone())
    }

    fn fail_if_configured(&self) -> Result<(), SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let MockBehavior::Failing(message) = &self.behavior {
            return Err(SourceError::CommandFailed {
                program: "mock".to_string(),
                stderr: message.clone(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl SubtitleSource for MockSource {
    async fn fetch_metadata(&self, _url: &str) -> Result<VideoMetadata, SourceError> {
        self.fail_if_configured()?;
        Ok(self.metadata.clone())
    }

    async fn download_subtitles(&self, _url: &str, work_dir: &Path) -> Result<Option<PathBuf>, SourceError> {
        self.fail_if_configured()?;

        let bytes = match &self.behavior {
            MockBehavior::Subtitles(content) => content.as_bytes(),
            MockBehavior::RawSubtitles(bytes) => bytes.as_slice(),
            _ => return Ok(None),
        };

        let path = work_dir.join(format!("{}.en.srt", self.file_prefix));
        FileManager::write_bytes(&path, bytes).map_err(|e| SourceError::Lookup(e.to_string()))?;
        if let Ok(mut written) = self.written.lock() {
            *written = Some(path.clone());
        }
        Ok(Some(path))
    }
}
