use async_trait::async_trait;
use log::{debug, error};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Output;
use std::time::Duration;
use tokio::process::Command;

use super::{SubtitleSource, VideoMetadata};
use crate::app_config::Config;
use crate::errors::SourceError;
use crate::file_utils::FileManager;

// @module: yt-dlp backed subtitle source

/// Subtitle source that shells out to yt-dlp
#[derive(Debug, Clone)]
pub struct YtDlpSource {
    // @field: Executable name or path
    program: String,

    // @field: Subtitle language requested from the site
    language: String,

    // @field: Output filename prefix inside the working directory
    file_prefix: String,

    // @field: Per invocation timeout
    timeout: Duration,
}

impl YtDlpSource {
    pub fn new(program: impl Into<String>, language: impl Into<String>, file_prefix: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            language: language.into(),
            file_prefix: file_prefix.into(),
            timeout,
        }
    }

    // @creates: Source from the application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.downloader.path.clone(),
            config.subtitle_language.clone(),
            config.subtitle_file_prefix.clone(),
            Duration::from_secs(config.downloader.timeout_secs),
        )
    }

    /// Arguments for the metadata-only call
    pub fn metadata_args(url: &str) -> Vec<String> {
        vec![
            "--dump-single-json".to_string(),
            "--skip-download".to_string(),
            "--no-playlist".to_string(),
            "--no-warnings".to_string(),
            url.to_string(),
        ]
    }

    /// Arguments for the subtitle download, uploaded and auto-generated tracks both accepted
    pub fn download_args(&self, url: &str, work_dir: &Path) -> Vec<String> {
        let template = work_dir.join(&self.file_prefix);
        vec![
            "--skip-download".to_string(),
            "--no-playlist".to_string(),
            "--write-subs".to_string(),
            "--write-auto-subs".to_string(),
            "--sub-langs".to_string(),
            self.language.clone(),
            "--sub-format".to_string(),
            "srt".to_string(),
            "--convert-subs".to_string(),
            "srt".to_string(),
            "-o".to_string(),
            template.to_string_lossy().to_string(),
            url.to_string(),
        ]
    }

    async fn run(&self, args: &[String]) -> Result<Output, SourceError> {
        debug!("Running {} {}", self.program, args.join(" "));

        let child = Command::new(&self.program)
            .args(args)
            .kill_on_drop(true)
            .output();

        let output = tokio::select! {
            result = child => {
                result.map_err(|e| SourceError::Spawn {
                    program: self.program.clone(),
                    message: e.to_string(),
                })?
            },
            _ = tokio::time::sleep(self.timeout) => {
                return Err(SourceError::Timeout {
                    program: self.program.clone(),
                    seconds: self.timeout.as_secs(),
                });
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let filtered = filter_stderr(&stderr);
            error!("{} failed: {}", self.program, filtered);
            return Err(SourceError::CommandFailed {
                program: self.program.clone(),
                stderr: filtered,
            });
        }

        Ok(output)
    }
}

#[async_trait]
impl SubtitleSource for YtDlpSource {
    async fn fetch_metadata(&self, url: &str) -> Result<VideoMetadata, SourceError> {
        let output = self.run(&Self::metadata_args(url)).await?;
        let stdout = String::from_utf8_lossy(&output.stdout);

        let json: Value = serde_json::from_str(stdout.trim())
            .map_err(|e| SourceError::Metadata(e.to_string()))?;

        Ok(VideoMetadata::from_json(&json))
    }

    async fn download_subtitles(&self, url: &str, work_dir: &Path) -> Result<Option<PathBuf>, SourceError> {
        self.run(&self.download_args(url, work_dir)).await?;

        let files = FileManager::find_files_with_prefix(work_dir, &self.file_prefix, "srt")
            .map_err(|e| SourceError::Lookup(e.to_string()))?;

        Ok(files.into_iter().next())
    }
}

/// Keep only the meaningful lines of yt-dlp stderr
pub fn filter_stderr(stderr: &str) -> String {
    let errors: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("ERROR"))
        .collect();

    if !errors.is_empty() {
        return errors.join("\n");
    }

    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        "unknown error (stderr was empty)".to_string()
    } else {
        trimmed.to_string()
    }
}
