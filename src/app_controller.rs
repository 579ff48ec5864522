use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

use crate::app_config::{Config, ExportFormat};
use crate::errors::{AppError, ValidationError};
use crate::export::{self, ExportOptions, ExportedDocument};
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::matcher::{self, MatchMode};
use crate::sources::{SubtitleSource, YtDlpSource};
use crate::subtitle_processor;

// @module: Application controller for subtitle extraction

/// Where the exported document goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Save into this folder
    Folder(PathBuf),
    /// Keep the bytes in memory for the caller
    Buffer,
}

/// One extraction run as requested by the user
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    // @field: Video URL
    pub url: String,

    // @field: Comma separated keywords
    pub keywords: Option<String>,

    // @field: Select cues holding a censored-bleep marker
    pub marker: bool,

    // @field: Output document type
    pub format: ExportFormat,

    // @field: Output destination
    pub output: OutputTarget,
}

impl ExtractionRequest {
    /// Check the required inputs and derive the match mode
    pub fn validate(&self) -> Result<MatchMode, ValidationError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ValidationError::MissingUrl);
        }

        Self::parse_url(url)?;

        if let OutputTarget::Folder(dir) = &self.output {
            if dir.as_os_str().is_empty() {
                return Err(ValidationError::MissingOutputDir);
            }
        }

        MatchMode::from_inputs(self.keywords.as_deref(), self.marker)
    }

    // Pasted links often lack a scheme (`youtu.be/abc123`); those are retried as https
    fn parse_url(url: &str) -> Result<Url, ValidationError> {
        Url::parse(url).or_else(|e| {
            let retried = if url.contains("://") {
                Err(e)
            } else {
                Url::parse(&format!("https://{}", url)).map_err(|_| e)
            };
            retried.map_err(|e| ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            })
        })
    }
}

/// Result of a completed run
#[derive(Debug)]
pub enum ExtractionOutcome {
    /// Matches were written into the output folder
    Saved {
        title: String,
        path: PathBuf,
        match_count: usize,
    },
    /// Matches were encoded in memory
    Buffered {
        title: String,
        document: ExportedDocument,
        match_count: usize,
    },
    /// The video has no subtitle track in the requested language
    NoSubtitles { title: String },
}

impl ExtractionOutcome {
    // @returns: Number of exported cues, zero when nothing was downloaded
    pub fn match_count(&self) -> usize {
        match self {
            Self::Saved { match_count, .. } | Self::Buffered { match_count, .. } => *match_count,
            Self::NoSubtitles { .. } => 0,
        }
    }
}

/// Stages reported while a run is in progress
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    FetchingMetadata,
    Title(String),
    Downloading,
    Parsing { processed: usize, total: usize },
    Matching { cues: usize },
    Exporting(ExportFormat),
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FetchingMetadata => write!(f, "Fetching video information"),
            Self::Title(title) => write!(f, "Video: {}", title),
            Self::Downloading => write!(f, "Downloading subtitles"),
            Self::Parsing { processed, total } => write!(f, "Parsing blocks {}/{}", processed, total),
            Self::Matching { cues } => write!(f, "Filtering {} cues", cues),
            Self::Exporting(format) => write!(f, "Writing {} file", format.display_name()),
        }
    }
}

/// Main application controller for subtitle extraction
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Where subtitles come from
    source: Arc<dyn SubtitleSource>,
}

impl Controller {
    // @method: Create a controller backed by yt-dlp
    pub fn with_config(config: Config) -> Self {
        let source = Arc::new(YtDlpSource::from_config(&config));
        Self { config, source }
    }

    // @method: Create a controller with an explicit subtitle source
    pub fn with_source(config: Config, source: Arc<dyn SubtitleSource>) -> Self {
        Self { config, source }
    }

    /// Run one extraction with a terminal spinner showing the current stage
    pub async fn run(&self, request: ExtractionRequest) -> Result<ExtractionOutcome, AppError> {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.enable_steady_tick(Duration::from_millis(120));

        let pb = spinner.clone();
        let report = move |event: ProgressEvent| pb.set_message(event.to_string());

        let result = self.run_with_progress(request, Some(&report)).await;
        spinner.finish_and_clear();
        result
    }

    /// Run one extraction, reporting stages through `progress`
    pub async fn run_with_progress(
        &self,
        request: ExtractionRequest,
        progress: Option<&dyn Fn(ProgressEvent)>,
    ) -> Result<ExtractionOutcome, AppError> {
        let start_time = Instant::now();
        let emit = |event: ProgressEvent| {
            if let Some(report) = progress {
                report(event);
            }
        };

        let mode = request.validate()?;
        let url = request.url.trim();
        debug!("Filtering with {}", mode.describe());

        emit(ProgressEvent::FetchingMetadata);
        let metadata = self.source.fetch_metadata(url).await?;
        info!("Video title: {}", metadata.title);
        emit(ProgressEvent::Title(metadata.title.clone()));

        let language = language_utils::get_language_name(&self.config.subtitle_language)
            .unwrap_or_else(|_| self.config.subtitle_language.clone());
        info!("Downloading {} subtitles…", language);
        emit(ProgressEvent::Downloading);

        let work_dir = tempfile::Builder::new().prefix("subgrep-").tempdir()?;
        let Some(subtitle_file) = self.source.download_subtitles(url, work_dir.path()).await? else {
            warn!("No subtitles found for {}", url);
            return Ok(ExtractionOutcome::NoSubtitles { title: metadata.title });
        };

        let content = FileManager::read_to_string(&subtitle_file);
        FileManager::remove_file_quietly(&subtitle_file);
        let content = content.map_err(|e| AppError::File(format!("{:#}", e)))?;

        let parse_progress = |processed: usize, total: usize| emit(ProgressEvent::Parsing { processed, total });
        let cues = subtitle_processor::parse_cues_with_progress(&content, Some(&parse_progress));

        emit(ProgressEvent::Matching { cues: cues.len() });
        let matches = matcher::filter_cues(&cues, &mode);
        if matches.is_empty() {
            info!("No matching cues among {} parsed", cues.len());
        } else {
            info!("Matched {} of {} cues", matches.len(), cues.len());
        }

        emit(ProgressEvent::Exporting(request.format));
        let outcome = match &request.output {
            OutputTarget::Folder(dir) => {
                let options = ExportOptions::from(&self.config.export);
                let path = export::save_matches(&matches, &metadata.title, dir, request.format, options)?;
                info!("Saved: {} ({} matches)", path.display(), matches.len());
                ExtractionOutcome::Saved {
                    title: metadata.title,
                    path,
                    match_count: matches.len(),
                }
            }
            OutputTarget::Buffer => {
                let document = export::export_matches(&matches, &metadata.title, request.format, ExportOptions::plain())?;
                ExtractionOutcome::Buffered {
                    title: metadata.title,
                    document,
                    match_count: matches.len(),
                }
            }
        };

        debug!("Extraction finished in {}", Self::format_duration(start_time.elapsed()));
        Ok(outcome)
    }

    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
