use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Language code of the subtitle track to download (ISO)
    #[serde(default = "default_subtitle_language")]
    pub subtitle_language: String,

    /// Filename prefix the downloader writes the track under
    #[serde(default = "default_subtitle_file_prefix")]
    pub subtitle_file_prefix: String,

    /// Downloader config
    #[serde(default)]
    pub downloader: DownloaderConfig,

    /// Export config
    #[serde(default)]
    pub export: ExportConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Output document type
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    // @format: Plain UTF-8 text
    #[default]
    Txt,
    // @format: Excel workbook
    Xlsx,
    // @format: Word document
    Docx,
}

impl ExportFormat {
    // @returns: Human readable format name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Txt => "TXT",
            Self::Xlsx => "Excel",
            Self::Docx => "Word",
        }
    }

    // @returns: File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Xlsx => "xlsx",
            Self::Docx => "docx",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Txt),
            "xlsx" | "excel" => Ok(Self::Xlsx),
            "docx" | "word" => Ok(Self::Docx),
            _ => Err(anyhow!("Invalid export format: {}", s)),
        }
    }
}

/// Settings for the external subtitle downloader
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DownloaderConfig {
    /// Path or name of the yt-dlp executable
    #[serde(default = "default_downloader_path")]
    pub path: String,

    /// Timeout for each downloader invocation in seconds
    #[serde(default = "default_downloader_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            path: default_downloader_path(),
            timeout_secs: default_downloader_timeout_secs(),
        }
    }
}

/// Settings for exported documents
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExportConfig {
    /// Default output format
    #[serde(default)]
    pub format: ExportFormat,

    /// Default output folder
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Write a title line before the matches (text export)
    #[serde(default = "default_true")]
    pub include_header: bool,

    /// Write a match count after the matches (text and Word export)
    #[serde(default = "default_true")]
    pub include_footer: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            output_dir: default_output_dir(),
            include_header: true,
            include_footer: true,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_subtitle_language() -> String {
    "en".to_string()
}

fn default_subtitle_file_prefix() -> String {
    "subtitle".to_string()
}

fn default_downloader_path() -> String {
    "yt-dlp".to_string()
}

fn default_downloader_timeout_secs() -> u64 {
    300 // 5 minutes, long videos with auto-generated tracks are slow to convert
}

fn default_output_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        crate::language_utils::validate_language_code(&self.subtitle_language)
            .context("Invalid subtitle language")?;

        if self.subtitle_file_prefix.trim().is_empty() {
            return Err(anyhow!("Subtitle file prefix must not be empty"));
        }

        if self.downloader.path.trim().is_empty() {
            return Err(anyhow!("Downloader path must not be empty"));
        }

        if self.downloader.timeout_secs == 0 {
            return Err(anyhow!("Downloader timeout must be greater than zero"));
        }

        Ok(())
    }

    /// Load the configuration at `path`, writing a default one first if it does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;

            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

            return Ok(config);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {}", path.display()))?;

        Ok(config)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            subtitle_language: default_subtitle_language(),
            subtitle_file_prefix: default_subtitle_file_prefix(),
            downloader: DownloaderConfig::default(),
            export: ExportConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
