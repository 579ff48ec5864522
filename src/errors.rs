/*!
 * Error types for the subgrep application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised while checking an extraction request before any work starts
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// No video URL was given
    #[error("A video URL is required")]
    MissingUrl,

    /// The URL could not be parsed as an absolute URL
    #[error("Invalid video URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected input
        url: String,
        /// Parser message
        reason: String,
    },

    /// Neither keywords nor marker mode were requested
    #[error("Either keywords or marker mode is required")]
    MissingFilter,

    /// Folder output was requested without a folder
    #[error("An output folder is required")]
    MissingOutputDir,
}

/// Errors that can occur when talking to the subtitle downloader
#[derive(Error, Debug)]
pub enum SourceError {
    /// The downloader executable could not be started
    #[error("Failed to run {program}: {message}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// OS error text
        message: String,
    },

    /// The downloader exited with a failure status
    #[error("{program} failed: {stderr}")]
    CommandFailed {
        /// Program that failed
        program: String,
        /// Filtered stderr output
        stderr: String,
    },

    /// The downloader did not finish in time
    #[error("{program} timed out after {seconds} seconds")]
    Timeout {
        /// Program that timed out
        program: String,
        /// Configured timeout
        seconds: u64,
    },

    /// The metadata output was not the expected JSON
    #[error("Failed to parse video metadata: {0}")]
    Metadata(String),

    /// The working directory could not be searched for the downloaded track
    #[error("Failed to look for downloaded subtitles: {0}")]
    Lookup(String),
}

/// Errors that can occur while encoding or writing an export
#[derive(Error, Debug)]
pub enum ExportError {
    /// Spreadsheet encoding failed
    #[error("Failed to encode spreadsheet: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// Word document encoding failed
    #[error("Failed to encode document: {0}")]
    Document(String),

    /// Writing the exported file failed
    #[error("Failed to write export: {0}")]
    Write(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid user input
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    /// Error from the subtitle source
    #[error("Subtitle source error: {0}")]
    Source(#[from] SourceError),

    /// Error from an exporter
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
