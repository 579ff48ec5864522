/*!
 * # subgrep - keyword search in online video subtitles
 *
 * A Rust library for pulling subtitle cues that match a keyword list out of
 * an online video and exporting them as documents.
 *
 * ## Features
 *
 * - Download uploaded or auto-generated subtitle tracks through yt-dlp
 * - Parse SRT cue blocks into (timestamp, text) pairs
 * - Filter cues by keywords or by the censored-bleep marker `[ __ ]`
 * - Export matches as plain text, Excel (.xlsx) or Word (.docx)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_processor`: Cue block parsing
 * - `matcher`: Keyword and marker filtering
 * - `export`: Text, spreadsheet and Word encoders
 * - `sources`: Subtitle download backends (yt-dlp, mock)
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod export;
pub mod file_utils;
pub mod language_utils;
pub mod matcher;
pub mod sources;
pub mod subtitle_processor;

// Re-export main types for easier usage
pub use app_config::{Config, ExportFormat};
pub use app_controller::{Controller, ExtractionOutcome, ExtractionRequest, OutputTarget};
pub use errors::{AppError, ExportError, SourceError, ValidationError};
pub use matcher::{MatchMode, MatchSet};
pub use subtitle_processor::Cue;
