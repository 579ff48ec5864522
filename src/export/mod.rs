/*!
 * Export of matched cues.
 *
 * Every format renders into an in-memory [`ExportedDocument`]; writing to a
 * folder is a thin layer on top so both output styles share one encoder:
 * - `text`: `[timestamp] text` lines with optional title and count
 * - `spreadsheet`: one `Timestamp, Text` sheet
 * - `document`: Word document with a title heading and one paragraph per cue
 */

use std::path::{Path, PathBuf};

use log::debug;

use crate::app_config::{ExportConfig, ExportFormat};
use crate::errors::ExportError;
use crate::file_utils::FileManager;
use crate::subtitle_processor::Cue;

pub mod document;
pub mod spreadsheet;
pub mod text;

/// Optional parts of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Title line before the matches (text only, Word always has a heading)
    pub include_header: bool,
    /// Match count after the matches (text and Word)
    pub include_footer: bool,
}

impl ExportOptions {
    /// Bare output: matches only
    pub fn plain() -> Self {
        Self {
            include_header: false,
            include_footer: false,
        }
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_header: true,
            include_footer: true,
        }
    }
}

impl From<&ExportConfig> for ExportOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            include_header: config.include_header,
            include_footer: config.include_footer,
        }
    }
}

/// An encoded export ready to be downloaded or saved
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    /// Suggested filename, derived from the title
    pub file_name: String,
    /// Encoded content
    pub bytes: Vec<u8>,
}

impl ExportedDocument {
    /// Write the document into `dir` under its suggested filename, replacing any existing file
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, ExportError> {
        let dir = dir.as_ref();
        FileManager::ensure_dir(dir).map_err(|e| ExportError::Write(format!("{:#}", e)))?;

        let path = dir.join(&self.file_name);
        FileManager::write_bytes(&path, &self.bytes).map_err(|e| ExportError::Write(format!("{:#}", e)))?;
        debug!("Wrote {} bytes to {:?}", self.bytes.len(), path);

        Ok(path)
    }
}

/// Filename for a title and format: unsafe characters replaced, extension appended
pub fn output_filename(title: &str, format: ExportFormat) -> String {
    format!("{}.{}", FileManager::sanitize_filename(title), format.extension())
}

/// Encode `matches` in the requested format
pub fn export_matches(
    matches: &[Cue],
    title: &str,
    format: ExportFormat,
    options: ExportOptions,
) -> Result<ExportedDocument, ExportError> {
    let bytes = match format {
        ExportFormat::Txt => text::render(matches, title, options).into_bytes(),
        ExportFormat::Xlsx => spreadsheet::render(matches)?,
        ExportFormat::Docx => document::render(matches, title, options)?,
    };

    Ok(ExportedDocument {
        file_name: output_filename(title, format),
        bytes,
    })
}

/// Encode `matches` and save them in `dir`, returning the written path
pub fn save_matches<P: AsRef<Path>>(
    matches: &[Cue],
    title: &str,
    dir: P,
    format: ExportFormat,
    options: ExportOptions,
) -> Result<PathBuf, ExportError> {
    export_matches(matches, title, format, options)?.write_to_dir(dir)
}

/// Trailing count line shared by text and Word exports
pub(crate) fn summary_line(count: usize) -> String {
    match count {
        1 => "Total: 1 match".to_string(),
        n => format!("Total: {} matches", n),
    }
}
