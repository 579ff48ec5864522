use anyhow::Result;
use log::debug;
use std::fmt;
use std::path::Path;

use crate::file_utils::FileManager;

// @module: Subtitle cue parsing

// @const: Blocks between two progress callbacks
const PROGRESS_INTERVAL: usize = 5;

// @struct: Single subtitle cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    // @field: Timing line exactly as it appears in the source
    pub timestamp: String,

    // @field: Cue text, lines joined by a single space
    pub text: String,
}

impl Cue {
    pub fn new(timestamp: impl Into<String>, text: impl Into<String>) -> Self {
        Cue {
            timestamp: timestamp.into(),
            text: text.into(),
        }
    }
}

/// Formats as `[timestamp] text`, the line used by text and Word exports
impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp, self.text)
    }
}

/// Parse subtitle content into cues.
///
/// Blocks are separated by a blank line. A block needs at least three lines
/// (index, timing, text); the second line becomes the timestamp and the rest
/// are joined with spaces. Shorter blocks are skipped.
pub fn parse_cues(content: &str) -> Vec<Cue> {
    parse_cues_with_progress(content, None)
}

/// Same as [`parse_cues`], reporting `(processed, total)` blocks every few blocks
pub fn parse_cues_with_progress(content: &str, progress: Option<&dyn Fn(usize, usize)>) -> Vec<Cue> {
    let normalized = content.replace("\r\n", "\n");
    let blocks: Vec<&str> = normalized.split("\n\n").collect();
    let total = blocks.len();

    let mut cues = Vec::new();
    for (idx, block) in blocks.iter().enumerate() {
        let lines: Vec<&str> = block.trim().split('\n').collect();

        if lines.len() >= 3 {
            cues.push(Cue::new(lines[1], lines[2..].join(" ")));
        } else if !block.trim().is_empty() {
            debug!("Skipping short subtitle block {} ({} line(s))", idx + 1, lines.len());
        }

        if let Some(report) = progress {
            let processed = idx + 1;
            if processed % PROGRESS_INTERVAL == 0 || processed == total {
                report(processed, total);
            }
        }
    }

    debug!("Parsed {} cue(s) from {} block(s)", cues.len(), total);
    cues
}

/// Read a UTF-8 subtitle file and parse it into cues
pub fn parse_cue_file<P: AsRef<Path>>(path: P) -> Result<Vec<Cue>> {
    let content = FileManager::read_to_string(path)?;
    Ok(parse_cues(&content))
}
