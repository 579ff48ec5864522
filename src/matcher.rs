/*!
 * Cue filtering.
 *
 * A cue is selected either because its text contains one of the requested
 * keywords (literal, case-sensitive) or because it contains a censored-bleep
 * placeholder such as `[__]` or `[ __ ]`.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ValidationError;
use crate::subtitle_processor::Cue;

// @const: Bracketed blank with optional whitespace around the underscores
static MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\s*__\s*\]").unwrap()
});

/// Cues selected by a filter, in source order
pub type MatchSet = Vec<Cue>;

/// How cues are selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchMode {
    /// Cue text contains at least one of these keywords
    Keywords(Vec<String>),
    /// Cue text contains a bracketed blank marker
    Marker,
}

impl MatchMode {
    /// Build the mode from raw user input.
    ///
    /// `keywords` is a comma separated list; entries are trimmed and empty
    /// ones dropped. The marker flag wins over keywords.
    pub fn from_inputs(keywords: Option<&str>, marker: bool) -> Result<Self, ValidationError> {
        if marker {
            return Ok(MatchMode::Marker);
        }

        let keywords = split_keywords(keywords.unwrap_or_default());
        if keywords.is_empty() {
            return Err(ValidationError::MissingFilter);
        }

        Ok(MatchMode::Keywords(keywords))
    }

    /// Check a single cue text against this mode
    pub fn matches(&self, text: &str) -> bool {
        match self {
            MatchMode::Keywords(keywords) => keywords.iter().any(|kw| text.contains(kw.as_str())),
            MatchMode::Marker => contains_marker(text),
        }
    }

    // @returns: Short description for logs
    pub fn describe(&self) -> String {
        match self {
            MatchMode::Keywords(keywords) => format!("keywords [{}]", keywords.join(", ")),
            MatchMode::Marker => "marker [__]".to_string(),
        }
    }
}

/// Split a comma separated keyword list, trimming entries and dropping empty ones
pub fn split_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|kw| !kw.is_empty())
        .map(str::to_string)
        .collect()
}

/// True when `text` holds a `[`, optional whitespace, `__`, optional whitespace, `]` sequence
pub fn contains_marker(text: &str) -> bool {
    MARKER_REGEX.is_match(text)
}

/// Keep the cues accepted by `mode`, preserving order and duplicates
pub fn filter_cues(cues: &[Cue], mode: &MatchMode) -> MatchSet {
    cues.iter()
        .filter(|cue| mode.matches(&cue.text))
        .cloned()
        .collect()
}
