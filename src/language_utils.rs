use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// The downloader expects a track language code; these helpers make sure the
/// configured one is a real ISO 639-1 or ISO 639-3 code before a download starts.
/// Language code type
#[derive(Debug, PartialEq, Eq)]
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-3 (3-letter) code
    Part3,
}

/// Leading language subtag of a track selector, lowercased
///
/// `pt-BR`, `zh_Hans` and yt-dlp patterns such as `en.*` all reduce to their
/// language part; region, script and pattern suffixes are left to the downloader.
pub fn primary_subtag(code: &str) -> String {
    code.trim()
        .split(['-', '_', '.'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Validate if a language code starts with a valid ISO 639-1 or ISO 639-3 code
pub fn validate_language_code(code: &str) -> Result<LanguageCodeType> {
    let normalized_code = primary_subtag(code);

    if normalized_code.len() == 2 {
        if Language::from_639_1(&normalized_code).is_some() {
            return Ok(LanguageCodeType::Part1);
        }
    } else if normalized_code.len() == 3 && Language::from_639_3(&normalized_code).is_some() {
        return Ok(LanguageCodeType::Part3);
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Get the English name of a language from its code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized_code = primary_subtag(code);

    let language = match normalized_code.len() {
        2 => Language::from_639_1(&normalized_code),
        3 => Language::from_639_3(&normalized_code),
        _ => None,
    };

    language
        .map(|lang| lang.to_name().to_string())
        .ok_or_else(|| anyhow!("Invalid language code: {}", code))
}
