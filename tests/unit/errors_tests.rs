/*!
 * Tests for error types and conversions
 */

use subgrep::errors::{AppError, SourceError, ValidationError};

#[test]
fn test_validationError_missingFilter_shouldDisplayCorrectly() {
    let display = ValidationError::MissingFilter.to_string();
    assert!(display.contains("keywords or marker"));
}

#[test]
fn test_sourceError_commandFailed_shouldIncludeStderr() {
    let error = SourceError::CommandFailed {
        program: "yt-dlp".to_string(),
        stderr: "ERROR: Video unavailable".to_string(),
    };
    let display = error.to_string();
    assert!(display.contains("yt-dlp failed"));
    assert!(display.contains("Video unavailable"));
}

#[test]
fn test_sourceError_timeout_shouldShowSeconds() {
    let error = SourceError::Timeout {
        program: "yt-dlp".to_string(),
        seconds: 30,
    };
    assert!(error.to_string().contains("30 seconds"));
}

#[test]
fn test_appError_fromValidationError_shouldWrap() {
    let error: AppError = ValidationError::MissingUrl.into();
    assert!(matches!(error, AppError::Validation(ValidationError::MissingUrl)));
    assert!(error.to_string().contains("video URL is required"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: AppError = io.into();
    assert!(matches!(error, AppError::File(_)));
}

#[test]
fn test_appError_fromAnyhow_shouldKeepMessage() {
    let error: AppError = anyhow::anyhow!("boom").into();
    assert!(matches!(error, AppError::Unknown(ref msg) if msg == "boom"));
}
