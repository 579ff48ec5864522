/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use std::str::FromStr;
use subgrep::app_config::{Config, ExportFormat, LogLevel};
use crate::common;

#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.subtitle_language, "en");
    assert_eq!(config.subtitle_file_prefix, "subtitle");
    assert_eq!(config.downloader.path, "yt-dlp");
    assert_eq!(config.downloader.timeout_secs, 300);
    assert_eq!(config.export.format, ExportFormat::Txt);
    assert!(config.export.include_header);
    assert!(config.export.include_footer);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.subtitle_language = "xyz".to_string();
    assert!(config.validate().is_err());
    config.subtitle_language = "ja".to_string();
    assert!(config.validate().is_ok());

    config.subtitle_file_prefix = "  ".to_string();
    assert!(config.validate().is_err());
    config.subtitle_file_prefix = "subtitle".to_string();

    config.downloader.path = String::new();
    assert!(config.validate().is_err());
    config.downloader.path = "yt-dlp".to_string();

    config.downloader.timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_deserialization_withPartialJson_shouldFillDefaults() -> Result<()> {
    let json = r#"{ "subtitle_language": "ja", "export": { "format": "docx" } }"#;
    let config: Config = serde_json::from_str(json)?;

    assert_eq!(config.subtitle_language, "ja");
    assert_eq!(config.export.format, ExportFormat::Docx);
    assert!(config.export.include_footer);
    assert_eq!(config.downloader.path, "yt-dlp");

    Ok(())
}

#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let config = Config::load_or_create(&path)?;

    assert!(path.exists());
    assert_eq!(config.subtitle_language, "en");

    let reloaded = Config::load_or_create(&path)?;
    assert_eq!(reloaded.export.output_dir, config.export.output_dir);

    Ok(())
}

#[test]
fn test_load_or_create_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    assert!(Config::load_or_create(&path).is_err());

    Ok(())
}

#[test]
fn test_export_format_fromStr_withAliases_shouldParse() {
    assert_eq!(ExportFormat::from_str("TXT").unwrap(), ExportFormat::Txt);
    assert_eq!(ExportFormat::from_str("excel").unwrap(), ExportFormat::Xlsx);
    assert_eq!(ExportFormat::from_str("Word").unwrap(), ExportFormat::Docx);
    assert!(ExportFormat::from_str("pdf").is_err());
}

#[test]
fn test_log_level_to_level_filter_withDebug_shouldMapToDebug() {
    assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
}

#[test]
fn test_config_validation_withRegionalOrPatternLanguage_shouldAcceptPrimarySubtag() {
    let mut config = Config::default();

    for language in ["pt-BR", "zh-Hans", "en.*", "es_419"] {
        config.subtitle_language = language.to_string();
        assert!(config.validate().is_ok(), "{} should be accepted", language);
    }

    config.subtitle_language = "xyz-BR".to_string();
    assert!(config.validate().is_err());
}
