/*!
 * Tests for language utility functions
 */

use subgrep::language_utils::{get_language_name, primary_subtag, validate_language_code, LanguageCodeType};

#[test]
fn test_validate_language_code_withValidCodes_shouldReturnCorrectType() {
    assert_eq!(validate_language_code("en").unwrap(), LanguageCodeType::Part1);
    assert_eq!(validate_language_code(" JA ").unwrap(), LanguageCodeType::Part1);
    assert_eq!(validate_language_code("eng").unwrap(), LanguageCodeType::Part3);
}

#[test]
fn test_validate_language_code_withInvalidCodes_shouldFail() {
    assert!(validate_language_code("").is_err());
    assert!(validate_language_code("xx").is_err());
    assert!(validate_language_code("english").is_err());
}

#[test]
fn test_get_language_name_withKnownCodes_shouldReturnEnglishName() {
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert_eq!(get_language_name("jpn").unwrap(), "Japanese");
    assert!(get_language_name("zz").is_err());
}

#[test]
fn test_primary_subtag_withRegionScriptOrPattern_shouldKeepLanguagePart() {
    assert_eq!(primary_subtag("pt-BR"), "pt");
    assert_eq!(primary_subtag(" zh_Hans "), "zh");
    assert_eq!(primary_subtag("en.*"), "en");
    assert_eq!(primary_subtag("eng"), "eng");
}

#[test]
fn test_validate_language_code_withSubtags_shouldValidatePrimaryOnly() {
    assert_eq!(validate_language_code("pt-BR").unwrap(), LanguageCodeType::Part1);
    assert_eq!(validate_language_code("en.*").unwrap(), LanguageCodeType::Part1);
    assert!(validate_language_code("xx-US").is_err());
    assert_eq!(get_language_name("zh-Hans").unwrap(), "Chinese");
}
