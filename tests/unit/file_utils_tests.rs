/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use subgrep::file_utils::FileManager;
use crate::common;

#[test]
fn test_sanitize_filename_withEveryUnsafeChar_shouldReplaceWithUnderscore() {
    assert_eq!(FileManager::sanitize_filename(r#"a\b/c*d?e:f"g<h>i|j"#), "a_b_c_d_e_f_g_h_i_j");
}

#[test]
fn test_sanitize_filename_withSafeName_shouldBeUnchanged() {
    assert_eq!(FileManager::sanitize_filename("My Video (2024) - part 1"), "My Video (2024) - part 1");
}

#[test]
fn test_sanitize_filename_appliedTwice_shouldBeIdempotent() {
    let names = ["x:y", "???", "plain", "a/b\\c", "<|>", ""];
    for name in names {
        let once = FileManager::sanitize_filename(name);
        assert_eq!(FileManager::sanitize_filename(&once), once);
    }
}

#[test]
fn test_find_files_with_prefix_withMixedFiles_shouldSelectMatchingSubtitles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    common::create_test_file(dir, "subtitle.en.srt", "x")?;
    common::create_test_file(dir, "subtitle.en.vtt", "x")?;
    common::create_test_file(dir, "other.en.srt", "x")?;
    std::fs::create_dir(dir.join("subtitle.dir.srt"))?;

    let found = FileManager::find_files_with_prefix(dir, "subtitle", "srt")?;

    assert_eq!(found, vec![dir.join("subtitle.en.srt")]);

    Ok(())
}

#[test]
fn test_find_files_with_prefix_withEmptyDir_shouldReturnNothing() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    assert!(FileManager::find_files_with_prefix(temp_dir.path(), "subtitle", ".srt")?.is_empty());
    Ok(())
}

#[test]
fn test_write_bytes_withNestedPath_shouldCreateParent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("a").join("b.txt");

    FileManager::write_bytes(&path, b"content")?;

    assert_eq!(FileManager::read_to_string(&path)?, "content");
    Ok(())
}

#[test]
fn test_remove_file_quietly_withMissingFile_shouldNotPanic() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "gone.srt", "x")?;

    FileManager::remove_file_quietly(&path);
    assert!(!FileManager::file_exists(&path));
    FileManager::remove_file_quietly(&path);

    Ok(())
}
