/*!
 * Common test utilities for the subgrep test suite
 */

use anyhow::Result;
use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Subtitle track with keyword hits, a censored cue and a short block
pub const SAMPLE_SRT: &str = "1
00:00:01,000 --> 00:00:02,000
Hello there

2
00:00:03,000 --> 00:00:05,000
What the [ __ ] was that
noise over there

3
00:00:06,000 --> 00:00:07,000

4
00:00:08,000 --> 00:00:09,500
hello again, world
";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Read one entry of a zip based office document
pub fn read_zip_entry(bytes: &[u8], name: &str) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut entry = archive.by_name(name)?;
    let mut content = String::new();
    entry.read_to_string(&mut content)?;
    Ok(content)
}
