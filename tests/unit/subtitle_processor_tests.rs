/*!
 * Tests for cue parsing
 */

use anyhow::Result;
use subgrep::subtitle_processor::{parse_cue_file, parse_cues, Cue};
use crate::common;

/// Count blank-line separated blocks with at least three lines
fn count_full_blocks(content: &str) -> usize {
    content
        .split("\n\n")
        .filter(|block| block.trim().split('\n').count() >= 3)
        .count()
}

#[test]
fn test_parse_cues_withSampleTrack_shouldSkipShortBlocks() {
    let cues = parse_cues(common::SAMPLE_SRT);

    assert_eq!(cues.len(), 3);
    assert_eq!(cues.len(), count_full_blocks(common::SAMPLE_SRT));
    assert_eq!(cues[0], Cue::new("00:00:01,000 --> 00:00:02,000", "Hello there"));
    assert_eq!(cues[2].timestamp, "00:00:08,000 --> 00:00:09,500");
}

#[test]
fn test_parse_cues_withMultiLineText_shouldJoinWithSingleSpace() {
    let cues = parse_cues(common::SAMPLE_SRT);
    assert_eq!(cues[1].text, "What the [ __ ] was that noise over there");
}

#[test]
fn test_parse_cues_withCrlfLineEndings_shouldMatchLfResult() {
    let crlf = common::SAMPLE_SRT.replace('\n', "\r\n");
    assert_eq!(parse_cues(&crlf), parse_cues(common::SAMPLE_SRT));
}

#[test]
fn test_parse_cues_withEmptyInput_shouldReturnNoCues() {
    assert!(parse_cues("").is_empty());
    assert!(parse_cues("\n\n\n").is_empty());
}

#[test]
fn test_parse_cues_withExtraBlankLines_shouldStillFindBlocks() {
    let content = "1\n00:00:01,000 --> 00:00:02,000\nfirst\n\n\n\n2\n00:00:03,000 --> 00:00:04,000\nsecond\n";
    let cues = parse_cues(content);
    assert_eq!(cues.len(), 2);
    assert_eq!(cues[1].text, "second");
}

#[test]
fn test_parse_cues_withVariousBlockSizes_shouldCountFullBlocks() {
    let samples = [
        "a\nb\nc",
        "a\nb\n\nc\nd\ne\nf",
        "1\n2\n3\n\n4\n\n5\n6\n7\n\n",
        "only one line",
    ];

    for sample in samples {
        assert_eq!(parse_cues(sample).len(), count_full_blocks(sample), "sample: {:?}", sample);
    }
}

#[test]
fn test_cue_display_withTimestamp_shouldUseBracketedFormat() {
    let cue = Cue::new("00:00:01,000 --> 00:00:02,000", "Hello");
    assert_eq!(cue.to_string(), "[00:00:01,000 --> 00:00:02,000] Hello");
}

#[test]
fn test_parse_cue_file_withWrittenFile_shouldParseContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "subtitle.en.srt", common::SAMPLE_SRT)?;

    let cues = parse_cue_file(&path)?;
    assert_eq!(cues.len(), 3);

    Ok(())
}

#[test]
fn test_parse_cue_file_withMissingFile_shouldFail() {
    assert!(parse_cue_file("does_not_exist_12345.srt").is_err());
}
