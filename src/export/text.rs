use std::fmt::Write;

use super::{summary_line, ExportOptions};
use crate::subtitle_processor::Cue;

/// Render matches as plain text, one `[timestamp] text` line per cue
pub fn render(matches: &[Cue], title: &str, options: ExportOptions) -> String {
    let mut output = String::new();

    if options.include_header {
        let _ = writeln!(output, "=== {} ===", title);
    }

    let lines: Vec<String> = matches.iter().map(|cue| cue.to_string()).collect();
    output.push_str(&lines.join("\n"));

    // Framed output ends every cue line with a newline
    if (options.include_header || options.include_footer) && !lines.is_empty() {
        output.push('\n');
    }

    if options.include_footer {
        let _ = writeln!(output, "\n{}", summary_line(matches.len()));
    }

    output
}
