use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run, Style, StyleType};

use super::{summary_line, ExportOptions};
use crate::errors::ExportError;
use crate::subtitle_processor::Cue;

// @const: Style id referenced by the title paragraph
const HEADING_STYLE_ID: &str = "Heading1";

/// Render matches as a Word document: level-1 title heading, one paragraph per cue
pub fn render(matches: &[Cue], title: &str, options: ExportOptions) -> Result<Vec<u8>, ExportError> {
    let heading_style = Style::new(HEADING_STYLE_ID, StyleType::Paragraph)
        .name("Heading 1")
        .size(32)
        .bold();

    let mut docx = Docx::new().add_style(heading_style).add_paragraph(
        Paragraph::new()
            .style(HEADING_STYLE_ID)
            .add_run(Run::new().add_text(title)),
    );

    for cue in matches {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(cue.to_string())));
    }

    if options.include_footer {
        docx = docx
            .add_paragraph(Paragraph::new())
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text(summary_line(matches.len()))));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| ExportError::Document(e.to_string()))?;

    Ok(buffer.into_inner())
}
