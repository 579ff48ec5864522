use rust_xlsxwriter::{Format, Workbook};

use crate::errors::ExportError;
use crate::subtitle_processor::Cue;

// @const: Sheet name of the single exported worksheet
const SHEET_NAME: &str = "Matches";

/// Render matches as an xlsx workbook: header row `Timestamp, Text`, then one row per cue
pub fn render(matches: &[Cue]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        worksheet.write_string_with_format(0, 0, "Timestamp", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Text", &header_format)?;
        worksheet.set_column_width(0, 32)?;
        worksheet.set_column_width(1, 100)?;

        for (row, cue) in (1u32..).zip(matches) {
            worksheet.write_string(row, 0, &cue.timestamp)?;
            worksheet.write_string(row, 1, &cue.text)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}
