//! Design-sheet ingestion from the sheet's CSV export.
//!
//! The sheet is column-oriented: every column from the second onward
//! describes one mapped field, with fixed row meanings (label, EDI info,
//! usage, min/max, description). Broken columns are reported and
//! skipped; the scan never aborts on sheet content.

use std::path::Path;

use csv::ReaderBuilder;
use edigen_model::SheetColumn;
use tracing::debug;

use crate::error::IngestError;

const ROW_LABEL: usize = 0;
const ROW_EDI_INFO: usize = 1;
const ROW_USAGE: usize = 2;
const ROW_MIN_MAX: usize = 3;
const ROW_DESCRIPTION: usize = 4;

/// Unit-of-measure codes are always two characters; `UOM` columns with
/// a blank min/max row default to that.
const UOM_LENGTH: u32 = 2;

/// Result of scanning the design sheet.
#[derive(Debug, Default)]
pub struct SheetParse {
    pub columns: Vec<SheetColumn>,
    /// Per-column errors; broken columns are omitted from `columns`.
    pub errors: Vec<String>,
}

/// Parses the design sheet from CSV text.
pub fn parse_sheet_str(text: &str) -> Result<SheetParse, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut parse = SheetParse::default();

    // The first column holds the row headings; fields start at B.
    for index in 1..width {
        let letter = column_letter(index);
        let cell = |row: usize| {
            rows.get(row)
                .and_then(|r| r.get(index))
                .map(String::as_str)
                .unwrap_or("")
        };

        let label = cell(ROW_LABEL).to_string();
        let edi_info = cell(ROW_EDI_INFO).to_string();
        let usage = cell(ROW_USAGE).to_string();

        let mut missing = Vec::new();
        if label.is_empty() {
            missing.push("label");
        }
        if edi_info.is_empty() {
            missing.push("EDI info");
        }
        if usage.is_empty() {
            missing.push("usage");
        }
        if !missing.is_empty() {
            parse
                .errors
                .push(format!("column {letter}: missing {}", missing.join(", ")));
            continue;
        }

        let min_max = cell(ROW_MIN_MAX);
        let (mut min_len, mut max_len) = (keyed_number(min_max, "min"), keyed_number(min_max, "max"));
        if min_max.is_empty() && label.ends_with("UOM") {
            min_len = Some(UOM_LENGTH);
            max_len = Some(UOM_LENGTH);
        }

        parse.columns.push(SheetColumn {
            column: letter,
            label,
            edi_info,
            usage,
            min_len,
            max_len,
            description: cell(ROW_DESCRIPTION).to_string(),
        });
    }

    debug!(
        columns = parse.columns.len(),
        errors = parse.errors.len(),
        "scanned design sheet"
    );
    Ok(parse)
}

/// Reads and parses the design sheet at `path`.
pub fn parse_sheet_path(path: &Path) -> Result<SheetParse, IngestError> {
    let text = std::fs::read_to_string(path)?;
    parse_sheet_str(&text)
}

/// First number following `key` in free-form min/max text
/// (`min=2 max: 10`, `min 2`, ...).
fn keyed_number(text: &str, key: &str) -> Option<u32> {
    let position = text.find(key)?;
    let rest = text[position + key.len()..].trim_start_matches([' ', '=', ':']);
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Spreadsheet-style column letter for a zero-based index (`0` → `A`,
/// `26` → `AA`).
#[must_use]
pub fn column_letter(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}
