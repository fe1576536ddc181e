//! CSV test-file filling: TLI placeholder rows get their item values.

use csv::{ReaderBuilder, WriterBuilder};
use edigen_model::{Item, SEQ_PLACEHOLDER};
use thiserror::Error;

/// Row marker of the fill-in rows in a design file.
const TLI_ROW_MARKER: &str = "TLI";

#[derive(Debug, Error)]
pub enum FillError {
    /// The design's blank-cell layout does not fit the sheet's items.
    /// Filling anyway would misalign every value, so the file is skipped.
    #[error("{filename}: TLI row has {blanks} blank cells for {items} sheet items")]
    CountMismatch {
        filename: String,
        items: usize,
        blanks: usize,
    },
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Fills every `TLI` row of a design file with the item values.
///
/// Each `TLI` row must have exactly one blank cell per item; blanks are
/// filled left to right in catalog order. `{sequential_number}` in a
/// value becomes the 1-based ordinal of the TLI row being filled, so
/// every row numbers itself independently. All other rows pass through
/// unchanged.
pub fn fill_design(design: &str, items: &[&Item], filename: &str) -> Result<String, FillError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(design.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(ToString::to_string).collect());
    }

    let mut tli_ordinal = 0;
    for row in &mut rows {
        if row.first().map(|c| c.trim()) != Some(TLI_ROW_MARKER) {
            continue;
        }
        tli_ordinal += 1;

        let blanks = row[1..].iter().filter(|cell| cell.trim().is_empty()).count();
        if blanks != items.len() {
            return Err(FillError::CountMismatch {
                filename: filename.to_string(),
                items: items.len(),
                blanks,
            });
        }

        let ordinal = tli_ordinal.to_string();
        let mut values = items
            .iter()
            .map(|item| item.value.replace(SEQ_PLACEHOLDER, &ordinal));
        for cell in &mut row[1..] {
            if cell.trim().is_empty()
                && let Some(value) = values.next()
            {
                *cell = value;
            }
        }
    }

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(Vec::new());
    for row in &rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| FillError::Csv(err.into_error().into()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
