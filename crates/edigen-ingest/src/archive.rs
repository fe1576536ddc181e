//! CSV design-file archive ingestion.
//!
//! The partner delivers one CSV design file per scenario, zipped. Each
//! file is matched to its scenario through the filename's kind prefix
//! and the key embedded in the `Header_OrderHeader` row, then attached
//! with its TLI and order-line counts.

use std::io::{Cursor, Read};
use std::path::Path;

use csv::ReaderBuilder;
use edigen_model::{DocumentKind, Scenario};
use tracing::{debug, warn};

use crate::error::IngestError;
use crate::scenarios::normalize_key;

/// Row marker of the order-header record in a design file.
const HEADER_ROW_MARKER: &str = "Header_OrderHeader";
/// Row marker of order-line records; their count is the line count.
const LINE_ROW_MARKER: &str = "LineItem_OrderLine";
/// Row marker of TLI records.
const TLI_ROW_MARKER: &str = "TLI";

/// Zero-based cell positions within the header row.
const HEADER_KEY_CELL: usize = 2;
const HEADER_TSET_CELL: usize = 4;

/// Attaches every design file in the archive to its scenario.
///
/// Returns the per-file and per-scenario errors collected along the
/// way; only archive-level failures (unreadable ZIP) are fatal.
pub fn attach_designs(
    scenarios: &mut [Scenario],
    archive_bytes: &[u8],
) -> Result<Vec<String>, IngestError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(archive_bytes))?;
    let mut errors = Vec::new();

    for index in 0..archive.len() {
        let mut file = archive.by_index(index)?;
        let name = file.name().to_string();
        if file.is_dir() || !has_design_extension(&name) {
            continue;
        }
        let mut text = String::new();
        if let Err(err) = file.read_to_string(&mut text) {
            errors.push(format!("{name}: {err}"));
            continue;
        }
        if let Err(message) = attach_one(scenarios, &name, &text) {
            warn!(file = %name, %message, "design file not attached");
            errors.push(message);
        }
    }

    for scenario in scenarios.iter().filter(|s| !s.has_design()) {
        errors.push(format!(
            "scenario {} ({}): no design file in archive",
            scenario.key, scenario.name
        ));
    }
    Ok(errors)
}

/// Reads the archive at `path` and attaches its design files.
pub fn attach_designs_path(
    scenarios: &mut [Scenario],
    path: &Path,
) -> Result<Vec<String>, IngestError> {
    let bytes = std::fs::read(path)?;
    attach_designs(scenarios, &bytes)
}

fn attach_one(scenarios: &mut [Scenario], name: &str, text: &str) -> Result<(), String> {
    let filename = base_name(name);
    let kind = kind_from_prefix(filename)
        .ok_or_else(|| format!("{filename}: unknown scenario kind prefix"))?;

    let rows = design_rows(text).map_err(|err| format!("{filename}: {err}"))?;
    let header = rows
        .iter()
        .find(|row| row.first().map(String::as_str) == Some(HEADER_ROW_MARKER))
        .ok_or_else(|| format!("{filename}: no {HEADER_ROW_MARKER} row"))?;

    let key = normalize_key(header.get(HEADER_KEY_CELL).map_or("", String::as_str));
    if key.is_empty() {
        return Err(format!("{filename}: header row has no scenario key"));
    }
    let tset = header.get(HEADER_TSET_CELL).cloned().unwrap_or_default();

    let scenario = scenarios
        .iter_mut()
        .find(|s| s.document_kind == Some(kind) && s.key == key)
        .ok_or_else(|| format!("{filename}: no {kind} scenario with key {key}"))?;

    scenario.csv_design_filename = filename.to_string();
    scenario.csv_design = text.to_string();
    scenario.tset_code = tset;
    scenario.tli_count = count_marker(&rows, TLI_ROW_MARKER);
    scenario.line_count = count_marker(&rows, LINE_ROW_MARKER);
    debug!(
        key = %scenario.key,
        tset = %scenario.tset_code,
        lines = scenario.line_count,
        tli_rows = scenario.tli_count,
        "attached design file"
    );
    Ok(())
}

fn design_rows(text: &str) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
    }
    Ok(rows)
}

fn count_marker(rows: &[Vec<String>], marker: &str) -> usize {
    rows.iter()
        .filter(|row| row.first().map(String::as_str) == Some(marker))
        .count()
}

fn has_design_extension(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.ends_with(".csv") || lower.ends_with(".txt")
}

fn base_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

fn kind_from_prefix(filename: &str) -> Option<DocumentKind> {
    if filename.starts_with("PO850") {
        Some(DocumentKind::PurchaseOrder)
    } else if filename.starts_with("PC860") {
        Some(DocumentKind::Change)
    } else {
        None
    }
}
