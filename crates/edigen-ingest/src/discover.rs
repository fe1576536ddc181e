//! Input-directory discovery.
//!
//! A run directory holds exactly one design sheet (`.csv`), one
//! scenario export (`.json`) and one design archive (`.zip`).

use std::path::{Path, PathBuf};

use crate::error::IngestError;

/// The three input files of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFiles {
    pub sheet: PathBuf,
    pub scenarios: PathBuf,
    pub archive: PathBuf,
}

/// Locates the run inputs in `dir`, insisting on exactly one file per role.
pub fn discover_inputs(dir: &Path) -> Result<InputFiles, IngestError> {
    Ok(InputFiles {
        sheet: single_with_extension(dir, "csv")?,
        scenarios: single_with_extension(dir, "json")?,
        archive: single_with_extension(dir, "zip")?,
    })
}

fn single_with_extension(dir: &Path, extension: &str) -> Result<PathBuf, IngestError> {
    let mut matches: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|e| e.eq_ignore_ascii_case(extension))
        })
        .collect();
    matches.sort();

    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => Err(IngestError::Discovery(format!(
            "no .{extension} file in {}",
            dir.display()
        ))),
        n => Err(IngestError::Discovery(format!(
            "expected one .{extension} file in {}, found {n}",
            dir.display()
        ))),
    }
}
