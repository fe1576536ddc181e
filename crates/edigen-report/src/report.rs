//! Run report: everything a generation run collected along the way.

use std::fmt;
use std::path::PathBuf;

/// One written output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Scenario key, or `-` for run-wide artifacts like snippets.
    pub scenario: String,
    pub description: String,
    pub path: PathBuf,
}

/// Aggregated outcome of a run. Errors never abort generation of the
/// remaining scenarios; they all end up here.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Broken design-sheet columns.
    pub sheet_errors: Vec<String>,
    /// Catalog lookups that failed, per column.
    pub resolution_errors: Vec<String>,
    /// Design files that could not be attached, and scenarios left
    /// without one.
    pub archive_errors: Vec<String>,
    /// Per-scenario fill and generation failures.
    pub generation_errors: Vec<String>,
    /// Items whose output path is missing from the document structure.
    pub structure_warnings: Vec<String>,
    pub artifacts: Vec<Artifact>,
}

impl RunReport {
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.sheet_errors.len()
            + self.resolution_errors.len()
            + self.archive_errors.len()
            + self.generation_errors.len()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.structure_warnings.len()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections: [(&str, &[String]); 5] = [
            ("design sheet", &self.sheet_errors),
            ("catalog resolution", &self.resolution_errors),
            ("design archive", &self.archive_errors),
            ("generation", &self.generation_errors),
            ("structure warnings", &self.structure_warnings),
        ];
        for (title, entries) in sections {
            if entries.is_empty() {
                continue;
            }
            writeln!(f, "{title}:")?;
            for entry in entries {
                writeln!(f, "  - {entry}")?;
            }
        }
        writeln!(
            f,
            "{} artifacts, {} errors, {} warnings",
            self.artifacts.len(),
            self.error_count(),
            self.warning_count()
        )
    }
}
