//! Output directory writing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use edigen_model::DocumentKind;
use tracing::debug;

const XML_DIR: &str = "xml";
const CSV_DIR: &str = "csv";
const SNIPPET_DIR: &str = "snippets";

/// Writes run artifacts under a single output root
/// (`xml/`, `csv/`, `snippets/`), recreated from scratch every run.
#[derive(Debug)]
pub struct OutputWriter {
    root: PathBuf,
}

impl OutputWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Clears any previous run and creates the output layout.
    pub fn prepare(&self) -> Result<()> {
        if self.root.exists() {
            std::fs::remove_dir_all(&self.root)
                .with_context(|| format!("clear output dir {}", self.root.display()))?;
        }
        for sub in [XML_DIR, CSV_DIR, SNIPPET_DIR] {
            std::fs::create_dir_all(self.root.join(sub))
                .with_context(|| format!("create output dir {}", self.root.display()))?;
        }
        debug!(root = %self.root.display(), "prepared output directory");
        Ok(())
    }

    /// Writes a generated document as `xml/<key>_<kind>.xml`.
    pub fn write_xml(&self, key: &str, kind: DocumentKind, xml: &str) -> Result<PathBuf> {
        self.write(
            &self.root.join(XML_DIR).join(format!("{key}_{kind}.xml")),
            xml,
        )
    }

    /// Writes a filled test file under its original design filename.
    pub fn write_csv(&self, filename: &str, text: &str) -> Result<PathBuf> {
        self.write(&self.root.join(CSV_DIR).join(filename), text)
    }

    /// Writes a code snippet as `snippets/<name>.txt`.
    pub fn write_snippet(&self, name: &str, text: &str) -> Result<PathBuf> {
        self.write(&self.root.join(SNIPPET_DIR).join(format!("{name}.txt")), text)
    }

    fn write(&self, path: &Path, content: &str) -> Result<PathBuf> {
        std::fs::write(path, content).with_context(|| format!("write {}", path.display()))?;
        Ok(path.to_path_buf())
    }
}
