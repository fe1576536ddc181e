//! Mapping-catalog repository, backed by the catalog's JSON export.

use std::collections::BTreeMap;
use std::path::Path;

use edigen_model::{CatalogRecord, SourcingGroup};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Errors loading the catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The loaded mapping catalog: records plus sourcing groups keyed by id.
#[derive(Debug, Default)]
pub struct Catalog {
    pub records: Vec<CatalogRecord>,
    groups: BTreeMap<u32, SourcingGroup>,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    records: Vec<CatalogRecord>,
    #[serde(default)]
    sourcing_groups: Vec<SourcingGroup>,
}

impl Catalog {
    /// Parses the catalog from its JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(text)?;
        let groups = file
            .sourcing_groups
            .into_iter()
            .map(|g| (g.id, g))
            .collect::<BTreeMap<_, _>>();
        info!(
            records = file.records.len(),
            groups = groups.len(),
            "loaded mapping catalog"
        );
        Ok(Self {
            records: file.records,
            groups,
        })
    }

    /// Reads and parses the catalog file at `path`.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Sourcing group by id.
    #[must_use]
    pub fn group(&self, id: u32) -> Option<&SourcingGroup> {
        self.groups.get(&id)
    }

    /// All sourcing groups, ordered by id.
    pub fn groups(&self) -> impl Iterator<Item = &SourcingGroup> {
        self.groups.values()
    }
}
