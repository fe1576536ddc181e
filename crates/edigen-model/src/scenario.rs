//! Test scenarios scraped from the partner portal, delivered as JSON.

use crate::kind::DocumentKind;
use serde::{Deserialize, Serialize};

/// One inbound test scenario (an 850 purchase order or 860 change),
/// plus the outbound kinds its test plan expects back.
///
/// `csv_design`, `csv_design_filename` and the line counts are attached
/// later from the design-file archive; everything else is read-only
/// after parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Partner-assigned scenario key, date prefix already stripped.
    pub key: String,
    pub document_kind: Option<DocumentKind>,
    /// Number of order lines (detail repetitions) in the design file.
    #[serde(default)]
    pub line_count: usize,
    /// Number of TLI rows in the design file.
    #[serde(default)]
    pub tli_count: usize,
    #[serde(default)]
    pub includes_855: bool,
    #[serde(default)]
    pub includes_856: bool,
    #[serde(default)]
    pub includes_810: bool,
    /// True when this scenario ships consolidated with another order.
    #[serde(default)]
    pub is_consolidated: bool,
    /// Key of the order consolidated alongside this one, if any.
    #[serde(default)]
    pub consolidated_with: Option<String>,
    /// Transaction-set purpose code from the design file's header row.
    #[serde(default)]
    pub tset_code: String,
    #[serde(default)]
    pub csv_design_filename: String,
    #[serde(default)]
    pub csv_design: String,
    /// Filled test file, produced by the placeholder filler.
    #[serde(default)]
    pub csv_test_file: String,
}

impl Scenario {
    /// Whether the scenario's test plan includes the given outbound kind.
    #[must_use]
    pub fn includes(&self, kind: DocumentKind) -> bool {
        match kind {
            DocumentKind::Acknowledgment => self.includes_855,
            DocumentKind::Shipment => self.includes_856,
            DocumentKind::Invoice => self.includes_810,
            DocumentKind::PurchaseOrder | DocumentKind::Change => false,
        }
    }

    /// True once the design-file archive pass has attached a design.
    #[must_use]
    pub fn has_design(&self) -> bool {
        !self.csv_design.is_empty()
    }
}
