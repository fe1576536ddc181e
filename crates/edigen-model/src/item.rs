//! Resolved sheet items: a design-sheet column joined with its catalog record.

use crate::catalog::SourcingGroup;
use crate::kind::DocumentKind;
use crate::location::LocationDescriptor;
use serde::{Deserialize, Serialize};

/// Token in a value expression replaced by the 1-based line ordinal.
pub const SEQ_PLACEHOLDER: &str = "{sequential_number}";

/// A design-sheet column resolved against the mapping catalog.
///
/// Carries both the sheet-side description (label, usage, lengths) and
/// the catalog-side placement data (value, paths, flags). Columns that
/// failed resolution still become items so the run report can list
/// them; their catalog fields stay at defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Column label from the design sheet.
    pub label: String,
    /// Raw EDI info cell text, before clearing.
    pub edi_info: String,
    /// Usage note from the sheet (mandatory/optional text).
    pub usage: String,
    pub min_len: Option<u32>,
    pub max_len: Option<u32>,
    pub description: String,
    /// Parsed EDI location; empty when the info text was unparsable.
    pub descriptor: LocationDescriptor,

    /// Matched catalog record id, when resolution succeeded.
    pub record_id: Option<u32>,
    /// Test-file value expression, possibly holding `{sequential_number}`.
    pub value: String,
    pub rsx_tag_850: String,
    pub tli_tag_850: String,
    pub path_855: String,
    pub path_856: String,
    pub path_810: String,
    pub detail_level: bool,
    pub partnumber: bool,
    pub put_in_855: bool,
    pub put_in_856: bool,
    pub put_in_810: bool,
    pub extra_qualifier_tag: Option<String>,
    pub extra_qualifier_value: Option<String>,
    pub sourcing_group: Option<SourcingGroup>,
}

impl Item {
    /// Output path for the given outbound kind.
    #[must_use]
    pub fn path_for(&self, kind: DocumentKind) -> &str {
        match kind {
            DocumentKind::Acknowledgment => &self.path_855,
            DocumentKind::Shipment => &self.path_856,
            DocumentKind::Invoice => &self.path_810,
            DocumentKind::PurchaseOrder | DocumentKind::Change => "",
        }
    }

    /// Whether the catalog marks this item for the given outbound kind.
    #[must_use]
    pub fn included_in(&self, kind: DocumentKind) -> bool {
        match kind {
            DocumentKind::Acknowledgment => self.put_in_855,
            DocumentKind::Shipment => self.put_in_856,
            DocumentKind::Invoice => self.put_in_810,
            DocumentKind::PurchaseOrder | DocumentKind::Change => false,
        }
    }

    /// Non-empty extra-record qualifier pair, if the item carries one.
    #[must_use]
    pub fn qualifier_pair(&self) -> Option<(&str, &str)> {
        match (
            self.extra_qualifier_tag.as_deref(),
            self.extra_qualifier_value.as_deref(),
        ) {
            (Some(tag), Some(value)) if !tag.is_empty() && !value.is_empty() => Some((tag, value)),
            _ => None,
        }
    }
}

/// Splits a catalog output path into tag names.
///
/// Paths use `/` separators; legacy rows use `_` instead, which is only
/// treated as a separator when no `/` is present (tag names themselves
/// may contain underscores in `/`-delimited paths).
#[must_use]
pub fn path_segments(path: &str) -> Vec<&str> {
    let sep = if path.contains('/') { '/' } else { '_' };
    path.split(sep).filter(|s| !s.is_empty()).collect()
}
