//! Extra-record-aware value injection.
//!
//! Most items write straight to their output path. Items carrying an
//! extra-record qualifier (e.g. an address block keyed by
//! `AddressTypeCode`) must land together in the container instance
//! whose qualifier element holds their value, creating that instance
//! when the template does not already have it.

use std::collections::BTreeMap;

use edigen_model::{DocumentKind, Item, SEQ_PLACEHOLDER, path_segments};
use tracing::debug;

use crate::tree::XmlNode;

/// One value to place: an item's path, value and optional qualifier,
/// relative to the container being injected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Sheet label, used in structure warnings.
    pub label: String,
    pub path: Vec<String>,
    pub value: String,
    pub qualifier: Option<(String, String)>,
}

impl Placement {
    /// Builds the placement of an item in the given outbound kind, or
    /// `None` when the catalog excludes the item from that kind.
    #[must_use]
    pub fn for_kind(item: &Item, kind: DocumentKind) -> Option<Self> {
        if !item.included_in(kind) {
            return None;
        }
        let path: Vec<String> = path_segments(item.path_for(kind))
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        if path.is_empty() {
            return None;
        }
        Some(Self {
            label: item.label.clone(),
            path,
            value: item.value.clone(),
            qualifier: item
                .qualifier_pair()
                .map(|(tag, value)| (tag.to_string(), value.to_string())),
        })
    }

    /// Copy with the line ordinal substituted into the value.
    #[must_use]
    fn with_sequence(&self, sequence: usize) -> Self {
        Self {
            value: self.value.replace(SEQ_PLACEHOLDER, &sequence.to_string()),
            ..self.clone()
        }
    }
}

/// Injects header-level placements into a container.
///
/// Placements with a qualifier and a path of two or more segments are
/// grouped by `(parent path, qualifier tag, qualifier value)`; each
/// group lands in one container instance, reused or created. Everything
/// else writes directly at its path. Paths the document does not have
/// are skipped with a structure warning.
pub fn inject(container: &mut XmlNode, placements: &[Placement], warnings: &mut Vec<String>) {
    let mut grouped: BTreeMap<(Vec<String>, String, String), Vec<&Placement>> = BTreeMap::new();
    let mut ungrouped: Vec<&Placement> = Vec::new();

    for placement in placements {
        match &placement.qualifier {
            Some((tag, value)) if placement.path.len() >= 2 => grouped
                .entry((
                    placement.path[..placement.path.len() - 1].to_vec(),
                    tag.clone(),
                    value.clone(),
                ))
                .or_default()
                .push(placement),
            _ => ungrouped.push(placement),
        }
    }

    for ((parent_path, qual_tag, qual_value), members) in &grouped {
        inject_group(container, parent_path, qual_tag, qual_value, members, warnings);
    }

    for placement in ungrouped {
        match container.walk_mut(&placement.path) {
            Some(leaf) => leaf.text = placement.value.clone(),
            None => warnings.push(format!(
                "{}: path {} not in document structure",
                placement.label,
                placement.path.join("/"),
            )),
        }
    }
}

/// Detail-level variant: substitutes the 1-based repetition ordinal
/// into each value before writing.
pub fn inject_detail(
    container: &mut XmlNode,
    placements: &[Placement],
    sequence: usize,
    warnings: &mut Vec<String>,
) {
    let substituted: Vec<Placement> = placements
        .iter()
        .map(|p| p.with_sequence(sequence))
        .collect();
    inject(container, &substituted, warnings);
}

fn inject_group(
    container: &mut XmlNode,
    parent_path: &[String],
    qual_tag: &str,
    qual_value: &str,
    members: &[&Placement],
    warnings: &mut Vec<String>,
) {
    // parent_path is non-empty: grouping requires a two-segment path.
    let Some(repeated_tag) = parent_path.last() else {
        return;
    };
    let grand_path = &parent_path[..parent_path.len() - 1];
    let Some(grandparent) = container.walk_mut(grand_path) else {
        warnings.push(format!(
            "group {qual_tag}={qual_value}: path {} not in document structure",
            parent_path.join("/"),
        ));
        return;
    };

    let existing = grandparent.children.iter().position(|c| {
        c.name == *repeated_tag && c.child(qual_tag).map(|q| q.text.trim()) == Some(qual_value)
    });
    let index = match existing {
        Some(index) => index,
        None => {
            // Clone the canonical instance so the new block keeps the
            // template's element order; fall back to a bare element.
            let mut instance = grandparent
                .children
                .iter()
                .find(|c| c.name == *repeated_tag)
                .cloned()
                .unwrap_or_else(|| XmlNode::new(repeated_tag.clone()));
            instance.set_child_text(qual_tag, qual_value);
            grandparent.children.push(instance);
            debug!(tag = %repeated_tag, qualifier = %qual_value, "created qualified instance");
            grandparent.children.len() - 1
        }
    };

    let instance = &mut grandparent.children[index];
    for placement in members {
        // The qualifier element itself is already set.
        if let Some(leaf) = placement.path.last()
            && leaf != qual_tag
        {
            instance.set_child_text(leaf, &placement.value);
        }
    }
}
