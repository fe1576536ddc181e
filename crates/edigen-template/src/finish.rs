//! Document finishing: pruning and derived totals.

use crate::tree::XmlNode;

/// Removes, bottom-up, every element left with no text and no children.
///
/// Template blocks the injection never touched disappear entirely; the
/// root element is kept even when empty.
pub fn prune(node: &mut XmlNode) {
    for child in &mut node.children {
        prune(child);
    }
    node.children
        .retain(|c| !(c.text.is_empty() && c.children.is_empty()));
}

/// How to compute a document's monetary total.
#[derive(Debug, Clone, Copy)]
pub struct TotalSpec<'a> {
    /// Repeating detail container holding quantity and price.
    pub detail_tag: &'a str,
    pub quantity_tag: &'a str,
    pub price_tag: &'a str,
    /// Where the formatted total goes, from the root.
    pub total_path: &'a [&'a str],
    /// Fixed amounts added for optional blocks that are switched on.
    pub adjustments: &'a [f64],
}

/// Sums quantity x price over every detail container and writes the
/// total, formatted to two decimals. Containers whose quantity or price
/// does not parse contribute nothing.
pub fn apply_total(root: &mut XmlNode, spec: &TotalSpec<'_>) {
    let mut total: f64 = spec.adjustments.iter().sum();
    sum_details(root, spec, &mut total);

    let path: Vec<String> = spec.total_path.iter().map(|s| (*s).to_string()).collect();
    if let Some(target) = root.walk_mut(&path) {
        target.text = format!("{total:.2}");
    }
}

fn sum_details(node: &XmlNode, spec: &TotalSpec<'_>, total: &mut f64) {
    for child in &node.children {
        if child.name == spec.detail_tag {
            let quantity = parsed(child, spec.quantity_tag);
            let price = parsed(child, spec.price_tag);
            if let (Some(quantity), Some(price)) = (quantity, price) {
                *total += quantity * price;
            }
        } else {
            sum_details(child, spec, total);
        }
    }
}

fn parsed(node: &XmlNode, tag: &str) -> Option<f64> {
    node.descendant_text(tag)?.trim().parse().ok()
}
