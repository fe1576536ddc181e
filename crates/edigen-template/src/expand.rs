//! Template repetition: turning the canonical repeating block into N copies.

use tracing::trace;

use crate::error::TemplateError;
use crate::tree::XmlNode;

/// Replicates the repeating block of a template.
///
/// The first element named `repeating_tag` (depth-first) is the
/// canonical instance. All siblings with that tag are removed and
/// `max(count, 1)` deep copies are inserted at the original position,
/// so surrounding blocks (headers before, summaries after) keep their
/// place. The template itself is never mutated.
pub fn expand(
    template: &XmlNode,
    repeating_tag: &str,
    count: usize,
) -> Result<XmlNode, TemplateError> {
    let mut root = template.clone();
    if expand_in(&mut root, repeating_tag, count.max(1)) {
        trace!(tag = repeating_tag, count, "expanded repeating block");
        Ok(root)
    } else {
        Err(TemplateError::RepeatingTagNotFound(repeating_tag.to_string()))
    }
}

fn expand_in(node: &mut XmlNode, tag: &str, copies: usize) -> bool {
    if node.children.iter().any(|c| c.name == tag) {
        let stamp = node
            .children
            .iter()
            .find(|c| c.name == tag)
            .cloned()
            .unwrap_or_default();
        let old = std::mem::take(&mut node.children);
        let mut inserted = false;
        for child in old {
            if child.name == tag {
                if !inserted {
                    node.children
                        .extend(std::iter::repeat_n(stamp.clone(), copies));
                    inserted = true;
                }
            } else {
                node.children.push(child);
            }
        }
        return true;
    }
    node.children.iter_mut().any(|c| expand_in(c, tag, copies))
}

/// Splits the first block named `block_tag` into two siblings, each
/// carrying half of the block's `qty_tag` value.
///
/// Decimal values keep the precision of the source text; integer values
/// round to nearest. Returns false when no such block exists.
pub fn split_first_block(root: &mut XmlNode, block_tag: &str, qty_tag: &str) -> bool {
    if let Some(index) = root.children.iter().position(|c| c.name == block_tag) {
        let half = root.children[index]
            .child(qty_tag)
            .and_then(|q| halve(q.text.trim()));
        if let Some(text) = half {
            root.children[index].set_child_text(qty_tag, &text);
        }
        let copy = root.children[index].clone();
        root.children.insert(index + 1, copy);
        return true;
    }
    root.children
        .iter_mut()
        .any(|c| split_first_block(c, block_tag, qty_tag))
}

fn halve(text: &str) -> Option<String> {
    let value: f64 = text.parse().ok()?;
    let half = value / 2.0;
    Some(match text.find('.') {
        None => format!("{}", half.round() as i64),
        Some(dot) => {
            let decimals = text.len() - dot - 1;
            format!("{half:.decimals$}")
        }
    })
}
