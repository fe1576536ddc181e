//! Per-kind document generation profiles and the generation pipeline.

use anyhow::{Context, Result, bail};
use edigen_model::{DocumentKind, Item, Scenario};
use edigen_template::{
    Placement, TotalSpec, XmlNode, apply_total, expand, inject, inject_detail, prune,
    split_first_block,
};
use tracing::info;

/// Draft values written for optional blocks the run switches on; the
/// tester replaces them once the partner confirms the real codes.
const ACK_TYPE_DRAFT: &str = "AC";
const ITEM_STATUS_DRAFT: &str = "IA";
const TSET_PURPOSE_DRAFT: &str = "00";
const TAX_TYPE_DRAFT: &str = "ST";
const CHARGE_INDICATOR_DRAFT: &str = "C";

/// Fixed amounts the optional 810 blocks add to the invoice total.
const TAX_ADJUSTMENT: f64 = 7.25;
const CHARGE_ADJUSTMENT: f64 = 12.0;

const LINE_SEQUENCE_TAG: &str = "LineSequenceNumber";

/// Static description of one outbound document kind.
#[derive(Debug, Clone, Copy)]
pub struct DocumentProfile {
    pub kind: DocumentKind,
    /// The repeating detail container.
    pub repeating_tag: &'static str,
    /// Embedded default template.
    pub template_xml: &'static str,
    /// File name a template override directory uses for this kind.
    pub template_name: &'static str,
}

const PROFILES: [DocumentProfile; 3] = [
    DocumentProfile {
        kind: DocumentKind::Acknowledgment,
        repeating_tag: "LineItem",
        template_xml: include_str!("../templates/ack_855.xml"),
        template_name: "ack_855.xml",
    },
    DocumentProfile {
        kind: DocumentKind::Shipment,
        repeating_tag: "ItemLevel",
        template_xml: include_str!("../templates/shipment_856.xml"),
        template_name: "shipment_856.xml",
    },
    DocumentProfile {
        kind: DocumentKind::Invoice,
        repeating_tag: "LineItem",
        template_xml: include_str!("../templates/invoice_810.xml"),
        template_name: "invoice_810.xml",
    },
];

/// Profile for an outbound kind; inbound kinds have none.
#[must_use]
pub fn profile(kind: DocumentKind) -> Option<&'static DocumentProfile> {
    PROFILES.iter().find(|p| p.kind == kind)
}

/// Per-run generation switches, mirroring the workspace settings the
/// integrators toggle before a test round.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Number each detail container's `LineSequenceNumber`.
    pub line_sequence: bool,
    /// 855: draft acknowledgment type on the header.
    pub ack_type: bool,
    /// 855: draft item status per line.
    pub item_status: bool,
    /// 856: draft transaction-set purpose code.
    pub tset_purpose: bool,
    /// 810: draft tax block plus its fixed total adjustment.
    pub taxes: bool,
    /// 810: draft charges/allowances block plus its adjustment.
    pub charges: bool,
    /// 810: compute the invoice total.
    pub total_amount: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            line_sequence: true,
            ack_type: true,
            item_status: true,
            tset_purpose: true,
            taxes: true,
            charges: true,
            total_amount: true,
        }
    }
}

/// A generated document plus the structure warnings injection raised.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub xml: String,
    pub warnings: Vec<String>,
}

/// Generates one outbound document for a scenario.
///
/// `partner` is the other order of a consolidated shipment, when there
/// is one; it only affects 856 generation. `template_override` replaces
/// the embedded template for this kind.
pub fn generate_document(
    scenario: &Scenario,
    partner: Option<&Scenario>,
    items: &[Item],
    kind: DocumentKind,
    options: &GenerateOptions,
    template_override: Option<&XmlNode>,
) -> Result<GeneratedDocument> {
    let Some(profile) = profile(kind) else {
        bail!("no document profile for kind {kind}");
    };
    let template = match template_override {
        Some(template) => template.clone(),
        None => XmlNode::from_xml_str(profile.template_xml)
            .with_context(|| format!("embedded template {}", profile.template_name))?,
    };

    let (header, detail) = partition_placements(items, kind);
    let mut warnings = Vec::new();

    let mut doc = if kind == DocumentKind::Shipment {
        generate_shipment(scenario, partner, &template, &header, &detail, options, &mut warnings)?
    } else {
        generate_flat(scenario, profile, &template, &header, &detail, options, &mut warnings)?
    };

    finish_document(&mut doc, profile, options);
    let xml = doc.to_xml_string()?;
    info!(
        key = %scenario.key,
        kind = %kind,
        warnings = warnings.len(),
        "generated document"
    );
    Ok(GeneratedDocument { xml, warnings })
}

/// Splits an item set into header and detail placements for a kind.
fn partition_placements(items: &[Item], kind: DocumentKind) -> (Vec<Placement>, Vec<Placement>) {
    let mut header = Vec::new();
    let mut detail = Vec::new();
    for item in items {
        let Some(placement) = Placement::for_kind(item, kind) else {
            continue;
        };
        if item.detail_level {
            detail.push(placement);
        } else {
            header.push(placement);
        }
    }
    (header, detail)
}

/// 855/810: one repeating container directly under the root.
fn generate_flat(
    scenario: &Scenario,
    profile: &DocumentProfile,
    template: &XmlNode,
    header: &[Placement],
    detail: &[Placement],
    options: &GenerateOptions,
    warnings: &mut Vec<String>,
) -> Result<XmlNode> {
    let mut doc = expand(template, profile.repeating_tag, scenario.line_count)?;
    inject(&mut doc, header, warnings);

    let detail_rel = strip_leading(detail, &[profile.repeating_tag]);
    let mut sequence = 0;
    for block in doc
        .children
        .iter_mut()
        .filter(|c| c.name == profile.repeating_tag)
    {
        sequence += 1;
        inject_detail(block, &detail_rel, sequence, warnings);
        if options.line_sequence {
            block.set_descendant_text(LINE_SEQUENCE_TAG, &sequence.to_string());
        }
        if profile.kind == DocumentKind::Acknowledgment && options.item_status {
            block.set_descendant_text("ItemStatusCode", ITEM_STATUS_DRAFT);
        }
    }
    Ok(doc)
}

/// 856: order blocks between header and summary, details nested within.
fn generate_shipment(
    scenario: &Scenario,
    partner: Option<&Scenario>,
    template: &XmlNode,
    header: &[Placement],
    detail: &[Placement],
    options: &GenerateOptions,
    warnings: &mut Vec<String>,
) -> Result<XmlNode> {
    let mut orders = vec![scenario];
    if scenario.is_consolidated
        && let Some(partner) = partner
    {
        orders.push(partner);
    }

    let mut doc = expand(template, "OrderLevel", orders.len())?;
    for (block, order) in doc
        .children
        .iter_mut()
        .filter(|c| c.name == "OrderLevel")
        .zip(&orders)
    {
        *block = expand(block, "ItemLevel", order.line_count)?;
    }

    // Shipment-wide header items go in once; order-level ones go into
    // every order block.
    let (order_header, doc_header): (Vec<Placement>, Vec<Placement>) = header
        .iter()
        .cloned()
        .partition(|p| p.path.first().map(String::as_str) == Some("OrderLevel"));
    inject(&mut doc, &doc_header, warnings);

    let order_header_rel = strip_leading(&order_header, &["OrderLevel"]);
    let detail_rel = strip_leading(detail, &["OrderLevel", "ItemLevel"]);
    for block in doc.children.iter_mut().filter(|c| c.name == "OrderLevel") {
        inject(block, &order_header_rel, warnings);

        // Sequence numbering restarts in every order block.
        let mut sequence = 0;
        for item_block in block.children.iter_mut().filter(|c| c.name == "ItemLevel") {
            sequence += 1;
            inject_detail(item_block, &detail_rel, sequence, warnings);
            if options.line_sequence {
                item_block.set_descendant_text(LINE_SEQUENCE_TAG, &sequence.to_string());
            }
        }
    }

    // A consolidated shipment splits the first order's first pack in two.
    if orders.len() > 1 {
        split_first_block(&mut doc, "Pack", "PackSize");
    }
    Ok(doc)
}

/// Shared tail of every generation: draft values, totals, the line
/// count, then the prune.
fn finish_document(doc: &mut XmlNode, profile: &DocumentProfile, options: &GenerateOptions) {
    match profile.kind {
        DocumentKind::Acknowledgment => {
            if options.ack_type {
                set_path_text(
                    doc,
                    &["Header", "OrderHeader", "AcknowledgementType"],
                    ACK_TYPE_DRAFT,
                );
            }
        }
        DocumentKind::Shipment => {
            if options.tset_purpose {
                set_path_text(
                    doc,
                    &["Header", "ShipmentHeader", "TsetPurposeCode"],
                    TSET_PURPOSE_DRAFT,
                );
            }
        }
        DocumentKind::Invoice => {
            let mut adjustments = Vec::new();
            if options.taxes {
                set_path_text(doc, &["Summary", "Taxes", "TaxTypeCode"], TAX_TYPE_DRAFT);
                set_path_text(
                    doc,
                    &["Summary", "Taxes", "TaxAmount"],
                    &format!("{TAX_ADJUSTMENT:.2}"),
                );
                adjustments.push(TAX_ADJUSTMENT);
            }
            if options.charges {
                set_path_text(
                    doc,
                    &["Summary", "ChargesAllowances", "AllowChrgIndicator"],
                    CHARGE_INDICATOR_DRAFT,
                );
                set_path_text(
                    doc,
                    &["Summary", "ChargesAllowances", "AllowChrgAmt"],
                    &format!("{CHARGE_ADJUSTMENT:.2}"),
                );
                adjustments.push(CHARGE_ADJUSTMENT);
            }
            if options.total_amount {
                apply_total(
                    doc,
                    &TotalSpec {
                        detail_tag: "LineItem",
                        quantity_tag: "InvoiceQty",
                        price_tag: "PurchasePrice",
                        total_path: &["Summary", "TotalAmount"],
                        adjustments: &adjustments,
                    },
                );
            }
        }
        DocumentKind::PurchaseOrder | DocumentKind::Change => {}
    }

    let count = doc.count_descendants(profile.repeating_tag);
    set_path_text(doc, &["Summary", "TotalLineItemNumber"], &count.to_string());
    prune(doc);
}

fn strip_leading(placements: &[Placement], tags: &[&str]) -> Vec<Placement> {
    placements
        .iter()
        .map(|placement| {
            let mut path = placement.path.clone();
            for tag in tags {
                if path.len() > 1 && path.first().map(String::as_str) == Some(*tag) {
                    path.remove(0);
                } else {
                    break;
                }
            }
            Placement {
                path,
                ..placement.clone()
            }
        })
        .collect()
}

fn set_path_text(doc: &mut XmlNode, path: &[&str], value: &str) -> bool {
    let owned: Vec<String> = path.iter().map(|s| (*s).to_string()).collect();
    match doc.walk_mut(&owned) {
        Some(node) => {
            node.text = value.to_string();
            true
        }
        None => false,
    }
}
