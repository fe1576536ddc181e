//! Source-code snippet generation from resolved items and scenarios.
//!
//! Emits the text blocks integrators paste into the partner workspace:
//! `FIELDDEF` field definitions, populate methods with their map
//! declarations and call lines, and the order-management-model
//! dispatch methods. Base templates are copied from the workspace's
//! read templates and patched per item so indentation and attribute
//! order stay untouched.

use edigen_model::{DocumentKind, Item, Scenario, SourcingGroup};

const SHIPTO_FIELD_TEMPLATE: &str = concat!(
    "        <FIELDDEF calculateType=\"none\" condition=\"None\" dataType=\"JString\" display=\"Y\" ",
    "dtdRequired=\"N\" edi=\"Y\" editable=\"Y\" enable=\"Y\" exclude=\"N\" freeFormable=\"Y\" ",
    "includeInTestFile=\"Y\" insert=\"N\" javaName=\"ShipToCode\" keyType=\"NONE\" ",
    "lookupBlankIfNotFound=\"Y\" lookupByFormat=\"N\" lookupByReceiver=\"N\" lookupBySender=\"N\" ",
    "lookupEvent=\"lookupBeforeInit\" mandatory=\"N\" maxLength=\"80\" minLength=\"2\" ",
    "name=\"Ship To Location Code\" nextRow=\"N\" persistent=\"Y\" present=\"Y\" print=\"Y\" ",
    "rounding=\"2\" templatable=\"Y\" useExternalContent=\"N\" workImplemented=\"N\">\n",
    "          <VALIDATION>\n",
    "            <?java //begin init\n",
    "public void init() {\n",
    "\tif (me.hasData()){\n",
    "\t\troot.hasTLILocation = true;\n",
    "\t}\n",
    "}//end-method\n",
    "//end init\n",
    "?>\n",
    "          </VALIDATION>\n",
    "        </FIELDDEF>",
);

const GENERIC_FIELD_TEMPLATE: &str = concat!(
    "        <FIELDDEF calculateType=\"none\" condition=\"None\" dataType=\"JString\" display=\"Y\" ",
    "dtdRequired=\"N\" edi=\"Y\" editable=\"Y\" enable=\"Y\" exclude=\"N\" freeFormable=\"Y\" ",
    "includeInTestFile=\"Y\" insert=\"N\" javaName=\"VendorNumber\" keyType=\"NONE\" ",
    "lookupBlankIfNotFound=\"Y\" lookupByFormat=\"N\" lookupByReceiver=\"N\" lookupBySender=\"N\" ",
    "lookupEvent=\"lookupBeforeInit\" mandatory=\"N\" maxLength=\"30\" minLength=\"1\" ",
    "name=\"Vendor Number\" nextRow=\"N\" persistent=\"Y\" present=\"Y\" print=\"Y\" ",
    "rounding=\"2\" templatable=\"Y\" useExternalContent=\"N\" workImplemented=\"N\"/>",
);

/// One `FIELDDEF` element per item with a TLI tag.
///
/// The ship-to field (N1/04 qualified ST) keeps its embedded validation
/// block; everything else uses the single-line template.
#[must_use]
pub fn tli_fields(items: &[Item]) -> String {
    let mut blocks = Vec::new();

    for item in items {
        let java_name = item.tli_tag_850.trim();
        if java_name.is_empty() {
            continue;
        }
        let max_len = item.max_len.map_or_else(|| "80".to_string(), |v| v.to_string());
        let min_len = item.min_len.map_or_else(|| "1".to_string(), |v| v.to_string());
        let label = if item.label.is_empty() {
            java_name.to_string()
        } else {
            item.label.replace('"', "'")
        };

        let is_ship_to = item.descriptor.segment == "N1"
            && matches!(item.descriptor.element.as_str(), "04" | "4")
            && item.descriptor.qualifier == "ST";

        let block = if is_ship_to {
            SHIPTO_FIELD_TEMPLATE
                .replace("javaName=\"ShipToCode\"", &format!("javaName=\"{java_name}\""))
                .replace("maxLength=\"80\"", &format!("maxLength=\"{max_len}\""))
                .replace("minLength=\"2\"", &format!("minLength=\"{min_len}\""))
                .replace("name=\"Ship To Location Code\"", &format!("name=\"{label}\""))
        } else {
            GENERIC_FIELD_TEMPLATE
                .replace("javaName=\"VendorNumber\"", &format!("javaName=\"{java_name}\""))
                .replace("maxLength=\"30\"", &format!("maxLength=\"{max_len}\""))
                .replace("minLength=\"1\"", &format!("minLength=\"{min_len}\""))
                .replace("name=\"Vendor Number\"", &format!("name=\"{label}\""))
        };
        blocks.push(block);
    }

    blocks.join("\n")
}

/// Items grouped by sourcing group, in first-seen order.
fn grouped_by_sourcing<'a>(items: &'a [Item]) -> Vec<(&'a SourcingGroup, Vec<&'a Item>)> {
    let mut groups: Vec<(&SourcingGroup, Vec<&Item>)> = Vec::new();
    for item in items {
        let Some(group) = item.sourcing_group.as_ref() else {
            continue;
        };
        match groups.iter_mut().find(|(g, _)| {
            g.id == group.id
                && g.populate_method_name == group.populate_method_name
                && g.map_name == group.map_name
        }) {
            Some((_, members)) => members.push(item),
            None => groups.push((group, vec![item])),
        }
    }
    groups
}

/// One populate-method body per sourcing group.
#[must_use]
pub fn populate_methods(items: &[Item]) -> String {
    let mut blocks = Vec::new();
    for (group, members) in grouped_by_sourcing(items) {
        let mut lines = vec![format!("void {}() {{", group.populate_method_name)];
        for item in members {
            if item.tli_tag_850.is_empty() || item.rsx_tag_850.is_empty() {
                continue;
            }
            lines.push(format!(
                "    {}.put(\"{}\", \"{}\");",
                group.map_name, item.tli_tag_850, item.rsx_tag_850
            ));
        }
        lines.push("}".to_string());
        blocks.push(lines.join("\n"));
    }
    blocks.join("\n\n")
}

/// Map declarations for the distinct map names.
#[must_use]
pub fn populate_maps(items: &[Item]) -> String {
    let mut names: Vec<&str> = Vec::new();
    for (group, _) in grouped_by_sourcing(items) {
        if !group.map_name.is_empty() && !names.contains(&group.map_name.as_str()) {
            names.push(&group.map_name);
        }
    }
    names
        .iter()
        .map(|name| format!("Map<String,String> {name} = new HashMap<String,String>();"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Call lines for the distinct populate methods.
#[must_use]
pub fn populate_calls(items: &[Item]) -> String {
    let mut names: Vec<&str> = Vec::new();
    for (group, _) in grouped_by_sourcing(items) {
        if !group.populate_method_name.is_empty()
            && !names.contains(&group.populate_method_name.as_str())
        {
            names.push(&group.populate_method_name);
        }
    }
    names
        .iter()
        .map(|name| format!("    {name}();"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `getOrderManagementModel()` body dispatching 850 scenario keys.
#[must_use]
pub fn omm_method_850(scenarios: &[Scenario]) -> String {
    omm_method(scenarios, DocumentKind::PurchaseOrder)
}

/// `getOrderManagementModel()` body dispatching 860 scenario keys.
#[must_use]
pub fn omm_method_860(scenarios: &[Scenario]) -> String {
    omm_method(scenarios, DocumentKind::Change)
}

fn omm_method(scenarios: &[Scenario], kind: DocumentKind) -> String {
    let mut lines = vec!["private String getOrderManagementModel() {".to_string(), String::new()];
    for scenario in scenarios {
        if scenario.document_kind != Some(kind) || scenario.key.is_empty() || scenario.name.is_empty()
        {
            continue;
        }
        lines.push(format!("    if (poNumber.equals(\"{}\")) {{", scenario.key));
        lines.push(format!("    \treturn \"{}\";", scenario.name));
        lines.push("    }".to_string());
    }
    lines.push(String::new());
    lines.push("    return null;".to_string());
    lines.push("}".to_string());
    lines.join("\n")
}
