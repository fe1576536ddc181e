use edigen_model::{DocumentKind, Item, LocationDescriptor, Scenario, SourcingGroup};
use edigen_report::snippets;

fn tli_item(label: &str, tag: &str, descriptor: LocationDescriptor) -> Item {
    Item {
        label: label.to_string(),
        descriptor,
        record_id: Some(1),
        tli_tag_850: tag.to_string(),
        rsx_tag_850: format!("Rsx{tag}"),
        ..Item::default()
    }
}

#[test]
fn field_definitions_patch_the_template_per_item() {
    let mut vendor = tli_item("Vendor number", "VendorNum", LocationDescriptor::new("N1", "04", "VN"));
    vendor.min_len = Some(2);
    vendor.max_len = Some(15);
    let untagged = Item {
        label: "No TLI tag".to_string(),
        record_id: Some(2),
        ..Item::default()
    };

    let block = snippets::tli_fields(&[vendor, untagged]);
    assert!(block.contains("javaName=\"VendorNum\""));
    assert!(block.contains("name=\"Vendor number\""));
    assert!(block.contains("maxLength=\"15\""));
    assert!(block.contains("minLength=\"2\""));
    assert!(!block.contains("No TLI tag"));
    // The plain template is self-closing and carries no validation.
    assert!(!block.contains("VALIDATION"));
}

#[test]
fn ship_to_field_keeps_its_validation_block() {
    let ship_to = tli_item("Ship To", "ShipTo", LocationDescriptor::new("N1", "04", "ST"));

    let block = snippets::tli_fields(&[ship_to]);
    assert!(block.contains("javaName=\"ShipTo\""));
    assert!(block.contains("<VALIDATION>"));
    assert!(block.contains("root.hasTLILocation = true;"));
}

#[test]
fn missing_lengths_fall_back_to_defaults() {
    let item = tli_item("Dept", "Department", LocationDescriptor::new("REF", "02", "DP"));

    let block = snippets::tli_fields(&[item]);
    assert!(block.contains("maxLength=\"80\""));
    assert!(block.contains("minLength=\"1\""));
}

fn grouped_items() -> Vec<Item> {
    let ship_group = SourcingGroup {
        id: 10,
        populate_method_name: "populateShipTo".to_string(),
        map_name: "shipToMap".to_string(),
    };
    let vendor_group = SourcingGroup {
        id: 20,
        populate_method_name: "populateVendor".to_string(),
        map_name: "vendorMap".to_string(),
    };
    vec![
        Item {
            sourcing_group: Some(ship_group.clone()),
            ..tli_item("Ship To", "ShipTo", LocationDescriptor::new("N1", "04", "ST"))
        },
        Item {
            sourcing_group: Some(ship_group),
            ..tli_item("Ship name", "ShipName", LocationDescriptor::new("N1", "02", "ST"))
        },
        Item {
            sourcing_group: Some(vendor_group),
            ..tli_item("Vendor", "VendorNum", LocationDescriptor::new("N1", "04", "VN"))
        },
        // No sourcing group, never emitted.
        tli_item("Qty", "Qty", LocationDescriptor::new("PO1", "02", "")),
    ]
}

#[test]
fn populate_methods_group_items_by_sourcing_group() {
    let methods = snippets::populate_methods(&grouped_items());
    let blocks: Vec<&str> = methods.split("\n\n").collect();
    assert_eq!(blocks.len(), 2);
    assert_eq!(
        blocks[0],
        "void populateShipTo() {\n    shipToMap.put(\"ShipTo\", \"RsxShipTo\");\n    shipToMap.put(\"ShipName\", \"RsxShipName\");\n}"
    );
    assert!(blocks[1].starts_with("void populateVendor() {"));
    assert!(!methods.contains("Qty"));
}

#[test]
fn map_declarations_and_calls_are_deduplicated() {
    let items = grouped_items();
    assert_eq!(
        snippets::populate_maps(&items),
        "Map<String,String> shipToMap = new HashMap<String,String>();\nMap<String,String> vendorMap = new HashMap<String,String>();"
    );
    assert_eq!(
        snippets::populate_calls(&items),
        "    populateShipTo();\n    populateVendor();"
    );
}

#[test]
fn omm_methods_dispatch_by_scenario_key_and_kind() {
    let scenarios = vec![
        Scenario {
            name: "Standalone order".to_string(),
            key: "ABC01".to_string(),
            document_kind: Some(DocumentKind::PurchaseOrder),
            ..Scenario::default()
        },
        Scenario {
            name: "Change order".to_string(),
            key: "CHG01".to_string(),
            document_kind: Some(DocumentKind::Change),
            ..Scenario::default()
        },
    ];

    let omm_850 = snippets::omm_method_850(&scenarios);
    assert!(omm_850.starts_with("private String getOrderManagementModel() {"));
    assert!(omm_850.contains("if (poNumber.equals(\"ABC01\")) {"));
    assert!(omm_850.contains("return \"Standalone order\";"));
    assert!(!omm_850.contains("CHG01"));
    assert!(omm_850.ends_with("    return null;\n}"));

    let omm_860 = snippets::omm_method_860(&scenarios);
    assert!(omm_860.contains("CHG01"));
    assert!(!omm_860.contains("ABC01"));
}
