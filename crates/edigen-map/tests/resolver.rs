use edigen_map::{Catalog, ResolveError, resolve, resolve_columns};
use edigen_model::{LocationDescriptor, SheetColumn};

fn sample_catalog() -> Catalog {
    Catalog::from_json_str(
        r#"{
          "records": [
            {
              "id": 1, "segment": "N1", "element": 4, "qualifier": "VN",
              "value": "VENDOR1", "rsx_tag_850": "Vendor", "tli_tag_850": "N104",
              "path_855": "Header/OrderHeader/Vendor",
              "path_856": "OrderLevel/OrderHeader/Vendor",
              "path_810": "Header/InvoiceHeader/Vendor",
              "put_in_855": true, "put_in_856": true, "put_in_810": true
            },
            {
              "id": 2, "segment": "PO1", "element": 7,
              "value": "EXT", "tli_tag_850": "PO107",
              "path_855": "LineItem/OrderLine/VendorPartNumber",
              "detail_level": true, "put_in_855": true
            },
            {
              "id": 3, "segment": "N1", "element": 2,
              "value": "SHIP TO NAME", "tli_tag_850": "N102",
              "path_855": "Header/Address/AddressName",
              "put_in_855": true,
              "extra_qualifier_tag": "AddressTypeCode",
              "extra_qualifier_value": "ST",
              "sourcing_group": 10
            },
            {
              "id": 4, "segment": "REF", "element": 2, "qualifier": "DP",
              "value": "DEPT", "tli_tag_850": "REF02",
              "path_855": "Header", "put_in_855": true,
              "extra_qualifier_tag": "ReferenceQual",
              "extra_qualifier_value": "DP"
            }
          ],
          "sourcing_groups": [
            {
              "id": 10,
              "populate_method_name": "populateShipTo",
              "map_name": "shipToMap"
            }
          ]
        }"#,
    )
    .expect("sample catalog")
}

fn column(letter: &str, label: &str, edi_info: &str) -> SheetColumn {
    SheetColumn {
        column: letter.to_string(),
        label: label.to_string(),
        edi_info: edi_info.to_string(),
        usage: "M".to_string(),
        ..SheetColumn::default()
    }
}

#[test]
fn resolves_qualified_record() {
    let catalog = sample_catalog();
    let descriptor = LocationDescriptor::new("N1", "04", "VN");
    let record = resolve(&catalog, &descriptor).expect("match");
    assert_eq!(record.id, 1);
}

#[test]
fn missing_and_empty_qualifier_are_equivalent() {
    let catalog = sample_catalog();
    // Record 2 has no qualifier field at all; an unqualified descriptor matches.
    let record = resolve(&catalog, &LocationDescriptor::new("PO1", "07", "")).expect("match");
    assert_eq!(record.id, 2);
}

#[test]
fn po1_overflow_elements_collapse_to_seven() {
    let catalog = sample_catalog();
    for element in ["08", "09", "12"] {
        let record = resolve(&catalog, &LocationDescriptor::new("PO1", element, ""))
            .expect("overflow match");
        assert_eq!(record.id, 2);
    }
    // In range, no coercion: element 5 has no record.
    assert!(matches!(
        resolve(&catalog, &LocationDescriptor::new("PO1", "05", "")),
        Err(ResolveError::NoMatch(_))
    ));
}

#[test]
fn unknown_location_is_no_match() {
    let catalog = sample_catalog();
    let err = resolve(&catalog, &LocationDescriptor::new("BEG", "03", "")).unwrap_err();
    assert!(matches!(err, ResolveError::NoMatch(_)));
    assert!(err.to_string().contains("BEG03"));
}

#[test]
fn duplicate_records_are_ambiguous() {
    let mut catalog = sample_catalog();
    let dup = catalog.records[0].clone();
    catalog.records.push(dup);
    let err = resolve(&catalog, &LocationDescriptor::new("N1", "04", "VN")).unwrap_err();
    assert!(matches!(err, ResolveError::Ambiguous { count: 2, .. }));
}

#[test]
fn sheet_resolution_collects_errors_without_aborting() {
    let catalog = sample_catalog();
    let columns = vec![
        column("B", "Vendor number", "N104 (N101=VN and N103=92)"),
        column("C", "Notes", "see partner documentation"),
        column("D", "Department", "ZZ901"),
        column("E", "Ship-to name", "N102"),
    ];
    let resolution = resolve_columns(&catalog, &columns);

    assert_eq!(resolution.items.len(), 4);

    // B resolved fully.
    assert_eq!(resolution.items[0].record_id, Some(1));
    assert_eq!(resolution.items[0].value, "VENDOR1");

    // C parsed to nothing: unresolved but not an error.
    assert!(resolution.items[1].descriptor.is_empty());
    assert!(resolution.items[1].record_id.is_none());

    // D failed the lookup: one collected error naming the column.
    assert!(resolution.items[2].record_id.is_none());
    assert_eq!(resolution.errors.len(), 1);
    assert!(resolution.errors[0].starts_with("column D"));

    // E resolved and carries its sourcing group.
    let ship_to = &resolution.items[3];
    assert_eq!(ship_to.record_id, Some(3));
    assert_eq!(
        ship_to.sourcing_group.as_ref().map(|g| g.map_name.as_str()),
        Some("shipToMap")
    );
    assert_eq!(ship_to.qualifier_pair(), Some(("AddressTypeCode", "ST")));
}

#[test]
fn qualified_item_with_shallow_path_is_flagged() {
    let catalog = sample_catalog();
    // Record 4 is qualified but its 855 path is a single segment.
    let columns = vec![column("B", "Department number", "REF02 (REF01=DP)")];
    let resolution = resolve_columns(&catalog, &columns);
    assert_eq!(resolution.items[0].record_id, Some(4));
    assert_eq!(resolution.errors.len(), 1);
    assert!(resolution.errors[0].contains("Department number"));
}
