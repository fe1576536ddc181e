use edigen_ingest::parse_sheet_str;

const SHEET: &str = "\
Label,Vendor number,Ship-to name,Qty UOM,Broken
EDI Info,N104 (N101=VN and N103=92),N102,PO103,REF02
Usage,M,M,O,
Min/Max,min=2 max=10,,,
Description,Vendor id,,unit of measure,
";

#[test]
fn columns_are_scanned_left_to_right() {
    let parse = parse_sheet_str(SHEET).expect("parse sheet");
    assert_eq!(parse.columns.len(), 3);

    let vendor = &parse.columns[0];
    assert_eq!(vendor.column, "B");
    assert_eq!(vendor.label, "Vendor number");
    assert_eq!(vendor.edi_info, "N104 (N101=VN and N103=92)");
    assert_eq!(vendor.usage, "M");
    assert_eq!(vendor.min_len, Some(2));
    assert_eq!(vendor.max_len, Some(10));
    assert_eq!(vendor.description, "Vendor id");

    let ship_to = &parse.columns[1];
    assert_eq!(ship_to.column, "C");
    assert_eq!(ship_to.min_len, None);
    assert_eq!(ship_to.max_len, None);
}

#[test]
fn uom_columns_default_their_lengths() {
    let parse = parse_sheet_str(SHEET).expect("parse sheet");
    let uom = &parse.columns[2];
    assert_eq!(uom.label, "Qty UOM");
    assert_eq!(uom.min_len, Some(2));
    assert_eq!(uom.max_len, Some(2));
}

#[test]
fn broken_columns_are_reported_and_skipped() {
    let parse = parse_sheet_str(SHEET).expect("parse sheet");
    assert_eq!(parse.errors.len(), 1);
    assert!(parse.errors[0].starts_with("column E"));
    assert!(parse.errors[0].contains("usage"));
    assert!(parse.columns.iter().all(|c| c.column != "E"));
}

#[test]
fn a_column_missing_everything_lists_all_fields() {
    let sheet = "Label\nEDI Info\nUsage\n";
    // Width is driven by the heading column only; no field columns at all.
    let parse = parse_sheet_str(sheet).expect("parse sheet");
    assert!(parse.columns.is_empty());
    assert!(parse.errors.is_empty());

    let sheet = "Label,X,\nEDI Info,,\nUsage,,\n";
    let parse = parse_sheet_str(sheet).expect("parse sheet");
    assert_eq!(parse.errors.len(), 2);
    assert!(parse.errors[0].contains("EDI info, usage"));
}
