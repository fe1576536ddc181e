use std::fs;
use std::io::Write;

use edigen_report::{GenerateOptions, RunConfig, run};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const CATALOG: &str = r#"{
  "records": [
    {
      "id": 1,
      "segment": "N1",
      "element": 4,
      "qualifier": "VN",
      "value": "VENDOR1",
      "rsx_tag_850": "vendorNumber",
      "tli_tag_850": "VendorNum",
      "path_855": "Header/OrderHeader/Vendor",
      "put_in_855": true,
      "sourcing_group": 10
    },
    {
      "id": 2,
      "segment": "PO1",
      "element": 7,
      "value": "PART-{sequential_number}",
      "rsx_tag_850": "buyerPart",
      "tli_tag_850": "BuyerPart",
      "path_855": "LineItem/OrderLine/BuyerPartNumber",
      "detail_level": true,
      "partnumber": true,
      "put_in_855": true
    },
    {
      "id": 3,
      "segment": "PO1",
      "element": 2,
      "value": "5",
      "rsx_tag_850": "orderQty",
      "tli_tag_850": "Qty",
      "path_855": "LineItem/OrderLine/OrderQty",
      "detail_level": true,
      "put_in_855": true
    }
  ],
  "sourcing_groups": [
    { "id": 10, "populate_method_name": "populateVendor", "map_name": "vendorMap" }
  ]
}"#;

const SHEET: &str = "\
Field,Vendor number,Buyer part number,Order quantity
EDI,N104 (VN),PO107,PO102
Usage,Must use,Must use,Must use
Lengths,min=1 max=15,min=1 max=30,
Notes,assigned vendor,,
";

const SCENARIOS: &str = r#"[
  {
    "name": "Standalone order",
    "key": "POYYMMDDABC01",
    "document_kind": 850,
    "includes_855": true
  }
]"#;

const DESIGN: &str = "\
Header_OrderHeader,x,ABC01,x,00
LineItem_OrderLine,1
TLI,,,
LineItem_OrderLine,2
TLI,,,
LineItem_OrderLine,3
TLI,,,
";

fn write_inputs(root: &std::path::Path) -> RunConfig {
    let input_dir = root.join("input");
    fs::create_dir(&input_dir).expect("create input dir");
    fs::write(input_dir.join("sheet.csv"), SHEET).expect("write sheet");
    fs::write(input_dir.join("scenarios.json"), SCENARIOS).expect("write scenarios");

    let mut writer = ZipWriter::new(fs::File::create(input_dir.join("designs.zip")).expect("zip"));
    writer
        .start_file("PO850_ABC01.csv", SimpleFileOptions::default())
        .expect("start design file");
    writer.write_all(DESIGN.as_bytes()).expect("write design");
    writer.finish().expect("finish zip");

    let catalog = root.join("catalog.json");
    fs::write(&catalog, CATALOG).expect("write catalog");

    RunConfig {
        input_dir,
        output_dir: root.join("output"),
        catalog,
        templates_dir: None,
        options: GenerateOptions::default(),
    }
}

#[test]
fn full_run_generates_every_artifact() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_inputs(dir.path());

    let report = run(&config).expect("run");
    assert!(!report.has_errors(), "unexpected errors: {report}");
    assert_eq!(report.warning_count(), 0);

    // One test file, one 855, six snippet blocks.
    assert_eq!(report.artifacts.len(), 8);

    let xml = fs::read_to_string(config.output_dir.join("xml/ABC01_855.xml")).expect("855");
    assert!(xml.contains("<Vendor>VENDOR1</Vendor>"));
    assert!(xml.contains("<BuyerPartNumber>PART-1</BuyerPartNumber>"));
    assert!(xml.contains("<BuyerPartNumber>PART-3</BuyerPartNumber>"));
    assert!(!xml.contains("PART-4"));

    let csv = fs::read_to_string(config.output_dir.join("csv/PO850_ABC01.csv")).expect("csv");
    assert!(csv.contains("TLI,VENDOR1,PART-1,5"));
    assert!(csv.contains("TLI,VENDOR1,PART-3,5"));

    let fields = fs::read_to_string(config.output_dir.join("snippets/tli_fields.txt")).expect("fields");
    assert!(fields.contains("javaName=\"VendorNum\""));
    let methods =
        fs::read_to_string(config.output_dir.join("snippets/populate_methods.txt")).expect("methods");
    assert!(methods.contains("void populateVendor() {"));
    assert!(methods.contains("vendorMap.put(\"VendorNum\", \"vendorNumber\");"));
    let omm = fs::read_to_string(config.output_dir.join("snippets/omm_850.txt")).expect("omm");
    assert!(omm.contains("if (poNumber.equals(\"ABC01\")) {"));
}

#[test]
fn reruns_are_byte_identical() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_inputs(dir.path());

    run(&config).expect("first run");
    let first = fs::read(config.output_dir.join("xml/ABC01_855.xml")).expect("first 855");

    run(&config).expect("second run");
    let second = fs::read(config.output_dir.join("xml/ABC01_855.xml")).expect("second 855");
    assert_eq!(first, second);
}

#[test]
fn broken_design_files_are_reported_not_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = write_inputs(dir.path());

    // Replace the archive with one whose TLI rows cannot fit the items.
    let archive = config.input_dir.join("designs.zip");
    let mut writer = ZipWriter::new(fs::File::create(&archive).expect("zip"));
    writer
        .start_file("PO850_ABC01.csv", SimpleFileOptions::default())
        .expect("start design file");
    writer
        .write_all(b"Header_OrderHeader,x,ABC01,x,00\nLineItem_OrderLine,1\nTLI,,\n")
        .expect("write design");
    writer.finish().expect("finish zip");
    config.output_dir = dir.path().join("output2");

    let report = run(&config).expect("run");
    assert!(report.has_errors());
    assert!(
        report
            .generation_errors
            .iter()
            .any(|e| e.contains("blank cells"))
    );
    // The 855 still generated from the attached line count.
    assert!(config.output_dir.join("xml/ABC01_855.xml").is_file());
}
