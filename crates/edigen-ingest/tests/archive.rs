use std::io::{Cursor, Write};

use edigen_ingest::{attach_designs, load_scenarios_str};
use edigen_model::Scenario;
use zip::write::SimpleFileOptions;

const DESIGN_850: &str = "\
Envelope,00,sender,receiver
Header_OrderHeader,,ABC01,,OP
Header_Date,010,20240101
TLI,,,
TLI,,,
LineItem_OrderLine,1,PART-1
LineItem_OrderLine,2,PART-2
LineItem_OrderLine,3,PART-3
Summary,3
";

const DESIGN_860: &str = "\
Header_OrderHeader,,CHG02,,04
TLI,,
LineItem_OrderLine,1,PART-1
";

fn sample_scenarios() -> Vec<Scenario> {
    load_scenarios_str(
        r#"[
          {"name": "Standalone order", "key": "POYYMMDDABC01", "document_kind": 850,
           "includes_855": true},
          {"name": "Order change", "key": "CHG02", "document_kind": 860},
          {"name": "Never delivered", "key": "ZZ99", "document_kind": 850}
        ]"#,
    )
    .expect("scenarios")
}

fn zip_archive(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut writer = zip::ZipWriter::new(Cursor::new(&mut buffer));
    for (name, content) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("start entry");
        writer.write_all(content.as_bytes()).expect("write entry");
    }
    writer.finish().expect("finish archive");
    buffer
}

#[test]
fn designs_attach_by_prefix_and_key() {
    let mut scenarios = sample_scenarios();
    let archive = zip_archive(&[
        ("PO850_standalone.csv", DESIGN_850),
        ("PC860_change.txt", DESIGN_860),
        ("readme.md", "not a design"),
    ]);

    let errors = attach_designs(&mut scenarios, &archive).expect("attach");

    let order = &scenarios[0];
    assert_eq!(order.csv_design_filename, "PO850_standalone.csv");
    assert_eq!(order.csv_design, DESIGN_850);
    assert_eq!(order.line_count, 3);
    assert_eq!(order.tli_count, 2);
    assert_eq!(order.tset_code, "OP");

    let change = &scenarios[1];
    assert_eq!(change.csv_design_filename, "PC860_change.txt");
    assert_eq!(change.line_count, 1);
    assert_eq!(change.tset_code, "04");

    // Only the scenario without a design file is reported.
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("ZZ99"));
}

#[test]
fn files_without_a_header_row_are_collected_errors() {
    let mut scenarios = sample_scenarios();
    let archive = zip_archive(&[(
        "PO850_broken.csv",
        "Envelope,00\nLineItem_OrderLine,1\n",
    )]);
    let errors = attach_designs(&mut scenarios, &archive).expect("attach");
    assert!(
        errors
            .iter()
            .any(|e| e.contains("PO850_broken.csv") && e.contains("Header_OrderHeader"))
    );
}

#[test]
fn unknown_prefixes_and_unmatched_keys_are_collected_errors() {
    let mut scenarios = sample_scenarios();
    let archive = zip_archive(&[
        ("IN810_x.csv", DESIGN_850),
        ("PO850_unknown.csv", "Header_OrderHeader,,NOPE,,OP\n"),
    ]);
    let errors = attach_designs(&mut scenarios, &archive).expect("attach");
    assert!(errors.iter().any(|e| e.contains("unknown scenario kind prefix")));
    assert!(errors.iter().any(|e| e.contains("no 850 scenario with key NOPE")));
}
