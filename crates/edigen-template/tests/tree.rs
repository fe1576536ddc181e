use edigen_template::XmlNode;

const SAMPLE: &str = "\
<Order>
\t<Header>
\t\t<Name>Acme &amp; Co</Name>
\t\t<Code/>
\t</Header>
\t<Summary>
\t\t<Total>12.50</Total>
\t</Summary>
</Order>
";

#[test]
fn parses_nested_elements_and_text() {
    let root = XmlNode::from_xml_str(SAMPLE).expect("parse");
    assert_eq!(root.name, "Order");
    assert_eq!(root.children.len(), 2);

    let name = root.walk(&["Header", "Name"]).expect("walk");
    assert_eq!(name.text, "Acme & Co");

    let code = root.walk(&["Header", "Code"]).expect("walk");
    assert!(code.text.is_empty());
    assert!(code.children.is_empty());

    assert!(root.walk(&["Header", "Missing"]).is_none());
}

#[test]
fn serializes_with_declaration_and_tab_indent() {
    let root = XmlNode::from_xml_str(SAMPLE).expect("parse");
    let xml = root.to_xml_string().expect("serialize");

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("\n\t<Header>"));
    assert!(xml.contains("\n\t\t<Name>Acme &amp; Co</Name>"));
    assert!(xml.contains("\n\t\t<Code/>"));
    assert!(xml.ends_with('\n'));
}

#[test]
fn serialization_round_trips() {
    let root = XmlNode::from_xml_str(SAMPLE).expect("parse");
    let xml = root.to_xml_string().expect("serialize");
    let again = XmlNode::from_xml_str(&xml).expect("reparse");
    assert_eq!(root, again);

    // Deterministic output for byte comparison.
    assert_eq!(xml, again.to_xml_string().expect("serialize"));
}

#[test]
fn set_child_text_creates_missing_children() {
    let mut node = XmlNode::new("Header");
    node.set_child_text("Name", "first");
    node.set_child_text("Name", "second");
    assert_eq!(node.children.len(), 1);
    assert_eq!(node.child("Name").map(|c| c.text.as_str()), Some("second"));
}

#[test]
fn descendant_lookup_is_depth_first() {
    let root = XmlNode::from_xml_str(
        "<A><B><Target>inner</Target></B><Target>outer</Target></A>",
    )
    .expect("parse");
    assert_eq!(root.descendant_text("Target"), Some("inner"));
    assert_eq!(root.count_descendants("Target"), 2);
}

#[test]
fn empty_document_is_an_error() {
    assert!(XmlNode::from_xml_str("").is_err());
}
