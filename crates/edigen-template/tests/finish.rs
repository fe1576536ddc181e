use edigen_template::{TotalSpec, XmlNode, apply_total, prune};

#[test]
fn prune_removes_untouched_branches_bottom_up() {
    let mut doc = XmlNode::from_xml_str(
        "<Invoice>\
           <Header>\
             <InvoiceHeader><InvoiceNumber>INV-1</InvoiceNumber><Vendor/></InvoiceHeader>\
             <Address><AddressTypeCode/><AddressName/></Address>\
           </Header>\
           <Summary><Taxes><TaxTypeCode/><TaxAmount/></Taxes></Summary>\
         </Invoice>",
    )
    .expect("doc");

    prune(&mut doc);

    // Empty leaves, then their emptied parents, disappear.
    let header = doc.child("Header").expect("header");
    assert!(header.child("Address").is_none());
    let invoice_header = header.child("InvoiceHeader").expect("invoice header");
    assert!(invoice_header.child("Vendor").is_none());
    assert_eq!(
        invoice_header.child("InvoiceNumber").map(|c| c.text.as_str()),
        Some("INV-1")
    );
    assert!(doc.child("Summary").is_none());
}

#[test]
fn prune_keeps_an_empty_root() {
    let mut doc = XmlNode::from_xml_str("<Invoice><Header/></Invoice>").expect("doc");
    prune(&mut doc);
    assert_eq!(doc.name, "Invoice");
    assert!(doc.children.is_empty());
}

#[test]
fn total_sums_quantity_times_price_across_lines() {
    let mut doc = XmlNode::from_xml_str(
        "<Invoice>\
           <LineItem><InvoiceLine><InvoiceQty>2</InvoiceQty><PurchasePrice>3.25</PurchasePrice></InvoiceLine></LineItem>\
           <LineItem><InvoiceLine><InvoiceQty>1</InvoiceQty><PurchasePrice>10</PurchasePrice></InvoiceLine></LineItem>\
           <LineItem><InvoiceLine><InvoiceQty>bad</InvoiceQty><PurchasePrice>99</PurchasePrice></InvoiceLine></LineItem>\
           <Summary><TotalAmount/></Summary>\
         </Invoice>",
    )
    .expect("doc");

    apply_total(
        &mut doc,
        &TotalSpec {
            detail_tag: "LineItem",
            quantity_tag: "InvoiceQty",
            price_tag: "PurchasePrice",
            total_path: &["Summary", "TotalAmount"],
            adjustments: &[],
        },
    );

    assert_eq!(
        doc.walk(&["Summary", "TotalAmount"]).map(|n| n.text.as_str()),
        Some("16.50")
    );
}

#[test]
fn total_includes_fixed_adjustments() {
    let mut doc = XmlNode::from_xml_str(
        "<Invoice>\
           <LineItem><InvoiceLine><InvoiceQty>1</InvoiceQty><PurchasePrice>10</PurchasePrice></InvoiceLine></LineItem>\
           <Summary><TotalAmount/></Summary>\
         </Invoice>",
    )
    .expect("doc");

    apply_total(
        &mut doc,
        &TotalSpec {
            detail_tag: "LineItem",
            quantity_tag: "InvoiceQty",
            price_tag: "PurchasePrice",
            total_path: &["Summary", "TotalAmount"],
            adjustments: &[5.0, 2.5],
        },
    );

    assert_eq!(
        doc.walk(&["Summary", "TotalAmount"]).map(|n| n.text.as_str()),
        Some("17.50")
    );
}
