//! Mapping-catalog records, loaded from the catalog's JSON interface.

use serde::{Deserialize, Serialize};

/// One mapping-catalog entry: an EDI location plus everything needed to
/// place its value in the outbound documents and the inbound test file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: u32,
    /// Segment id the record maps, e.g. `N1`.
    pub segment: String,
    /// Numeric element position within the segment.
    pub element: u8,
    /// Qualifier code; `None` and `""` are equivalent (unqualified).
    #[serde(default)]
    pub qualifier: Option<String>,
    /// Value expression written into test files; may embed the
    /// `{sequential_number}` token.
    #[serde(default)]
    pub value: String,
    /// Outbound document tag for the 850 direction.
    #[serde(default)]
    pub rsx_tag_850: String,
    /// Inbound test-file tag for the 850 direction.
    #[serde(default)]
    pub tli_tag_850: String,
    /// Root-relative output path per outbound kind, `/`- or `_`-delimited.
    #[serde(default)]
    pub path_855: String,
    #[serde(default)]
    pub path_856: String,
    #[serde(default)]
    pub path_810: String,
    /// True for fields that repeat per order line rather than per document.
    #[serde(default)]
    pub detail_level: bool,
    /// True for the buyer/vendor part-number fields.
    #[serde(default)]
    pub partnumber: bool,
    #[serde(default)]
    pub put_in_855: bool,
    #[serde(default)]
    pub put_in_856: bool,
    #[serde(default)]
    pub put_in_810: bool,
    /// Tag of the sibling qualifier element that disambiguates repeated
    /// containers (e.g. `AddressTypeCode`), when the field needs one.
    #[serde(default)]
    pub extra_qualifier_tag: Option<String>,
    /// Value the qualifier element must carry for this record's container.
    #[serde(default)]
    pub extra_qualifier_value: Option<String>,
    /// Sourcing group id for snippet generation, if the field belongs to one.
    #[serde(default)]
    pub sourcing_group: Option<u32>,
}

/// Code-generation grouping: fields sourced by the same populate method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcingGroup {
    pub id: u32,
    /// Name of the populate method the snippet generator emits.
    pub populate_method_name: String,
    /// Name of the map the method fills.
    pub map_name: String,
}
