//! EDI transaction-set kinds handled by the generator.

use serde::{Deserialize, Serialize};

/// An EDI transaction-set kind, identified by its X12 code.
///
/// Inbound kinds (850, 860) arrive as scenarios; outbound kinds
/// (855, 856, 810) are synthesized from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum DocumentKind {
    /// 850 purchase order.
    PurchaseOrder,
    /// 855 purchase order acknowledgment.
    Acknowledgment,
    /// 856 advance ship notice.
    Shipment,
    /// 810 invoice.
    Invoice,
    /// 860 purchase order change.
    Change,
}

impl DocumentKind {
    /// The outbound kinds, in generation order.
    pub const OUTBOUND: [Self; 3] = [Self::Acknowledgment, Self::Shipment, Self::Invoice];

    /// Numeric X12 transaction-set code.
    #[must_use]
    pub fn code(self) -> u16 {
        match self {
            Self::PurchaseOrder => 850,
            Self::Acknowledgment => 855,
            Self::Shipment => 856,
            Self::Invoice => 810,
            Self::Change => 860,
        }
    }

    /// Code as the string used in artifact file names.
    #[must_use]
    pub fn code_str(self) -> &'static str {
        match self {
            Self::PurchaseOrder => "850",
            Self::Acknowledgment => "855",
            Self::Shipment => "856",
            Self::Invoice => "810",
            Self::Change => "860",
        }
    }

    /// Human-readable label for summaries and logs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PurchaseOrder => "purchase order",
            Self::Acknowledgment => "acknowledgment",
            Self::Shipment => "shipment",
            Self::Invoice => "invoice",
            Self::Change => "order change",
        }
    }

    /// True for kinds that arrive as scenario inputs rather than outputs.
    #[must_use]
    pub fn is_inbound(self) -> bool {
        matches!(self, Self::PurchaseOrder | Self::Change)
    }
}

impl TryFrom<u16> for DocumentKind {
    type Error = UnknownKind;

    fn try_from(code: u16) -> Result<Self, UnknownKind> {
        match code {
            850 => Ok(Self::PurchaseOrder),
            855 => Ok(Self::Acknowledgment),
            856 => Ok(Self::Shipment),
            810 => Ok(Self::Invoice),
            860 => Ok(Self::Change),
            other => Err(UnknownKind(other)),
        }
    }
}

impl From<DocumentKind> for u16 {
    fn from(kind: DocumentKind) -> u16 {
        kind.code()
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code_str())
    }
}

/// Transaction-set code outside the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown transaction-set code: {0}")]
pub struct UnknownKind(pub u16);
