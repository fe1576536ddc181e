//! Parsed EDI location triples.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a mapped field lives in the EDI document: segment id,
/// two-digit element position and an optional qualifier code.
///
/// An empty descriptor (all fields blank) marks text that could not be
/// interpreted as a location; callers treat it as "unmapped" rather
/// than as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDescriptor {
    /// Segment id, e.g. `N1`, `PO1`, `REF`.
    pub segment: String,
    /// Element position within the segment, zero-padded to two digits.
    pub element: String,
    /// Qualifier code restricting the match, or empty when unqualified.
    pub qualifier: String,
}

impl LocationDescriptor {
    pub fn new(
        segment: impl Into<String>,
        element: impl Into<String>,
        qualifier: impl Into<String>,
    ) -> Self {
        Self {
            segment: segment.into(),
            element: element.into(),
            qualifier: qualifier.into(),
        }
    }

    /// True when nothing was parsed out of the source text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segment.is_empty() && self.element.is_empty() && self.qualifier.is_empty()
    }
}

impl fmt::Display for LocationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(unmapped)");
        }
        write!(f, "{}{}", self.segment, self.element)?;
        if !self.qualifier.is_empty() {
            write!(f, " ({})", self.qualifier)?;
        }
        Ok(())
    }
}
