//! EDI location parsing.
//!
//! Design sheets describe where a field lives with loosely formatted
//! text like `N104 (N101=VN and N103=92)`, `PID05 (08)` or `P0401`.
//! [`parse`] turns that text into a [`LocationDescriptor`] triple of
//! segment, element and qualifier. The parser is total: text it cannot
//! interpret yields the empty descriptor, never an error.

use std::sync::LazyLock;

use edigen_model::LocationDescriptor;
use regex::Regex;

/// `P0401` style shorthand where the leading `P0` is literal.
static LITERAL_P0: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^P0(\d)(\d{2})$").expect("Invalid P0 shorthand regex"));

/// `SEG<digits> (QSEG<digits>=QUAL ...)`: qualifier read from another
/// element's value. Deliberately not end-anchored: sheets often append
/// extra conditions (`and N103=92)`) after the first pair.
static QUALIFIED_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+?)(\d+)\s*\(\s*\S+?\d+\s*=\s*([A-Za-z0-9]+)")
        .expect("Invalid qualified-pair regex")
});

/// `SEG<digits> (QUAL)`: qualifier given literally.
static LITERAL_QUALIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+?)(\d+)\s*\(\s*([A-Za-z0-9]+)\s*\)$")
        .expect("Invalid literal-qualifier regex")
});

/// Bare location whose segment id ends in a digit, e.g. `PO102`.
static SUFFIXED_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+\d)(\d{2,})$").expect("Invalid suffixed regex"));

/// Bare location with an all-letter segment id, e.g. `REF02`, `N104`.
static BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)(\d+)$").expect("Invalid bare-location regex"));

/// Parses EDI location text into a segment/element/qualifier triple.
///
/// Patterns are tried in a fixed order; the first match wins. Unparsable
/// text yields [`LocationDescriptor::default`] (all fields empty).
#[must_use]
pub fn parse(text: &str) -> LocationDescriptor {
    let text = text.trim();

    let mut descriptor = if let Some(caps) = LITERAL_P0.captures(text) {
        LocationDescriptor::new(format!("PO{}", &caps[1]), &caps[2], "")
    } else if let Some(caps) = QUALIFIED_PAIR.captures(text) {
        let (segment, element) = split_digits(&caps[1], &caps[2]);
        LocationDescriptor::new(segment, element, &caps[3])
    } else if let Some(caps) = LITERAL_QUALIFIER.captures(text) {
        let (segment, element) = split_digits(&caps[1], &caps[2]);
        LocationDescriptor::new(segment, element, &caps[3])
    } else if let Some(caps) = SUFFIXED_SEGMENT.captures(text) {
        let digits = &caps[2];
        LocationDescriptor::new(&caps[1], &digits[digits.len() - 2..], "")
    } else if let Some(caps) = BARE.captures(text) {
        let (segment, element) = split_digits(&caps[1], &caps[2]);
        LocationDescriptor::new(segment, element, "")
    } else {
        return LocationDescriptor::default();
    };

    descriptor.segment = normalize_segment(&descriptor.segment);
    descriptor
}

/// Splits a letter prefix and digit run into segment id and element.
///
/// A digit run of three or more means the first digit belongs to the
/// segment (`N104` has segment `N1`); exactly two digits belong to the
/// element when the prefix already has more than one letter (`PID05`),
/// otherwise the first digit again joins the segment. A lone digit is
/// an element position, zero-padded.
fn split_digits(prefix: &str, digits: &str) -> (String, String) {
    match digits.len() {
        1 => (prefix.to_string(), format!("0{digits}")),
        2 if prefix.len() > 1 => (prefix.to_string(), digits.to_string()),
        2 => {
            let (head, tail) = digits.split_at(1);
            (format!("{prefix}{head}"), format!("0{tail}"))
        }
        _ => {
            let head = &digits[..1];
            let tail = &digits[digits.len() - 2..];
            (format!("{prefix}{head}"), tail.to_string())
        }
    }
}

/// Rewrites the common `P0`-for-`PO` sheet typo in segment ids.
#[must_use]
pub fn normalize_segment(segment: &str) -> String {
    segment
        .strip_prefix("P0")
        .map_or_else(|| segment.to_string(), |rest| format!("PO{rest}"))
}

/// Extracts the 850-direction value from an EDI info cell.
///
/// A cell may hold several `key: value` lines for different transaction
/// sets; the value whose key mentions `850` wins. Cells without a colon
/// (or without an `850` key) are returned trimmed as-is.
#[must_use]
pub fn clear_edi_info(text: &str) -> String {
    if !text.contains(':') {
        return text.trim().to_string();
    }
    for line in text.lines() {
        if let Some((key, value)) = line.split_once(':')
            && key.contains("850")
        {
            return value.trim().to_string();
        }
    }
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::split_digits;

    #[test]
    fn digit_split_rules() {
        assert_eq!(split_digits("N", "104"), ("N1".into(), "04".into()));
        assert_eq!(split_digits("PID", "05"), ("PID".into(), "05".into()));
        assert_eq!(split_digits("N", "12"), ("N1".into(), "02".into()));
        assert_eq!(split_digits("REF", "2"), ("REF".into(), "02".into()));
        assert_eq!(split_digits("SLN", "1011"), ("SLN1".into(), "11".into()));
    }
}
