//! Resolution of parsed locations against the mapping catalog.

use std::fmt;

use edigen_model::{
    CatalogRecord, DocumentKind, Item, LocationDescriptor, SheetColumn, path_segments,
};
use tracing::{debug, warn};

use crate::location;
use crate::repository::Catalog;

/// Element position every out-of-range `PO1` reference collapses to.
/// Trading partners number ad-hoc `PO1` extensions 07 and up; the
/// catalog keys them all under one element.
const PO1_OVERFLOW_ELEMENT: u8 = 7;

/// Errors from catalog resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No catalog record matches the descriptor.
    NoMatch(LocationDescriptor),
    /// More than one record matches; the catalog itself is inconsistent.
    Ambiguous {
        descriptor: LocationDescriptor,
        count: usize,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch(d) => write!(f, "no catalog record for {d}"),
            Self::Ambiguous { descriptor, count } => {
                write!(f, "{count} catalog records for {descriptor}")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Finds the single catalog record matching a parsed location.
pub fn resolve<'a>(
    catalog: &'a Catalog,
    descriptor: &LocationDescriptor,
) -> Result<&'a CatalogRecord, ResolveError> {
    let Ok(element) = descriptor.element.parse::<u8>() else {
        return Err(ResolveError::NoMatch(descriptor.clone()));
    };
    let element = if descriptor.segment == "PO1" && element > PO1_OVERFLOW_ELEMENT {
        PO1_OVERFLOW_ELEMENT
    } else {
        element
    };

    let mut matches = catalog.records.iter().filter(|r| {
        r.segment == descriptor.segment
            && r.element == element
            && qualifier_eq(r.qualifier.as_deref(), &descriptor.qualifier)
    });

    match (matches.next(), matches.next()) {
        (Some(record), None) => Ok(record),
        (None, _) => Err(ResolveError::NoMatch(descriptor.clone())),
        (Some(_), Some(_)) => {
            let count = 2 + matches.count();
            Err(ResolveError::Ambiguous {
                descriptor: descriptor.clone(),
                count,
            })
        }
    }
}

/// Missing and empty qualifiers are the same thing: unqualified.
fn qualifier_eq(record: Option<&str>, parsed: &str) -> bool {
    record.unwrap_or("") == parsed
}

/// Outcome of resolving a whole design sheet.
#[derive(Debug, Default)]
pub struct ItemResolution {
    /// One item per sheet column, in sheet order.
    pub items: Vec<Item>,
    /// Collected per-column errors; resolution never aborts the sheet.
    pub errors: Vec<String>,
}

/// Resolves every sheet column against the catalog.
///
/// Columns whose EDI info text parses to nothing stay unresolved without
/// an error (the sheet routinely describes unmapped fields). Failed
/// lookups are collected per column and the scan continues.
#[must_use]
pub fn resolve_columns(catalog: &Catalog, columns: &[SheetColumn]) -> ItemResolution {
    let mut resolution = ItemResolution::default();

    for column in columns {
        let cleared = location::clear_edi_info(&column.edi_info);
        let descriptor = location::parse(&cleared);

        let mut item = Item {
            label: column.label.clone(),
            edi_info: column.edi_info.clone(),
            usage: column.usage.clone(),
            min_len: column.min_len,
            max_len: column.max_len,
            description: column.description.clone(),
            descriptor: descriptor.clone(),
            ..Item::default()
        };

        if descriptor.is_empty() {
            debug!(column = %column.column, label = %column.label, "no EDI location");
            resolution.items.push(item);
            continue;
        }

        match resolve(catalog, &descriptor) {
            Ok(record) => {
                apply_record(&mut item, record, catalog);
                check_qualifier_paths(&item, &mut resolution.errors);
            }
            Err(err) => {
                warn!(column = %column.column, %err, "catalog resolution failed");
                resolution
                    .errors
                    .push(format!("column {} ({}): {err}", column.column, column.label));
            }
        }
        resolution.items.push(item);
    }

    resolution
}

fn apply_record(item: &mut Item, record: &CatalogRecord, catalog: &Catalog) {
    item.record_id = Some(record.id);
    item.value = record.value.clone();
    item.rsx_tag_850 = record.rsx_tag_850.clone();
    item.tli_tag_850 = record.tli_tag_850.clone();
    item.path_855 = record.path_855.clone();
    item.path_856 = record.path_856.clone();
    item.path_810 = record.path_810.clone();
    item.detail_level = record.detail_level;
    item.partnumber = record.partnumber;
    item.put_in_855 = record.put_in_855;
    item.put_in_856 = record.put_in_856;
    item.put_in_810 = record.put_in_810;
    item.extra_qualifier_tag = record.extra_qualifier_tag.clone();
    item.extra_qualifier_value = record.extra_qualifier_value.clone();
    item.sourcing_group = record.sourcing_group.and_then(|id| catalog.group(id)).cloned();
}

/// A qualified item needs a parent container to qualify: its path for
/// every kind it is placed in must be at least two segments deep.
fn check_qualifier_paths(item: &Item, errors: &mut Vec<String>) {
    if item.qualifier_pair().is_none() {
        return;
    }
    for kind in DocumentKind::OUTBOUND {
        if item.included_in(kind) && path_segments(item.path_for(kind)).len() < 2 {
            errors.push(format!(
                "{}: qualified item has a top-level {kind} path ({:?})",
                item.label,
                item.path_for(kind),
            ));
        }
    }
}
