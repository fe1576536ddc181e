pub mod catalog;
pub mod item;
pub mod kind;
pub mod location;
pub mod scenario;
pub mod sheet;

pub use catalog::{CatalogRecord, SourcingGroup};
pub use item::{Item, SEQ_PLACEHOLDER, path_segments};
pub use kind::{DocumentKind, UnknownKind};
pub use location::LocationDescriptor;
pub use scenario::Scenario;
pub use sheet::SheetColumn;
