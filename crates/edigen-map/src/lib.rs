//! EDI location parsing and mapping-catalog resolution.

pub mod location;
pub mod repository;
pub mod resolver;

pub use location::{clear_edi_info, normalize_segment, parse};
pub use repository::{Catalog, CatalogError};
pub use resolver::{ItemResolution, ResolveError, resolve, resolve_columns};
