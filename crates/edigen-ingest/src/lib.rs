//! Ingestion of the three run inputs: design sheet, scenario JSON and
//! the zipped CSV design files.

pub mod archive;
pub mod discover;
pub mod error;
pub mod scenarios;
pub mod sheet;

pub use archive::{attach_designs, attach_designs_path};
pub use discover::{InputFiles, discover_inputs};
pub use error::IngestError;
pub use scenarios::{load_scenarios_path, load_scenarios_str, normalize_key};
pub use sheet::{SheetParse, column_letter, parse_sheet_path, parse_sheet_str};
