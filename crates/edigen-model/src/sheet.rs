//! Raw design-sheet columns, before catalog resolution.

use serde::{Deserialize, Serialize};

/// One column of the design sheet, as read from its CSV export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetColumn {
    /// Spreadsheet-style column letter (`B`, `C`, ... `AA`), for error
    /// messages that point back at the sheet.
    pub column: String,
    pub label: String,
    pub edi_info: String,
    pub usage: String,
    pub min_len: Option<u32>,
    pub max_len: Option<u32>,
    pub description: String,
}
