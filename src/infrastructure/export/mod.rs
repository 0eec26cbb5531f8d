//! Backlog export functionality
//!
//! Flattens groomed items into spreadsheet rows. The same flattening is used by
//! the browser's XLSX download and by the server-side CSV endpoint.

mod backlog_sheet;

pub use backlog_sheet::{BacklogSheet, ExportError, EXPORT_FILENAME};
