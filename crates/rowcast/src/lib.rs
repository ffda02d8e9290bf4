//! # rowcast
//!
//! Typed record extraction from spreadsheet documents.
//!
//! Rowcast opens XLS, XLSX, and ODS containers (detected by content, not
//! extension), addresses sheets, rows, and cells safely, coerces cell
//! storage into strongly typed values, and maps row ranges into ordered
//! domain records.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rowcast::prelude::*;
//!
//! # fn main() -> rowcast::Result<()> {
//! let options = OpenOptions::new();
//! let Some(document) = open_path("people.xlsx", &options)? else {
//!     // path form: a missing file is absence, not an error
//!     return Ok(());
//! };
//!
//! let sheet = document.sheet(0).expect("first sheet");
//! let fields = [
//!     FieldSpec::new(0, FieldKind::Text),
//!     FieldSpec::new(2, FieldKind::Numeric),
//! ];
//!
//! // row 0 is the header; map the data rows into records
//! let last = sheet.last_row_index().unwrap_or(0) as i64;
//! let records = map_rows(sheet, 1, last, &fields)?;
//! for record in &records {
//!     println!("{:?} is {:?} cm", record.text(0), record.numeric(1));
//! }
//! # Ok(())
//! # }
//! ```

pub mod access;
pub mod loader;
pub mod mapper;
pub mod prelude;

// Re-export core types
pub use rowcast_core::{CellValue, Document, Error, Result, RichText, Row, Sheet, TextRun};

// Loader entry points
pub use loader::{open_path, open_stream, OpenOptions};

// Mapper types
pub use mapper::{map_rows, FieldKind, FieldSpec, FieldValue, Record};
