//! # rowcast-core
//!
//! Core data structures for the rowcast record-extraction library.
//!
//! This crate provides the fundamental types used throughout rowcast:
//! - [`CellValue`] - The closed tagged cell value (text, numeric, boolean, date, rich text, formula)
//! - [`Document`], [`Sheet`], [`Row`] - The decoded document structures
//! - [`Error`] - The error taxonomy shared by the loader, accessors, and mapper
//!
//! ## Example
//!
//! ```rust
//! use rowcast_core::{CellValue, Document, Sheet};
//!
//! let mut sheet = Sheet::new("People");
//! sheet.set_value(0, 0, "Name");
//! sheet.set_value(1, 0, "Alice");
//! sheet.set_value(1, 1, 165.5);
//!
//! let mut doc = Document::empty();
//! doc.add_sheet(sheet);
//!
//! let cell = doc.sheet(0).unwrap().row(1).unwrap().cell(1);
//! assert_eq!(cell, Some(&CellValue::Numeric(165.5)));
//! ```

pub mod document;
pub mod error;
pub mod value;

// Re-exports for convenience
pub use document::{Document, Row, Sheet};
pub use error::{Error, Result};
pub use value::{CellValue, RichText, TextRun};
