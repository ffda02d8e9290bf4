//! Prelude module - common imports for rowcast users
//!
//! ```rust
//! use rowcast::prelude::*;
//! ```

pub use crate::access::{
    boolean_value, date_value, display_string, locate, locate_in_row, numeric_value,
    rich_text_value, text_value,
};
pub use crate::{
    // Cell types
    CellValue,
    // Main types
    Document,
    // Error types
    Error,
    // Mapper types
    FieldKind,
    FieldSpec,
    FieldValue,
    Record,
    map_rows,

    Result,
    RichText,
    Row,
    Sheet,

    // Loader entry points
    open_path,
    open_stream,
    OpenOptions,
};
