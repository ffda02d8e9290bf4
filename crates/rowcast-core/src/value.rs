//! Cell value types
//!
//! A cell holds exactly one tagged value. The tag alone determines which
//! strict accessor can succeed without a coercion error; the display form
//! is defined for every tag and never fails.

use std::fmt;

use chrono::NaiveDateTime;

/// Represents the value stored in a cell
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CellValue {
    /// Empty cell (no value)
    Empty,

    /// Plain text value
    Text(String),

    /// Numeric value (all numbers stored as f64)
    Numeric(f64),

    /// Boolean value
    Boolean(bool),

    /// Date/time value (date-formatted numerics per the decoder's rule)
    Date(NaiveDateTime),

    /// Text with style-run metadata retained
    RichText(RichText),

    /// Formula with its cached result
    Formula {
        /// Original formula text (e.g., "=SUM(A1:A10)")
        text: String,
        /// Last calculated value, as stored by the producing application
        cached: Box<CellValue>,
    },
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Create a new formula value with a cached result
    pub fn formula<S: Into<String>>(text: S, cached: CellValue) -> Self {
        CellValue::Formula {
            text: text.into(),
            cached: Box::new(cached),
        }
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the cell contains a formula
    pub fn is_formula(&self) -> bool {
        matches!(self, CellValue::Formula { .. })
    }

    /// Get the tag name for error messages
    pub fn tag(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Text(_) => "text",
            CellValue::Numeric(_) => "numeric",
            CellValue::Boolean(_) => "boolean",
            CellValue::Date(_) => "date",
            CellValue::RichText(_) => "rich text",
            CellValue::Formula { .. } => "formula",
        }
    }

    /// The canonical textual representation of this value.
    ///
    /// Defined for every tag: numerics render their numeric literal
    /// (integral values keep one decimal, so `12.0` renders `"12.0"`),
    /// booleans render `"true"`/`"false"`, dates render ISO-8601, formulas
    /// render their cached value's display form, empty renders `""`.
    pub fn display_string(&self) -> String {
        self.to_string()
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Numeric(n) => write!(f, "{}", fmt_numeric(*n)),
            CellValue::Boolean(b) => write!(f, "{}", b),
            CellValue::Date(d) => write!(f, "{}", d),
            CellValue::RichText(r) => write!(f, "{}", r.text),
            CellValue::Formula { cached, .. } => write!(f, "{}", cached),
        }
    }
}

/// Render a numeric cell the way spreadsheet tooling prints doubles:
/// integral finite values keep one decimal place ("12.0", not "12").
fn fmt_numeric(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e16 {
        format!("{:.1}", n)
    } else {
        format!("{}", n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Numeric(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Numeric(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(d: NaiveDateTime) -> Self {
        CellValue::Date(d)
    }
}

impl From<RichText> for CellValue {
    fn from(r: RichText) -> Self {
        CellValue::RichText(r)
    }
}

/// Text with per-run style metadata
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RichText {
    /// The full text content
    pub text: String,
    /// Style runs covering sub-ranges of the text
    pub runs: Vec<TextRun>,
}

impl RichText {
    /// Create rich text with no style runs (a plain-text wrapper)
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            runs: Vec::new(),
        }
    }

    /// Check if any style-run metadata is present
    pub fn has_runs(&self) -> bool {
        !self.runs.is_empty()
    }
}

/// One styled run within a [`RichText`] value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextRun {
    /// Byte offset of the run start within the text
    pub start: usize,
    /// Byte length of the run
    pub len: usize,
    /// Font name applied to the run, if any
    pub font: Option<String>,
}
