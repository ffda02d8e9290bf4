//! Cell location and typed access.
//!
//! A stateless module of free functions. The locator resolves
//! (row, column) pairs to an optional cell; the typed accessors coerce a
//! located cell into one semantic type each.
//!
//! Indices are signed so the defensive short-circuit on negative values
//! stays observable: a negative row or column returns absence immediately,
//! before any row resolution. Absence (missing row, missing cell, index out
//! of range) is always `None`, never an error. A strict accessor errors only
//! when a cell is present with the wrong tag.

use rowcast_core::{CellValue, Error, Result, RichText, Row, Sheet};

use chrono::NaiveDateTime;

/// Resolve a (row, column) pair against a sheet to an optional cell.
///
/// Negative indices return `None` without touching the sheet.
pub fn locate(sheet: &Sheet, row: i64, column: i64) -> Option<&CellValue> {
    if row < 0 || column < 0 {
        return None;
    }
    let row = sheet.row(u32::try_from(row).ok()?)?;
    locate_in_row(row, column)
}

/// Resolve a column index against an already-resolved row.
pub fn locate_in_row(row: &Row, column: i64) -> Option<&CellValue> {
    if column < 0 {
        return None;
    }
    row.cell(u32::try_from(column).ok()?)
}

/// Get a cell's text, strictly: any tag other than `Text` is a
/// [`Error::TypeMismatch`]. An absent cell is `Ok(None)`.
pub fn text_value<'a>(sheet: &'a Sheet, row: i64, column: i64) -> Result<Option<&'a str>> {
    locate(sheet, row, column).map(require_text).transpose()
}

/// Row form of [`text_value`].
pub fn text_value_in_row<'a>(row: &'a Row, column: i64) -> Result<Option<&'a str>> {
    locate_in_row(row, column).map(require_text).transpose()
}

/// Get a cell's canonical display string.
///
/// Defined for every tag, so this never reports a type mismatch; only an
/// absent cell yields `None`.
pub fn display_string(sheet: &Sheet, row: i64, column: i64) -> Option<String> {
    locate(sheet, row, column).map(CellValue::display_string)
}

/// Row form of [`display_string`].
pub fn display_string_in_row(row: &Row, column: i64) -> Option<String> {
    locate_in_row(row, column).map(CellValue::display_string)
}

/// Get a cell's numeric value, strictly on the `Numeric` tag.
pub fn numeric_value(sheet: &Sheet, row: i64, column: i64) -> Result<Option<f64>> {
    locate(sheet, row, column).map(require_numeric).transpose()
}

/// Row form of [`numeric_value`].
pub fn numeric_value_in_row(row: &Row, column: i64) -> Result<Option<f64>> {
    locate_in_row(row, column).map(require_numeric).transpose()
}

/// Get a cell's boolean value, strictly on the `Boolean` tag.
pub fn boolean_value(sheet: &Sheet, row: i64, column: i64) -> Result<Option<bool>> {
    locate(sheet, row, column).map(require_boolean).transpose()
}

/// Row form of [`boolean_value`].
pub fn boolean_value_in_row(row: &Row, column: i64) -> Result<Option<bool>> {
    locate_in_row(row, column).map(require_boolean).transpose()
}

/// Get a cell's date value, strictly on the `Date` tag.
///
/// Which numerics became dates was decided at load time by the decoder's
/// own date-detection rule; a plain `Numeric` cell does not coerce here.
pub fn date_value(sheet: &Sheet, row: i64, column: i64) -> Result<Option<NaiveDateTime>> {
    locate(sheet, row, column).map(require_date).transpose()
}

/// Row form of [`date_value`].
pub fn date_value_in_row(row: &Row, column: i64) -> Result<Option<NaiveDateTime>> {
    locate_in_row(row, column).map(require_date).transpose()
}

/// Get a cell's rich text.
///
/// A plain `Text` cell yields a run-free [`RichText`]; a `RichText` cell
/// yields its runs. Any other tag is a type mismatch.
pub fn rich_text_value(sheet: &Sheet, row: i64, column: i64) -> Result<Option<RichText>> {
    locate(sheet, row, column).map(require_rich_text).transpose()
}

/// Row form of [`rich_text_value`].
pub fn rich_text_value_in_row(row: &Row, column: i64) -> Result<Option<RichText>> {
    locate_in_row(row, column).map(require_rich_text).transpose()
}

fn require_text(cell: &CellValue) -> Result<&str> {
    match cell {
        CellValue::Text(s) => Ok(s),
        other => Err(mismatch("text", other)),
    }
}

fn require_numeric(cell: &CellValue) -> Result<f64> {
    match cell {
        CellValue::Numeric(n) => Ok(*n),
        other => Err(mismatch("numeric", other)),
    }
}

fn require_boolean(cell: &CellValue) -> Result<bool> {
    match cell {
        CellValue::Boolean(b) => Ok(*b),
        other => Err(mismatch("boolean", other)),
    }
}

fn require_date(cell: &CellValue) -> Result<NaiveDateTime> {
    match cell {
        CellValue::Date(d) => Ok(*d),
        other => Err(mismatch("date", other)),
    }
}

fn require_rich_text(cell: &CellValue) -> Result<RichText> {
    match cell {
        CellValue::Text(s) => Ok(RichText::plain(s.clone())),
        CellValue::RichText(r) => Ok(r.clone()),
        other => Err(mismatch("rich text", other)),
    }
}

fn mismatch(expected: &'static str, actual: &CellValue) -> Error {
    Error::TypeMismatch {
        expected,
        actual: actual.tag(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_sheet() -> Sheet {
        let mut sheet = Sheet::new("Sheet1");
        sheet.set_value(0, 0, "Name");
        sheet.set_value(1, 0, "Alice");
        sheet.set_value(1, 1, 165.5);
        sheet.set_value(1, 2, true);
        sheet
    }

    #[test]
    fn test_locate_roundtrips_stored_values() {
        let sheet = sample_sheet();
        assert_eq!(locate(&sheet, 1, 0), Some(&CellValue::Text("Alice".into())));
        assert_eq!(locate(&sheet, 1, 1), Some(&CellValue::Numeric(165.5)));
        assert_eq!(locate(&sheet, 1, 2), Some(&CellValue::Boolean(true)));
    }

    #[test]
    fn test_locate_negative_indices_are_absence() {
        let sheet = sample_sheet();
        assert_eq!(locate(&sheet, -1, 0), None);
        assert_eq!(locate(&sheet, 0, -1), None);
        assert_eq!(locate(&sheet, -1, -1), None);

        let row = sheet.row(1).unwrap();
        assert_eq!(locate_in_row(row, -5), None);
    }

    #[test]
    fn test_locate_sparse_absence() {
        let sheet = sample_sheet();
        // missing row
        assert_eq!(locate(&sheet, 7, 0), None);
        // column beyond the row's populated cells
        assert_eq!(locate(&sheet, 1, 9), None);
    }

    #[test]
    fn test_strict_accessors_match_tags() {
        let sheet = sample_sheet();
        assert_eq!(text_value(&sheet, 1, 0).unwrap(), Some("Alice"));
        assert_eq!(numeric_value(&sheet, 1, 1).unwrap(), Some(165.5));
        assert_eq!(boolean_value(&sheet, 1, 2).unwrap(), Some(true));
    }

    #[test]
    fn test_strict_accessor_mismatch() {
        let sheet = sample_sheet();
        let err = numeric_value(&sheet, 1, 0).unwrap_err();
        match err {
            Error::TypeMismatch { expected, actual } => {
                assert_eq!(expected, "numeric");
                assert_eq!(actual, "text");
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }

        assert!(text_value(&sheet, 1, 1).is_err());
        assert!(boolean_value(&sheet, 1, 0).is_err());
        assert!(date_value(&sheet, 1, 1).is_err());
    }

    #[test]
    fn test_absent_cell_is_ok_none_for_strict_accessors() {
        let sheet = sample_sheet();
        assert_eq!(text_value(&sheet, 9, 0).unwrap(), None);
        assert_eq!(numeric_value(&sheet, -3, 0).unwrap(), None);
    }

    #[test]
    fn test_display_string_never_mismatches() {
        let mut sheet = sample_sheet();
        sheet.set_value(2, 0, 12.0);
        sheet.set_value(2, 1, CellValue::Empty);

        assert_eq!(display_string(&sheet, 2, 0), Some("12.0".into()));
        assert_eq!(display_string(&sheet, 1, 2), Some("true".into()));
        assert_eq!(display_string(&sheet, 2, 1), Some(String::new()));
        // absent cell is still absence, not an empty string
        assert_eq!(display_string(&sheet, 9, 9), None);
    }

    #[test]
    fn test_rich_text_from_plain_text() {
        let sheet = sample_sheet();
        let rich = rich_text_value(&sheet, 1, 0).unwrap().unwrap();
        assert_eq!(rich.text, "Alice");
        assert!(!rich.has_runs());

        assert!(rich_text_value(&sheet, 1, 1).is_err());
    }

    #[test]
    fn test_formula_tag_fails_strict_accessors() {
        let mut sheet = Sheet::new("Sheet1");
        sheet.set_value(0, 0, CellValue::formula("=1+1", CellValue::Numeric(2.0)));

        assert!(numeric_value(&sheet, 0, 0).is_err());
        // but the display form renders the cached value
        assert_eq!(display_string(&sheet, 0, 0), Some("2.0".into()));
    }
}
