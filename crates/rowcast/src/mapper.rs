//! Row-to-record mapping.
//!
//! Drives the locator and typed accessors across a row range, assembling one
//! [`Record`] per row from a fixed ordered field spec. Mapping is
//! all-or-nothing: the first accessor failure aborts the whole operation,
//! wrapped with the offending coordinates. Absent fields are `None` entries
//! in the record, never failures; the caller decides its own default/skip
//! policy.

use chrono::NaiveDateTime;

use rowcast_core::{Result, RichText, Sheet};

use crate::access;

/// Which accessor a field uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Strict text accessor
    Text,
    /// Universal display-string accessor (never a type error)
    DisplayString,
    /// Strict numeric accessor
    Numeric,
    /// Strict boolean accessor
    Boolean,
    /// Strict date accessor
    Date,
    /// Rich text accessor (text with style runs)
    RichText,
}

/// One field of a record: a column index paired with the accessor to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Zero-based column index
    pub column: i64,
    /// Accessor applied at that column
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Create a field spec.
    pub fn new(column: i64, kind: FieldKind) -> Self {
        Self { column, kind }
    }
}

/// A typed field value extracted from one cell.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// From [`FieldKind::Text`]
    Text(String),
    /// From [`FieldKind::DisplayString`]
    DisplayString(String),
    /// From [`FieldKind::Numeric`]
    Numeric(f64),
    /// From [`FieldKind::Boolean`]
    Boolean(bool),
    /// From [`FieldKind::Date`]
    Date(NaiveDateTime),
    /// From [`FieldKind::RichText`]
    RichText(RichText),
}

impl FieldValue {
    /// The textual content, for text-like fields.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) | FieldValue::DisplayString(s) => Some(s),
            FieldValue::RichText(r) => Some(&r.text),
            _ => None,
        }
    }

    /// The numeric content, for numeric fields.
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            FieldValue::Numeric(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean content, for boolean fields.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The date content, for date fields.
    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}

/// One record assembled from one data row.
///
/// Fields appear in spec declaration order. A `None` entry means the cell
/// was absent (sparse row, out-of-range column); it is never an error.
/// Records are fully detached values with no tie to the document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<Option<FieldValue>>,
}

impl Record {
    /// Get a field by declaration position.
    pub fn field(&self, index: usize) -> Option<&FieldValue> {
        self.fields.get(index).and_then(|f| f.as_ref())
    }

    /// Number of fields in the record (equals the spec length).
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Convenience: the field's textual content.
    pub fn text(&self, index: usize) -> Option<&str> {
        self.field(index).and_then(FieldValue::as_str)
    }

    /// Convenience: the field's numeric content.
    pub fn numeric(&self, index: usize) -> Option<f64> {
        self.field(index).and_then(FieldValue::as_numeric)
    }

    /// Convenience: the field's boolean content.
    pub fn boolean(&self, index: usize) -> Option<bool> {
        self.field(index).and_then(FieldValue::as_boolean)
    }

    /// Convenience: the field's date content.
    pub fn date(&self, index: usize) -> Option<NaiveDateTime> {
        self.field(index).and_then(FieldValue::as_date)
    }

    /// Consume the record into its field values.
    pub fn into_fields(self) -> Vec<Option<FieldValue>> {
        self.fields
    }
}

/// Map every row in `[first_data_row, last_data_row]` (inclusive, ascending)
/// to a record.
///
/// Row 0 is conventionally the header, so callers usually pass
/// `first_data_row = 1` and `last_data_row = sheet.last_row_index()`. An
/// empty or inverted range yields an empty list. The first accessor failure
/// aborts the whole mapping with [`rowcast_core::Error::FieldAccess`]
/// carrying the offending row and column; no partial list is returned.
/// Output order equals input row order.
pub fn map_rows(
    sheet: &Sheet,
    first_data_row: i64,
    last_data_row: i64,
    fields: &[FieldSpec],
) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    if last_data_row < first_data_row {
        return Ok(records);
    }

    for row in first_data_row..=last_data_row {
        let mut values = Vec::with_capacity(fields.len());
        for field in fields {
            let value = extract(sheet, row, field).map_err(|e| e.at(row, field.column))?;
            values.push(value);
        }
        records.push(Record { fields: values });
    }
    Ok(records)
}

fn extract(sheet: &Sheet, row: i64, field: &FieldSpec) -> Result<Option<FieldValue>> {
    let col = field.column;
    Ok(match field.kind {
        FieldKind::Text => access::text_value(sheet, row, col)?
            .map(str::to_string)
            .map(FieldValue::Text),
        FieldKind::DisplayString => {
            access::display_string(sheet, row, col).map(FieldValue::DisplayString)
        }
        FieldKind::Numeric => access::numeric_value(sheet, row, col)?.map(FieldValue::Numeric),
        FieldKind::Boolean => access::boolean_value(sheet, row, col)?.map(FieldValue::Boolean),
        FieldKind::Date => access::date_value(sheet, row, col)?.map(FieldValue::Date),
        FieldKind::RichText => access::rich_text_value(sheet, row, col)?.map(FieldValue::RichText),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rowcast_core::Error;

    fn people_sheet() -> Sheet {
        let mut sheet = Sheet::new("People");
        for (col, header) in ["Name", "Grade", "Height", "Weight", "Birthday", "Notes"]
            .iter()
            .enumerate()
        {
            sheet.set_value(0, col as u32, *header);
        }
        sheet.set_value(1, 0, "Alice");
        sheet.set_value(1, 1, "Pass");
        sheet.set_value(1, 2, 165.5);
        sheet.set_value(1, 3, 55.2);
        sheet.set_value(1, 4, "2000-01-01");
        sheet.set_value(1, 5, "ok");
        sheet.set_value(2, 0, "Bob");
        sheet.set_value(2, 1, "Fail");
        sheet.set_value(2, 2, 170.0);
        sheet.set_value(2, 3, 60.0);
        sheet.set_value(2, 4, "1999-05-05");
        sheet.set_value(2, 5, "ok");
        sheet
    }

    fn people_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new(0, FieldKind::Text),
            FieldSpec::new(1, FieldKind::Text),
            FieldSpec::new(2, FieldKind::Numeric),
            FieldSpec::new(3, FieldKind::Numeric),
            FieldSpec::new(4, FieldKind::Text),
            FieldSpec::new(5, FieldKind::Text),
        ]
    }

    #[test]
    fn test_map_rows_in_order() {
        let sheet = people_sheet();
        let records = map_rows(&sheet, 1, 2, &people_fields()).unwrap();

        assert_eq!(records.len(), 2);

        let alice = &records[0];
        assert_eq!(alice.text(0), Some("Alice"));
        assert_eq!(alice.text(1), Some("Pass"));
        assert_eq!(alice.numeric(2), Some(165.5));
        assert_eq!(alice.numeric(3), Some(55.2));
        assert_eq!(alice.text(4), Some("2000-01-01"));
        assert_eq!(alice.text(5), Some("ok"));

        let bob = &records[1];
        assert_eq!(bob.text(0), Some("Bob"));
        assert_eq!(bob.text(1), Some("Fail"));
        assert_eq!(bob.numeric(2), Some(170.0));
        assert_eq!(bob.numeric(3), Some(60.0));
        assert_eq!(bob.text(4), Some("1999-05-05"));
        assert_eq!(bob.text(5), Some("ok"));
    }

    #[test]
    fn test_map_rows_excludes_header_by_convention() {
        let sheet = people_sheet();
        let last = sheet.last_row_index().unwrap() as i64;
        let records = map_rows(&sheet, 1, last, &people_fields()).unwrap();
        assert_eq!(records.len(), 2);
        assert_ne!(records[0].text(0), Some("Name"));
    }

    #[test]
    fn test_map_rows_aborts_whole_mapping_on_mismatch() {
        let mut sheet = people_sheet();
        // Bob's height is text where a numeric field is specced
        sheet.set_value(2, 2, "tall");

        let err = map_rows(&sheet, 1, 2, &people_fields()).unwrap_err();
        match err {
            Error::FieldAccess {
                row,
                column,
                source,
            } => {
                assert_eq!(row, 2);
                assert_eq!(column, 2);
                assert!(matches!(*source, Error::TypeMismatch { .. }));
            }
            other => panic!("expected FieldAccess, got {other:?}"),
        }
    }

    #[test]
    fn test_map_rows_absent_cells_become_none_fields() {
        let mut sheet = people_sheet();
        let fields = people_fields();
        // a sparse row with only a name
        sheet.set_value(3, 0, "Carol");

        let records = map_rows(&sheet, 1, 3, &fields).unwrap();
        assert_eq!(records.len(), 3);

        let carol = &records[2];
        assert_eq!(carol.text(0), Some("Carol"));
        assert_eq!(carol.field(1), None);
        assert_eq!(carol.numeric(2), None);
        assert_eq!(carol.len(), fields.len());
    }

    #[test]
    fn test_map_rows_empty_range() {
        let sheet = people_sheet();
        let records = map_rows(&sheet, 1, 0, &people_fields()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_display_string_fields_never_mismatch() {
        let sheet = people_sheet();
        let fields = vec![
            FieldSpec::new(0, FieldKind::DisplayString),
            FieldSpec::new(2, FieldKind::DisplayString),
        ];
        let records = map_rows(&sheet, 1, 2, &fields).unwrap();
        assert_eq!(records[0].text(1), Some("165.5"));
        assert_eq!(records[1].text(1), Some("170.0"));
    }
}
