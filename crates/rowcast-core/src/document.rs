//! Document, sheet, and row types
//!
//! Sparse row-based storage: only populated cells are stored, using a
//! row-major `BTreeMap` layout. A row may hold fewer cells than the sheet's
//! widest row; missing cells are absent, not empty-valued.

use std::collections::BTreeMap;

use crate::value::CellValue;

/// An opened spreadsheet document
///
/// A document owns its decoded sheets exclusively. The underlying OS
/// resource is consumed while the loader decodes and is released before the
/// document is returned, so the document itself is a plain detached value.
#[derive(Debug, Default)]
pub struct Document {
    /// Sheets in document order
    sheets: Vec<Sheet>,
}

impl Document {
    /// Create an empty document with no sheets
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the document has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get a sheet by zero-based index
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Get a sheet by name
    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    /// Iterate over all sheets
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    /// Append a sheet, returning its index
    pub fn add_sheet(&mut self, sheet: Sheet) -> usize {
        self.sheets.push(sheet);
        self.sheets.len() - 1
    }
}

/// One named table of rows within a document
#[derive(Debug)]
pub struct Sheet {
    /// Sheet name
    name: String,
    /// Row index → row (sparse)
    rows: BTreeMap<u32, Row>,
}

impl Sheet {
    /// Create a new empty sheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a row by zero-based index
    pub fn row(&self, index: u32) -> Option<&Row> {
        self.rows.get(&index)
    }

    /// The last populated row index, or `None` for a sheet with no cells
    pub fn last_row_index(&self) -> Option<u32> {
        self.rows.keys().next_back().copied()
    }

    /// Number of populated rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Set a cell value, creating the row as needed
    ///
    /// Setting [`CellValue::Empty`] stores an empty cell rather than
    /// removing it; absence is reserved for cells that were never written.
    pub fn set_value<V: Into<CellValue>>(&mut self, row: u32, col: u32, value: V) {
        self.rows
            .entry(row)
            .or_default()
            .cells
            .insert(col, value.into());
    }

    /// Iterate over populated rows in ascending index order
    pub fn rows(&self) -> impl Iterator<Item = (u32, &Row)> {
        self.rows.iter().map(|(i, r)| (*i, r))
    }
}

/// A sparse ordered sequence of cells addressed by column index
#[derive(Debug, Default)]
pub struct Row {
    /// Column index → cell (sparse)
    cells: BTreeMap<u32, CellValue>,
}

impl Row {
    /// Get a cell by zero-based column index
    pub fn cell(&self, col: u32) -> Option<&CellValue> {
        self.cells.get(&col)
    }

    /// Check if the row has any cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of populated cells in the row
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Iterate over populated cells in ascending column order
    pub fn cells(&self) -> impl Iterator<Item = (u32, &CellValue)> {
        self.cells.iter().map(|(c, v)| (*c, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sparse_rows_and_cells() {
        let mut sheet = Sheet::new("Sheet1");
        sheet.set_value(0, 0, "header");
        sheet.set_value(5, 2, 7.5);

        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.last_row_index(), Some(5));
        assert!(sheet.row(3).is_none());

        let row = sheet.row(5).unwrap();
        assert_eq!(row.cell(2), Some(&CellValue::Numeric(7.5)));
        assert_eq!(row.cell(0), None);
        assert_eq!(row.cell_count(), 1);
    }

    #[test]
    fn test_empty_cell_is_present_not_absent() {
        let mut sheet = Sheet::new("Sheet1");
        sheet.set_value(1, 1, CellValue::Empty);

        let row = sheet.row(1).unwrap();
        assert_eq!(row.cell(1), Some(&CellValue::Empty));
        assert_eq!(row.cell(2), None);
    }

    #[test]
    fn test_document_sheet_access() {
        let mut doc = Document::empty();
        assert!(doc.is_empty());

        doc.add_sheet(Sheet::new("People"));
        doc.add_sheet(Sheet::new("Totals"));

        assert_eq!(doc.sheet_count(), 2);
        assert_eq!(doc.sheet(0).unwrap().name(), "People");
        assert_eq!(doc.sheet_by_name("Totals").unwrap().name(), "Totals");
        assert!(doc.sheet(2).is_none());
        assert!(doc.sheet_by_name("Missing").is_none());
    }

    #[test]
    fn test_last_row_index_empty_sheet() {
        let sheet = Sheet::new("Empty");
        assert_eq!(sheet.last_row_index(), None);
    }
}
