//! Decoding rows into named-field records.

use crate::api::DecodeError;

use super::sheet::{CellValue, Row, SheetName};

static EMPTY_CELL: CellValue = CellValue::Empty;

/// A record type backed by one sheet, decoded from a single row.
pub trait SheetRecord: Sized {
    const SHEET: SheetName;

    fn from_row(index: usize, row: &Row) -> Result<Self, DecodeError>;
}

/// Column-by-column access to a row, producing `DecodeError`s that point at
/// the offending cell.
pub(crate) struct RowReader<'a> {
    sheet: SheetName,
    index: usize,
    row: &'a Row,
}

impl<'a> RowReader<'a> {
    pub(crate) fn new(sheet: SheetName, index: usize, row: &'a Row) -> Self {
        Self { sheet, index, row }
    }

    fn error(&self, column: &'static str, reason: impl Into<String>) -> DecodeError {
        DecodeError {
            sheet: self.sheet,
            row: self.index,
            column,
            reason: reason.into(),
        }
    }

    fn cell(&self, col: usize) -> &CellValue {
        self.row.get(col).unwrap_or(&EMPTY_CELL)
    }

    pub(crate) fn text(&self, col: usize, column: &'static str) -> Result<Option<String>, DecodeError> {
        match self.cell(col) {
            CellValue::Bool(_) => Err(self.error(column, "expected text, found a boolean")),
            cell => Ok(cell.as_text().map(|s| s.into_owned())),
        }
    }

    pub(crate) fn required_text(&self, col: usize, column: &'static str) -> Result<String, DecodeError> {
        self.text(col, column)?
            .ok_or_else(|| self.error(column, "missing required cell"))
    }

    pub(crate) fn number(&self, col: usize, column: &'static str) -> Result<Option<f64>, DecodeError> {
        match self.cell(col) {
            CellValue::Number(n) => Ok(Some(*n)),
            CellValue::Text(s) if s.trim().is_empty() => Ok(None),
            CellValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| self.error(column, format!("expected a number, found '{}'", s))),
            CellValue::Empty => Ok(None),
            CellValue::Bool(_) => Err(self.error(column, "expected a number, found a boolean")),
        }
    }
}
