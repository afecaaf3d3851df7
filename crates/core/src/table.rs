use crate::cell::CellValue;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A single table row.
pub type Row = Vec<CellValue>;

/// An ordered collection of rows (row-major storage)
///
/// Rows are allowed to be ragged; a cell past the end of a row reads as the
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from a 2D vector of values
    #[must_use]
    pub fn from_data<T: Into<CellValue>>(data: Vec<Vec<T>>) -> Self {
        let rows = data
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Table { rows }
    }

    /// Create a table from already converted rows
    #[must_use]
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Table { rows }
    }

    /// Get the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns of the first row
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Get the length of the longest row
    #[must_use]
    pub fn max_width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the table has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Stringified cell, empty for cells past the end of the row
    #[must_use]
    pub fn cell_text(&self, row: usize, col: usize) -> Cow<'_, str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map_or(Cow::Borrowed(""), CellValue::as_text)
    }

    /// Append a row
    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Borrow the underlying data
    #[must_use]
    pub fn data(&self) -> &Vec<Row> {
        &self.rows
    }

    /// Take the underlying rows
    #[must_use]
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Stringify every cell
    #[must_use]
    pub fn to_text_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect()
    }
}

impl From<Vec<Row>> for Table {
    fn from(rows: Vec<Row>) -> Self {
        Table { rows }
    }
}

impl FromIterator<Row> for Table {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Table {
            rows: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Table {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_and_counts() {
        let table = Table::from_data(vec![vec!["a", "b", "c"], vec!["d"]]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.col_count(), 3);
        assert_eq!(table.max_width(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_cell_text_tolerates_ragged_rows() {
        let table = Table::from_data(vec![vec![CellValue::Int(1)], vec![]]);
        assert_eq!(table.cell_text(0, 0), "1");
        assert_eq!(table.cell_text(0, 5), "");
        assert_eq!(table.cell_text(1, 0), "");
        assert_eq!(table.cell_text(9, 0), "");
    }

    #[test]
    fn test_serializes_as_nested_arrays() {
        let table = Table::from_data(vec![vec![CellValue::Int(1), CellValue::from("a")]]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"[[1,"a"]]"#);
        let back: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
