//! Host payload boundary
//!
//! Hosts hand over loosely typed JSON (strings, flat arrays, nested arrays,
//! numbers mixed with text). Everything is converted to a [`Table`] of
//! [`CellValue`]s here, once, so the algorithms never deal with JSON.

use crate::cell::CellValue;
use crate::error::{FilterError, Result};
use crate::table::{Row, Table};
use serde_json::Value as JsonValue;
use std::fmt;

/// Shape of a host payload, judged by how deep the first elements nest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataShape {
    /// A string, number, boolean or null
    Scalar,
    /// An array whose first element is not an array
    Array1D,
    /// An array of arrays
    Array2D,
    /// Deeper nesting or an object
    Other,
}

impl DataShape {
    /// Detect the shape of a payload
    #[must_use]
    pub fn of(value: &JsonValue) -> Self {
        match array_depth(value) {
            0 if value.is_object() => DataShape::Other,
            0 => DataShape::Scalar,
            1 => DataShape::Array1D,
            2 => DataShape::Array2D,
            _ => DataShape::Other,
        }
    }
}

impl fmt::Display for DataShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataShape::Scalar => "scalar",
            DataShape::Array1D => "array1D",
            DataShape::Array2D => "array2D",
            DataShape::Other => "other",
        };
        f.write_str(name)
    }
}

/// Depth of nesting following the first element at every level
fn array_depth(value: &JsonValue) -> usize {
    let mut depth = 0;
    let mut current = value;
    while let JsonValue::Array(items) = current {
        depth += 1;
        match items.first() {
            Some(first) => current = first,
            None => break,
        }
    }
    depth
}

/// Convert one JSON cell to a cell value
///
/// Nested arrays and objects keep their JSON text.
#[must_use]
pub fn cell_from_json(value: &JsonValue) -> CellValue {
    match value {
        JsonValue::Null => CellValue::Null,
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Number(n) => n
            .as_i64()
            .map(CellValue::Int)
            .or_else(|| n.as_f64().map(CellValue::Float))
            .unwrap_or_else(|| CellValue::String(n.to_string())),
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Array(_) | JsonValue::Object(_) => CellValue::String(value.to_string()),
    }
}

fn row_from_json(index: usize, value: &JsonValue) -> Result<Row> {
    match value {
        JsonValue::Array(cells) => Ok(cells.iter().map(cell_from_json).collect()),
        other => Err(FilterError::shape(format!(
            "row {} is {} instead of an array of cells",
            index,
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

impl Table {
    /// Strictly read an array of rows
    ///
    /// Anything that is not an array whose every element is an array fails
    /// with [`FilterError::InvalidInputShape`].
    pub fn from_json(value: &JsonValue) -> Result<Self> {
        let JsonValue::Array(rows) = value else {
            return Err(FilterError::shape(format!(
                "expected an array of rows, got {}",
                json_kind(value)
            )));
        };

        rows.iter()
            .enumerate()
            .map(|(i, row)| row_from_json(i, row))
            .collect::<Result<Vec<_>>>()
            .map(Table::from_rows)
    }

    /// Parse a JSON document holding an array of rows
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(json)?;
        Self::from_json(&value)
    }

    /// Render as a JSON array of arrays
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Array(
            self.rows()
                .map(|row| {
                    JsonValue::Array(
                        row.iter()
                            .map(|cell| match cell {
                                CellValue::Null => JsonValue::Null,
                                CellValue::Bool(b) => JsonValue::Bool(*b),
                                CellValue::Int(i) => JsonValue::from(*i),
                                CellValue::Float(f) => JsonValue::from(*f),
                                CellValue::String(s) => JsonValue::String(s.clone()),
                            })
                            .collect(),
                    )
                })
                .collect(),
        )
    }
}

/// Leniently turn any scalar or array payload into a table
///
/// - scalar: a single cell, `"x"` becomes `[["x"]]`
/// - 1-D array: a single row
/// - 2-D array: one row per element, `null` cells become `""`
pub fn coerce_to_table(value: &JsonValue) -> Result<Table> {
    let shape = DataShape::of(value);
    match (shape, value) {
        (DataShape::Scalar, scalar) => Ok(Table::from_rows(vec![vec![cell_from_json(scalar)]])),
        (DataShape::Array1D, JsonValue::Array(cells)) => Ok(Table::from_rows(vec![cells
            .iter()
            .map(cell_from_json)
            .collect()])),
        (DataShape::Array2D, JsonValue::Array(rows)) => rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row_from_json(i, row).map(|cells| {
                    cells
                        .into_iter()
                        .map(|cell| if cell.is_null() { CellValue::empty() } else { cell })
                        .collect()
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Table::from_rows),
        (shape, _) => Err(FilterError::unsupported(shape.to_string(), "table")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shape_detection() {
        assert_eq!(DataShape::of(&json!("x")), DataShape::Scalar);
        assert_eq!(DataShape::of(&json!(3)), DataShape::Scalar);
        assert_eq!(DataShape::of(&json!([])), DataShape::Array1D);
        assert_eq!(DataShape::of(&json!(["a", "b"])), DataShape::Array1D);
        assert_eq!(DataShape::of(&json!([["a"], ["b"]])), DataShape::Array2D);
        assert_eq!(DataShape::of(&json!([[["a"]]])), DataShape::Other);
        assert_eq!(DataShape::of(&json!({"a": 1})), DataShape::Other);
    }

    #[test]
    fn test_from_json_strict() {
        let table = Table::from_json(&json!([[1, "a", null, true], [2.5]])).unwrap();
        assert_eq!(
            table.data(),
            &vec![
                vec![
                    CellValue::Int(1),
                    CellValue::from("a"),
                    CellValue::Null,
                    CellValue::Bool(true)
                ],
                vec![CellValue::Float(2.5)],
            ]
        );
    }

    #[test]
    fn test_from_json_rejects_flat_list() {
        let err = Table::from_json(&json!(["a", "b"])).unwrap_err();
        assert!(matches!(err, FilterError::InvalidInputShape(_)));
        let err = Table::from_json(&json!("a")).unwrap_err();
        assert!(matches!(err, FilterError::InvalidInputShape(_)));
    }

    #[test]
    fn test_from_json_keeps_blob_text() {
        let table = Table::from_json(&json!([[{"k": 1}, [1, 2]]])).unwrap();
        assert_eq!(table.cell_text(0, 0), r#"{"k":1}"#);
        assert_eq!(table.cell_text(0, 1), "[1,2]");
    }

    #[test]
    fn test_coerce_to_table() {
        let t = coerce_to_table(&json!("hello")).unwrap();
        assert_eq!(t.to_json(), json!([["hello"]]));

        let t = coerce_to_table(&json!(["a", 1])).unwrap();
        assert_eq!(t.to_json(), json!([["a", 1]]));

        let t = coerce_to_table(&json!([["a", null], [null]])).unwrap();
        assert_eq!(t.to_json(), json!([["a", ""], [""]]));

        assert!(matches!(
            coerce_to_table(&json!({"a": 1})),
            Err(FilterError::UnsupportedConversion { .. })
        ));
    }

    #[test]
    fn test_from_json_str_reports_json_errors() {
        assert!(matches!(
            Table::from_json_str("[[1,"),
            Err(FilterError::Json(_))
        ));
    }
}
