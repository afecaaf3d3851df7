use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Represents a single cell of a table row
///
/// Every algorithm in rowsift works on the stringified form of a cell, which is
/// produced by [`CellValue::as_text`] (and `Display`):
///
/// | variant  | text                                  |
/// |----------|---------------------------------------|
/// | `Null`   | `""`                                  |
/// | `Bool`   | `true` / `false`                      |
/// | `Int`    | decimal digits                        |
/// | `Float`  | shortest round-trip form (`3.0 → 3`)  |
/// | `String` | verbatim                              |
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl CellValue {
    /// Create an empty string cell.
    #[must_use]
    pub fn empty() -> Self {
        CellValue::String(String::new())
    }

    /// Check if the value is null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Check if the cell stringifies to nothing
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.as_text().is_empty()
    }

    /// Get the value as text, borrowing when the cell already holds a string
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Null => Cow::Borrowed(""),
            CellValue::Bool(b) => Cow::Owned(b.to_string()),
            CellValue::Int(i) => Cow::Owned(i.to_string()),
            CellValue::Float(f) => Cow::Owned(f.to_string()),
            CellValue::String(s) => Cow::Borrowed(s.as_str()),
        }
    }

    /// Compare two cells by their stringified form
    #[must_use]
    pub fn text_eq(&self, other: &CellValue) -> bool {
        match (self, other) {
            (CellValue::String(a), CellValue::String(b)) => a == b,
            _ => self.as_text() == other.as_text(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<&String> for CellValue {
    fn from(s: &String) -> Self {
        CellValue::String(s.clone())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stringification() {
        assert_eq!(CellValue::Null.as_text(), "");
        assert_eq!(CellValue::Bool(true).as_text(), "true");
        assert_eq!(CellValue::Int(-42).as_text(), "-42");
        assert_eq!(CellValue::Float(3.0).as_text(), "3");
        assert_eq!(CellValue::Float(2.5).as_text(), "2.5");
        assert_eq!(CellValue::from("x y").as_text(), "x y");
    }

    #[test]
    fn test_text_eq_crosses_variants() {
        assert!(CellValue::Int(1).text_eq(&CellValue::from("1")));
        assert!(CellValue::Null.text_eq(&CellValue::empty()));
        assert!(!CellValue::Bool(true).text_eq(&CellValue::from("TRUE")));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(CellValue::from(None::<i64>), CellValue::Null);
        assert_eq!(CellValue::from(Some(7)), CellValue::Int(7));
        assert!(CellValue::empty().is_blank());
        assert!(!CellValue::empty().is_null());
    }
}
