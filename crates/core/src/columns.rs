//! Spreadsheet-style column addressing.
//!
//! Column letters use bijective base-26: `A`..`Z` are the digits 1..26 and
//! there is no zero digit, so `A = 0`, `Z = 25`, `AA = 26`, `ZZ = 701`,
//! `AAA = 702` once shifted to 0-based indices.
//!
//! Column lists are lenient. Tokens that do not resolve to a column are
//! dropped rather than reported, and a list in which nothing resolves behaves
//! like an empty list (every column).

use serde::{Deserialize, Serialize};

/// Convert 0-based column index to column letters
/// 0=A, 1=B, ... 25=Z, 26=AA, 27=AB, ...
pub fn column_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut col = index + 1;

    while col > 0 {
        col -= 1;
        letters.push((col % 26) as u8 + b'A');
        col /= 26;
    }

    letters.iter().rev().map(|&b| b as char).collect()
}

/// Resolve a single column token to a 0-based index.
///
/// A token made only of digits is taken as an index that is already 0-based
/// and returned unchanged. Otherwise the token must consist of ASCII letters
/// (either case) and is decoded as bijective base-26. Empty or unusable input
/// gives `None`.
pub fn column_index(token: &str) -> Option<usize> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    if token.bytes().all(|b| b.is_ascii_digit()) {
        return token.parse::<usize>().ok();
    }

    let mut col = 0usize;
    for b in token.bytes() {
        if !b.is_ascii_alphabetic() {
            return None;
        }
        let digit = (b.to_ascii_uppercase() - b'A') as usize + 1;
        col = col.checked_mul(26)?.checked_add(digit)?;
    }

    Some(col - 1)
}

/// Parse a comma separated column list such as `"A, C, 2"`.
///
/// Letter tokens go through [`column_index`]; bare numbers are 1-based
/// positions and are shifted down by one. Tokens that resolve to nothing are
/// skipped and repeated columns are only listed once, in first-seen order.
pub fn parse_column_list(spec: &str) -> Vec<usize> {
    let mut indices: Vec<usize> = Vec::new();

    for token in spec.split(',') {
        let token = token.trim();
        let resolved = if token.bytes().any(|b| b.is_ascii_alphabetic()) {
            column_index(token)
        } else if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            token.parse::<usize>().ok().and_then(|n| n.checked_sub(1))
        } else {
            None
        };

        match resolved {
            Some(index) if !indices.contains(&index) => indices.push(index),
            Some(_) => {}
            None => {
                if !token.is_empty() {
                    tracing::debug!("Dropping unresolvable column token {:?}", token);
                }
            }
        }
    }

    indices
}

/// A resolved set of columns to read from each row.
///
/// An empty set means "every column".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ColumnSpec {
    indices: Vec<usize>,
}

impl ColumnSpec {
    /// Select every column
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Parse a comma separated column list
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        ColumnSpec {
            indices: parse_column_list(spec),
        }
    }

    /// Build from 0-based indices, dropping repeats
    #[must_use]
    pub fn from_indices<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        let mut spec = Self::default();
        for index in indices {
            if !spec.indices.contains(&index) {
                spec.indices.push(index);
            }
        }
        spec
    }

    /// Whether every column is selected
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.indices.is_empty()
    }

    /// The explicitly selected indices, in insertion order
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Whether column `index` is selected
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.is_all() || self.indices.contains(&index)
    }

    /// Concrete indices for a row of `width` cells
    #[must_use]
    pub fn resolve(&self, width: usize) -> Vec<usize> {
        if self.is_all() {
            (0..width).collect()
        } else {
            self.indices.clone()
        }
    }
}

impl From<&str> for ColumnSpec {
    fn from(spec: &str) -> Self {
        Self::parse(spec)
    }
}

impl From<String> for ColumnSpec {
    fn from(spec: String) -> Self {
        Self::parse(&spec)
    }
}

impl From<ColumnSpec> for String {
    fn from(spec: ColumnSpec) -> Self {
        spec.indices
            .iter()
            .map(|&i| column_letter(i))
            .collect::<Vec<_>>()
            .join(",")
    }
}
