//! Row deduplication.

use rowsift_core::{CellValue, ColumnSpec, Row, Table};
use std::collections::HashSet;

/// Remove duplicate rows, comparing only the key columns.
///
/// An empty spec compares every column of the first row. When rows are equal
/// on the key, the earliest one survives and the kept rows stay in their
/// original order. Cells are compared by their text.
///
/// Rows too short to hold a key column are padded with empty strings up to
/// that column, and the padding stays in the returned rows.
pub fn dedupe(table: Table, columns: &ColumnSpec) -> Table {
    let key_columns = columns.resolve(table.col_count());
    let total = table.row_count();
    let mut seen: HashSet<Vec<String>> = HashSet::with_capacity(total);

    let kept: Table = table
        .into_iter()
        .filter_map(|mut row| {
            pad_to_columns(&mut row, &key_columns);
            let key = key_columns.iter().map(|&col| row[col].to_string()).collect();
            seen.insert(key).then_some(row)
        })
        .collect();

    tracing::trace!(
        "dedupe kept {} of {} rows on {} key columns",
        kept.row_count(),
        total,
        key_columns.len()
    );
    kept
}

fn pad_to_columns(row: &mut Row, columns: &[usize]) {
    if let Some(&widest) = columns.iter().max() {
        if row.len() <= widest {
            row.resize(widest + 1, CellValue::empty());
        }
    }
}
