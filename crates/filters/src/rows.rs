//! Row comparison and table reshaping helpers.

use rowsift_core::{CellValue, ColumnSpec, Row, Table};

/// Swap rows and columns.
///
/// Ragged input is padded with `Null` up to the widest row first.
pub fn transpose(table: Table) -> Table {
    let width = table.max_width();
    let mut columns: Vec<Row> = (0..width).map(|_| Vec::with_capacity(table.row_count())).collect();

    for row in table {
        let mut cells = row.into_iter();
        for column in &mut columns {
            column.push(cells.next().unwrap_or(CellValue::Null));
        }
    }

    Table::from_rows(columns)
}

/// Whether two rows hold the same text in the given columns.
///
/// Rows of different lengths are never equal. An empty spec compares every
/// column.
pub fn rows_equal(a: &Row, b: &Row, columns: &ColumnSpec) -> bool {
    if a.len() != b.len() {
        return false;
    }
    columns.resolve(a.len()).into_iter().all(|col| {
        match (a.get(col), b.get(col)) {
            (Some(x), Some(y)) => x.text_eq(y),
            (None, None) => true,
            _ => false,
        }
    })
}

/// Whether any row of the table equals `row` in the given columns.
pub fn contains_row(table: &Table, row: &Row, columns: &ColumnSpec) -> bool {
    table.rows().any(|candidate| rows_equal(candidate, row, columns))
}
