//! Core types for rowsift
//!
//! Provides the cell value sum type, the ragged [`Table`] container, the
//! error taxonomy shared by every rowsift crate, spreadsheet-style column
//! addressing, and conversion of loosely typed host payloads into tables.
//!
//! # Examples
//!
//! ```
//! use rowsift_core::{column_letter, parse_column_list, Table};
//!
//! assert_eq!(column_letter(27), "AB");
//! assert_eq!(parse_column_list("A,C,2"), vec![0, 2, 1]);
//!
//! let table = Table::from_data(vec![vec!["a", "b"], vec!["c"]]);
//! assert_eq!(table.cell_text(1, 1), "");
//! ```

pub mod boundary;
mod cell;
pub mod columns;
mod error;
mod table;

pub use boundary::{coerce_to_table, DataShape};
pub use cell::CellValue;
pub use columns::{column_index, column_letter, parse_column_list, ColumnSpec};
pub use error::{FilterError, Result};
pub use table::{Row, Table};
