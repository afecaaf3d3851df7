//! Table filtering and restructuring for rowsift
//!
//! Every operation takes plain [`Table`] values plus column, word and mode
//! specifiers, and knows nothing about where the data came from.
//!
//! - [`match_rows`], [`remove_rows`], [`find_first_matching_row`],
//!   [`check_condition`], [`rows_containing_all_values`]: word matching
//! - [`filter_rows_batched`]: the same filtering in cooperative slices for
//!   large tables
//! - [`dedupe`]: drop repeated rows, keeping the first
//! - [`intersect_all`], [`flatten_unique`]: set operations over lists
//! - [`split_by_tags`], [`line_break_split`]: cut HTML fragments into cells
//! - [`strip_words`], [`strip_html`], [`transpose`], [`rows_equal`]:
//!   smaller cleanup and reshaping helpers
//!
//! Operations that restructure data take the table by value and return a
//! new one; read-only operations borrow it. Everything except the batched
//! filter is synchronous.
//!
//! # Examples
//!
//! ```
//! use rowsift_filters::{dedupe, match_rows, MatchMode, WordQuery};
//! use rowsift_core::{ColumnSpec, Table};
//!
//! let table = Table::from_data(vec![
//!     vec!["apple pie", "dessert"],
//!     vec!["banana split", "dessert"],
//!     vec!["apple pie", "dessert"],
//! ]);
//!
//! let unique = dedupe(table, &ColumnSpec::all());
//! assert_eq!(unique.row_count(), 2);
//!
//! let query = WordQuery::new(["pie"]).with_mode(MatchMode::All).with_exact(true);
//! let pies = match_rows(&unique, &query).unwrap();
//! assert_eq!(pies.row_count(), 1);
//! ```

mod batched;
mod dedupe;
mod html_split;
mod rows;
mod set_ops;
mod text;
mod word_match;

pub use batched::{
    filter_rows_batched, filter_rows_batched_with, match_rows_batched, remove_rows_batched,
    BatchConfig, DEFAULT_SCAN_STEPS_PER_CHUNK, DEFAULT_YIELD_DELAY_MS,
};
pub use dedupe::dedupe;
pub use html_split::{line_break_split, split_by_tags, SplitOptions};
pub use rows::{contains_row, rows_equal, transpose};
pub use set_ops::{flatten_unique, intersect_all};
pub use text::{strip_html, strip_words};
pub use word_match::{
    check_condition, find_first_matching_row, match_rows, remove_rows,
    rows_containing_all_values, MatchMode, RowMatcher, RowSearch, WordQuery, NO_SEARCH_TERMS,
};

pub use rowsift_core::{CellValue, ColumnSpec, FilterError, Result, Row, Table};
