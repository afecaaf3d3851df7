//! Splitting HTML fragments into cells by tag.
//!
//! Every cell is first split on `<br>` / `<br/>`. Each row is then scanned
//! character by character with a small tag-aware state machine that cuts the
//! text at the end of each target tag. This is deliberately not an HTML
//! parser: it only knows about `<`, `>`, closing slashes and the first word
//! of an opening tag.

use rowsift_core::{CellValue, FilterError, Result, Row, Table};
use serde::{Deserialize, Serialize};

/// Options for [`split_by_tags`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitOptions {
    /// Tag names whose content becomes separate cells (e.g. `"p"`, `"li"`).
    pub target_tags: Vec<String>,
    /// Drop text that is not inside an open target tag.
    pub exclude_other_tags: bool,
}

impl SplitOptions {
    /// Split by the given tag names
    pub fn new<I, S>(target_tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SplitOptions {
            target_tags: target_tags.into_iter().map(Into::into).collect(),
            exclude_other_tags: false,
        }
    }

    /// Set whether text outside target tags is dropped
    #[must_use]
    pub fn with_exclude_other_tags(mut self, exclude: bool) -> Self {
        self.exclude_other_tags = exclude;
        self
    }
}

/// Split one string on `<br>` and `<br/>`.
fn split_line_breaks(text: &str) -> impl Iterator<Item = &str> {
    text.split("<br/>").flat_map(|part| part.split("<br>"))
}

fn line_break_fragments(row: &Row) -> Vec<String> {
    row.iter()
        .flat_map(|cell| {
            let text = cell.as_text();
            split_line_breaks(&text)
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Split every cell on `<br>` / `<br/>`, keeping the pieces in the same row.
pub fn line_break_split(table: Table) -> Table {
    table
        .into_iter()
        .map(|row| {
            line_break_fragments(&row)
                .into_iter()
                .map(CellValue::String)
                .collect()
        })
        .collect()
}

/// Split the HTML in each row by the configured target tags.
///
/// Rows without any closing tag are returned as their `<br>`-split pieces.
/// Rows that end up with no cells are dropped.
pub fn split_by_tags(table: Table, options: &SplitOptions) -> Result<Table> {
    if options.target_tags.is_empty() {
        return Err(FilterError::EmptyTargetTags);
    }

    let mut output = Table::new();
    for (index, row) in table.into_iter().enumerate() {
        let fragments = line_break_fragments(&row);

        let cells = if fragments.iter().any(|f| f.contains("</")) {
            let mut scanner = TagScanner::new(options);
            for fragment in &fragments {
                scanner.scan(fragment);
            }
            scanner.into_cells()
        } else {
            tracing::trace!("Row {} has no closing tags, passing it through", index);
            fragments
        };

        if !cells.is_empty() {
            output.push(cells.into_iter().map(CellValue::String).collect());
        }
    }
    Ok(output)
}

/// Tag state carried across the fragments of one row.
struct TagScanner<'a> {
    options: &'a SplitOptions,
    /// Names (with attributes) of the currently open tags, innermost last.
    open_tags: Vec<String>,
    /// Full text of the open target tag; empty when none is open.
    open_target: String,
    cells: Vec<String>,
}

impl<'a> TagScanner<'a> {
    fn new(options: &'a SplitOptions) -> Self {
        TagScanner {
            options,
            open_tags: Vec::new(),
            open_target: String::new(),
            cells: Vec::new(),
        }
    }

    fn is_target(&self, tag: &str) -> bool {
        let name = first_word(tag);
        self.options.target_tags.iter().any(|t| t == name)
    }

    fn flush(&mut self, text: &mut String) {
        if !text.is_empty() {
            self.cells.push(std::mem::take(text));
        }
    }

    fn scan(&mut self, fragment: &str) {
        let bytes = fragment.as_bytes();
        let mut in_tag = false;
        let mut opening = false;
        let mut close_start = 0usize;
        let mut tag = String::new();
        let mut text = String::new();

        // A new fragment consumes the innermost tag left open by the last one.
        self.open_tags.pop();

        for (i, ch) in fragment.char_indices() {
            match ch {
                '<' => {
                    in_tag = true;
                    opening = bytes.get(i + 1) != Some(&b'/');
                    if opening {
                        tag.clear();
                    } else {
                        close_start = i + 2;
                    }
                }
                '>' => {
                    if opening {
                        if !tag.is_empty() {
                            if self.is_target(&tag) {
                                self.open_target.clone_from(&tag);
                            }
                            self.open_tags.push(tag.clone());
                        }
                    } else {
                        let closed = fragment.get(close_start..i).unwrap_or("");
                        if closed == first_word(&self.open_target) {
                            self.flush(&mut text);
                            self.open_target.clear();
                        }
                        self.open_tags.pop();
                    }
                    opening = false;
                    in_tag = false;
                }
                _ if !in_tag => {
                    if !self.options.exclude_other_tags || !self.open_target.is_empty() {
                        text.push(ch);
                    }
                }
                _ => {
                    if opening {
                        tag.push(ch);
                    }
                }
            }
        }

        self.flush(&mut text);
    }

    fn into_cells(self) -> Vec<String> {
        self.cells
    }
}

/// Tag name without attributes.
fn first_word(tag: &str) -> &str {
    tag.split(' ').next().unwrap_or("")
}
