//! Word matching over table rows.
//!
//! A row is matched through its row-scoped text: the text of every selected
//! cell followed by a single space, in column order. Terms are matched
//! case-insensitively, either as plain substrings or bounded by `\b` when
//! exact matching is requested. Terms are escaped first, so punctuation in a
//! search term only ever matches itself.

use regex::{Regex, RegexBuilder};
use rowsift_core::{CellValue, ColumnSpec, Result, Row, Table};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use std::fmt;

/// Message reported when a row search has nothing to look for.
pub const NO_SEARCH_TERMS: &str = "No values have been specified to search on";

/// How several search terms combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Every term must match.
    All,
    /// At least one term must match.
    #[default]
    Any,
}

impl MatchMode {
    /// Parse the host spelling (`"all"` or `"any"`, any case). Anything other
    /// than `all` means [`MatchMode::Any`].
    #[must_use]
    pub fn parse(mode: &str) -> Self {
        if mode.trim().eq_ignore_ascii_case("all") {
            MatchMode::All
        } else {
            MatchMode::Any
        }
    }

    /// Combine per-term outcomes.
    fn satisfied(self, matched: usize, total: usize) -> bool {
        match self {
            MatchMode::All => matched == total,
            MatchMode::Any => matched > 0,
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::All => f.write_str("all"),
            MatchMode::Any => f.write_str("any"),
        }
    }
}

/// Search terms plus the options that decide how rows are tested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordQuery {
    /// Terms to look for. Blank terms are ignored.
    pub terms: Vec<String>,
    /// How the terms combine.
    pub mode: MatchMode,
    /// Columns that make up the row-scoped text. Empty means all.
    pub columns: ColumnSpec,
    /// Require word boundaries around each term.
    pub exact: bool,
}

impl WordQuery {
    /// Create a query for the given terms, matching any of them anywhere
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WordQuery {
            terms: terms.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set the match mode
    #[must_use]
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the columns to search
    #[must_use]
    pub fn with_columns(mut self, columns: impl Into<ColumnSpec>) -> Self {
        self.columns = columns.into();
        self
    }

    /// Set whether terms must match on word boundaries
    #[must_use]
    pub fn with_exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    /// Terms that are not blank
    pub fn active_terms(&self) -> impl Iterator<Item = &str> {
        self.terms
            .iter()
            .map(String::as_str)
            .filter(|term| !term.trim().is_empty())
    }

    /// Whether every term is blank
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.active_terms().next().is_none()
    }
}

/// How a compiled term is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Anchor {
    /// Anywhere in the text.
    Contains,
    /// Between word boundaries.
    WordBoundary,
    /// The whole text and nothing else.
    WholeText,
}

impl Anchor {
    pub(crate) fn for_exact(exact: bool) -> Self {
        if exact {
            Anchor::WordBoundary
        } else {
            Anchor::Contains
        }
    }
}

/// Compile one case-insensitive literal term.
pub(crate) fn compile_term(term: &str, anchor: Anchor) -> Result<Regex> {
    let escaped = regex::escape(term);
    let pattern = match anchor {
        Anchor::Contains => escaped,
        Anchor::WordBoundary => format!(r"\b{}\b", escaped),
        Anchor::WholeText => format!("^{}$", escaped),
    };
    Ok(RegexBuilder::new(&pattern).case_insensitive(true).build()?)
}

/// A [`WordQuery`] with its terms compiled, ready to test rows.
#[derive(Debug, Clone)]
pub struct RowMatcher {
    patterns: Vec<Regex>,
    mode: MatchMode,
    columns: ColumnSpec,
}

impl RowMatcher {
    /// Compile a query using its own exactness setting
    pub fn new(query: &WordQuery) -> Result<Self> {
        Self::with_anchor(query, Anchor::for_exact(query.exact))
    }

    pub(crate) fn with_anchor(query: &WordQuery, anchor: Anchor) -> Result<Self> {
        let patterns = query
            .active_terms()
            .map(|term| compile_term(term, anchor))
            .collect::<Result<Vec<_>>>()?;
        Ok(RowMatcher {
            patterns,
            mode: query.mode,
            columns: query.columns.clone(),
        })
    }

    /// Whether there is nothing to match on
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Scan steps a row costs: one per term plus one for the row itself
    #[must_use]
    pub fn steps_per_row(&self) -> usize {
        self.patterns.len() + 1
    }

    /// Build the row-scoped text
    #[must_use]
    pub fn row_text(&self, row: &Row) -> String {
        row_text(row, &self.columns)
    }

    /// Test a row against the terms and mode
    #[must_use]
    pub fn matches_row(&self, row: &Row) -> bool {
        let text = self.row_text(row);
        let matched = self.patterns.iter().filter(|re| re.is_match(&text)).count();
        self.mode.satisfied(matched, self.patterns.len())
    }
}

/// Space-joined text of the selected cells, each followed by a space.
pub(crate) fn row_text(row: &Row, columns: &ColumnSpec) -> String {
    let mut text = String::new();
    for (index, cell) in row.iter().enumerate() {
        if columns.contains(index) {
            text.push_str(&cell.as_text());
            text.push(' ');
        }
    }
    text
}

/// Rows that satisfy the query, in one synchronous pass.
///
/// A query whose terms are all blank returns the table unchanged. Exact
/// matching uses Unicode word boundaries, so accented letters such as `é`
/// count as word characters: `café` matches inside `"café au lait"`.
pub fn match_rows(table: &Table, query: &WordQuery) -> Result<Table> {
    let matcher = RowMatcher::new(query)?;
    if matcher.is_noop() {
        return Ok(table.clone());
    }
    Ok(table
        .rows()
        .filter(|row| matcher.matches_row(row))
        .cloned()
        .collect())
}

/// Rows that do not satisfy the query, in one synchronous pass.
///
/// A query whose terms are all blank returns the table unchanged.
pub fn remove_rows(table: &Table, query: &WordQuery) -> Result<Table> {
    let matcher = RowMatcher::new(query)?;
    if matcher.is_noop() {
        return Ok(table.clone());
    }
    Ok(table
        .rows()
        .filter(|row| !matcher.matches_row(row))
        .cloned()
        .collect())
}

/// Outcome of [`find_first_matching_row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSearch {
    /// 1-based position of the first matching row.
    Found(usize),
    /// No row matched.
    NotFound,
    /// Every search term was blank.
    NoSearchTerms,
}

impl RowSearch {
    /// The 1-based row position, if one was found
    #[must_use]
    pub fn row(self) -> Option<usize> {
        match self {
            RowSearch::Found(row) => Some(row),
            _ => None,
        }
    }

    /// Host rendering: `[["3"]]`, `[[]]` or `{"error": "..."}`
    #[must_use]
    pub fn to_json(self) -> JsonValue {
        match self {
            RowSearch::Found(row) => json!([[row.to_string()]]),
            RowSearch::NotFound => json!([[]]),
            RowSearch::NoSearchTerms => json!({ "error": NO_SEARCH_TERMS }),
        }
    }
}

/// Locate the first row matching the query, cell by cell.
///
/// Unlike [`match_rows`], terms are tested against each selected cell on its
/// own, and the mode is applied per cell: with [`MatchMode::All`] a single
/// cell has to match every term. Exact matching means the whole cell equals
/// the term, ignoring case.
pub fn find_first_matching_row(table: &Table, query: &WordQuery) -> Result<RowSearch> {
    if query.is_blank() {
        return Ok(RowSearch::NoSearchTerms);
    }

    let anchor = if query.exact {
        Anchor::WholeText
    } else {
        Anchor::Contains
    };
    let matcher = RowMatcher::with_anchor(query, anchor)?;
    let total = matcher.patterns.len();

    for (row_index, row) in table.rows().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            if !matcher.columns.contains(col) {
                continue;
            }
            let text = cell.as_text();
            let matched = matcher.patterns.iter().filter(|re| re.is_match(&text)).count();
            if matcher.mode.satisfied(matched, total) {
                return Ok(RowSearch::Found(row_index + 1));
            }
        }
    }

    Ok(RowSearch::NotFound)
}

/// Rows in which every candidate value equals at least one cell.
///
/// Cells and candidates compare by text. An empty candidate list keeps no
/// rows.
pub fn rows_containing_all_values(table: &Table, values: &[CellValue]) -> Table {
    if values.is_empty() {
        return Table::new();
    }
    table
        .rows()
        .filter(|row| {
            values
                .iter()
                .all(|value| row.iter().any(|cell| cell.text_eq(value)))
        })
        .cloned()
        .collect()
}

/// Whether the words occur anywhere in the table.
///
/// `words` is a comma separated list; `&nbsp;` entities are removed and each
/// word is trimmed, blank words are ignored. Row texts accumulate while
/// scanning, so in [`MatchMode::All`] different words may be found in
/// different rows. An empty table is never a match; a non-empty table with
/// no usable words always is.
pub fn check_condition(table: &Table, words: &str, mode: MatchMode, exact: bool) -> Result<bool> {
    if table.is_empty() {
        return Ok(false);
    }

    let cleaned = words.replace("&nbsp;", "");
    let terms: Vec<&str> = cleaned
        .split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .collect();
    if terms.is_empty() {
        return Ok(true);
    }

    let anchor = Anchor::for_exact(exact);
    let patterns = terms
        .iter()
        .map(|term| compile_term(term, anchor))
        .collect::<Result<Vec<_>>>()?;

    let all_columns = ColumnSpec::all();
    let mut scanned = String::new();
    let mut found = vec![false; patterns.len()];

    for row in table.rows() {
        scanned.push_str(&row_text(row, &all_columns));
        for (slot, re) in found.iter_mut().zip(&patterns) {
            if !*slot && re.is_match(&scanned) {
                *slot = true;
            }
        }
        let matched = found.iter().filter(|&&f| f).count();
        if mode.satisfied(matched, patterns.len()) {
            return Ok(true);
        }
    }

    Ok(false)
}
