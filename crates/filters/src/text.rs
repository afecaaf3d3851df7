//! Cell text cleanup.

use rowsift_core::{CellValue, Table};
use scraper::Html;

/// Replace every occurrence of each word, and every double space, with a
/// single space until none are left.
///
/// Words are literal. Empty words and a lone space are skipped since
/// replacing them can never finish. Cells that contain none of the words keep
/// their original value.
pub fn strip_words(table: Table, words: &[&str]) -> Table {
    let mut targets: Vec<&str> = words
        .iter()
        .copied()
        .filter(|w| !w.is_empty() && *w != " ")
        .collect();
    targets.push("  ");

    table
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| {
                    let text = cell.as_text();
                    if targets.iter().any(|w| text.contains(w)) {
                        CellValue::String(strip_text(&text, &targets))
                    } else {
                        cell
                    }
                })
                .collect()
        })
        .collect()
}

fn strip_text(text: &str, targets: &[&str]) -> String {
    let mut stripped = text.to_string();
    while targets.iter().any(|w| stripped.contains(w)) {
        for word in targets {
            stripped = stripped.replace(word, " ");
        }
    }
    stripped
}

/// Remove markup from every cell.
///
/// Each cell is parsed as an HTML fragment and replaced by its text nodes,
/// so every named and numeric entity is decoded. Text from nested elements is
/// concatenated without extra whitespace, then trimmed.
pub fn strip_html(table: Table) -> Table {
    table
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| CellValue::String(html_text(&cell.as_text())))
                .collect()
        })
        .collect()
}

fn html_text(html: &str) -> String {
    Html::parse_fragment(html)
        .root_element()
        .text()
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_words() {
        let table = Table::from_data(vec![vec!["a\tb\t\tc", "clean"], vec!["x  y"]]);
        let out = strip_words(table, &["\t"]);
        assert_eq!(out.to_text_rows(), vec![vec!["a b c", "clean"], vec!["x y"]]);
    }

    #[test]
    fn test_strip_words_repeats_until_stable() {
        let table = Table::from_data(vec![vec!["foofoo bar"]]);
        let out = strip_words(table, &["foo", " "]);
        assert_eq!(out.to_text_rows(), vec![vec![" bar"]]);
    }

    #[test]
    fn test_strip_words_keeps_untouched_cells() {
        let table = Table::from_rows(vec![vec![CellValue::Int(5)]]);
        let out = strip_words(table, &["x"]);
        assert_eq!(out.row(0).unwrap()[0], CellValue::Int(5));
    }

    #[test]
    fn test_strip_html() {
        let table = Table::from_data(vec![vec![
            "  <b>Fish &amp; Chips</b> ",
            "<a href=\"#\">1 &lt; 2</a>&#33;",
            "caf&#xE9;&nbsp;",
            "&bogus; <br/>",
        ]]);
        let out = strip_html(table);
        assert_eq!(
            out.to_text_rows(),
            vec![vec!["Fish & Chips", "1 < 2!", "café", "&bogus;"]]
        );
    }

    #[test]
    fn test_strip_html_decodes_every_named_entity() {
        let table = Table::from_data(vec![vec![
            "caf&eacute; &rsquo;quoted&rsquo; &euro;5",
            "<p>foo<b>bar</b></p>",
        ]]);
        let out = strip_html(table);
        assert_eq!(
            out.to_text_rows(),
            vec![vec!["caf\u{e9} \u{2019}quoted\u{2019} \u{20ac}5", "foobar"]]
        );
    }

    #[test]
    fn test_strip_html_stringifies_other_cells() {
        let table = Table::from_rows(vec![vec![CellValue::Int(42), CellValue::Null]]);
        assert_eq!(strip_html(table).to_text_rows(), vec![vec!["42", ""]]);
    }
}
