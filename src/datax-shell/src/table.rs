//! Borderless two-column text tables.

use unicode_width::UnicodeWidthStr;

const INDENT: &str = "  ";
const GAP: &str = "  ";

/// Render rows as left-aligned columns with no border or header.
///
/// The first column is padded to its widest cell by display width. Every row
/// ends with a newline and carries no trailing whitespace.
pub fn render_table<S: AsRef<str>>(rows: &[[S; 2]]) -> String {
    let width = rows
        .iter()
        .map(|[key, _]| key.as_ref().width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for [key, value] in rows {
        let key = key.as_ref();
        let padding = " ".repeat(width.saturating_sub(key.width()));
        let line = format!("{INDENT}{key}{padding}{GAP}{}", value.as_ref());
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
