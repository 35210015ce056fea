//! Pipe-delimited table sniffing.
//!
//! Heuristic, line based. A line containing `|` is split into trimmed,
//! non-empty cells. Markdown separator rows (`---|:---:`) are skipped. Rows
//! are not padded or truncated to a common width; rendering decides how to
//! handle ragged rows.

use prospecta_core::models::report::TableGrid;

/// Find a table in generated text. Needs at least two rows.
pub fn detect_table(text: &str) -> Option<TableGrid> {
    let rows: Vec<Vec<String>> = text
        .trim()
        .lines()
        .filter(|line| line.contains('|'))
        .map(split_cells)
        .filter(|cells| !cells.is_empty() && !is_separator_row(cells))
        .collect();

    if rows.len() < 2 {
        return None;
    }

    TableGrid::new(rows).ok()
}

fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

/// `---`, `:---`, `:---:` in every cell.
fn is_separator_row(cells: &[String]) -> bool {
    cells
        .iter()
        .all(|cell| cell.contains('-') && cell.chars().all(|c| c == '-' || c == ':'))
}
