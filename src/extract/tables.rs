// src/extract/tables.rs

use super::TableRecord;
use crate::config::consts::INDEX_LABEL;
use crate::core::{Document, Element};
use crate::progress::Progress;

const CELL_TAGS: [&str; 2] = ["th", "td"];

/// Extract every element carrying `marker_class` as a data table.
///
/// * Name: first `<caption>` inside the match, else `Table_<k>` where `k` is the
///   1-based position among *all* matches (skipped ones included).
/// * First `<tr>` gives the labels, prefixed with `Index`.
/// * Each later `<tr>` becomes `[i, cells...]`, `i` restarting at 1 per table.
/// * Row lengths are not reconciled with the header.
/// * A match without data rows contributes nothing.
pub fn extract_tables(
    doc: &Document,
    marker_class: &str,
    progress: &mut dyn Progress,
) -> Vec<TableRecord> {
    let matched = doc.elements_with_class(marker_class);
    if matched.is_empty() {
        progress.info("No tables found on the page.");
        return Vec::new();
    }

    let mut out = Vec::with_capacity(matched.len());
    for (k, table) in matched.iter().enumerate() {
        let name = table_name(table, k + 1);

        let Some(record) = extract_one(table, &name) else {
            progress.info(&format!("Skipped table without data rows: {name}"));
            continue;
        };

        progress.info(&format!(
            "Extracted {} rows from table: {}",
            record.rows.len(),
            record.name
        ));
        if record.ragged_rows() > 0 {
            tracing::debug!(
                table = %record.name,
                ragged = record.ragged_rows(),
                "rows differ in length from header; written as-is"
            );
        }
        out.push(record);
    }
    out
}

fn table_name(table: &Element<'_>, position: usize) -> String {
    match table.first("caption") {
        Some(caption) => caption.text(),
        None => format!("Table_{position}"),
    }
}

/// None when the table has no rows at all, or only the label row.
fn extract_one(table: &Element<'_>, name: &str) -> Option<TableRecord> {
    let rows = table.all(&["tr"]);
    let (first, rest) = rows.split_first()?;
    if rest.is_empty() {
        return None;
    }

    let mut headers = vec![s!(INDEX_LABEL)];
    headers.extend(cell_texts(first));

    let rows = rest
        .iter()
        .enumerate()
        .map(|(i, tr)| {
            let mut row = vec![(i + 1).to_string()];
            row.extend(cell_texts(tr));
            row
        })
        .collect();

    Some(TableRecord { name: s!(name), headers, rows })
}

fn cell_texts(row: &Element<'_>) -> impl Iterator<Item = String> {
    row.all(&CELL_TAGS).into_iter().map(|cell| cell.text())
}
