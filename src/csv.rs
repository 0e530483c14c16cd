// src/csv.rs
use std::borrow::Cow;
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Writing ---------------- */

/// `field` as it goes on disk: verbatim, or quoted with inner quotes doubled
/// when it holds the separator, a quote or a line break.
pub fn escape_field(field: &str, sep: char) -> Cow<'_, str> {
    if field.contains([sep, '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Write one row and its line end. Rows of any length are accepted.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{sep}")?;
        }
        w.write_all(escape_field(cell.as_ref(), sep).as_bytes())?;
    }
    writeln!(w)
}

/* ---------------- Parsing ---------------- */

/// Minimal CSV reader (quotes + CRLF tolerant), used to read our own output back.
/// Blank lines are skipped; rows keep their own field count.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a final newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}
