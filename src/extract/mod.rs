// src/extract/mod.rs
//! The three extraction passes. Each takes the same read-only [`Document`]
//! and returns its own records; none depends on another's output.
//!
//! [`Document`]: crate::core::Document

mod tables;
mod text;

pub use tables::extract_tables;
pub use text::{extract_headers, extract_indexed, extract_paragraphs};

/// A 1-based position paired with trimmed text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedText {
    pub index: usize,
    pub text: String,
}

impl IndexedText {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self { index, text: text.into() }
    }

    /// CSV row form: `[index, text]`.
    pub fn to_row(&self) -> Vec<String> {
        vec![self.index.to_string(), self.text.clone()]
    }
}

/// One extracted data table.
///
/// `headers` starts with the synthetic `Index` label; every row starts with
/// its 1-based row number. Rows keep whatever cell count the markup had, so
/// a row may be shorter or longer than `headers`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRecord {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableRecord {
    /// Header row followed by the data rows.
    pub fn grid(&self) -> impl Iterator<Item = &Vec<String>> {
        std::iter::once(&self.headers).chain(self.rows.iter())
    }

    /// Rows whose cell count differs from the header row.
    pub fn ragged_rows(&self) -> usize {
        self.rows.iter().filter(|r| r.len() != self.headers.len()).count()
    }
}
