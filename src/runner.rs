// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::{consts::{HEADER_COLUMNS, PARAGRAPH_COLUMNS}, options::RunOptions},
    core::{net::fetch_page, Document, Fetch, HttpFetcher},
    error::Result,
    extract::{extract_headers, extract_paragraphs, extract_tables, IndexedText, TableRecord},
    file::{write_indexed, write_tables},
    progress::Progress,
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub paragraphs: usize,
    pub headers: usize,
    pub tables: usize,
    pub files_written: Vec<PathBuf>,
}

/// Everything the three extraction passes found on one page.
#[derive(Debug, Default)]
pub struct Extracted {
    pub paragraphs: Vec<IndexedText>,
    pub headers: Vec<IndexedText>,
    pub tables: Vec<TableRecord>,
}

/// Top-level runner: fetch → parse → extract → write.
/// A fetch failure returns before anything touches the output directory.
pub fn run(
    opts: &RunOptions,
    fetcher: &dyn Fetch,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    let body = fetch_page(fetcher, &opts.url, progress)?;
    let doc = Document::parse(&body);

    let found = extract_all(&doc, &opts.table_class, progress);
    let files_written = write_all(opts, &found, progress)?;

    progress.info("Scraping complete!");
    Ok(RunSummary {
        paragraphs: found.paragraphs.len(),
        headers: found.headers.len(),
        tables: found.tables.len(),
        files_written,
    })
}

/// [`run`] against the live site with a client built from `opts`.
pub fn run_http(opts: &RunOptions, progress: &mut dyn Progress) -> Result<RunSummary> {
    let fetcher = match HttpFetcher::from_options(opts) {
        Ok(f) => f,
        Err(e) => {
            progress.error(&format!("Failed to fetch page: {e}"));
            return Err(e);
        }
    };
    run(opts, &fetcher, progress)
}

/// The three passes are independent reads over the same document.
pub fn extract_all(doc: &Document, table_class: &str, progress: &mut dyn Progress) -> Extracted {
    Extracted {
        paragraphs: extract_paragraphs(doc, progress),
        headers: extract_headers(doc, progress),
        tables: extract_tables(doc, table_class, progress),
    }
}

fn write_all(
    opts: &RunOptions,
    found: &Extracted,
    progress: &mut dyn Progress,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    written.extend(write_indexed(
        &opts.paragraphs_path(),
        &PARAGRAPH_COLUMNS,
        &found.paragraphs,
        progress,
    )?);
    written.extend(write_indexed(
        &opts.headers_path(),
        &HEADER_COLUMNS,
        &found.headers,
        progress,
    )?);
    written.extend(write_tables(&opts.out_dir, &found.tables, progress)?);
    Ok(written)
}
