// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::consts::{CSV_EXT, CSV_SEP};
use crate::core::sanitize::table_file_stem;
use crate::csv::write_row;
use crate::error::{Error, Result};
use crate::extract::{IndexedText, TableRecord};
use crate::progress::Progress;

/// Write `records` under a two-column header. Empty input writes nothing
/// (no empty file) and returns `None` after a warning.
pub fn write_indexed(
    path: &Path,
    columns: &[&str],
    records: &[IndexedText],
    progress: &mut dyn Progress,
) -> Result<Option<PathBuf>> {
    if records.is_empty() {
        progress.warn("No data to save.");
        return Ok(None);
    }

    let header: Vec<String> = columns.iter().map(|c| s!(*c)).collect();
    write_csv(path, std::iter::once(header).chain(records.iter().map(IndexedText::to_row)))?;
    progress.success(&format!("Data saved to {}", path.display()));
    progress.file_written(path);
    Ok(Some(path.to_path_buf()))
}

/// One file per table in `dir`, named from the table name. Two tables that
/// map to the same file name: the later one wins.
pub fn write_tables(
    dir: &Path,
    tables: &[TableRecord],
    progress: &mut dyn Progress,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(tables.len());

    for table in tables {
        let file_name = table_file_name(&table.name);
        let path = dir.join(&file_name);

        write_csv(&path, table.grid())?;
        progress.info(&format!("Saved table '{}' to {}", table.name, file_name));
        progress.file_written(&path);
        written.push(path);
    }

    Ok(written)
}

/// `Deaths by country` → `Deaths_by_country.csv`
pub fn table_file_name(name: &str) -> String {
    join!(table_file_stem(name), ".", CSV_EXT)
}

/// Create/truncate `path` and write `rows` in order (header row first).
fn write_csv<I, R>(path: &Path, rows: I) -> Result<()>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[String]>,
{
    let wrap = |source| Error::Write { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(path).map_err(wrap)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    for row in rows {
        write_row(&mut out, row.as_ref(), CSV_SEP).map_err(wrap)?;
    }
    out.flush().map_err(wrap)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("path exists but is not a directory: {}", dir.display()),
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| Error::Write { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
