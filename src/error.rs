// src/error.rs
//! Error types for a scrape run.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Result type alias for scrape operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The server answered, but not with a 2xx status.
    #[error("failed to fetch {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Connection, TLS, timeout or body read failure.
    #[error("failed to fetch {url}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client itself could not be constructed.
    #[error("could not build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("could not write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// True for every variant raised by the fetch stage.
    pub fn is_fetch(&self) -> bool {
        matches!(self, Error::HttpStatus { .. } | Error::Request { .. } | Error::Client(_))
    }
}
