// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

/// Everything one run needs. The pipeline never reaches for a global URL;
/// callers build this (the CLI from flags/env, tests by hand).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub url: String,
    pub out_dir: PathBuf,
    pub timeout: Duration,
    pub table_class: String,
    pub user_agent: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            url: s!(DEFAULT_URL),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            table_class: s!(TABLE_MARKER_CLASS),
            user_agent: s!(USER_AGENT),
        }
    }
}

impl RunOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), ..Self::default() }
    }

    pub fn with_out_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.out_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_table_class(mut self, class: impl Into<String>) -> Self {
        self.table_class = class.into();
        self
    }

    pub fn paragraphs_path(&self) -> PathBuf {
        self.out_dir.join(PARAGRAPHS_FILE)
    }

    pub fn headers_path(&self) -> PathBuf {
        self.out_dir.join(HEADERS_FILE)
    }
}
