// src/core/net.rs
// One blocking HTTPS GET per run. No retries, no backoff.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::options::RunOptions;
use crate::error::{Error, Result};
use crate::progress::Progress;

/// Source of raw page bytes. The pipeline only sees this trait, so tests can
/// hand it a canned page or a canned failure.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }

    pub fn from_options(opts: &RunOptions) -> Result<Self> {
        Self::new(opts.timeout, &opts.user_agent)
    }
}

impl Fetch for HttpFetcher {
    /// Any 2xx returns the body untouched; everything else is an error.
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| Error::Request { url: s!(url), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::HttpStatus { url: s!(url), status: status.as_u16() });
        }

        let body = resp
            .bytes()
            .map_err(|source| Error::Request { url: s!(url), source })?;
        tracing::debug!(url, bytes = body.len(), "fetched");
        Ok(body.to_vec())
    }
}

/// Fetch stage of the pipeline: run the fetcher and report the outcome.
pub fn fetch_page(fetcher: &dyn Fetch, url: &str, progress: &mut dyn Progress) -> Result<Vec<u8>> {
    match fetcher.fetch(url) {
        Ok(body) => {
            progress.success(&format!("Page fetched successfully: {url}"));
            Ok(body)
        }
        Err(e) => {
            let msg = match &e {
                Error::HttpStatus { status, .. } => {
                    format!("Failed to fetch page. Status Code: {status}")
                }
                other => {
                    let cause = std::error::Error::source(other)
                        .map(|src| src.to_string())
                        .unwrap_or_else(|| other.to_string());
                    format!("Failed to fetch page: {cause}")
                }
            };
            progress.error(&msg);
            Err(e)
        }
    }
}
