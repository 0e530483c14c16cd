// src/cli.rs
use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::config::{consts::*, options::RunOptions};
use crate::log::TracingProgress;
use crate::runner::{self, RunSummary};

/// Dump a Wikipedia article's paragraphs, headers and data tables to CSV.
#[derive(Parser, Debug)]
#[command(name = "wiki_scrape", version, about)]
pub struct Cli {
    /// Article to fetch
    #[arg(short, long, env = "WIKI_SCRAPE_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Directory the CSV files are written to (created if missing)
    #[arg(short, long, env = "WIKI_SCRAPE_OUT_DIR", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Request timeout in seconds
    #[arg(short, long, env = "WIKI_SCRAPE_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// CSS class marking data tables
    #[arg(long, env = "WIKI_SCRAPE_TABLE_CLASS", default_value = TABLE_MARKER_CLASS)]
    pub table_class: String,

    #[arg(long, env = "WIKI_SCRAPE_USER_AGENT", default_value = USER_AGENT)]
    pub user_agent: String,
}

impl Cli {
    pub fn into_options(self) -> RunOptions {
        RunOptions {
            url: self.url,
            out_dir: self.out_dir,
            timeout: Duration::from_secs(self.timeout),
            table_class: self.table_class,
            user_agent: self.user_agent,
        }
    }
}

pub fn run(cli: Cli) -> crate::Result<RunSummary> {
    let opts = cli.into_options();
    tracing::debug!(?opts, "starting run");
    runner::run_http(&opts, &mut TracingProgress)
}
