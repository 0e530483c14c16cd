// src/bin/cli.rs
use clap::Parser;
use wiki_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    let summary = cli::run(cli::Cli::parse())?;
    tracing::debug!(files = summary.files_written.len(), "done");
    Ok(())
}
