use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{Result, ScrapeError};
use crate::infra::document;
use crate::infra::fetch::Fetcher;
use crate::workflows::export;
use crate::workflows::extract::SeriesExtractor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub blocks: usize,
    pub records: usize,
    pub skipped: usize,
    pub output_path: PathBuf,
}

/// Fetch (or read), back up, parse, extract and write, strictly in that order.
/// Nothing is written to the output path unless a page was obtained.
pub fn run(config: &Config) -> Result<RunSummary> {
    let page = load_page(config)?;

    let doc = document::parse(&page);
    let extraction = SeriesExtractor::new().extract(&doc.root_element());
    if extraction.blocks == 0 {
        warn!("no item blocks found on the page");
    }

    export::write_csv(&config.output_path, &extraction.records)?;
    info!(
        records = extraction.records.len(),
        path = %config.output_path.display(),
        "wrote CSV"
    );

    Ok(RunSummary {
        blocks: extraction.blocks,
        records: extraction.records.len(),
        skipped: extraction.skipped.len(),
        output_path: config.output_path.clone(),
    })
}

fn load_page(config: &Config) -> Result<Vec<u8>> {
    if let Some(input) = &config.input {
        info!(path = %input.display(), "reading saved page");
        return fs::read(input).map_err(|e| ScrapeError::io(input, e));
    }

    let page = Fetcher::new(config)?.fetch(&config.target_url)?;

    // The backup is informational only; failing to write it does not stop the run.
    if let Some(backup) = &config.backup_path {
        match fs::write(backup, &page) {
            Ok(()) => info!(path = %backup.display(), bytes = page.len(), "saved raw page"),
            Err(e) => warn!(path = %backup.display(), error = %e, "could not save raw page"),
        }
    }
    Ok(page)
}
