//! Fetch → extract → dedup → write, stopping at the first stage with nothing to pass on.

use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::cleaner;
use crate::extractor::Extractor;
use crate::fetcher::Fetcher;
use crate::writer::{self, SaveOutcome};

/// Terminal state of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// The page could not be fetched; extraction never ran.
    FetchFailed,
    /// The page held no usable cards.
    NoData,
    Written { path: PathBuf, rows: usize },
    WriteFailed,
}

pub struct Pipeline {
    fetcher: Fetcher,
    extractor: Extractor,
}

impl Pipeline {
    pub fn new(fetcher: Fetcher, extractor: Extractor) -> Self {
        Pipeline { fetcher, extractor }
    }

    pub fn run(&self, url: &str, output: &Path) -> PipelineOutcome {
        info!("[Step 1] Scraping data...");
        let html = match self.fetcher.fetch(url) {
            Ok(body) => body,
            Err(e) => {
                error!("✗ Error fetching URL: {}", e);
                warn!("No data scraped. Exiting.");
                return PipelineOutcome::FetchFailed;
            }
        };

        self.process(&html, output)
    }

    /// Everything after the fetch.
    pub fn process(&self, html: &[u8], output: &Path) -> PipelineOutcome {
        let raw = self.extractor.extract(html);
        if raw.is_empty() {
            warn!("No data scraped. Exiting.");
            return PipelineOutcome::NoData;
        }

        info!("[Step 2] Cleaning data...");
        let cleaned = cleaner::dedup(raw);

        info!("[Step 3] Saving to CSV...");
        match writer::save_to_csv(&cleaned, output) {
            Ok(SaveOutcome::Saved { rows }) => PipelineOutcome::Written {
                path: output.to_path_buf(),
                rows,
            },
            Ok(SaveOutcome::NoData) => PipelineOutcome::NoData,
            Err(e) => {
                error!("✗ Error saving to CSV: {}", e);
                PipelineOutcome::WriteFailed
            }
        }
    }
}
