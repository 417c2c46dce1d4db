use std::fs::File;
use std::path::Path;

use log::{info, warn};

use crate::error::WriteError;
use crate::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { rows: usize },
    NoData,
}

/// Writes `records` as CSV with a header row, replacing any existing file.
/// Nothing is created when `records` is empty.
pub fn save_to_csv<P: AsRef<Path>>(
    records: &[Record],
    path: P,
) -> Result<SaveOutcome, WriteError> {
    let path = path.as_ref();
    if records.is_empty() {
        warn!("✗ No data to save");
        return Ok(SaveOutcome::NoData);
    }

    let file = File::create(path)?;
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(file);

    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;

    info!("✓ Data saved to {} ({} rows)", path.display(), records.len());
    Ok(SaveOutcome::Saved {
        rows: records.len(),
    })
}
