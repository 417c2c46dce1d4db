use std::collections::HashSet;

use log::info;

use crate::record::Record;

/// Keeps the first record for each exact (title, company) pair, in input order.
pub fn dedup(records: Vec<Record>) -> Vec<Record> {
    let before = records.len();
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(before);
    let mut unique = Vec::with_capacity(before);

    for record in records {
        let (title, company) = record.dedup_key();
        if seen.insert((title.to_string(), company.to_string())) {
            unique.push(record);
        }
    }

    info!("✓ Removed duplicates: {} → {} records", before, unique.len());
    unique
}
