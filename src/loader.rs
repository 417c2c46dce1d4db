use std::fs::File;
use std::path::Path;

use log::{error, info};

use crate::record::Record;

/// Reads a CSV produced by [`crate::writer::save_to_csv`] back into records.
/// Unreadable files give an empty list; bad rows are logged and skipped.
pub fn load_records<P: AsRef<Path>>(filename: P) -> Vec<Record> {
    let mut records = Vec::new();
    let path = filename.as_ref();

    if !path.exists() {
        error!("File {:?} does not exist.", path);
        return records;
    }

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            error!("Could not open CSV file: {}", e);
            return records;
        }
    };

    let mut rdr = csv::ReaderBuilder::new().from_reader(file);

    for result in rdr.deserialize::<Record>() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => error!("Error parsing CSV record: {}", e),
        }
    }
    info!("Loaded {} records from CSV {:?}", records.len(), path);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::save_to_csv;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn round_trips_written_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jobs.csv");
        let records = vec![
            Record::new("Dev", "Payne, Roberts and Davis", "Stewartbury, AA", "2021-03-14 09:26:53"),
            Record::new("N/A", "Quote \"Co\"", "Line\nbreak", "2021-03-14 09:26:54"),
            Record::new("Ingénieur", "Société", "Zürich", "2021-03-14 09:26:55"),
        ];
        save_to_csv(&records, &path).unwrap();
        assert_eq!(load_records(&path), records);
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempdir().unwrap();
        assert!(load_records(dir.path().join("nope.csv")).is_empty());
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jobs.csv");
        fs::write(
            &path,
            "title,company,location,scraped_date\nDev,Acme,Berlin,t1\nshort,row\nOps,Globex,Paris,t2\n",
        )
        .unwrap();
        let records = load_records(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].company, "Globex");
    }
}
