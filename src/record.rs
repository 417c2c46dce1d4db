use serde::{Deserialize, Serialize};

/// Placeholder for a field whose element is absent from the card.
pub const MISSING_FIELD: &str = "N/A";

/// Format of `scraped_date`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One scraped card. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub company: String,
    pub location: String,
    pub scraped_date: String,
}

impl Record {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        scraped_date: impl Into<String>,
    ) -> Self {
        Record {
            title: title.into(),
            company: company.into(),
            location: location.into(),
            scraped_date: scraped_date.into(),
        }
    }

    /// Pair used to detect duplicates.
    pub fn dedup_key(&self) -> (&str, &str) {
        (&self.title, &self.company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_key_ignores_location_and_date() {
        let a = Record::new("Engineer", "Acme", "Berlin", "2024-01-01 10:00:00");
        let b = Record::new("Engineer", "Acme", "Paris", "2024-02-01 11:00:00");
        assert_eq!(a.dedup_key(), b.dedup_key());
        assert_ne!(a, b);
    }

    #[test]
    fn dedup_key_is_case_sensitive() {
        let a = Record::new("Engineer", "Acme", "Berlin", "");
        let b = Record::new("engineer", "Acme", "Berlin", "");
        assert_ne!(a.dedup_key(), b.dedup_key());
    }
}
