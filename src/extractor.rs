use std::fmt::Write;

use chrono::{Local, NaiveDateTime};
use log::{info, warn};
use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractError;
use crate::record::{Record, MISSING_FIELD, TIMESTAMP_FORMAT};

pub const CARD_SELECTOR: &str = "div.card-content";
pub const TITLE_SELECTOR: &str = "h2";
pub const COMPANY_SELECTOR: &str = "h3";
pub const LOCATION_SELECTOR: &str = "p";

/// Result of reading one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Parsed(Record),
    Skipped { index: usize, reason: String },
}

pub struct Extractor {
    card: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
}

fn compile(selector: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::Selector {
        selector,
        reason: e.to_string(),
    })
}

impl Extractor {
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Extractor {
            card: compile(CARD_SELECTOR)?,
            title: compile(TITLE_SELECTOR)?,
            company: compile(COMPANY_SELECTOR)?,
            location: compile(LOCATION_SELECTOR)?,
        })
    }

    /// Records for every card on the page, each stamped with the local time it was read.
    pub fn extract(&self, html: &[u8]) -> Vec<Record> {
        collect_records(self.extract_outcomes_with(html, || Local::now().naive_local()))
    }

    /// Every card stamped with the same fixed time.
    pub fn extract_outcomes_at(&self, html: &[u8], now: NaiveDateTime) -> Vec<ItemOutcome> {
        self.extract_outcomes_with(html, || now)
    }

    /// `clock` is consulted once per card, in document order.
    pub fn extract_outcomes_with<F>(&self, html: &[u8], mut clock: F) -> Vec<ItemOutcome>
    where
        F: FnMut() -> NaiveDateTime,
    {
        let text = String::from_utf8_lossy(html);
        let document = Html::parse_document(&text);

        document
            .select(&self.card)
            .enumerate()
            .map(|(index, card)| match self.parse_card(card, clock()) {
                Ok(record) => ItemOutcome::Parsed(record),
                Err(e) => ItemOutcome::Skipped {
                    index,
                    reason: e.to_string(),
                },
            })
            .collect()
    }

    fn parse_card(
        &self,
        card: ElementRef<'_>,
        now: NaiveDateTime,
    ) -> Result<Record, ExtractError> {
        let mut scraped_date = String::new();
        write!(scraped_date, "{}", now.format(TIMESTAMP_FORMAT))?;

        Ok(Record {
            title: first_text(card, &self.title),
            company: first_text(card, &self.company),
            location: first_text(card, &self.location),
            scraped_date,
        })
    }
}

/// Trimmed text of the first match under `card`, or `N/A`.
fn first_text(card: ElementRef<'_>, selector: &Selector) -> String {
    card.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| MISSING_FIELD.to_string())
}

/// Keeps parsed records in order and logs each skipped card.
pub fn collect_records(outcomes: Vec<ItemOutcome>) -> Vec<Record> {
    let mut records = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome {
            ItemOutcome::Parsed(record) => records.push(record),
            ItemOutcome::Skipped { index, reason } => {
                warn!("⚠ Error parsing item {}: {}", index, reason);
            }
        }
    }
    info!("✓ Scraped {} records", records.len());
    records
}
