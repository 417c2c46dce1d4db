use std::fmt;
use std::io;

use reqwest::StatusCode;
use thiserror::Error;

/// Failures while downloading the page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid User-Agent '{user_agent}': {source}")]
    InvalidUserAgent {
        user_agent: String,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("{url} responded with status {status}")]
    Status { url: String, status: StatusCode },
}

/// Failures while turning markup into records.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid selector '{selector}': {reason}")]
    Selector { selector: &'static str, reason: String },
    #[error("could not format capture timestamp")]
    Timestamp(#[from] fmt::Error),
}

/// Failures while persisting records.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
