pub mod config;
pub mod error;
pub mod record;
pub mod fetcher;
pub mod extractor;
pub mod cleaner;
pub mod writer;
pub mod loader;
pub mod pipeline;
pub mod logger;

// Exporting types for convenience
pub use crate::config::ScrapeConfig;
pub use error::{ExtractError, FetchError, WriteError};
pub use record::Record;
pub use fetcher::Fetcher;
pub use extractor::{Extractor, ItemOutcome};
pub use writer::SaveOutcome;
pub use pipeline::{Pipeline, PipelineOutcome};
