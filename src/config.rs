use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

pub const DEFAULT_URL: &str = "https://realpython.github.io/fake-jobs/";
pub const DEFAULT_OUTPUT_FILE: &str = "pricing_data.csv";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Prefix of the overriding variables, e.g. `SCRAPER_URL`, `SCRAPER_TIMEOUT_SECS`.
pub const ENV_PREFIX: &str = "SCRAPER";

/// Parameters for one run of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    pub url: String,
    pub output_path: PathBuf,
    pub user_agent: String,
    pub timeout: Duration,
}

/// Flat shape the `config` crate deserializes into.
#[derive(Debug, Deserialize)]
struct RawSettings {
    url: String,
    output: PathBuf,
    user_agent: String,
    timeout_secs: i64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            url: DEFAULT_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ScrapeConfig {
    /// Defaults overlaid with `SCRAPER_*` environment variables. Empty variables are ignored.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw: RawSettings = Config::builder()
            .set_default("url", DEFAULT_URL)?
            .set_default("output", DEFAULT_OUTPUT_FILE)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .ignore_empty(true),
            )
            .build()?
            .try_deserialize()?;

        if raw.timeout_secs <= 0 {
            return Err(ConfigError::Message(format!(
                "{}_TIMEOUT_SECS must be greater than zero",
                ENV_PREFIX
            )));
        }

        Ok(ScrapeConfig {
            url: raw.url,
            output_path: raw.output,
            user_agent: raw.user_agent,
            timeout: Duration::from_secs(raw.timeout_secs as u64),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNSET: [(&str, Option<&str>); 4] = [
        ("SCRAPER_URL", None),
        ("SCRAPER_OUTPUT", None),
        ("SCRAPER_USER_AGENT", None),
        ("SCRAPER_TIMEOUT_SECS", None),
    ];

    #[test]
    fn defaults_match_the_demo_run() {
        temp_env::with_vars(UNSET, || {
            let config = ScrapeConfig::from_env().unwrap();
            assert_eq!(config, ScrapeConfig::default());
            assert_eq!(config.url, DEFAULT_URL);
            assert_eq!(config.output_path, PathBuf::from("pricing_data.csv"));
            assert_eq!(config.timeout, Duration::from_secs(10));
            assert!(config.user_agent.starts_with("Mozilla/5.0"));
        });
    }

    #[test]
    fn env_values_override_defaults() {
        temp_env::with_vars(
            [
                ("SCRAPER_URL", Some("http://localhost:8080/jobs")),
                ("SCRAPER_OUTPUT", Some("out/jobs.csv")),
                ("SCRAPER_USER_AGENT", None),
                ("SCRAPER_TIMEOUT_SECS", Some("3")),
            ],
            || {
                let config = ScrapeConfig::from_env().unwrap();
                assert_eq!(config.url, "http://localhost:8080/jobs");
                assert_eq!(config.output_path, PathBuf::from("out/jobs.csv"));
                assert_eq!(config.timeout, Duration::from_secs(3));
                assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
            },
        );
    }

    #[test]
    fn bad_timeout_is_rejected() {
        for raw in ["soon", "0", "-4"] {
            temp_env::with_vars(
                [
                    ("SCRAPER_URL", None),
                    ("SCRAPER_OUTPUT", None),
                    ("SCRAPER_USER_AGENT", None),
                    ("SCRAPER_TIMEOUT_SECS", Some(raw)),
                ],
                || {
                    assert!(ScrapeConfig::from_env().is_err(), "accepted timeout {:?}", raw);
                },
            );
        }
    }

    #[test]
    fn empty_values_are_ignored() {
        temp_env::with_vars(
            [
                ("SCRAPER_URL", Some("")),
                ("SCRAPER_OUTPUT", Some("")),
                ("SCRAPER_USER_AGENT", None),
                ("SCRAPER_TIMEOUT_SECS", None),
            ],
            || {
                assert_eq!(ScrapeConfig::from_env().unwrap(), ScrapeConfig::default());
            },
        );
    }
}
