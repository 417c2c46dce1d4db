use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use log::info;
use url::Url;

use crate::config::ScrapeConfig;
use crate::error::FetchError;

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &ScrapeConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        let ua = HeaderValue::from_str(&config.user_agent).map_err(|source| {
            FetchError::InvalidUserAgent {
                user_agent: config.user_agent.clone(),
                source,
            }
        })?;
        headers.insert(USER_AGENT, ua);

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Fetcher { client })
    }

    /// Single GET, no retry. Anything but a 2xx status is an error.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let target = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let resp = self.client.get(target).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = resp.bytes()?;
        info!("✓ Successfully fetched data from {}", url);
        Ok(body.to_vec())
    }
}
