use crate::ports::outbound::FeedSource;
use crate::shared::{ConnectorError, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::info;

/// HTTP client for the CISA KEV JSON feed
///
/// Performs a single bounded-timeout GET per run and parses the body as
/// JSON. Failed requests are not retried; the run fails fast instead.
pub struct KevFeedClient {
    client: Client,
    url: String,
}

impl KevFeedClient {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a new feed client for the given URL with default configuration
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("kev-connector/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl FeedSource for KevFeedClient {
    fn fetch(&self) -> Result<Value> {
        info!("Extracting data from {}", self.url);

        let response =
            self.client
                .get(&self.url)
                .send()
                .map_err(|e| ConnectorError::Fetch {
                    url: self.url.clone(),
                    details: e.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConnectorError::Fetch {
                url: self.url.clone(),
                details: format!("server returned status {}", status),
            }
            .into());
        }

        // Read the body first so an invalid payload maps to a parse error,
        // not a fetch error
        let body = response.text().map_err(|e| ConnectorError::Fetch {
            url: self.url.clone(),
            details: e.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|e| {
            ConnectorError::Parse {
                url: self.url.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_client_creation() {
        let client = KevFeedClient::new("https://example.com/feed.json");
        assert!(client.is_ok());
    }

    #[test]
    fn test_feed_client_keeps_url() {
        let client = KevFeedClient::new("https://example.com/feed.json").unwrap();
        assert_eq!(client.url, "https://example.com/feed.json");
    }

    // Integration test - requires network access
    // Uncomment to run against the real feed
    // #[test]
    // fn test_fetch_real_feed() {
    //     let client = KevFeedClient::new(
    //         "https://www.cisa.gov/sites/default/files/feeds/known_exploited_vulnerabilities.json",
    //     )
    //     .unwrap();
    //     let payload = client.fetch().unwrap();
    //     assert!(payload.get("vulnerabilities").is_some());
    // }
}
