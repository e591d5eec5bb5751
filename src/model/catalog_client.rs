//! Catalog search API client
//!
//! `SearchApi` is the seam between the dispatch logic and the network, so
//! tests can substitute a mock. `CatalogClient` is the reqwest-backed
//! implementation talking to the RapidAPI catalog endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::payload::SearchResponse;
use crate::config::Config;

/// Fixed request parameters, matching the catalog's first-page search.
const RESULT_TYPE: &str = "multi";
const PAGE_OFFSET: u32 = 0;
const PAGE_LIMIT: u32 = 10;
const TOP_RESULTS: u32 = 5;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a dispatch failed. The user only ever sees the generic message;
/// this detail is for the log.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// The outbound search operation.
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchError>;
}

/// Reqwest-backed catalog client.
pub struct CatalogClient {
    client: Client,
    api_key: String,
    api_host: String,
}

impl CatalogClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(concat!("songsearch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
        })
    }

    fn search_url(&self) -> String {
        format!("https://{}/search/", self.api_host)
    }
}

#[async_trait]
impl SearchApi for CatalogClient {
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        tracing::debug!(query, host = %self.api_host, "Dispatching catalog search");

        let offset = PAGE_OFFSET.to_string();
        let limit = PAGE_LIMIT.to_string();
        let top_results = TOP_RESULTS.to_string();
        let response = self
            .client
            .get(self.search_url())
            .query(&[
                ("q", query),
                ("type", RESULT_TYPE),
                ("offset", offset.as_str()),
                ("limit", limit.as_str()),
                ("numberOfTopResults", top_results.as_str()),
            ])
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.api_host)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        // Read the body as text first so a parse failure is distinguishable
        // from a transport failure in the log.
        let body = response.text().await?;
        let payload = serde_json::from_str(&body)?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            api_key: "test-key".to_string(),
            api_host: "catalog.example.com".to_string(),
            clear_on_search: false,
        }
    }

    #[test]
    fn client_builds_from_config() {
        let client = CatalogClient::new(&test_config()).unwrap();
        assert_eq!(client.search_url(), "https://catalog.example.com/search/");
    }
}
