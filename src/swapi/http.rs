//! reqwest-backed client for the public SWAPI service.
//!
//! The collection endpoint is built from the configured base URL. Character
//! and film resources are fetched by the absolute URLs the API hands back,
//! so a mock server works as long as it embeds its own address.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use crate::swapi::{Character, FetchError, Film, PeoplePage, SwapiClient};

pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

pub struct HttpSwapi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSwapi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the given page of the people collection.
    pub fn people_url(&self, page: u32) -> String {
        format!("{}/people/?page={}", self.base_url, page)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("SWAPI error for {}: {} - {}", url, status.as_u16(), body);
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

impl Default for HttpSwapi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl SwapiClient for HttpSwapi {
    async fn people_page(&self, page: u32) -> Result<PeoplePage, FetchError> {
        let url = self.people_url(page);
        info!("Fetching people page {}", page);
        let people: PeoplePage = self.get_json(&url).await?;
        debug!("Page {} returned {} characters", page, people.results.len());
        Ok(people)
    }

    async fn character(&self, url: &str) -> Result<Character, FetchError> {
        info!("Fetching character {}", url);
        self.get_json(url).await
    }

    async fn film(&self, url: &str) -> Result<Film, FetchError> {
        self.get_json(url).await
    }
}
