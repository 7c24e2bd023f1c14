use std::fmt;

use async_trait::async_trait;
use futures::future::try_join_all;
use log::debug;

use super::types::{Character, Film, PeoplePage};

/// Errors that can occur while talking to the API.
///
/// Every variant is handled the same way upstream (logged, then dropped),
/// but keeping them apart makes the log line useful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned a non-success status.
    Api { status: u16, message: String },
    /// Body was not the JSON shape we expected.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Read-only access to the SWAPI resources the app needs.
#[async_trait]
pub trait SwapiClient: Send + Sync {
    /// Fetches one page of the `/people/` collection. Pages are 1-based.
    async fn people_page(&self, page: u32) -> Result<PeoplePage, FetchError>;

    /// Fetches a single character by its absolute resource URL.
    async fn character(&self, url: &str) -> Result<Character, FetchError>;

    /// Fetches a single film by its absolute resource URL.
    async fn film(&self, url: &str) -> Result<Film, FetchError>;
}

/// Fetches every film in `urls` concurrently.
///
/// Results come back in the same order as `urls`. The first failure fails
/// the whole batch and no partial list is returned.
pub async fn fetch_films(
    client: &dyn SwapiClient,
    urls: &[String],
) -> Result<Vec<Film>, FetchError> {
    debug!("Fetching {} films concurrently", urls.len());
    try_join_all(urls.iter().map(|url| client.film(url))).await
}
