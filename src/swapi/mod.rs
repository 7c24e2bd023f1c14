pub mod client;
pub mod http;
pub mod types;

pub use client::{FetchError, SwapiClient, fetch_films};
pub use http::HttpSwapi;
pub use types::{Character, Film, PeoplePage};
