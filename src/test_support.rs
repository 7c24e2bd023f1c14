//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::core::state::App;
use crate::swapi::{Character, FetchError, Film, PeoplePage, SwapiClient};

/// An in-memory client for tests that don't need real HTTP.
///
/// Anything not registered answers with a 404.
#[derive(Default)]
pub struct FakeSwapi {
    pages: HashMap<u32, PeoplePage>,
    characters: HashMap<String, Character>,
    films: HashMap<String, Film>,
    film_requests: AtomicUsize,
}

impl FakeSwapi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32, results: Vec<Character>) -> Self {
        self.pages.insert(
            page,
            PeoplePage {
                results,
                ..Default::default()
            },
        );
        self
    }

    pub fn with_character(mut self, character: Character) -> Self {
        self.characters.insert(character.url.clone(), character);
        self
    }

    pub fn with_film(mut self, url: &str, title: &str) -> Self {
        self.films.insert(
            url.to_string(),
            Film {
                title: title.to_string(),
                url: url.to_string(),
            },
        );
        self
    }

    pub fn film_requests(&self) -> usize {
        self.film_requests.load(Ordering::SeqCst)
    }
}

fn not_found(what: &str) -> FetchError {
    FetchError::Api {
        status: 404,
        message: format!("{what} not found"),
    }
}

#[async_trait]
impl SwapiClient for FakeSwapi {
    async fn people_page(&self, page: u32) -> Result<PeoplePage, FetchError> {
        self.pages
            .get(&page)
            .cloned()
            .ok_or_else(|| not_found("page"))
    }

    async fn character(&self, url: &str) -> Result<Character, FetchError> {
        self.characters
            .get(url)
            .cloned()
            .ok_or_else(|| not_found(url))
    }

    async fn film(&self, url: &str) -> Result<Film, FetchError> {
        self.film_requests.fetch_add(1, Ordering::SeqCst);
        self.films.get(url).cloned().ok_or_else(|| not_found(url))
    }
}

/// Builds a character with the given name, a URL derived from `id`, and film URLs.
pub fn character(id: u32, name: &str, films: &[&str]) -> Character {
    Character {
        name: name.to_string(),
        height: "172".to_string(),
        mass: "77".to_string(),
        hair_color: "blond".to_string(),
        skin_color: "fair".to_string(),
        films: films.iter().map(|f| f.to_string()).collect(),
        url: format!("https://swapi.dev/api/people/{id}/"),
    }
}

pub fn film(title: &str) -> Film {
    Film {
        title: title.to_string(),
        url: String::new(),
    }
}

/// A fresh App starting on page 1.
pub fn test_app() -> App {
    App::new(1)
}
