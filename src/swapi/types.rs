use serde::{Deserialize, Serialize};

/// A person resource from `/people/`.
///
/// SWAPI returns every attribute as a string (`"172"`, `"unknown"`, `"n/a"`),
/// so nothing here is parsed further. Fields we don't render are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Character {
    pub name: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub mass: String,
    #[serde(default)]
    pub hair_color: String,
    #[serde(default)]
    pub skin_color: String,
    /// Absolute film resource URLs, in the order the API lists them.
    #[serde(default)]
    pub films: Vec<String>,
    /// The resource's own absolute URL.
    #[serde(default)]
    pub url: String,
}

impl Character {
    /// Identity used by the favorite set.
    ///
    /// The resource URL is stable across pages; the name is only a fallback
    /// for records that arrive without one.
    pub fn key(&self) -> &str {
        if self.url.is_empty() {
            &self.name
        } else {
            &self.url
        }
    }
}

/// A film resource. Only the title is displayed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Film {
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// One page of the `/people/` collection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct PeoplePage {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<Character>,
}
