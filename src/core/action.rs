//! # Actions
//!
//! Everything that can happen in Holocron becomes an `Action`.
//! User presses `n`? That's `Action::NextPage`.
//! API responds? That's `Action::PageLoaded { page, result }`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing any I/O the event loop should
//! start. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Every fetch is tagged with a fresh `RequestId` and its response carries the
//! tag back. A response whose tag no longer matches the one held in state is
//! stale and is dropped, so a slow earlier request can never overwrite a newer
//! one, even when both asked for the same page or character.

use log::{debug, info, warn};

use crate::core::state::{App, CharacterDetails, FIRST_PAGE, RequestId, View};
use crate::swapi::{Character, FetchError, Film, PeoplePage};

#[derive(Debug)]
pub enum Action {
    /// App mounted: load the current page.
    Start,
    Quit,
    ToggleFavorite(Character),
    NextPage,
    PreviousPage,
    /// Open the detail view for the character at this resource URL.
    Select(String),
    /// Return from the detail view to the list.
    Back,
    PageLoaded {
        page: u32,
        request: RequestId,
        result: Result<PeoplePage, FetchError>,
    },
    CharacterLoaded {
        url: String,
        request: RequestId,
        result: Result<Character, FetchError>,
    },
    FilmsLoaded {
        url: String,
        request: RequestId,
        result: Result<Vec<Film>, FetchError>,
    },
}

/// I/O requested by `update()`, performed by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    FetchPage {
        page: u32,
        request: RequestId,
    },
    FetchCharacter {
        url: String,
        request: RequestId,
    },
    /// Fetch every film of the character at `url`, as one batch.
    FetchFilms {
        url: String,
        request: RequestId,
        films: Vec<String>,
    },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Start => request_page(app),
        Action::Quit => Effect::Quit,

        Action::ToggleFavorite(character) => {
            let name = character.name.clone();
            if app.list.favorites.toggle(character) {
                app.status_message = format!("Added {name} to favorites");
            } else {
                app.status_message = format!("Removed {name} from favorites");
            }
            Effect::None
        }

        Action::NextPage => {
            app.list.page += 1;
            request_page(app)
        }

        Action::PreviousPage => {
            if app.list.page > FIRST_PAGE {
                app.list.page -= 1;
                request_page(app)
            } else {
                Effect::None
            }
        }

        Action::Select(url) => {
            if app.details().is_some_and(|d| d.url == url) {
                return Effect::None;
            }
            info!("Opening details for {}", url);
            let request = app.next_request();
            let mut details = CharacterDetails::new(url.clone());
            details.request = request;
            app.view = View::Details(details);
            app.status_message = String::from("Loading character details...");
            Effect::FetchCharacter { url, request }
        }

        Action::Back => {
            if matches!(app.view, View::Details(_)) {
                app.view = View::List;
                app.status_message = format!("Page {}", app.list.page);
            }
            Effect::None
        }

        Action::PageLoaded {
            page,
            request,
            result,
        } => {
            if request != app.list.request {
                debug!(
                    "Discarding stale response for page {} (current page {})",
                    page, app.list.page
                );
                return Effect::None;
            }
            app.list.is_loading = false;
            match result {
                Ok(people) => {
                    app.list.characters = people.results;
                    app.list.total_count = people.count.or(app.list.total_count);
                    app.status_message = format!("Page {page}");
                }
                Err(e) => warn!("Error fetching characters for page {}: {}", page, e),
            }
            Effect::None
        }

        Action::CharacterLoaded {
            url,
            request,
            result,
        } => {
            let Some(details) = app.details_mut().filter(|d| d.request == request) else {
                debug!("Discarding stale character response for {}", url);
                return Effect::None;
            };
            match result {
                Ok(character) => {
                    let films = character.films.clone();
                    let name = character.name.clone();
                    details.character = Some(character);
                    details.films_loading = true;
                    app.status_message = name;
                    Effect::FetchFilms {
                        url,
                        request,
                        films,
                    }
                }
                Err(e) => {
                    warn!("Error fetching character details for {}: {}", url, e);
                    Effect::None
                }
            }
        }

        Action::FilmsLoaded {
            url,
            request,
            result,
        } => {
            let Some(details) = app.details_mut().filter(|d| d.request == request) else {
                debug!("Discarding stale films response for {}", url);
                return Effect::None;
            };
            details.films_loading = false;
            match result {
                Ok(films) => details.films = films,
                Err(e) => warn!("Error fetching films for {}: {}", url, e),
            }
            Effect::None
        }
    }
}

fn request_page(app: &mut App) -> Effect {
    let request = app.next_request();
    app.list.request = request;
    app.list.is_loading = true;
    Effect::FetchPage {
        page: app.list.page,
        request,
    }
}
