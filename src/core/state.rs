//! # Application State
//!
//! Core business state for Holocron. No TUI-specific types live here;
//! presentation state (selection cursor, list scroll) is in the `tui` module.
//!
//! ```text
//! App
//! ├── view: View                    // List | Details(CharacterDetails)
//! │   └── Details
//! │       ├── url: String           // selected character resource
//! │       ├── character: Option     // None = still loading
//! │       └── films: Vec<Film>      // input URL order
//! ├── list: CharacterList
//! │   ├── characters: Vec           // current page
//! │   ├── favorites: Favorites      // keyed by resource URL
//! │   ├── page: u32                 // 1-based cursor
//! │   ├── request: RequestId        // tag of the latest page request
//! │   └── is_loading: bool
//! └── status_message: String        // status bar text
//! ```
//!
//! Every fetch is tagged with a fresh `RequestId`. Only a response carrying
//! the tag currently held in state is applied.
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::favorites::Favorites;
use crate::swapi::{Character, Film};

/// Lowest page the API serves.
pub const FIRST_PAGE: u32 = 1;

/// Tag identifying one issued request. Never reused within a run.
pub type RequestId = u64;

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    List,
    Details(CharacterDetails),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterList {
    pub characters: Vec<Character>,
    pub favorites: Favorites,
    pub page: u32,
    /// Total number of characters as reported by the last page, if any.
    pub total_count: Option<u32>,
    /// Tag of the most recent page request.
    pub request: RequestId,
    /// True while a request for `page` is in flight.
    pub is_loading: bool,
}

impl CharacterList {
    pub fn new(page: u32) -> Self {
        Self {
            characters: Vec::new(),
            favorites: Favorites::new(),
            page: page.max(FIRST_PAGE),
            total_count: None,
            request: 0,
            is_loading: false,
        }
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > FIRST_PAGE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDetails {
    pub url: String,
    /// Tag of the selection that opened this view. The character fetch and
    /// its film batch both carry it.
    pub request: RequestId,
    pub character: Option<Character>,
    pub films: Vec<Film>,
    /// True while the film batch is in flight.
    pub films_loading: bool,
}

impl CharacterDetails {
    pub fn new(url: String) -> Self {
        Self {
            url,
            request: 0,
            character: None,
            films: Vec::new(),
            films_loading: false,
        }
    }
}

pub struct App {
    pub view: View,
    pub list: CharacterList,
    pub status_message: String,
    last_request: RequestId,
}

impl App {
    pub fn new(start_page: u32) -> Self {
        Self {
            view: View::List,
            list: CharacterList::new(start_page),
            status_message: String::from("May the Force be with you"),
            last_request: 0,
        }
    }

    /// Allocate a tag for a new request.
    pub fn next_request(&mut self) -> RequestId {
        self.last_request += 1;
        self.last_request
    }

    /// The details state, when the detail view is showing.
    pub fn details(&self) -> Option<&CharacterDetails> {
        match &self.view {
            View::Details(details) => Some(details),
            View::List => None,
        }
    }

    pub fn details_mut(&mut self) -> Option<&mut CharacterDetails> {
        match &mut self.view {
            View::Details(details) => Some(details),
            View::List => None,
        }
    }

    /// True while any request the user is waiting on is in flight.
    pub fn is_loading(&self) -> bool {
        match &self.view {
            View::List => self.list.is_loading,
            View::Details(details) => details.character.is_none() || details.films_loading,
        }
    }
}
