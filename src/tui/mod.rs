//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Each tick: draw (if anything changed), poll the keyboard, route events to
//! `update()`, then drain actions posted by background fetch tasks. Effects
//! returned by `update()` are turned into `tokio::spawn`ed requests whose
//! results come back as actions on a `std::sync::mpsc` channel.
//!
//! - **Loading**: redraws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, View};
use crate::swapi::{HttpSwapi, SwapiClient, fetch_films};
use crate::tui::component::EventHandler;
use crate::tui::components::{CharacterListState, ListEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub list: CharacterListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            list: CharacterListState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client: Arc<dyn SwapiClient> = Arc::new(HttpSwapi::new(config.base_url.clone()));
    let mut app = App::new(config.start_page);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &mut tui, client);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    client: Arc<dyn SwapiClient>,
) -> std::io::Result<()> {
    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    if dispatch(app, Action::Start, &client, &tx) {
        return Ok(());
    }

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(app, tui, event)
                && dispatch(app, action, &client, &tx)
            {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(app, action, &client, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Holocron shutting down");
    Ok(())
}

/// Map a terminal event to a core action, given which view is showing.
fn route_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Resize => None,
        TuiEvent::ForceQuit => Some(Action::Quit),
        _ => match &app.view {
            View::List => {
                tui.list.set_item_count(app.list.characters.len());
                tui.list.set_has_previous_page(app.list.has_previous_page());
                let characters = &app.list.characters;
                match tui.list.handle_event(&event)? {
                    ListEvent::ToggleFavorite(i) => {
                        characters.get(i).cloned().map(Action::ToggleFavorite)
                    }
                    ListEvent::ViewDetails(i) => {
                        let character = characters.get(i)?;
                        if character.url.is_empty() {
                            warn!("{} has no resource URL, cannot open details", character.name);
                            return None;
                        }
                        Some(Action::Select(character.url.clone()))
                    }
                    ListEvent::NextPage => Some(Action::NextPage),
                    ListEvent::PreviousPage => Some(Action::PreviousPage),
                    ListEvent::Quit => Some(Action::Quit),
                }
            }
            View::Details(_) => match event {
                TuiEvent::Back => Some(Action::Back),
                _ => None,
            },
        },
    }
}

/// Run `update()` and perform its effect. Returns `true` when the app should quit.
fn dispatch(
    app: &mut App,
    action: Action,
    client: &Arc<dyn SwapiClient>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::Quit => true,
        effect => {
            spawn_effect(effect, client.clone(), tx.clone());
            false
        }
    }
}

fn spawn_effect(effect: Effect, client: Arc<dyn SwapiClient>, tx: mpsc::Sender<Action>) {
    let action = async move {
        match effect {
            Effect::FetchPage { page, request } => {
                let result = client.people_page(page).await;
                Some(Action::PageLoaded {
                    page,
                    request,
                    result,
                })
            }
            Effect::FetchCharacter { url, request } => {
                let result = client.character(&url).await;
                Some(Action::CharacterLoaded {
                    url,
                    request,
                    result,
                })
            }
            Effect::FetchFilms {
                url,
                request,
                films,
            } => {
                info!("Fetching {} films for {}", films.len(), url);
                let result = fetch_films(client.as_ref(), &films).await;
                Some(Action::FilmsLoaded {
                    url,
                    request,
                    result,
                })
            }
            Effect::None | Effect::Quit => None,
        }
    };

    tokio::spawn(async move {
        if let Some(action) = action.await
            && tx.send(action).is_err()
        {
            warn!("Failed to send fetch result: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeSwapi, character, test_app};

    fn app_with_page() -> App {
        let mut app = test_app();
        app.list.characters = vec![
            character(1, "Luke Skywalker", &["f1"]),
            character(2, "C-3PO", &[]),
        ];
        app
    }

    #[test]
    fn test_space_toggles_selected_character() {
        let app = app_with_page();
        let mut tui = TuiState::new();
        route_event(&app, &mut tui, TuiEvent::CursorDown);

        let action = route_event(&app, &mut tui, TuiEvent::ToggleFavorite);

        assert!(matches!(action, Some(Action::ToggleFavorite(c)) if c.name == "C-3PO"));
    }

    #[test]
    fn test_enter_selects_character_url() {
        let app = app_with_page();
        let mut tui = TuiState::new();

        let action = route_event(&app, &mut tui, TuiEvent::Submit);

        assert!(matches!(
            action,
            Some(Action::Select(url)) if url == "https://swapi.dev/api/people/1/"
        ));
    }

    #[test]
    fn test_character_without_url_cannot_open() {
        let mut app = test_app();
        let mut nameless = character(1, "Unknown", &[]);
        nameless.url.clear();
        app.list.characters = vec![nameless];
        let mut tui = TuiState::new();

        assert!(route_event(&app, &mut tui, TuiEvent::Submit).is_none());
    }

    #[test]
    fn test_previous_on_first_page_keeps_cursor() {
        let mut app = app_with_page();
        let mut tui = TuiState::new();
        route_event(&app, &mut tui, TuiEvent::CursorDown);

        assert!(route_event(&app, &mut tui, TuiEvent::PreviousPage).is_none());
        assert_eq!(tui.list.selected, 1);

        update(&mut app, Action::NextPage);
        assert!(matches!(
            route_event(&app, &mut tui, TuiEvent::PreviousPage),
            Some(Action::PreviousPage)
        ));
        assert_eq!(tui.list.selected, 0);
    }

    #[test]
    fn test_details_view_only_goes_back() {
        let mut app = app_with_page();
        let mut tui = TuiState::new();
        update(&mut app, Action::Select("u".to_string()));

        assert!(route_event(&app, &mut tui, TuiEvent::NextPage).is_none());
        assert!(route_event(&app, &mut tui, TuiEvent::ToggleFavorite).is_none());
        assert!(matches!(
            route_event(&app, &mut tui, TuiEvent::Back),
            Some(Action::Back)
        ));
    }

    #[test]
    fn test_force_quit_from_any_view() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::Select("u".to_string()));
        assert!(matches!(
            route_event(&app, &mut tui, TuiEvent::ForceQuit),
            Some(Action::Quit)
        ));
    }

    fn recv(rx: &mpsc::Receiver<Action>) -> Action {
        rx.recv_timeout(Duration::from_secs(5))
            .expect("background fetch should report back")
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_effects_round_trip_through_channel() {
        let luke = character(1, "Luke Skywalker", &["f1", "f2"]);
        let client: Arc<dyn SwapiClient> = Arc::new(
            FakeSwapi::new()
                .with_page(1, vec![luke.clone()])
                .with_character(luke.clone())
                .with_film("f1", "A New Hope")
                .with_film("f2", "The Empire Strikes Back"),
        );
        let (tx, rx) = mpsc::channel();
        let mut app = test_app();

        assert!(!dispatch(&mut app, Action::Start, &client, &tx));
        let page_loaded = recv(&rx);
        dispatch(&mut app, page_loaded, &client, &tx);
        assert_eq!(app.list.characters, vec![luke.clone()]);

        dispatch(&mut app, Action::Select(luke.url.clone()), &client, &tx);
        let character_loaded = recv(&rx);
        dispatch(&mut app, character_loaded, &client, &tx);
        let films_loaded = recv(&rx);
        dispatch(&mut app, films_loaded, &client, &tx);

        let details = app.details().unwrap();
        assert_eq!(details.character.as_ref(), Some(&luke));
        let titles: Vec<&str> = details.films.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["A New Hope", "The Empire Strikes Back"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_missing_film_leaves_no_titles() {
        let luke = character(1, "Luke Skywalker", &["f1", "f2"]);
        let client: Arc<dyn SwapiClient> = Arc::new(
            FakeSwapi::new()
                .with_character(luke.clone())
                .with_film("f1", "A New Hope"),
        );
        let (tx, rx) = mpsc::channel();
        let mut app = test_app();

        dispatch(&mut app, Action::Select(luke.url.clone()), &client, &tx);
        let character_loaded = recv(&rx);
        dispatch(&mut app, character_loaded, &client, &tx);
        let films_loaded = recv(&rx);
        dispatch(&mut app, films_loaded, &client, &tx);

        let details = app.details().unwrap();
        assert!(details.films.is_empty());
        assert!(!details.films_loading);
    }

    #[test]
    fn test_quit_dispatch_spawns_nothing() {
        let client: Arc<dyn SwapiClient> = Arc::new(FakeSwapi::new());
        let (tx, _rx) = mpsc::channel();
        let mut app = test_app();
        assert!(dispatch(&mut app, Action::Quit, &client, &tx));
    }
}
