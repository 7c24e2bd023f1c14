use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, warn};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C, quits from any view
    ForceQuit,
    /// `q`, quits from the list
    Quit,
    CursorUp,
    CursorDown,
    /// Enter: view details of the selected character
    Submit,
    ToggleFavorite,
    NextPage,
    PreviousPage,
    /// Esc/Backspace: leave the detail view
    Back,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
///
/// Terminal read errors are logged and treated as "no event".
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(Event::Key(key_event)) => {
            debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code, key_event.modifiers
            );
            map_key(key_event)
        }
        Ok(Event::Resize(_, _)) => Some(TuiEvent::Resize),
        Ok(_) => None,
        Err(e) => {
            warn!("Event read failed: {}", e);
            None
        }
    }
}

/// Translate a key press into a `TuiEvent`. Releases and repeats are ignored.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Char(' ') | KeyCode::Char('f')) => Some(TuiEvent::ToggleFavorite),
        (_, KeyCode::Right | KeyCode::Char('n')) => Some(TuiEvent::NextPage),
        (_, KeyCode::Left | KeyCode::Char('p')) => Some(TuiEvent::PreviousPage),
        (_, KeyCode::Esc | KeyCode::Backspace) => Some(TuiEvent::Back),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key(press(KeyCode::Up)), Some(TuiEvent::CursorUp));
        assert_eq!(map_key(press(KeyCode::Char('j'))), Some(TuiEvent::CursorDown));
        assert_eq!(map_key(press(KeyCode::Right)), Some(TuiEvent::NextPage));
        assert_eq!(map_key(press(KeyCode::Char('p'))), Some(TuiEvent::PreviousPage));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(TuiEvent::Back));
    }

    #[test]
    fn test_favorite_and_select_keys() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(TuiEvent::ToggleFavorite));
        assert_eq!(map_key(press(KeyCode::Char('f'))), Some(TuiEvent::ToggleFavorite));
        assert_eq!(map_key(press(KeyCode::Enter)), Some(TuiEvent::Submit));
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(TuiEvent::ForceQuit));
        // Plain 'c' is unbound
        assert_eq!(map_key(press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_release_ignored() {
        let key = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(key), None);
    }
}
