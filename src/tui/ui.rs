use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use unicode_width::UnicodeWidthChar;

use crate::core::state::{App, View};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CharacterDetailsView, CharacterListView, HelpBar, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar {
        page: app.list.page,
        favorites: app.list.favorites.len(),
        status_message: &app.status_message,
        is_loading: app.is_loading(),
        spinner_frame,
    }
    .render(frame, title_area);

    match &app.view {
        View::List => CharacterListView::new(&mut tui.list, &app.list).render(frame, main_area),
        View::Details(details) => CharacterDetailsView::new(details).render(frame, main_area),
    }

    HelpBar {
        in_details: matches!(app.view, View::Details(_)),
    }
    .render(frame, help_area);
}

/// Truncate `s` to at most `max_width` terminal columns, adding "..." if cut.
pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> String {
    let width: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if width <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
