//! # TitleBar Component
//!
//! Top status bar: page number, favorites count, status text, and a spinner
//! while a request is in flight.
//!
//! Stateless. It receives everything as props and renders a single line:
//!
//! ```text
//! Holocron | Page 2 | ★ 3 | Added Leia Organa to favorites   ⠹
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::ui::truncate_to_width;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar<'a> {
    pub page: u32,
    pub favorites: usize,
    pub status_message: &'a str,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl<'a> TitleBar<'a> {
    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Holocron | Page {} | ★ {}", self.page, self.favorites)
        } else {
            format!(
                "Holocron | Page {} | ★ {} | {}",
                self.page, self.favorites, self.status_message
            )
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Two columns reserved for the spinner
        let max = (area.width as usize).saturating_sub(2);
        let mut spans = vec![Span::raw(truncate_to_width(&self.text(), max))];
        if self.is_loading {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                SPINNER[self.spinner_frame % SPINNER.len()],
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(title_bar: &mut TitleBar<'_>, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_shows_page_and_favorites() {
        let mut title_bar = TitleBar {
            page: 3,
            favorites: 2,
            status_message: "Page 3",
            is_loading: false,
            spinner_frame: 0,
        };
        let text = render_text(&mut title_bar, 80);
        assert!(text.contains("Holocron"));
        assert!(text.contains("Page 3"));
        assert!(text.contains("★ 2"));
        assert!(!text.contains('⠋'));
    }

    #[test]
    fn test_title_bar_spinner_while_loading() {
        let mut title_bar = TitleBar {
            page: 1,
            favorites: 0,
            status_message: "",
            is_loading: true,
            spinner_frame: 0,
        };
        let text = render_text(&mut title_bar, 80);
        assert!(text.contains('⠋'));
        assert_eq!(text.matches('|').count(), 2);
    }

    #[test]
    fn test_title_bar_truncates_long_status() {
        let mut title_bar = TitleBar {
            page: 1,
            favorites: 0,
            status_message: "Added Jabba Desilijic Tiure to favorites",
            is_loading: false,
            spinner_frame: 0,
        };
        let text = render_text(&mut title_bar, 30);
        assert!(text.contains("Holocron"));
        assert!(text.contains("..."));
    }
}
