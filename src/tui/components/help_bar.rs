//! # HelpBar Component
//!
//! Bottom line listing the key bindings of the current view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::tui::component::Component;

const LIST_HELP: &str = " ↑↓ Select  Space Favorite  Enter Details  ←→ Page  q Quit ";
const DETAILS_HELP: &str = " Esc Back  Ctrl+C Quit ";

pub struct HelpBar {
    pub in_details: bool,
}

impl HelpBar {
    fn text(&self) -> &'static str {
        if self.in_details {
            DETAILS_HELP
        } else {
            LIST_HELP
        }
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(self.text())
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(line, area);
    }
}
