//! # Character Details Component
//!
//! Attributes of one character and the films they appeared in. Shows a
//! loading placeholder until the character record arrives.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Padding, Paragraph};

use crate::core::state::CharacterDetails;
use crate::swapi::Character;
use crate::tui::component::Component;

pub const LOADING_PLACEHOLDER: &str = "Loading character details...";

pub struct CharacterDetailsView<'a> {
    details: &'a CharacterDetails,
}

impl<'a> CharacterDetailsView<'a> {
    pub fn new(details: &'a CharacterDetails) -> Self {
        Self { details }
    }
}

fn attribute(label: &'static str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::raw(value.to_string()),
    ])
}

fn attributes(character: &Character) -> Vec<Line<'static>> {
    vec![
        attribute("Height", &character.height),
        attribute("Mass", &character.mass),
        attribute("Hair Color", &character.hair_color),
        attribute("Skin Color", &character.skin_color),
    ]
}

impl Component for CharacterDetailsView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(character) = &self.details.character else {
            let [_, middle, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(area);
            let placeholder = Paragraph::new(LOADING_PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(placeholder, middle);
            return;
        };

        let [attributes_area, films_area] =
            Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).areas(area);

        let card = Paragraph::new(attributes(character)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    format!(" {} ", character.name),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(card, attributes_area);

        let films_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Movies appeared in: ")
            .padding(Padding::horizontal(1));

        if self.details.films_loading && self.details.films.is_empty() {
            let loading = Paragraph::new("Loading films...")
                .style(Style::default().fg(Color::DarkGray))
                .block(films_block);
            frame.render_widget(loading, films_area);
            return;
        }

        let items: Vec<ListItem> = self
            .details
            .films
            .iter()
            .map(|film| ListItem::new(Line::from(format!("• {}", film.title))))
            .collect();
        frame.render_widget(List::new(items).block(films_block), films_area);
    }
}
