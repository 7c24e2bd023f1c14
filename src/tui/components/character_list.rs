//! # Character List Component
//!
//! One page of characters rendered as cards, each with a favorite toggle and
//! a "View Details" affordance, plus previous/next page controls.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CharacterListState` lives in `TuiState` and owns the selection cursor
//! - `CharacterListView` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::state::CharacterList;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent state for the character list.
#[derive(Default)]
pub struct CharacterListState {
    pub selected: usize,
    pub list_state: ListState,
    /// Number of characters on the current page. Synced from core state
    /// before events are handled.
    item_count: usize,
    has_previous_page: bool,
}

impl CharacterListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sync the number of visible characters, clamping the cursor.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        if count == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(count - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    /// Sync whether a page before the current one exists.
    pub fn set_has_previous_page(&mut self, has_previous_page: bool) {
        self.has_previous_page = has_previous_page;
    }

    fn reset_selection(&mut self) {
        self.selected = 0;
        *self.list_state.offset_mut() = 0;
        self.list_state
            .select(if self.item_count > 0 { Some(0) } else { None });
    }
}

/// Events emitted by the character list. Indices refer to the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    ToggleFavorite(usize),
    ViewDetails(usize),
    NextPage,
    PreviousPage,
    Quit,
}

impl EventHandler for CharacterListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        match event {
            TuiEvent::CursorUp => {
                if self.item_count > 0 {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if self.item_count > 0 {
                    self.selected = (self.selected + 1).min(self.item_count - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::ToggleFavorite if self.item_count > 0 => {
                Some(ListEvent::ToggleFavorite(self.selected))
            }
            TuiEvent::Submit if self.item_count > 0 => Some(ListEvent::ViewDetails(self.selected)),
            TuiEvent::NextPage => {
                self.reset_selection();
                Some(ListEvent::NextPage)
            }
            TuiEvent::PreviousPage if self.has_previous_page => {
                self.reset_selection();
                Some(ListEvent::PreviousPage)
            }
            TuiEvent::Quit => Some(ListEvent::Quit),
            _ => None,
        }
    }
}

/// Transient render wrapper for the character list.
pub struct CharacterListView<'a> {
    state: &'a mut CharacterListState,
    list: &'a CharacterList,
}

impl<'a> CharacterListView<'a> {
    pub fn new(state: &'a mut CharacterListState, list: &'a CharacterList) -> Self {
        Self { state, list }
    }

    fn card(&self, index: usize) -> ListItem<'a> {
        let character = &self.list.characters[index];
        let is_selected = index == self.state.selected;
        let is_favorite = self.list.favorites.contains(character);

        let name_style = if is_selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };

        let favorite_button = if is_favorite {
            Span::styled(
                "[★ Remove from Favorites]",
                Style::default().fg(Color::Green),
            )
        } else {
            Span::styled("[☆ Add to Favorites]", Style::default().fg(Color::Blue))
        };

        ListItem::new(vec![
            Line::from(Span::styled(character.name.clone(), name_style)),
            Line::from(vec![
                favorite_button,
                Span::raw("  "),
                Span::styled("[View Details]", Style::default().fg(Color::Cyan)),
            ]),
            Line::default(),
        ])
    }

    fn pagination_line(&self) -> Line<'static> {
        let previous_style = if self.list.has_previous_page() {
            Style::default().fg(Color::Blue)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        };
        let mut spans = vec![
            Span::styled("[← Previous Page]", previous_style),
            Span::raw(" "),
            Span::styled("[Next Page →]", Style::default().fg(Color::Blue)),
        ];
        if let Some(total) = self.list.total_count {
            spans.push(Span::styled(
                format!("   {total} characters"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }
}

impl Component for CharacterListView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [list_area, pager_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Star Wars Characters ")
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));

        frame.render_widget(Paragraph::new(self.pagination_line()), pager_area);
        self.state.set_item_count(self.list.characters.len());
        self.state.set_has_previous_page(self.list.has_previous_page());

        if self.list.characters.is_empty() {
            let message = if self.list.is_loading {
                "Loading characters..."
            } else {
                "No characters on this page."
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, list_area);
            return;
        }

        let items: Vec<ListItem> = (0..self.list.characters.len())
            .map(|i| self.card(i))
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}
