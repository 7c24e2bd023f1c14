//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: Top status bar with page, favorites count, and spinner
//! - `HelpBar`: Key bindings for the current view
//! - `CharacterDetailsView`: One character's attributes and films
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `CharacterListState` / `CharacterListView`: The paged character cards
//!   with a selection cursor
//!
//! ## Props-Based Data Flow
//!
//! Components receive core state as borrowed props, never by reaching into
//! the `App` themselves:
//!
//! ```rust,ignore
//! CharacterListView::new(&mut tui.list, &app.list).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs                (this file)
//! ├── title_bar.rs          (Top status bar)
//! ├── help_bar.rs           (Bottom key hints)
//! ├── character_list.rs     (Paged cards + favorites)
//! └── character_details.rs  (Attributes + films)
//! ```

pub mod character_details;
pub mod character_list;
mod help_bar;
mod title_bar;

pub use character_details::CharacterDetailsView;
pub use character_list::{CharacterListState, CharacterListView, ListEvent};
pub use help_bar::HelpBar;
pub use title_bar::TitleBar;
