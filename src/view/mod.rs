//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (text truncation)
//! - `layout`: Top bar (title + search input)
//! - `results`: Status region and the result tile grid

mod layout;
mod results;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{SearchSession, UiState};

pub use results::GRID_COLUMNS;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, ui_state: &UiState, session: &SearchSession) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title + search bar
                Constraint::Min(0),    // Status region + results grid
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], ui_state);
        results::render_results(frame, chunks[1], ui_state, session);
    }
}
