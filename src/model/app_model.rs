//! Main application model with state management

use std::sync::Arc;
use tokio::sync::Mutex;

use super::projection::TrackResult;
use super::search::{SearchSession, SearchState};
use super::types::{ActiveSection, UiState};

/// Main application model containing all state
pub struct AppModel {
    ui_state: Arc<Mutex<UiState>>,
    search: Arc<Mutex<SearchSession>>,
    should_quit: Arc<Mutex<bool>>,
    /// Whether a new dispatch clears the displayed list immediately.
    clear_on_search: bool,
}

impl AppModel {
    pub fn new(clear_on_search: bool) -> Self {
        Self {
            ui_state: Arc::new(Mutex::new(UiState::default())),
            search: Arc::new(Mutex::new(SearchSession::default())),
            should_quit: Arc::new(Mutex::new(false)),
            clear_on_search,
        }
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // UI state
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn cycle_section_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn cycle_section_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.prev();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut state = self.ui_state.lock().await;
        state.active_section = section;
    }

    pub async fn update_search_query(&self, query: String) {
        let mut state = self.ui_state.lock().await;
        state.search_query = query;
    }

    pub async fn append_to_search(&self, c: char) {
        let mut state = self.ui_state.lock().await;
        state.search_query.push(c);
    }

    pub async fn backspace_search(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_query.pop();
    }

    pub async fn move_selection_up(&self, columns: usize) {
        let mut state = self.ui_state.lock().await;
        state.results_selected = state.results_selected.saturating_sub(columns.max(1));
    }

    pub async fn move_selection_down(&self, columns: usize) {
        let visible = self.search.lock().await.state.visible_tracks().len();
        let mut state = self.ui_state.lock().await;
        let candidate = state.results_selected + columns.max(1);
        if candidate < visible {
            state.results_selected = candidate;
        }
    }

    pub async fn move_selection_left(&self) {
        let mut state = self.ui_state.lock().await;
        state.results_selected = state.results_selected.saturating_sub(1);
    }

    pub async fn move_selection_right(&self) {
        let visible = self.search.lock().await.state.visible_tracks().len();
        let mut state = self.ui_state.lock().await;
        if state.results_selected + 1 < visible {
            state.results_selected += 1;
        }
    }

    // ========================================================================
    // Search dispatch state machine
    // ========================================================================

    /// Read-only snapshot of the search session for rendering.
    pub async fn get_search_session(&self) -> SearchSession {
        self.search.lock().await.clone()
    }

    pub async fn get_search_state(&self) -> SearchState {
        self.search.lock().await.state.clone()
    }

    /// Start a new dispatch and return its generation token.
    pub async fn begin_search(&self, query: &str) -> u64 {
        let generation = self
            .search
            .lock()
            .await
            .begin(query, self.clear_on_search);

        // A fresh result set gets a fresh selection.
        self.ui_state.lock().await.results_selected = 0;
        generation
    }

    /// Apply a successful outcome; drops it silently when superseded.
    pub async fn complete_search(&self, generation: u64, tracks: Vec<TrackResult>) -> bool {
        self.search.lock().await.complete(generation, tracks)
    }

    /// Apply a failed outcome; drops it silently when superseded.
    pub async fn fail_search(&self, generation: u64, message: String) -> bool {
        self.search.lock().await.fail(generation, message)
    }
}
