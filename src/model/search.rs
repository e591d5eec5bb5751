//! Search state container
//!
//! One tagged state is current at any time; it is mutated only through the
//! dispatch operations below, and the view reads cloned snapshots. Each
//! submission gets a monotonically increasing generation so the outcome of
//! a superseded request can never overwrite a newer one.

use super::projection::TrackResult;

/// User-visible message for any dispatch failure. Transport errors, bad
/// statuses and malformed payloads all collapse into this; detail goes to
/// the log only.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch tracks.";

/// The search pipeline's display state.
///
/// `Loading` and `Failed` carry the previously displayed tracks: a failed
/// dispatch leaves the last successful list on screen, it only adds the
/// error message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchState {
    /// No query has been submitted yet.
    #[default]
    Idle,
    Loading {
        previous: Vec<TrackResult>,
    },
    Failed {
        message: String,
        previous: Vec<TrackResult>,
    },
    Loaded {
        tracks: Vec<TrackResult>,
    },
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SearchState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The tracks the grid should show in this state. During `Loading` the
    /// grid is suppressed entirely, so the retained list is not visible.
    pub fn visible_tracks(&self) -> &[TrackResult] {
        match self {
            SearchState::Idle | SearchState::Loading { .. } => &[],
            SearchState::Failed { previous, .. } => previous,
            SearchState::Loaded { tracks } => tracks,
        }
    }

    fn into_current_tracks(self) -> Vec<TrackResult> {
        match self {
            SearchState::Idle => Vec::new(),
            SearchState::Loading { previous } => previous,
            SearchState::Failed { previous, .. } => previous,
            SearchState::Loaded { tracks } => tracks,
        }
    }
}

/// Search state plus submission bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct SearchSession {
    pub state: SearchState,
    /// The last query that was actually dispatched. The "no tracks found"
    /// message only appears once this is set.
    pub submitted_query: Option<String>,
    /// Generation of the most recent submission.
    pub generation: u64,
}

impl SearchSession {
    /// Start a new dispatch. Returns the generation the caller must present
    /// when applying the outcome.
    pub fn begin(&mut self, query: &str, clear_previous: bool) -> u64 {
        self.generation += 1;
        self.submitted_query = Some(query.to_string());

        let previous = if clear_previous {
            Vec::new()
        } else {
            std::mem::take(&mut self.state).into_current_tracks()
        };
        self.state = SearchState::Loading { previous };

        self.generation
    }

    /// Apply a successful outcome. Ignored when `generation` is not the
    /// current one (a newer submission superseded this request).
    pub fn complete(&mut self, generation: u64, tracks: Vec<TrackResult>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.state = SearchState::Loaded { tracks };
        true
    }

    /// Apply a failed outcome, keeping the previously displayed tracks.
    /// Ignored when `generation` is not the current one.
    pub fn fail(&mut self, generation: u64, message: String) -> bool {
        if generation != self.generation {
            return false;
        }
        let previous = std::mem::take(&mut self.state).into_current_tracks();
        self.state = SearchState::Failed { message, previous };
        true
    }

    /// True when the visible list is empty and a query has been submitted,
    /// i.e. the "no tracks found" message should render.
    pub fn shows_empty_message(&self) -> bool {
        self.submitted_query.is_some()
            && !self.state.is_loading()
            && self.state.error_message().is_none()
            && self.state.visible_tracks().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(name: &str) -> TrackResult {
        TrackResult {
            name: name.to_string(),
            artists: vec!["Someone".to_string()],
            album_cover_url: None,
        }
    }

    #[test]
    fn begins_in_idle_with_no_message() {
        let session = SearchSession::default();
        assert_eq!(session.state, SearchState::Idle);
        assert!(!session.shows_empty_message());
        assert!(session.state.visible_tracks().is_empty());
    }

    #[test]
    fn begin_transitions_to_loading_and_bumps_generation() {
        let mut session = SearchSession::default();
        let generation = session.begin("daylight", false);
        assert_eq!(generation, 1);
        assert!(session.state.is_loading());
        assert_eq!(session.submitted_query.as_deref(), Some("daylight"));
    }

    #[test]
    fn complete_applies_tracks_for_the_current_generation() {
        let mut session = SearchSession::default();
        let generation = session.begin("daylight", false);
        assert!(session.complete(generation, vec![track("Daylight")]));
        assert_eq!(session.state.visible_tracks().len(), 1);
        assert!(!session.state.is_loading());
    }

    #[test]
    fn fail_keeps_previous_tracks_and_sets_message() {
        let mut session = SearchSession::default();
        let first = session.begin("daylight", false);
        session.complete(first, vec![track("Daylight")]);

        let second = session.begin("glimpse", false);
        assert!(session.fail(second, FETCH_ERROR_MESSAGE.to_string()));

        assert_eq!(session.state.error_message(), Some(FETCH_ERROR_MESSAGE));
        // The last successful list is still on display beneath the error.
        assert_eq!(session.state.visible_tracks(), [track("Daylight")]);
        assert!(!session.state.is_loading());
    }

    #[test]
    fn stale_outcome_is_dropped() {
        let mut session = SearchSession::default();
        let first = session.begin("daylight", false);
        let second = session.begin("glimpse", false);

        // First request resolves after the second was submitted.
        assert!(!session.complete(first, vec![track("Daylight")]));
        assert!(session.state.is_loading());

        assert!(session.complete(second, vec![track("Glimpse of Us")]));
        assert_eq!(session.state.visible_tracks(), [track("Glimpse of Us")]);
    }

    #[test]
    fn stale_failure_is_dropped() {
        let mut session = SearchSession::default();
        let first = session.begin("daylight", false);
        let second = session.begin("glimpse", false);

        assert!(!session.fail(first, FETCH_ERROR_MESSAGE.to_string()));
        assert!(session.complete(second, vec![track("Glimpse of Us")]));
        assert!(session.state.error_message().is_none());
    }

    #[test]
    fn clear_on_begin_drops_the_previous_list() {
        let mut session = SearchSession::default();
        let first = session.begin("daylight", false);
        session.complete(first, vec![track("Daylight")]);

        let second = session.begin("glimpse", true);
        assert!(session.fail(second, FETCH_ERROR_MESSAGE.to_string()));
        // Cleared at dispatch, so the failure has nothing to restore.
        assert!(session.state.visible_tracks().is_empty());
    }

    #[test]
    fn retained_list_survives_loading_without_rendering() {
        let mut session = SearchSession::default();
        let first = session.begin("daylight", false);
        session.complete(first, vec![track("Daylight")]);

        session.begin("glimpse", false);
        // Suppressed while loading, restored on failure.
        assert!(session.state.visible_tracks().is_empty());
    }

    #[test]
    fn empty_message_requires_a_submission() {
        let mut session = SearchSession::default();
        assert!(!session.shows_empty_message());

        let generation = session.begin("zzzzqqqqnosuchsong", false);
        assert!(!session.shows_empty_message()); // still loading
        session.complete(generation, Vec::new());
        assert!(session.shows_empty_message());
    }

    #[test]
    fn empty_message_is_suppressed_by_an_error() {
        let mut session = SearchSession::default();
        let generation = session.begin("daylight", false);
        session.fail(generation, FETCH_ERROR_MESSAGE.to_string());
        assert!(!session.shows_empty_message());
    }

    #[test]
    fn identical_submissions_are_idempotent() {
        let mut run = |query: &str| {
            let mut session = SearchSession::default();
            let generation = session.begin(query, false);
            session.complete(generation, vec![track("Daylight")]);
            session.state.visible_tracks().to_vec()
        };
        assert_eq!(run("daylight"), run("daylight"));
    }
}
