//! Core type definitions for the application

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveSection {
    #[default]
    Search,
    Results,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::Search,
        }
    }

    pub fn prev(self) -> Self {
        // Two sections, so cycling is symmetric
        self.next()
    }
}

/// UI state for the application
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_section: ActiveSection,
    /// Live input text, edited on every keystroke. Only submitted on Enter.
    pub search_query: String,
    /// Selected tile in the results grid.
    pub results_selected: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_cycle_between_search_and_results() {
        assert_eq!(ActiveSection::Search.next(), ActiveSection::Results);
        assert_eq!(ActiveSection::Results.next(), ActiveSection::Search);
        assert_eq!(ActiveSection::Search.prev(), ActiveSection::Results);
    }
}
