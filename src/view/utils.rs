//! Utility functions for rendering UI components

/// Truncate a string to `max_width` characters, ending with `...` when cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
