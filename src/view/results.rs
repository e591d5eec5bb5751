//! Result area rendering (status region and the track tile grid)
//!
//! State precedence, first match wins: loading indicator, then error text
//! (with the retained grid beneath it), then the "no tracks found" message,
//! then the grid.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, SearchSession, TrackResult, UiState};
use super::utils::truncate_string;

/// Tiles per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Tile height in terminal rows (borders + cover, name, artists, action).
const TILE_HEIGHT: u16 = 6;

pub fn render_results(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    session: &SearchSession,
) {
    let is_focused = ui_state.active_section == ActiveSection::Results;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    if session.state.is_loading() {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Results ")
                    .padding(Padding::horizontal(1))
                    .border_style(border_style),
            );
        frame.render_widget(loading, area);
        return;
    }

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(" Results ")
        .border_style(border_style);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let grid_area = if let Some(message) = session.state.error_message() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);
        let error = Paragraph::new(message)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        frame.render_widget(error, chunks[0]);
        chunks[1]
    } else {
        inner
    };

    let tracks = session.state.visible_tracks();

    if tracks.is_empty() {
        if session.shows_empty_message() {
            let query = session.submitted_query.as_deref().unwrap_or_default();
            let message = Paragraph::new(format!("No tracks found for \"{}\".", query))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(message, grid_area);
        } else if session.submitted_query.is_none() && session.state.error_message().is_none() {
            let hint = Paragraph::new(
                "Type a song title and press Enter to search\n\n\
                 Tab switches between search and results\n\
                 Arrow keys move the selection",
            )
            .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, grid_area);
        }
        return;
    }

    render_grid(frame, grid_area, tracks, ui_state.results_selected, is_focused);
}

fn render_grid(
    frame: &mut Frame,
    area: Rect,
    tracks: &[TrackResult],
    selected: usize,
    is_focused: bool,
) {
    if area.height < TILE_HEIGHT || area.width == 0 {
        return;
    }

    let total_rows = tracks.len().div_ceil(GRID_COLUMNS);
    let visible_rows = (area.height / TILE_HEIGHT).max(1) as usize;

    // Scroll so the selected tile's row stays visible.
    let selected_row = selected / GRID_COLUMNS;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let row_constraints: Vec<Constraint> = (0..visible_rows.min(total_rows - first_row))
        .map(|_| Constraint::Length(TILE_HEIGHT))
        .collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let row = first_row + row_offset;
        let column_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, GRID_COLUMNS as u32);
                GRID_COLUMNS
            ])
            .split(*row_area);

        for (column, column_area) in column_areas.iter().enumerate() {
            let index = row * GRID_COLUMNS + column;
            if let Some(track) = tracks.get(index) {
                render_tile(
                    frame,
                    *column_area,
                    track,
                    is_focused && index == selected,
                );
            }
        }
    }
}

fn render_tile(frame: &mut Frame, area: Rect, track: &TrackResult, is_selected: bool) {
    let text_width = area.width.saturating_sub(4) as usize;

    let cover_line = match &track.album_cover_url {
        Some(url) => Line::styled(
            format!("▣ {}", truncate_string(url, text_width.saturating_sub(2))),
            Style::default().fg(Color::DarkGray),
        ),
        None => Line::styled(
            "No Cover Available".to_string(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        ),
    };

    let lines = vec![
        cover_line,
        Line::styled(
            truncate_string(&track.name, text_width),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            truncate_string(&track.artist_line(), text_width),
            Style::default().fg(Color::Cyan),
        ),
        Line::styled(
            "[ Buy Now ]".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let border_style = if is_selected {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let tile = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .padding(Padding::horizontal(1))
            .border_style(border_style),
    );
    frame.render_widget(tile, area);
}
