//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::ActiveSection;
use crate::view::GRID_COLUMNS;
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = self.model.lock().await;
        let ui_state = model.get_ui_state().await;

        // Handle search input when in search section
        if ui_state.active_section == ActiveSection::Search {
            match key.code {
                KeyCode::Tab => {
                    model.cycle_section_forward().await;
                    return Ok(());
                }
                KeyCode::BackTab => {
                    model.cycle_section_backward().await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    drop(model);
                    self.submit_search().await;
                    return Ok(());
                }
                KeyCode::Esc => {
                    model.update_search_query(String::new()).await;
                    return Ok(());
                }
                KeyCode::Backspace => {
                    model.backspace_search().await;
                    return Ok(());
                }
                KeyCode::Char(c) => {
                    // Ctrl+Q still quits even while typing
                    if (c == 'q' || c == 'Q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        model.set_should_quit(true).await;
                        return Ok(());
                    }
                    model.append_to_search(c).await;
                    return Ok(());
                }
                _ => return Ok(()),
            }
        }

        // Results section navigation
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Tab => {
                model.cycle_section_forward().await;
            }
            KeyCode::BackTab => {
                model.cycle_section_backward().await;
            }
            KeyCode::Up => {
                model.move_selection_up(GRID_COLUMNS).await;
            }
            KeyCode::Down => {
                model.move_selection_down(GRID_COLUMNS).await;
            }
            KeyCode::Left => {
                model.move_selection_left().await;
            }
            KeyCode::Right => {
                model.move_selection_right().await;
            }
            KeyCode::Enter => {
                // The Buy Now action is decorative; nothing to do.
                tracing::debug!("Buy action is decorative, ignoring");
            }
            KeyCode::Esc => {
                model.set_active_section(ActiveSection::Search).await;
            }
            _ => {}
        }
        Ok(())
    }
}
