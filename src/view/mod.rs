//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! Rendering is a pure function of the browse snapshot and the view-local UI state.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, markup stripping, scrollable lists)
//! - `layout`: Main layout structure (top bar, genre strip, error banner, footer)
//! - `content`: Result list and detail view
//! - `overlays`: Modal overlays (filter panel, help)

mod utils;
mod layout;
mod content;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{BrowseState, UiState};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, state: &BrowseState, ui_state: &UiState) {
        let genres_visible = state.mode.genre_id().is_some();
        let error_visible = state.error.is_some();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                                 // Search bar + mode tabs
                Constraint::Length(if genres_visible { 3 } else { 0 }), // Genre strip
                Constraint::Length(if error_visible { 1 } else { 0 }),  // Error banner
                Constraint::Min(0),                                    // Results or detail
                Constraint::Length(3),                                 // Footer
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], state, ui_state);

        if genres_visible {
            layout::render_genre_strip(frame, chunks[1], state, ui_state);
        }

        if let Some(error) = &state.error {
            layout::render_error_banner(frame, chunks[2], error);
        }

        content::render_main_content(frame, chunks[3], state, ui_state);

        layout::render_footer(frame, chunks[4], state);

        if ui_state.show_filters {
            overlays::render_filter_panel(frame, state, ui_state);
        }

        if ui_state.show_help {
            overlays::render_help_popup(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BrowseMode, CatalogItem, ErrorInfo, ErrorKind};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &BrowseState, ui_state: &UiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|frame| AppView::render(frame, state, ui_state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn first_load_shows_placeholder() {
        let screen = draw(&BrowseState::new(), &UiState::default());
        assert!(screen.contains("Most Popular Books"));
        assert!(screen.contains("Loading books..."));
    }

    #[test]
    fn empty_result_says_no_books() {
        let mut state = BrowseState::new();
        state.is_loading = false;
        state.mode = BrowseMode::Search("zzzz".to_string());
        let screen = draw(&state, &UiState::default());
        assert!(screen.contains("No books found"));
    }

    #[test]
    fn rows_and_error_banner_render_together() {
        let mut state = BrowseState::new();
        state.is_loading = false;
        state.cursor.pages_loaded = 1;
        state.items.push(CatalogItem {
            id: "a".to_string(),
            title: "Dune".to_string(),
            published_date: Some("1965-08-01".to_string()),
            ..Default::default()
        });
        state.error = Some(ErrorInfo {
            kind: ErrorKind::Network,
            message: "Request failed".to_string(),
        });

        let screen = draw(&state, &UiState::default());
        assert!(screen.contains("Dune"));
        assert!(screen.contains("Unknown Author"));
        assert!(screen.contains("1965"));
        assert!(screen.contains("Request failed"));
    }

    #[test]
    fn selection_shows_detail_view() {
        let mut state = BrowseState::new();
        state.is_loading = false;
        state.selected = Some(CatalogItem {
            id: "a".to_string(),
            title: "Dune".to_string(),
            description: Some("<p>Desert <i>planet</i></p>".to_string()),
            language: Some("en".to_string()),
            ..Default::default()
        });

        let screen = draw(&state, &UiState::default());
        assert!(screen.contains("Desert planet"));
        assert!(screen.contains("EN"));
        assert!(!screen.contains("<p>"));
    }
}
