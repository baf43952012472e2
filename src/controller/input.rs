//! Key event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{
    genre_index, ActiveSection, CatalogSource, FilterField, FilterUpdate, UiState, DEFAULT_GENRE,
    GENRES,
};
use super::BrowseController;

impl<C: CatalogSource> BrowseController<C> {
    /// Map a key press to UI changes and browse commands.
    ///
    /// Commands that are refused (empty search, load-more while loading, ...) are dropped here.
    pub fn handle_key_event(&mut self, ui: &mut UiState, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            ui.should_quit = true;
            return;
        }

        // Help popup swallows everything else
        if ui.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('h')) {
                ui.show_help = false;
            }
            return;
        }

        if ui.show_filters {
            self.handle_filter_panel_key(ui, key);
            return;
        }

        // Detail view: only leaving it is meaningful
        if self.state.selected.is_some() {
            match key.code {
                KeyCode::Esc | KeyCode::Backspace => self.clear_selection(),
                KeyCode::Char('q') => ui.should_quit = true,
                _ => {}
            }
            return;
        }

        let genres_visible = self.state.mode.genre_id().is_some();

        if ui.active_section == ActiveSection::Search {
            match key.code {
                KeyCode::Tab => {
                    ui.active_section = ui.active_section.next(genres_visible);
                    return;
                }
                KeyCode::BackTab => {
                    ui.active_section = ui.active_section.prev(genres_visible);
                    return;
                }
                KeyCode::Enter => {
                    if self.search(&ui.search_input).is_ok() {
                        ui.result_selected = 0;
                        ui.active_section = ActiveSection::Results;
                    }
                    return;
                }
                KeyCode::Esc => {
                    ui.search_input.clear();
                    return;
                }
                KeyCode::Backspace => {
                    ui.search_input.pop();
                    return;
                }
                KeyCode::Char(c) => {
                    ui.search_input.push(c);
                    return;
                }
                _ => {}
            }
        }

        if ui.active_section == ActiveSection::Genres && genres_visible {
            match key.code {
                KeyCode::Left => {
                    ui.move_genre_selection(-1, GENRES.len());
                    return;
                }
                KeyCode::Right => {
                    ui.move_genre_selection(1, GENRES.len());
                    return;
                }
                KeyCode::Enter => {
                    let genre = GENRES[ui.genre_selected.min(GENRES.len() - 1)].id;
                    if self.switch_to_genre(genre).is_ok() {
                        ui.result_selected = 0;
                        ui.active_section = ActiveSection::Results;
                    }
                    return;
                }
                _ => {}
            }
        }

        if ui.active_section == ActiveSection::Results {
            match key.code {
                KeyCode::Up => {
                    ui.move_result_selection(-1, self.state.items.len());
                    return;
                }
                KeyCode::Down => {
                    let count = self.state.items.len();
                    if count > 0 && ui.result_selected + 1 >= count {
                        // Reaching the bottom asks for the next page
                        let _ = self.load_more();
                    } else {
                        ui.move_result_selection(1, count);
                    }
                    return;
                }
                KeyCode::Enter => {
                    if let Some(item) = self.state.items.get(ui.result_selected) {
                        let id = item.id.clone();
                        let _ = self.select_item(&id);
                    }
                    return;
                }
                KeyCode::Char('m') => {
                    let _ = self.load_more();
                    return;
                }
                _ => {}
            }
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') => {
                ui.should_quit = true;
            }
            KeyCode::Tab => {
                ui.active_section = ui.active_section.next(genres_visible);
            }
            KeyCode::BackTab => {
                ui.active_section = ui.active_section.prev(genres_visible);
            }
            // Home
            KeyCode::Char('p') => {
                ui.search_input.clear();
                ui.result_selected = 0;
                ui.active_section = ActiveSection::Results;
                self.go_home();
            }
            // Browse by genre
            KeyCode::Char('g') => {
                if !genres_visible {
                    ui.search_input.clear();
                    ui.genre_selected = genre_index(DEFAULT_GENRE).unwrap_or(0);
                    ui.result_selected = 0;
                    let _ = self.switch_to_genre(DEFAULT_GENRE);
                }
                ui.active_section = ActiveSection::Genres;
            }
            KeyCode::Char('/') => {
                ui.active_section = ActiveSection::Search;
            }
            KeyCode::Char('f') => {
                ui.show_filters = true;
                ui.filter_field = FilterField::PageSize;
            }
            KeyCode::Char('r') => {
                ui.result_selected = 0;
                self.apply_filters();
            }
            KeyCode::Char('?') | KeyCode::Char('h') => {
                ui.show_help = true;
            }
            _ => {}
        }
    }

    fn handle_filter_panel_key(&mut self, ui: &mut UiState, key: KeyEvent) {
        let pending = self.state.pending_filters;
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                ui.filter_field = ui.filter_field.toggle();
            }
            KeyCode::Left | KeyCode::Right => {
                let forward = key.code == KeyCode::Right;
                let update = match ui.filter_field {
                    FilterField::PageSize if forward => FilterUpdate::page_size(pending.page_size.next()),
                    FilterField::PageSize => FilterUpdate::page_size(pending.page_size.prev()),
                    FilterField::SortOrder => FilterUpdate::sort_order(pending.sort_order.toggle()),
                };
                self.set_filters(update);
            }
            KeyCode::Enter => {
                ui.show_filters = false;
                ui.result_selected = 0;
                self.apply_filters();
            }
            KeyCode::Esc | KeyCode::Char('f') => {
                ui.show_filters = false;
            }
            _ => {}
        }
    }
}
