//! Browse commands offered to the renderer
//!
//! Commands whose precondition fails return a [`CommandError`] and leave state untouched.

use crate::model::{
    find_genre, BrowseMode, CatalogSource, CommandError, FilterUpdate, POPULAR_QUERIES,
};
use super::{BrowseController, LoadMode};

impl<C: CatalogSource> BrowseController<C> {
    pub fn search(&mut self, term: &str) -> Result<(), CommandError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(Self::rejected(CommandError::EmptySearchTerm));
        }

        tracing::info!(term, "Starting search");
        self.start_new_query(BrowseMode::Search(term.to_string()));
        Ok(())
    }

    pub fn switch_to_popular(&mut self) {
        self.popular_query = POPULAR_QUERIES[self.popular_rotation % POPULAR_QUERIES.len()];
        self.popular_rotation = self.popular_rotation.wrapping_add(1);

        tracing::info!(query = self.popular_query, "Switching to popular books");
        self.start_new_query(BrowseMode::Popular);
    }

    pub fn switch_to_genre(&mut self, genre_id: &str) -> Result<(), CommandError> {
        let Some(genre) = find_genre(genre_id) else {
            return Err(Self::rejected(CommandError::UnknownGenre(genre_id.to_string())));
        };

        tracing::info!(genre = genre.id, "Switching genre");
        self.start_new_query(BrowseMode::Genre(genre.id.to_string()));
        Ok(())
    }

    /// Fetch the next page of the current query and append it.
    pub fn load_more(&mut self) -> Result<(), CommandError> {
        if self.state.is_loading {
            return Err(Self::rejected(CommandError::AlreadyLoading));
        }
        if !self.state.can_load_more() {
            return Err(Self::rejected(CommandError::NothingToLoad));
        }

        tracing::debug!(offset = self.state.cursor.offset, "Loading more results");
        self.dispatch(LoadMode::Append);
        Ok(())
    }

    pub fn select_item(&mut self, item_id: &str) -> Result<(), CommandError> {
        let Some(item) = self.state.items.iter().find(|item| item.id == item_id) else {
            return Err(Self::rejected(CommandError::UnknownItem(item_id.to_string())));
        };

        tracing::debug!(item_id, title = %item.title, "Item selected");
        self.state.selected = Some(item.clone());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.state.selected = None;
    }

    /// Stage filter changes; they apply on the next `apply_filters` or mode change.
    pub fn set_filters(&mut self, update: FilterUpdate) {
        self.state.pending_filters.merge(update);
        tracing::debug!(pending = ?self.state.pending_filters, "Filters staged");
    }

    /// Re-run the current query from the first page with the staged filters.
    pub fn apply_filters(&mut self) {
        tracing::info!(filters = ?self.state.pending_filters, "Applying filters");
        let mode = self.state.mode.clone();
        self.start_new_query(mode);
    }

    /// Back to the start screen: popular books, nothing selected.
    pub fn go_home(&mut self) {
        self.clear_selection();
        self.switch_to_popular();
    }

    fn rejected(error: CommandError) -> CommandError {
        tracing::debug!(error = %error, "Command ignored");
        error
    }
}
