//! The browse snapshot handed to the renderer

use super::error::ErrorInfo;
use super::genres::find_genre;
use super::item::CatalogItem;
use super::types::{BrowseMode, PaginationCursor, QueryFilters};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Error,
}

/// Everything the controller owns about the current result set
#[derive(Clone, Debug, PartialEq)]
pub struct BrowseState {
    pub mode: BrowseMode,
    /// Filters the current results were (or are being) fetched with
    pub filters: QueryFilters,
    /// Edited filters waiting for the next apply or mode change
    pub pending_filters: QueryFilters,
    pub cursor: PaginationCursor,
    pub items: Vec<CatalogItem>,
    pub total_items: Option<u32>,
    pub selected: Option<CatalogItem>,
    pub is_loading: bool,
    pub error: Option<ErrorInfo>,
}

impl BrowseState {
    /// Startup state: popular mode, nothing loaded, first fetch under way
    pub fn new() -> Self {
        Self {
            mode: BrowseMode::Popular,
            filters: QueryFilters::default(),
            pending_filters: QueryFilters::default(),
            cursor: PaginationCursor::default(),
            items: Vec::new(),
            total_items: None,
            selected: None,
            is_loading: true,
            error: None,
        }
    }

    pub fn status(&self) -> Status {
        if self.is_loading {
            Status::Loading
        } else if self.error.is_some() {
            Status::Error
        } else {
            Status::Idle
        }
    }

    pub fn can_load_more(&self) -> bool {
        !self.is_loading && self.cursor.pages_loaded > 0 && !self.items.is_empty()
    }

    pub fn has_pending_filter_changes(&self) -> bool {
        self.pending_filters != self.filters
    }

    pub fn heading(&self) -> String {
        match &self.mode {
            BrowseMode::Popular => "Most Popular Books".to_string(),
            BrowseMode::Genre(id) => {
                let label = find_genre(id).map(|g| g.label).unwrap_or(id.as_str());
                format!("Popular {} Books", label)
            }
            BrowseMode::Search(term) => format!("Results for \"{}\"", term),
        }
    }
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new()
    }
}
