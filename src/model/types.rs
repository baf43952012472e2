//! Core type definitions for browse state and the terminal UI

use std::fmt;

/// Which result set is currently driving the display
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum BrowseMode {
    #[default]
    Popular,
    Genre(String),
    Search(String),
}

impl BrowseMode {
    pub fn search_term(&self) -> Option<&str> {
        match self {
            BrowseMode::Search(term) => Some(term),
            _ => None,
        }
    }

    pub fn genre_id(&self) -> Option<&str> {
        match self {
            BrowseMode::Genre(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for BrowseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowseMode::Popular => write!(f, "popular"),
            BrowseMode::Genre(id) => write!(f, "genre:{}", id),
            BrowseMode::Search(term) => write!(f, "search:{}", term),
        }
    }
}

/// Number of results requested per page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PageSize {
    Ten,
    #[default]
    Twenty,
    Thirty,
    Forty,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [PageSize::Ten, PageSize::Twenty, PageSize::Thirty, PageSize::Forty];

    pub fn get(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Thirty => 30,
            PageSize::Forty => 40,
        }
    }

    pub fn next(self) -> Self {
        match self {
            PageSize::Ten => PageSize::Twenty,
            PageSize::Twenty => PageSize::Thirty,
            PageSize::Thirty => PageSize::Forty,
            PageSize::Forty => PageSize::Ten,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            PageSize::Ten => PageSize::Forty,
            PageSize::Twenty => PageSize::Ten,
            PageSize::Thirty => PageSize::Twenty,
            PageSize::Forty => PageSize::Thirty,
        }
    }
}

/// Result ordering accepted by the catalog endpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Relevance,
    Newest,
}

impl SortOrder {
    /// Token sent as the `orderBy` query parameter
    pub fn as_query_value(self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::Newest => "newest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Relevance => "Relevance",
            SortOrder::Newest => "Newest",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Relevance => SortOrder::Newest,
            SortOrder::Newest => SortOrder::Relevance,
        }
    }
}

/// Query settings honored by the next fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct QueryFilters {
    pub page_size: PageSize,
    pub sort_order: SortOrder,
}

impl QueryFilters {
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(page_size) = update.page_size {
            self.page_size = page_size;
        }
        if let Some(sort_order) = update.sort_order {
            self.sort_order = sort_order;
        }
    }
}

/// A partial change to [`QueryFilters`]; `None` fields are left as they are
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FilterUpdate {
    pub page_size: Option<PageSize>,
    pub sort_order: Option<SortOrder>,
}

impl FilterUpdate {
    pub fn page_size(page_size: PageSize) -> Self {
        Self {
            page_size: Some(page_size),
            ..Self::default()
        }
    }

    pub fn sort_order(sort_order: SortOrder) -> Self {
        Self {
            sort_order: Some(sort_order),
            ..Self::default()
        }
    }
}

/// Where the next load-more page starts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PaginationCursor {
    pub offset: usize,
    /// Pages successfully fetched for the current mode and query
    pub pages_loaded: usize,
}

/// Which part of the UI has keyboard focus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveSection {
    Search,
    #[default]
    Results,
    Genres,
}

impl ActiveSection {
    pub fn next(self, genres_visible: bool) -> Self {
        match self {
            ActiveSection::Search if genres_visible => ActiveSection::Genres,
            ActiveSection::Search => ActiveSection::Results,
            ActiveSection::Genres => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::Search,
        }
    }

    pub fn prev(self, genres_visible: bool) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Results,
            ActiveSection::Genres => ActiveSection::Search,
            ActiveSection::Results if genres_visible => ActiveSection::Genres,
            ActiveSection::Results => ActiveSection::Search,
        }
    }
}

/// Field highlighted in the filter panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    PageSize,
    SortOrder,
}

impl FilterField {
    pub fn toggle(self) -> Self {
        match self {
            FilterField::PageSize => FilterField::SortOrder,
            FilterField::SortOrder => FilterField::PageSize,
        }
    }
}

/// View-local state; never part of the browse snapshot
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub search_input: String,
    pub result_selected: usize,
    pub genre_selected: usize,
    pub show_filters: bool,
    pub filter_field: FilterField,
    pub show_help: bool,
    pub should_quit: bool,
}

impl UiState {
    pub fn move_result_selection(&mut self, delta: isize, item_count: usize) {
        if item_count == 0 {
            self.result_selected = 0;
            return;
        }
        let max = item_count - 1;
        self.result_selected = self.result_selected.saturating_add_signed(delta).min(max);
    }

    pub fn move_genre_selection(&mut self, delta: isize, genre_count: usize) {
        let max = genre_count.saturating_sub(1);
        self.genre_selected = self.genre_selected.saturating_add_signed(delta).min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_cycles_through_all_values() {
        let mut size = PageSize::Ten;
        for expected in [PageSize::Twenty, PageSize::Thirty, PageSize::Forty, PageSize::Ten] {
            size = size.next();
            assert_eq!(size, expected);
        }
        assert_eq!(PageSize::Ten.prev(), PageSize::Forty);
    }

    #[test]
    fn filters_default_to_twenty_by_relevance() {
        let filters = QueryFilters::default();
        assert_eq!(filters.page_size.get(), 20);
        assert_eq!(filters.sort_order, SortOrder::Relevance);
        assert_eq!(filters.sort_order.as_query_value(), "relevance");
    }

    #[test]
    fn merge_only_touches_provided_fields() {
        let mut filters = QueryFilters::default();
        filters.merge(FilterUpdate::sort_order(SortOrder::Newest));
        assert_eq!(filters.page_size, PageSize::Twenty);
        assert_eq!(filters.sort_order, SortOrder::Newest);

        filters.merge(FilterUpdate::page_size(PageSize::Forty));
        assert_eq!(filters.page_size, PageSize::Forty);
        assert_eq!(filters.sort_order, SortOrder::Newest);
    }

    #[test]
    fn section_cycle_skips_hidden_genres() {
        assert_eq!(ActiveSection::Search.next(false), ActiveSection::Results);
        assert_eq!(ActiveSection::Search.next(true), ActiveSection::Genres);
        assert_eq!(ActiveSection::Results.prev(false), ActiveSection::Search);
        assert_eq!(ActiveSection::Results.prev(true), ActiveSection::Genres);
    }

    #[test]
    fn result_selection_is_clamped() {
        let mut ui = UiState::default();
        ui.move_result_selection(5, 3);
        assert_eq!(ui.result_selected, 2);
        ui.move_result_selection(-10, 3);
        assert_eq!(ui.result_selected, 0);
        ui.move_result_selection(1, 0);
        assert_eq!(ui.result_selected, 0);
    }
}
