//! Model module - Browse state and data types
//!
//! This module contains the data structures the controller owns and the client it drives.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (browse mode, filters, cursor, UI state)
//! - `item`: Catalog records and their display fallbacks
//! - `genres`: The fixed genre set and popular queries
//! - `state`: The browse snapshot handed to the renderer
//! - `error`: Catalog and command error types
//! - `catalog_client`: Google Books API client

mod types;
mod item;
mod genres;
mod state;
mod error;
mod catalog_client;

pub use types::{
    ActiveSection, BrowseMode, FilterField, FilterUpdate, PageSize,
    PaginationCursor, QueryFilters, SortOrder, UiState,
};

pub use item::CatalogItem;

pub use genres::{find_genre, genre_index, DEFAULT_GENRE, GENRES, POPULAR_QUERIES};

pub use state::{BrowseState, Status};

pub use error::{CatalogError, CommandError, ErrorInfo, ErrorKind};

pub use catalog_client::{CatalogClient, CatalogPage, CatalogSource};
