//! Controller module - Browse state machine and event handling
//!
//! The controller is the single owner of [`BrowseState`]. Commands mutate it directly;
//! catalog fetches run as tokio tasks and report back through a channel that the owner
//! drains, so every transition happens on the owner's side.
//!
//! - `commands`: The browse commands offered to the renderer
//! - `input`: Key event handling

mod commands;
mod input;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::model::{
    BrowseMode, BrowseState, CatalogError, CatalogPage, CatalogSource, ErrorInfo, PaginationCursor,
    QueryFilters, POPULAR_QUERIES,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoadMode {
    Replace,
    Append,
}

/// What a fetch asked for; compared again when it completes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestKey {
    pub mode: BrowseMode,
    pub offset: usize,
}

struct PendingFetch {
    request_id: u64,
    key: RequestKey,
    load: LoadMode,
    /// Filters the request was sent with; the cursor advances by their page size
    filters: QueryFilters,
    handle: JoinHandle<()>,
}

struct FetchCompletion {
    request_id: u64,
    key: RequestKey,
    result: Result<CatalogPage, CatalogError>,
}

pub struct BrowseController<C: CatalogSource> {
    catalog: C,
    state: BrowseState,
    popular_query: &'static str,
    popular_rotation: usize,
    next_request_id: u64,
    pending: Option<PendingFetch>,
    completion_tx: mpsc::UnboundedSender<FetchCompletion>,
    completion_rx: mpsc::UnboundedReceiver<FetchCompletion>,
}

impl<C: CatalogSource> BrowseController<C> {
    /// Create the controller and start the initial popular fetch.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(catalog: C) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        let mut controller = Self {
            catalog,
            state: BrowseState::new(),
            popular_query: POPULAR_QUERIES[0],
            popular_rotation: 1,
            next_request_id: 1,
            pending: None,
            completion_tx,
            completion_rx,
        };
        controller.dispatch(LoadMode::Replace);
        controller
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    /// Immutable copy handed to the renderer each frame
    pub fn snapshot(&self) -> BrowseState {
        self.state().clone()
    }

    /// Catalog query currently standing in for popular mode
    pub fn popular_query(&self) -> &'static str {
        self.popular_query
    }

    fn query_term(&self) -> String {
        match &self.state.mode {
            BrowseMode::Popular => self.popular_query().to_string(),
            BrowseMode::Genre(id) => id.clone(),
            BrowseMode::Search(term) => term.clone(),
        }
    }

    /// Enter `mode` as a fresh query: pending filters take effect and paging restarts.
    /// Current items stay visible until the first page of the new query arrives.
    fn start_new_query(&mut self, mode: BrowseMode) {
        self.state.mode = mode;
        self.state.filters = self.state.pending_filters;
        self.state.cursor = PaginationCursor::default();
        self.dispatch(LoadMode::Replace);
    }

    fn dispatch(&mut self, load: LoadMode) {
        let offset = match load {
            LoadMode::Replace => 0,
            LoadMode::Append => self.state.cursor.offset,
        };
        let key = RequestKey {
            mode: self.state.mode.clone(),
            offset,
        };
        let filters = self.state.filters;
        let term = self.query_term();

        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1);

        if let Some(superseded) = self.pending.take() {
            tracing::debug!(
                request_id = superseded.request_id,
                mode = %superseded.key.mode,
                offset = superseded.key.offset,
                "Aborting superseded fetch"
            );
            superseded.handle.abort();
        }

        tracing::debug!(request_id, mode = %key.mode, term = %term, offset, ?load, "Dispatching fetch");

        self.state.is_loading = true;
        self.state.error = None;

        let catalog = self.catalog.clone();
        let tx = self.completion_tx.clone();
        let task_key = key.clone();
        let handle = tokio::spawn(async move {
            let result = catalog.fetch_page(&term, &filters, offset).await;
            let _ = tx.send(FetchCompletion {
                request_id,
                key: task_key,
                result,
            });
        });

        self.pending = Some(PendingFetch {
            request_id,
            key,
            load,
            filters,
            handle,
        });
    }

    /// Apply every completion that has already arrived. Returns whether state changed.
    pub fn poll_completions(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.completion_rx.try_recv() {
            changed |= self.apply_completion(completion);
        }
        changed
    }

    /// Wait for the next completion and apply it. Returns whether state changed.
    #[cfg(test)]
    pub async fn next_completion(&mut self) -> bool {
        match self.completion_rx.recv().await {
            Some(completion) => self.apply_completion(completion),
            None => false,
        }
    }

    fn apply_completion(&mut self, completion: FetchCompletion) -> bool {
        let current_mode = &self.state.mode;
        let Some(pending) = self.pending.take_if(|pending| {
            pending.request_id == completion.request_id
                && pending.key == completion.key
                && &pending.key.mode == current_mode
        }) else {
            tracing::debug!(
                request_id = completion.request_id,
                mode = %completion.key.mode,
                offset = completion.key.offset,
                "Discarding stale fetch result"
            );
            return false;
        };

        self.state.is_loading = false;

        match completion.result {
            Ok(page) => {
                let returned = page.items.len();
                match pending.load {
                    LoadMode::Replace => {
                        self.state.items = page.items;
                        self.state.cursor.pages_loaded = 1;
                        let still_listed = self.state.selected.as_ref().is_some_and(|selected| {
                            self.state.items.iter().any(|item| item.id == selected.id)
                        });
                        if !still_listed {
                            self.state.selected = None;
                        }
                    }
                    LoadMode::Append => {
                        self.state.items.extend(page.items);
                        self.state.cursor.pages_loaded += 1;
                    }
                }
                // Advance by the requested size even on a short page
                self.state.cursor.offset = pending.key.offset + pending.filters.page_size.get();
                self.state.total_items = page.total_items;
                self.state.error = None;

                tracing::info!(
                    mode = %pending.key.mode,
                    offset = pending.key.offset,
                    returned,
                    total_shown = self.state.items.len(),
                    "Fetch applied"
                );
            }
            Err(e) => {
                tracing::warn!(
                    mode = %pending.key.mode,
                    offset = pending.key.offset,
                    error = %e,
                    "Fetch failed"
                );
                self.state.error = Some(ErrorInfo::from(&e));
            }
        }
        true
    }
}
