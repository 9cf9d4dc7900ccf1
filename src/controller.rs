//! Search/detail state machine.
//!
//! [`SearchController`] owns the current query, the [`SearchState`] of the
//! result list and the optional [`RecipeDetail`] being viewed. Each operation
//! performs at most one request through a [`RecipeSource`].
//!
//! Overlapping calls are allowed and are never cancelled. Every search and
//! every lookup takes a ticket from a monotonically increasing counter, and a
//! response is only applied when its ticket is still the latest one issued.

use crate::model::{RecipeDetail, RecipeSummary};
use crate::providers::RecipeSource;
use log::{debug, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Shown when a search succeeds with no results
pub const NO_RESULTS_MESSAGE: &str = "No recipes found. Try a different ingredient!";

/// Shown when a search request or its response parsing fails
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch recipes. Please try again.";

/// State of the result list. Exactly one variant holds at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// Nothing searched yet
    #[default]
    Idle,
    /// A search is in flight
    Loading,
    /// The API returned at least one recipe
    Success(Vec<RecipeSummary>),
    /// The API answered with no recipes
    Empty,
    /// The request or its parsing failed
    Failed(String),
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    pub fn results(&self) -> &[RecipeSummary] {
        match self {
            SearchState::Success(recipes) => recipes,
            _ => &[],
        }
    }

    /// User-facing message for the terminal non-success states
    pub fn message(&self) -> Option<&str> {
        match self {
            SearchState::Empty => Some(NO_RESULTS_MESSAGE),
            SearchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct ControllerState {
    query: String,
    search: SearchState,
    detail: Option<RecipeDetail>,
}

pub struct SearchController<S> {
    source: S,
    state: Mutex<ControllerState>,
    search_seq: AtomicU64,
    detail_seq: AtomicU64,
}

impl<S: RecipeSource> SearchController<S> {
    pub fn new(source: S) -> Self {
        SearchController {
            source,
            state: Mutex::new(ControllerState::default()),
            search_seq: AtomicU64::new(0),
            detail_seq: AtomicU64::new(0),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        // every write is a single assignment, so a poisoned state is still whole
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn query(&self) -> String {
        self.lock().query.clone()
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.lock().query = query.into();
    }

    pub fn search_state(&self) -> SearchState {
        self.lock().search.clone()
    }

    pub fn detail(&self) -> Option<RecipeDetail> {
        self.lock().detail.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().search.is_loading()
    }

    /// Search for recipes using `query` as the ingredient.
    ///
    /// Blank queries are ignored without touching any state. Otherwise the
    /// state moves to [`SearchState::Loading`], one request is issued, and the
    /// outcome replaces `Loading` with `Success`, `Empty` or `Failed`. The
    /// outcome is dropped if a newer search was started in the meantime.
    pub async fn submit_search(&self, query: &str) {
        if query.trim().is_empty() {
            debug!("Ignoring blank search query");
            return;
        }

        let ticket = self.search_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.lock().search = SearchState::Loading;

        let outcome = match self.source.search_by_ingredient(query).await {
            Ok(recipes) if recipes.is_empty() => SearchState::Empty,
            Ok(recipes) => SearchState::Success(recipes),
            Err(e) => {
                warn!("Search for {:?} failed: {}", query, e);
                SearchState::Failed(SEARCH_FAILED_MESSAGE.to_string())
            }
        };

        let mut state = self.lock();
        if self.search_seq.load(Ordering::SeqCst) != ticket {
            debug!("Discarding stale search response for {:?}", query);
            return;
        }
        state.search = outcome;
    }

    /// Fetch and show the full record for `id`.
    ///
    /// Failures are logged and otherwise ignored: the current detail, if any,
    /// stays as it was.
    pub async fn select_recipe(&self, id: &str) {
        let ticket = self.detail_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let detail = match self.source.lookup(id).await {
            Ok(Some(detail)) => detail,
            Ok(None) => {
                debug!("No recipe found for id {:?}", id);
                return;
            }
            Err(e) => {
                warn!("Failed to fetch recipe details for {:?}: {}", id, e);
                return;
            }
        };

        let mut state = self.lock();
        if self.detail_seq.load(Ordering::SeqCst) != ticket {
            debug!("Discarding stale recipe details for {:?}", id);
            return;
        }
        state.detail = Some(detail);
    }

    /// Close the detail view. Any lookup still in flight will not reopen it.
    pub fn dismiss_detail(&self) {
        self.detail_seq.fetch_add(1, Ordering::SeqCst);
        self.lock().detail = None;
    }

    /// Set the query to `term` and search for it
    pub async fn quick_search(&self, term: &str) {
        self.set_query(term);
        self.submit_search(term).await;
    }
}
