use crate::models::book::SearchResult;
use crate::services::catalog::CatalogClient;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

pub const MAX_RESULTS: usize = 10;
pub const NO_RESULTS_MESSAGE: &str = "No books found. Try a different title.";
pub const FAILURE_MESSAGE: &str = "An error occurred. Please try again later.";

pub type Catalog = Arc<dyn CatalogClient + Send + Sync>;

/// Everything the page shows. An empty `error` means no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub error: String,
    pub loading: bool,
}

/// Owns the view state and the one operation that drives it.
///
/// State lives in a watch channel: every mutation is published to
/// subscribers, which re-render from the new value. `run_search` takes
/// `&self`, so a shared view may have several searches in flight; each
/// writes its outcome when it resolves and the last one wins.
pub struct SearchView {
    catalog: Catalog,
    state: watch::Sender<ViewState>,
}

impl SearchView {
    pub fn new(catalog: Catalog) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self { catalog, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Input binding: replaces the query text without searching.
    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.state.send_if_modified(|state| {
            if state.query == query {
                return false;
            }
            state.query = query;
            true
        });
    }

    pub async fn run_search(&self) {
        if let Some(query) = self.begin_search() {
            self.resolve_search(query).await;
        }
    }

    /// Like `run_search`, but the query is captured and the state reset
    /// right away; only the catalog round trip is left in the returned
    /// future. `None` when the query is blank.
    pub fn start_search(self: Arc<Self>) -> Option<impl Future<Output = ()> + Send + 'static> {
        let query = self.begin_search()?;
        Some(async move { self.resolve_search(query).await })
    }

    fn begin_search(&self) -> Option<String> {
        let query = self.state.borrow().query.clone();
        if query.trim().is_empty() {
            return None;
        }

        self.state.send_modify(|state| {
            state.loading = true;
            state.error.clear();
            state.results.clear();
        });

        Some(query)
    }

    async fn resolve_search(&self, query: String) {
        info!("Searching catalog for {:?}", query);
        let outcome = self.catalog.search_title(&query).await;

        let (results, error) = match outcome {
            Ok(docs) if docs.is_empty() => {
                info!("No matches for {:?}", query);
                (None, Some(NO_RESULTS_MESSAGE))
            }
            Ok(docs) => {
                info!("{} matches for {:?}", docs.len(), query);
                let results = docs
                    .into_iter()
                    .take(MAX_RESULTS)
                    .map(SearchResult::from)
                    .collect::<Vec<_>>();
                (Some(results), None)
            }
            Err(e) => {
                warn!("Search for {:?} failed: {}", query, e);
                (None, Some(FAILURE_MESSAGE))
            }
        };

        self.state.send_modify(|state| {
            if let Some(results) = results {
                state.results = results;
            }
            if let Some(error) = error {
                state.error = error.to_string();
            }
            state.loading = false;
        });
    }
}
