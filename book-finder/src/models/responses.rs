use crate::view::render::{Page, RenderedBook};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub loading: bool,
    pub error: Option<String>,
    pub count: usize,
    pub results: Vec<RenderedBook>,
}

impl From<Page> for SearchResponse {
    fn from(page: Page) -> Self {
        Self {
            query: page.query,
            loading: page.loading,
            error: page.error,
            count: page.books.len(),
            results: page.books,
        }
    }
}
