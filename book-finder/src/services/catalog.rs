use crate::models::catalog::{CatalogDoc, CatalogResponse};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

pub const OPEN_LIBRARY_URL: &str = "https://openlibrary.org";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Catalog responded with status: {0}")]
    Status(StatusCode),
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A source of title matches.
#[async_trait]
pub trait CatalogClient {
    /// Returns every match the catalog reports for `title`, in catalog order.
    async fn search_title(&self, title: &str) -> Result<Vec<CatalogDoc>, CatalogError>;
}

pub struct OpenLibraryClient {
    client: Client,
    base_url: String,
}

impl OpenLibraryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn search_url(&self) -> String {
        format!("{}/search.json", self.base_url)
    }
}

impl Default for OpenLibraryClient {
    fn default() -> Self {
        Self::new(OPEN_LIBRARY_URL)
    }
}

#[async_trait]
impl CatalogClient for OpenLibraryClient {
    async fn search_title(&self, title: &str) -> Result<Vec<CatalogDoc>, CatalogError> {
        let url = self.search_url();
        debug!("GET {} title={:?}", url, title);

        let response = self
            .client
            .get(&url)
            .query(&[("title", title)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        let body = response.bytes().await?;
        let catalog: CatalogResponse = serde_json::from_slice(&body)?;

        debug!("Catalog returned {} docs for {:?}", catalog.docs.len(), title);
        Ok(catalog.docs)
    }
}
