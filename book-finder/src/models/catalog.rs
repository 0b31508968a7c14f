use serde::{Deserialize, Serialize};

/// Body of `GET /search.json` on the catalog.
///
/// `docs` is required; a body without it is treated as undecodable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub docs: Vec<CatalogDoc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDoc {
    pub title: Option<String>,
    pub author_name: Option<Vec<String>>,
    pub first_publish_year: Option<i64>,
    pub cover_i: Option<i64>,
}
