use crate::models::catalog::CatalogDoc;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_AUTHOR: &str = "Unknown";
pub const UNKNOWN_YEAR: &str = "N/A";

/// One matched book, reduced to what the view displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub author_names: Vec<String>,
    pub first_publish_year: Option<i64>,
    pub cover_id: Option<i64>,
}

impl SearchResult {
    /// Authors joined by ", ", or "Unknown" when there are none.
    pub fn authors_display(&self) -> String {
        if self.author_names.is_empty() {
            UNKNOWN_AUTHOR.to_string()
        } else {
            self.author_names.join(", ")
        }
    }

    pub fn year_display(&self) -> String {
        match self.first_publish_year {
            Some(year) => year.to_string(),
            None => UNKNOWN_YEAR.to_string(),
        }
    }
}

impl From<CatalogDoc> for SearchResult {
    // Zero years and cover ids carry no information in the catalog; they
    // render the same as absent ones.
    fn from(doc: CatalogDoc) -> Self {
        Self {
            title: doc.title.unwrap_or_default(),
            author_names: doc.author_name.unwrap_or_default(),
            first_publish_year: doc.first_publish_year.filter(|year| *year != 0),
            cover_id: doc.cover_i.filter(|id| *id != 0),
        }
    }
}
