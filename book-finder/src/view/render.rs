use crate::models::book::SearchResult;
use crate::view::state::ViewState;
use minijinja::{context, AutoEscape, Environment};
use serde::{Deserialize, Serialize};

pub const HEADING: &str = "Book Finder";
pub const PLACEHOLDER: &str = "Enter book title...";
pub const SEARCH_LABEL: &str = "Search";
pub const LOADING_TEXT: &str = "Loading...";
pub const NO_COVER_TEXT: &str = "No Cover";

const PAGE_TEMPLATE_NAME: &str = "page.html.jinja";
const PAGE_TEMPLATE: &str = include_str!("page.html.jinja");

pub const OPEN_LIBRARY_COVERS_URL: &str = "https://covers.openlibrary.org";

/// Builds cover image URLs from cover ids.
#[derive(Debug, Clone)]
pub struct CoverUrls {
    base_url: String,
}

impl CoverUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Medium-size cover for `cover_id`.
    pub fn medium(&self, cover_id: i64) -> String {
        format!("{}/b/id/{}-M.jpg", self.base_url, cover_id)
    }
}

impl Default for CoverUrls {
    fn default() -> Self {
        Self::new(OPEN_LIBRARY_COVERS_URL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cover {
    Image { url: String, alt: String },
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedBook {
    pub title: String,
    pub byline: String,
    pub published: String,
    pub cover: Cover,
}

/// What a surface displays for one view state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub query: String,
    pub loading: bool,
    pub error: Option<String>,
    pub books: Vec<RenderedBook>,
}

fn render_book(result: &SearchResult, covers: &CoverUrls) -> RenderedBook {
    let cover = match result.cover_id {
        Some(id) => Cover::Image {
            url: covers.medium(id),
            alt: format!("{} cover", result.title),
        },
        None => Cover::Placeholder,
    };

    RenderedBook {
        title: result.title.clone(),
        byline: format!("by {}", result.authors_display()),
        published: format!("First published: {}", result.year_display()),
        cover,
    }
}

pub fn render(state: &ViewState, covers: &CoverUrls) -> Page {
    Page {
        query: state.query.clone(),
        loading: state.loading,
        error: (!state.error.is_empty()).then(|| state.error.clone()),
        books: state
            .results
            .iter()
            .map(|result| render_book(result, covers))
            .collect(),
    }
}

impl Page {
    pub fn to_text(&self) -> String {
        let input = if self.query.is_empty() {
            PLACEHOLDER
        } else {
            self.query.as_str()
        };

        let mut lines = vec![
            HEADING.to_string(),
            format!("> {}  [{}]", input, SEARCH_LABEL),
        ];
        if self.loading {
            lines.push(LOADING_TEXT.to_string());
        }
        if let Some(error) = &self.error {
            lines.push(error.clone());
        }

        for book in &self.books {
            lines.push(String::new());
            lines.push(book.title.clone());
            lines.push(format!("  {}", book.byline));
            lines.push(format!("  {}", book.published));
            lines.push(match &book.cover {
                Cover::Image { url, .. } => format!("  Cover: {}", url),
                Cover::Placeholder => format!("  [{}]", NO_COVER_TEXT),
            });
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Renders the page through `page.html.jinja` with HTML auto-escaping.
    pub fn to_html(&self) -> Result<String, minijinja::Error> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;

        let template = env.get_template(PAGE_TEMPLATE_NAME)?;
        template.render(context! {
            page => self,
            heading => HEADING,
            placeholder => PLACEHOLDER,
            search_label => SEARCH_LABEL,
            loading_text => LOADING_TEXT,
            no_cover_text => NO_COVER_TEXT,
        })
    }
}
