use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-process stand-in for the Open Library search endpoint.
///
/// Recognised titles:
/// - `Hobbit`: one complete doc
/// - `zzzzxqnosuchbook`: no docs
/// - `sparse`: one doc with only a title
/// - `many`: fifteen docs titled `Book 0` .. `Book 14`
/// - `broken`: 200 with a non-JSON body
/// - `down`: 500 with a docs-shaped body
///
/// Any other title echoes back as a single doc with that title.
pub struct StubCatalog {
    pub base_url: String,
    pub titles: Arc<Mutex<Vec<String>>>,
}

impl StubCatalog {
    pub fn received(&self) -> Vec<String> {
        self.titles.lock().unwrap().clone()
    }
}

async fn search_json(
    Query(params): Query<HashMap<String, String>>,
    State(titles): State<Arc<Mutex<Vec<String>>>>,
) -> Response {
    let title = params.get("title").cloned().unwrap_or_default();
    titles.lock().unwrap().push(title.clone());

    match title.as_str() {
        "Hobbit" => Json(json!({
            "numFound": 1,
            "docs": [{
                "title": "The Hobbit",
                "author_name": ["J.R.R. Tolkien"],
                "first_publish_year": 1937,
                "cover_i": 12345
            }]
        }))
        .into_response(),
        "zzzzxqnosuchbook" => Json(json!({ "numFound": 0, "docs": [] })).into_response(),
        "sparse" => Json(json!({ "docs": [{ "title": "Untitled Draft" }] })).into_response(),
        "many" => {
            let docs: Vec<_> = (0..15)
                .map(|i| json!({ "title": format!("Book {}", i) }))
                .collect();
            Json(json!({ "docs": docs })).into_response()
        }
        "broken" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "down" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "docs": [{ "title": "ignored" }] })),
        )
            .into_response(),
        other => Json(json!({ "docs": [{ "title": other }] })).into_response(),
    }
}

pub async fn spawn_stub_catalog() -> StubCatalog {
    let titles = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/search.json", get(search_json))
        .with_state(Arc::clone(&titles));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubCatalog {
        base_url: format!("http://{}", addr),
        titles,
    }
}
