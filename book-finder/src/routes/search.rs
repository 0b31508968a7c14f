use crate::models::responses::SearchResponse;
use crate::routes::AppState;
use crate::view::render::{render, Page};
use crate::view::state::SearchView;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Json},
};
use serde::Deserialize;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub title: Option<String>,
}

// Each request gets its own view; nothing is shared between clients.
async fn run_view(params: SearchParams, state: &AppState) -> Page {
    let view = SearchView::new(state.catalog.clone());

    if let Some(title) = params.title {
        view.set_query(title);
    }
    view.run_search().await;

    render(&view.snapshot(), &state.covers)
}

pub async fn search_page(
    Query(params): Query<SearchParams>,
    State(state): State<AppState>,
) -> Result<Html<String>, StatusCode> {
    info!("Search page: {:?}", params);
    let page = run_view(params, &state).await;

    match page.to_html() {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            error!("Failed to render search page: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn search_api(
    Query(params): Query<SearchParams>,
    State(state): State<AppState>,
) -> Json<SearchResponse> {
    info!("Search API: {:?}", params);
    Json(SearchResponse::from(run_view(params, &state).await))
}
