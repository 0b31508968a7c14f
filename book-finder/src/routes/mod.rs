pub mod health;
pub mod search;

use crate::view::render::CoverUrls;
use crate::view::state::Catalog;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub covers: CoverUrls,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(health::health_check))
        .route("/", get(search::search_page))
        .route("/search", get(search::search_page))
        .route("/api/search", get(search::search_api))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
