//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::day_page))
        .route("/static/style.css", get(handlers::serve_css));

    // Raw day documents, when they live on this machine
    if let Some(dir) = state.content_dir.clone() {
        router = router.nest_service("/content", ServeDir::new(dir));
    }

    router.layer(CorsLayer::permissive()).with_state(state)
}
