//! Router assembly: quiz API, health check, static quiz pages, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeFile,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;

/// Static pages served from the configured static dir, by URL path and file name.
const STATIC_PAGES: &[(&str, &str)] = &[
    ("/", "index.html"),
    ("/global-warming-quiz.html", "global-warming-quiz.html"),
    ("/quiz.css", "quiz.css"),
    ("/background.jpg", "background.jpg"),
];

/// Build the application router with:
/// - quiz API at `/api/quiz/global-warming`
/// - health check at `/api/health`
/// - the fixed set of static pages (anything else is 404)
/// - CORS (allow any origin/method/headers)
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.static_dir.clone();

    let mut router = Router::new()
        .route("/api/quiz/global-warming", get(http::http_get_quiz))
        .route("/api/health", get(http::http_health));

    for &(route, file) in STATIC_PAGES {
        router = router.route_service(route, ServeFile::new(static_dir.join(file)));
    }

    router
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
