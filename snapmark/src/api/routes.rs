use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::openapi;
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // /ocr and /test-connection are open to anonymous callers; the rest of
    // the API requires an identity, enforced by the Identity extractor.
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ocr", post(handlers::ocr::extract_text))
        .route("/test-connection", post(handlers::ocr::test_connection))
        .route("/save", post(handlers::records::save_record))
        .route("/history", get(handlers::records::history))
        .route(
            "/settings",
            get(handlers::settings::get_settings).post(handlers::settings::save_settings),
        )
        .route("/openapi.json", get(openapi::openapi_json))
        .merge(openapi::redoc_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
