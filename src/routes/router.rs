//! Router Assembly
//!
//! Combines the public and protected route sets into one router with CORS
//! on the API surface, request tracing, and a JSON 404 fallback that matches
//! the uniform error body.

use axum::http::StatusCode;
use axum::response::Json;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::conversion::ErrorBody;
use crate::routes::api_routes::{protected_routes, public_routes};
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(app_state.clone()))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not found")))
}
