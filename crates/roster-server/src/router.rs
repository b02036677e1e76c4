//! Router assembly for the roster HTTP API.
//!
//! [`build_router`] wires the handlers to their routes with CORS and tracing
//! middleware layers.

use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax. CORS is permissive (the
/// browser client may be served from a different origin). TraceLayer
/// provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/students",
            get(handlers::list_students).post(handlers::create_student),
        )
        .route(
            "/students/{id}",
            put(handlers::update_student).delete(handlers::delete_student),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
