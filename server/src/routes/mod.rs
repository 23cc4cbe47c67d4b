//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The storefront client is served separately (Trunk dev server or a static
//! host); this router exposes only the JSON auth API it consumes, so CORS
//! stays wide open and every route lives under `/api`.

pub mod auth;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router with CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
