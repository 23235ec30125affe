//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Liveness banner
//! - `POST /calculate` - Distance calculation
//! - `GET  /history`   - Calculation history
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, method and header

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower_http::cors::CorsLayer;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    api::routes::routes()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer())
}
