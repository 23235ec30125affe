//! API route configuration.

use crate::api::handlers::history::HISTORY_FAILED_MESSAGE;
use crate::api::handlers::{calculate_handler, history_handler, root_handler};
use crate::api::middleware::panic;
use crate::application::services::calculation_service::CALCULATION_FAILED_MESSAGE;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `GET  /`          - Liveness banner
/// - `POST /calculate` - Geocode two addresses and return the distance
/// - `GET  /history`   - Past calculations, most recent first
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route(
            "/calculate",
            post(calculate_handler).layer(panic::layer(CALCULATION_FAILED_MESSAGE)),
        )
        .route(
            "/history",
            get(history_handler).layer(panic::layer(HISTORY_FAILED_MESSAGE)),
        )
}
