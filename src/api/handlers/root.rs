//! Liveness endpoint.

/// `GET /` - plain-text banner showing the service is up.
pub async fn root_handler() -> &'static str {
    "Distance Calculator API"
}
