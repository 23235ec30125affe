//! Converts handler panics into the route's generic failure response.

use std::any::Any;

use axum::body::Body;
use axum::http::Response;
use axum::response::IntoResponse;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::error::AppError;

/// Responds with `500 {"error": <message>}` when the wrapped handler panics.
#[derive(Debug, Clone, Copy)]
pub struct GenericFailure {
    message: &'static str,
}

impl ResponseForPanic for GenericFailure {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response<Body> {
        let detail = err
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| err.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());

        tracing::error!(panic = %detail, "Handler panicked");

        AppError::internal(self.message).into_response()
    }
}

pub fn layer(message: &'static str) -> CatchPanicLayer<GenericFailure> {
    CatchPanicLayer::custom(GenericFailure { message })
}
