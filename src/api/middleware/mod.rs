//! HTTP middleware for request processing.
//!
//! - [`tracing`] - Structured request/response logging
//! - [`panic`] - Panic-to-500 conversion with a route-specific message

pub mod panic;
pub mod tracing;
