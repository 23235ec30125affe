//! Utility functions used across the application.
//!
//! - [`address`] - Address input validation

pub mod address;
