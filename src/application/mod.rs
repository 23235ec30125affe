//! Application layer services implementing business logic.
//!
//! Services consume the domain ports (geocoder and repository traits) and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::calculation_service::CalculationService`] - Distance calculation and history

pub mod services;
