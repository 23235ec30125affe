//! Business logic services for the application layer.

pub mod calculation_service;

pub use calculation_service::{CalculationOutcome, CalculationService, OutcomeStatus};
