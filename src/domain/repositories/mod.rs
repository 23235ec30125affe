//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod calculation_repository;

pub use calculation_repository::CalculationRepository;

#[cfg(test)]
pub use calculation_repository::MockCalculationRepository;
