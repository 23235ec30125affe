//! PostgreSQL repository implementations.
//!
//! - [`PgCalculationRepository`] - Calculation history storage

pub mod pg_calculation_repository;

pub use pg_calculation_repository::PgCalculationRepository;
