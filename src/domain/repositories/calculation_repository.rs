//! Repository trait for the calculation history.

use crate::domain::entities::{CalculationRecord, NewCalculation};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the append-only calculation history.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCalculationRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_calculation.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalculationRepository: Send + Sync {
    /// Appends a calculation to the history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn append(&self, new_calculation: NewCalculation) -> Result<CalculationRecord, AppError>;

    /// Lists every stored calculation, most recent first.
    ///
    /// Records sharing a timestamp are ordered by descending id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn list_recent_first(&self) -> Result<Vec<CalculationRecord>, AppError>;
}
