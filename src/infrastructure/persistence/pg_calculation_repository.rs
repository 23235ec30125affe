//! PostgreSQL implementation of the calculation history.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{CalculationRecord, NewCalculation};
use crate::domain::repositories::CalculationRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct CalculationRow {
    id: i64,
    source_address: String,
    destination_address: String,
    distance_in_miles: f64,
    timestamp: DateTime<Utc>,
}

impl From<CalculationRow> for CalculationRecord {
    fn from(row: CalculationRow) -> Self {
        CalculationRecord::new(
            row.id,
            row.source_address,
            row.destination_address,
            row.distance_in_miles,
            row.timestamp,
        )
    }
}

/// PostgreSQL repository for the `calculations` table.
pub struct PgCalculationRepository {
    pool: Arc<PgPool>,
}

impl PgCalculationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CalculationRepository for PgCalculationRepository {
    async fn append(&self, new_calculation: NewCalculation) -> Result<CalculationRecord, AppError> {
        let row = sqlx::query_as::<_, CalculationRow>(
            r#"
            INSERT INTO calculations (source_address, destination_address, distance_in_miles, "timestamp")
            VALUES ($1, $2, $3, COALESCE($4, NOW()))
            RETURNING id, source_address, destination_address, distance_in_miles, "timestamp"
            "#,
        )
        .bind(new_calculation.source_address)
        .bind(new_calculation.destination_address)
        .bind(new_calculation.distance_in_miles)
        .bind(new_calculation.recorded_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_recent_first(&self) -> Result<Vec<CalculationRecord>, AppError> {
        let rows = sqlx::query_as::<_, CalculationRow>(
            r#"
            SELECT id, source_address, destination_address, distance_in_miles, "timestamp"
            FROM calculations
            ORDER BY "timestamp" DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(CalculationRecord::from).collect())
    }
}
