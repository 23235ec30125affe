//! Calculation record entity representing one completed distance query.

use chrono::{DateTime, Utc};

/// A persisted distance calculation.
///
/// Records are append-only: once written they are never updated or deleted.
/// The `id` is the store's native identifier and is not exposed to clients.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRecord {
    pub id: i64,
    pub source_address: String,
    pub destination_address: String,
    pub distance_in_miles: f64,
    pub timestamp: DateTime<Utc>,
}

impl CalculationRecord {
    /// Creates a new CalculationRecord instance.
    pub fn new(
        id: i64,
        source_address: String,
        destination_address: String,
        distance_in_miles: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            source_address,
            destination_address,
            distance_in_miles,
            timestamp,
        }
    }
}

/// Input data for appending a calculation to the history.
///
/// `recorded_at` is normally `None`, in which case the store stamps the record
/// with the current time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCalculation {
    pub source_address: String,
    pub destination_address: String,
    pub distance_in_miles: f64,
    pub recorded_at: Option<DateTime<Utc>>,
}

impl NewCalculation {
    pub fn new(
        source_address: impl Into<String>,
        destination_address: impl Into<String>,
        distance_in_miles: f64,
    ) -> Self {
        Self {
            source_address: source_address.into(),
            destination_address: destination_address.into(),
            distance_in_miles,
            recorded_at: None,
        }
    }

    /// Pins the record timestamp instead of letting the store assign it.
    pub fn recorded_at(mut self, at: DateTime<Utc>) -> Self {
        self.recorded_at = Some(at);
        self
    }
}
