//! DTOs for the calculation history endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::CalculationRecord;

/// One past calculation. The store identifier is intentionally omitted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub source_address: String,
    pub destination_address: String,
    pub distance_in_miles: f64,
    pub timestamp: DateTime<Utc>,
}

impl From<CalculationRecord> for HistoryItem {
    fn from(record: CalculationRecord) -> Self {
        Self {
            source_address: record.source_address,
            destination_address: record.destination_address,
            distance_in_miles: record.distance_in_miles,
            timestamp: record.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_history_item_shape() {
        let timestamp = Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap();
        let record = CalculationRecord::new(
            99,
            "Paris".to_string(),
            "Berlin".to_string(),
            545.5,
            timestamp,
        );

        let value = serde_json::to_value(HistoryItem::from(record)).unwrap();

        assert_eq!(value["sourceAddress"], "Paris");
        assert_eq!(value["destinationAddress"], "Berlin");
        assert_eq!(value["distanceInMiles"], 545.5);
        assert_eq!(value["timestamp"], "2025-03-14T15:09:26Z");
        assert!(value.get("id").is_none());
    }
}
