mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use serde_json::{Value, json};

use common::{FailingRepository, MemoryRepository, create_test_server, stub_geocoder};
use distance_calculator::domain::entities::NewCalculation;
use distance_calculator::domain::repositories::CalculationRepository;

#[tokio::test]
async fn test_history_empty() {
    let server = create_test_server(stub_geocoder(), Arc::new(MemoryRepository::default()));

    let response = server.get("/history").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_history_is_most_recent_first() {
    let repository = Arc::new(MemoryRepository::default());

    for (source, hour) in [("First Street", 10), ("Third Street", 12), ("Second Street", 11)] {
        repository
            .append(
                NewCalculation::new(source, "Destination Road", 1.5)
                    .recorded_at(Utc.with_ymd_and_hms(2025, 3, 14, hour, 0, 0).unwrap()),
            )
            .await
            .unwrap();
    }

    let server = create_test_server(stub_geocoder(), repository);
    let response = server.get("/history").await;

    response.assert_status_ok();

    let items = response.json::<Value>();
    let sources: Vec<&str> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["sourceAddress"].as_str().unwrap())
        .collect();
    assert_eq!(sources, vec!["Third Street", "Second Street", "First Street"]);
    assert_eq!(items[0]["timestamp"], "2025-03-14T12:00:00Z");
    assert_eq!(items[0]["destinationAddress"], "Destination Road");
    assert_eq!(items[0]["distanceInMiles"], 1.5);
}

#[tokio::test]
async fn test_history_store_failure_is_generic() {
    let server = create_test_server(stub_geocoder(), Arc::new(FailingRepository));

    let response = server.get("/history").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Failed to retrieve history" })
    );
}
