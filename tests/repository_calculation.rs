use chrono::{Duration, TimeZone, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use distance_calculator::domain::entities::NewCalculation;
use distance_calculator::domain::repositories::CalculationRepository;
use distance_calculator::infrastructure::persistence::PgCalculationRepository;

#[sqlx::test(migrations = "./migrations")]
async fn test_append_assigns_id_and_timestamp(pool: PgPool) {
    let repo = PgCalculationRepository::new(Arc::new(pool));
    let before = Utc::now() - Duration::seconds(5);

    let record = repo
        .append(NewCalculation::new("Paris, France", "Berlin, Germany", 545.2))
        .await
        .unwrap();

    assert!(record.id > 0);
    assert_eq!(record.source_address, "Paris, France");
    assert_eq!(record.destination_address, "Berlin, Germany");
    assert_eq!(record.distance_in_miles, 545.2);
    assert!(record.timestamp >= before);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_append_keeps_pinned_timestamp(pool: PgPool) {
    let repo = PgCalculationRepository::new(Arc::new(pool));
    let at = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();

    let record = repo
        .append(NewCalculation::new("Paris, France", "Berlin, Germany", 545.2).recorded_at(at))
        .await
        .unwrap();

    assert_eq!(record.timestamp, at);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_recent_first(pool: PgPool) {
    let repo = PgCalculationRepository::new(Arc::new(pool));
    let base = Utc.with_ymd_and_hms(2025, 3, 14, 10, 0, 0).unwrap();

    for (source, offset) in [("First", 0), ("Third", 2), ("Second", 1)] {
        repo.append(
            NewCalculation::new(source, "Destination", 10.0)
                .recorded_at(base + Duration::hours(offset)),
        )
        .await
        .unwrap();
    }

    let records = repo.list_recent_first().await.unwrap();
    let sources: Vec<&str> = records.iter().map(|r| r.source_address.as_str()).collect();

    assert_eq!(sources, vec!["Third", "Second", "First"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_breaks_timestamp_ties_by_insertion(pool: PgPool) {
    let repo = PgCalculationRepository::new(Arc::new(pool));
    let at = Utc.with_ymd_and_hms(2025, 3, 14, 10, 0, 0).unwrap();

    for source in ["Earlier", "Later"] {
        repo.append(NewCalculation::new(source, "Destination", 1.0).recorded_at(at))
            .await
            .unwrap();
    }

    let records = repo.list_recent_first().await.unwrap();

    assert_eq!(records[0].source_address, "Later");
    assert_eq!(records[1].source_address, "Earlier");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_empty(pool: PgPool) {
    let repo = PgCalculationRepository::new(Arc::new(pool));

    assert!(repo.list_recent_first().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_negative_distance_is_rejected(pool: PgPool) {
    let repo = PgCalculationRepository::new(Arc::new(pool));

    let result = repo
        .append(NewCalculation::new("Paris, France", "Berlin, Germany", -1.0))
        .await;

    assert!(result.is_err());
}
