#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use distance_calculator::application::services::CalculationService;
use distance_calculator::domain::entities::{CalculationRecord, Coordinate, NewCalculation};
use distance_calculator::domain::geocoder::{GeocodeError, Geocoder};
use distance_calculator::domain::repositories::CalculationRepository;
use distance_calculator::error::AppError;
use distance_calculator::routes::app_router;
use distance_calculator::state::AppState;

pub const GOOGLEPLEX_ADDRESS: &str = "1600 Amphitheatre Parkway, Mountain View, CA";
pub const INFINITE_LOOP_ADDRESS: &str = "1 Infinite Loop, Cupertino, CA";

pub const GOOGLEPLEX: Coordinate = Coordinate {
    latitude: 37.4220,
    longitude: -122.0841,
};
pub const INFINITE_LOOP: Coordinate = Coordinate {
    latitude: 37.3318,
    longitude: -122.0312,
};

/// Geocoder answering from a fixed table and counting lookups.
#[derive(Default)]
pub struct StubGeocoder {
    places: HashMap<String, Coordinate>,
    fail: bool,
    calls: AtomicUsize,
}

impl StubGeocoder {
    pub fn with_places(places: &[(&str, Coordinate)]) -> Self {
        Self {
            places: places
                .iter()
                .map(|(address, coordinate)| (address.to_string(), *coordinate))
                .collect(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn lookup(&self, address: &str) -> Result<Option<Coordinate>, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(GeocodeError::Request("connection refused".to_string()));
        }

        Ok(self.places.get(address).copied())
    }
}

/// In-process history store with the same ordering rules as PostgreSQL.
#[derive(Default)]
pub struct MemoryRepository {
    records: Mutex<Vec<CalculationRecord>>,
}

impl MemoryRepository {
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl CalculationRepository for MemoryRepository {
    async fn append(&self, new_calculation: NewCalculation) -> Result<CalculationRecord, AppError> {
        let mut records = self.records.lock().unwrap();

        let record = CalculationRecord::new(
            records.len() as i64 + 1,
            new_calculation.source_address,
            new_calculation.destination_address,
            new_calculation.distance_in_miles,
            new_calculation.recorded_at.unwrap_or_else(Utc::now),
        );
        records.push(record.clone());

        Ok(record)
    }

    async fn list_recent_first(&self) -> Result<Vec<CalculationRecord>, AppError> {
        let mut records = self.records.lock().unwrap().clone();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        Ok(records)
    }
}

/// History store that is always unavailable.
pub struct FailingRepository;

#[async_trait]
impl CalculationRepository for FailingRepository {
    async fn append(&self, _new_calculation: NewCalculation) -> Result<CalculationRecord, AppError> {
        Err(AppError::internal("Database error"))
    }

    async fn list_recent_first(&self) -> Result<Vec<CalculationRecord>, AppError> {
        Err(AppError::internal("Database error"))
    }
}

pub fn stub_geocoder() -> Arc<StubGeocoder> {
    Arc::new(StubGeocoder::with_places(&[
        (GOOGLEPLEX_ADDRESS, GOOGLEPLEX),
        (INFINITE_LOOP_ADDRESS, INFINITE_LOOP),
    ]))
}

pub fn create_test_state(
    geocoder: Arc<dyn Geocoder>,
    repository: Arc<dyn CalculationRepository>,
) -> AppState {
    let service = CalculationService::new(geocoder, repository, Duration::ZERO);
    AppState::new(Arc::new(service))
}

pub fn create_test_server(
    geocoder: Arc<dyn Geocoder>,
    repository: Arc<dyn CalculationRepository>,
) -> TestServer {
    TestServer::new(app_router(create_test_state(geocoder, repository))).unwrap()
}
