//! Distance calculation and history service.

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use tracing::{debug, error, info, instrument, warn};

use crate::domain::distance::haversine_miles;
use crate::domain::entities::{CalculationRecord, Coordinate, NewCalculation};
use crate::domain::geocoder::{GeocodeError, Geocoder};
use crate::domain::repositories::CalculationRepository;
use crate::error::AppError;

pub const SUCCESS_MESSAGE: &str = "Distance calculated successfully";
pub const SOURCE_NOT_FOUND_MESSAGE: &str = "Source address not found";
pub const DESTINATION_NOT_FOUND_MESSAGE: &str = "Destination address not found";
pub const CALCULATION_FAILED_MESSAGE: &str = "Failed to calculate distance";

/// Coarse status of a [`CalculationOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    Ok,
    Error,
}

/// Result of a single distance calculation.
///
/// Not-found addresses are expected outcomes, not errors. `Failed` covers
/// provider faults; the cause is logged and deliberately not carried here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculationOutcome {
    Calculated { distance_in_miles: f64 },
    SourceNotFound,
    DestinationNotFound,
    Failed,
}

impl CalculationOutcome {
    pub fn status(&self) -> OutcomeStatus {
        match self {
            Self::Calculated { .. } => OutcomeStatus::Ok,
            _ => OutcomeStatus::Error,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Calculated { .. } => StatusCode::OK,
            Self::SourceNotFound | Self::DestinationNotFound => StatusCode::NOT_FOUND,
            Self::Failed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Calculated { .. } => SUCCESS_MESSAGE,
            Self::SourceNotFound => SOURCE_NOT_FOUND_MESSAGE,
            Self::DestinationNotFound => DESTINATION_NOT_FOUND_MESSAGE,
            Self::Failed => CALCULATION_FAILED_MESSAGE,
        }
    }

    /// Present iff the status is [`OutcomeStatus::Ok`].
    pub fn distance_in_miles(&self) -> Option<f64> {
        match self {
            Self::Calculated { distance_in_miles } => Some(*distance_in_miles),
            _ => None,
        }
    }
}

/// Service that resolves two addresses, measures the distance between them
/// and keeps a history of completed calculations.
///
/// Lookups are strictly sequential: the destination is geocoded only after
/// the source resolved and `lookup_delay` elapsed. The delay keeps the
/// service inside the provider's usage policy.
pub struct CalculationService {
    geocoder: Arc<dyn Geocoder>,
    repository: Arc<dyn CalculationRepository>,
    lookup_delay: Duration,
}

impl CalculationService {
    /// Creates a new calculation service.
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        repository: Arc<dyn CalculationRepository>,
        lookup_delay: Duration,
    ) -> Self {
        Self {
            geocoder,
            repository,
            lookup_delay,
        }
    }

    /// Calculates the distance between two already validated, trimmed addresses.
    ///
    /// # Flow
    ///
    /// 1. Geocode the source ([`CalculationOutcome::SourceNotFound`] on no match)
    /// 2. Wait `lookup_delay`
    /// 3. Geocode the destination ([`CalculationOutcome::DestinationNotFound`] on no match)
    /// 4. Compute the haversine distance
    /// 5. Append the record to the history, best-effort
    ///
    /// Provider failures yield [`CalculationOutcome::Failed`]. A failed append
    /// is logged and does not change the outcome.
    #[instrument(skip(self))]
    pub async fn calculate(
        &self,
        source_address: &str,
        destination_address: &str,
    ) -> CalculationOutcome {
        info!("Calculating distance between addresses");

        let (source, destination) = match self
            .resolve_pair(source_address, destination_address)
            .await
        {
            Ok(Resolved::Both(source, destination)) => (source, destination),
            Ok(Resolved::MissingSource) => {
                warn!("Source address not found");
                return CalculationOutcome::SourceNotFound;
            }
            Ok(Resolved::MissingDestination) => {
                warn!("Destination address not found");
                return CalculationOutcome::DestinationNotFound;
            }
            Err(e) => {
                error!(error = %e, "Geocoding failed");
                return CalculationOutcome::Failed;
            }
        };

        debug!(?source, ?destination, "Coordinates retrieved");

        let distance_in_miles = haversine_miles(source, destination);

        self.record(NewCalculation::new(
            source_address,
            destination_address,
            distance_in_miles,
        ))
        .await;

        info!(distance_in_miles, "Distance calculation completed");
        CalculationOutcome::Calculated { distance_in_miles }
    }

    /// Returns every recorded calculation, most recent first.
    ///
    /// # Errors
    ///
    /// Returns the repository error if the history cannot be read.
    #[instrument(skip(self))]
    pub async fn history(&self) -> Result<Vec<CalculationRecord>, AppError> {
        let records = self.repository.list_recent_first().await?;
        debug!(count = records.len(), "History fetched");
        Ok(records)
    }

    async fn resolve_pair(
        &self,
        source_address: &str,
        destination_address: &str,
    ) -> Result<Resolved, GeocodeError> {
        debug!("Fetching coordinates for source address");
        let Some(source) = self.geocoder.lookup(source_address).await? else {
            return Ok(Resolved::MissingSource);
        };

        if !self.lookup_delay.is_zero() {
            debug!(delay_ms = self.lookup_delay.as_millis() as u64, "Waiting before next lookup");
            tokio::time::sleep(self.lookup_delay).await;
        }

        debug!("Fetching coordinates for destination address");
        let Some(destination) = self.geocoder.lookup(destination_address).await? else {
            return Ok(Resolved::MissingDestination);
        };

        Ok(Resolved::Both(source, destination))
    }

    async fn record(&self, new_calculation: NewCalculation) {
        match self.repository.append(new_calculation).await {
            Ok(record) => debug!(id = record.id, "Calculation saved"),
            Err(e) => error!(error = %e, "Failed to save calculation; continuing"),
        }
    }
}

enum Resolved {
    Both(Coordinate, Coordinate),
    MissingSource,
    MissingDestination,
}
