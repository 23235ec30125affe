//! Handler for the calculation history endpoint.

use axum::{Json, extract::State};
use tracing::{error, info};

use crate::api::dto::history::HistoryItem;
use crate::error::AppError;
use crate::state::AppState;

pub const HISTORY_FAILED_MESSAGE: &str = "Failed to retrieve history";

/// Lists every past calculation, most recent first.
///
/// # Endpoint
///
/// `GET /history`
///
/// # Response
///
/// ```json
/// [
///   {
///     "sourceAddress": "Paris, France",
///     "destinationAddress": "Berlin, Germany",
///     "distanceInMiles": 545.47,
///     "timestamp": "2025-03-14T15:09:26.535Z"
///   }
/// ]
/// ```
///
/// # Errors
///
/// Returns 500 with a generic message if the history cannot be read.
pub async fn history_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<HistoryItem>>, AppError> {
    let records = state.calculation_service.history().await.map_err(|e| {
        error!(error = %e, "Error retrieving history");
        AppError::internal(HISTORY_FAILED_MESSAGE)
    })?;

    info!(count = records.len(), "History fetched successfully");

    Ok(Json(records.into_iter().map(HistoryItem::from).collect()))
}
