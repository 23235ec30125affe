//! Handler for the distance calculation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, info, warn};

use crate::api::dto::calculate::{CalculateRequest, CalculateResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::address::validate_address;

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Geocodes two addresses and returns the distance between them in miles.
///
/// # Endpoint
///
/// `POST /calculate`
///
/// # Request Body
///
/// ```json
/// {
///   "sourceAddress": "1600 Amphitheatre Parkway, Mountain View, CA",
///   "destinationAddress": "1 Infinite Loop, Cupertino, CA"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "sourceAddress": "1600 Amphitheatre Parkway, Mountain View, CA",
///   "destinationAddress": "1 Infinite Loop, Cupertino, CA",
///   "distanceInMiles": 6.43
/// }
/// ```
///
/// # Errors
///
/// - **400**: Either address fails validation (the service is not called)
/// - **404**: Source or destination address not found by the geocoder
/// - **500**: Geocoding provider failure
pub async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Rejected calculate request body");
        AppError::bad_request(INVALID_BODY_MESSAGE)
    })?;

    debug!(?payload, "Calculate distance request received");

    let source = validate_field("source", payload.source_address.as_deref())?.to_owned();
    let destination =
        validate_field("destination", payload.destination_address.as_deref())?.to_owned();

    let outcome = state
        .calculation_service
        .calculate(&source, &destination)
        .await;

    let Some(distance_in_miles) = outcome.distance_in_miles() else {
        warn!(
            status_code = outcome.status_code().as_u16(),
            message = outcome.message(),
            "Distance calculation failed"
        );
        return Err(AppError::from_status(
            outcome.status_code(),
            outcome.message(),
        ));
    };

    info!(distance_in_miles, "Distance calculated successfully");

    Ok(Json(CalculateResponse {
        source_address: payload.source_address.unwrap_or_default(),
        destination_address: payload.destination_address.unwrap_or_default(),
        distance_in_miles,
    }))
}

/// Validates one address field, naming the field in the error message.
fn validate_field<'a>(field: &str, address: Option<&'a str>) -> Result<&'a str, AppError> {
    validate_address(address).map_err(|reason| {
        warn!(field, address, %reason, "Invalid address");
        AppError::bad_request(format!("Invalid {field} address: {reason}"))
    })
}
