//! DTOs for the distance calculation endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request to calculate the distance between two addresses.
///
/// Only a JSON object is accepted. Fields that are absent, `null` or not JSON
/// strings become `None` so that validation can report them uniformly.
#[derive(Debug, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct CalculateRequest {
    pub source_address: Option<String>,
    pub destination_address: Option<String>,
}

impl From<Map<String, Value>> for CalculateRequest {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            source_address: string_field(&mut body, "sourceAddress"),
            destination_address: string_field(&mut body, "destinationAddress"),
        }
    }
}

fn string_field(body: &mut Map<String, Value>, key: &str) -> Option<String> {
    match body.remove(key) {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}

/// Successful calculation. Addresses are echoed as submitted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub source_address: String,
    pub destination_address: String,
    pub distance_in_miles: f64,
}
