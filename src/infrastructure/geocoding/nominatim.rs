//! OpenStreetMap Nominatim geocoder.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use crate::domain::entities::Coordinate;
use crate::domain::geocoder::{GeocodeError, Geocoder};

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = "DistanceCalculatorApp/1.0";

/// One search hit. Nominatim encodes coordinates as decimal strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

impl Place {
    fn coordinate(&self) -> Result<Coordinate, GeocodeError> {
        Ok(Coordinate::new(
            parse_degrees("lat", &self.lat)?,
            parse_degrees("lon", &self.lon)?,
        ))
    }
}

fn parse_degrees(field: &'static str, value: &str) -> Result<f64, GeocodeError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|degrees| degrees.is_finite())
        .ok_or_else(|| GeocodeError::MalformedCoordinate {
            field,
            value: value.to_string(),
        })
}

/// Geocoder backed by the Nominatim `/search` endpoint.
///
/// Each lookup issues exactly one request asking for a single match. There is
/// no retry and no timeout beyond the HTTP client defaults.
pub struct NominatimGeocoder {
    client: reqwest::Client,
    search_url: Url,
}

impl NominatimGeocoder {
    /// Creates a geocoder for the Nominatim instance at `base_url`.
    ///
    /// Every request identifies itself with `user_agent`, as required by the
    /// Nominatim usage policy.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Request`] if the search URL cannot be derived
    /// from `base_url` or the HTTP client cannot be built.
    pub fn new(base_url: &Url, user_agent: &str) -> Result<Self, GeocodeError> {
        let mut base = base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let search_url = base
            .join("search")
            .map_err(|e| GeocodeError::Request(format!("Invalid geocoder URL: {e}")))?;

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| GeocodeError::Request(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, search_url })
    }

    pub fn search_url(&self) -> &Url {
        &self.search_url
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    #[instrument(skip(self))]
    async fn lookup(&self, address: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let response = self
            .client
            .get(self.search_url.clone())
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| GeocodeError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::UnexpectedStatus(status.as_u16()));
        }

        let places: Vec<Place> = response
            .json()
            .await
            .map_err(|e| GeocodeError::InvalidBody(e.to_string()))?;

        match places.first() {
            Some(place) => {
                let coordinate = place.coordinate()?;
                debug!(?coordinate, "Address resolved");
                Ok(Some(coordinate))
            }
            None => {
                debug!("No match for address");
                Ok(None)
            }
        }
    }
}
