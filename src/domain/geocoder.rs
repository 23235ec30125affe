//! Geocoding port: free-text address to coordinate.

use crate::domain::entities::Coordinate;
use async_trait::async_trait;

/// Errors raised when the geocoding provider cannot be consulted.
///
/// An address the provider does not know is not an error; it is reported as
/// `Ok(None)` by [`Geocoder::lookup`].
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("Geocoding request failed: {0}")]
    Request(String),

    #[error("Geocoding provider responded with status {0}")]
    UnexpectedStatus(u16),

    #[error("Geocoding provider returned an unreadable body: {0}")]
    InvalidBody(String),

    #[error("Geocoding provider returned a malformed {field}: {value:?}")]
    MalformedCoordinate { field: &'static str, value: String },
}

/// Resolves addresses to coordinates through an external provider.
///
/// # Implementations
///
/// - [`crate::infrastructure::geocoding::NominatimGeocoder`] - OpenStreetMap Nominatim
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Looks up the best match for `address`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(coordinate))` when the provider has a match
    /// - `Ok(None)` when the provider has no match
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] when the provider is unreachable or its
    /// response cannot be interpreted. Failures are never folded into `None`.
    async fn lookup(&self, address: &str) -> Result<Option<Coordinate>, GeocodeError>;
}
