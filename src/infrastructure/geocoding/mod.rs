//! Geocoding provider clients.
//!
//! - [`NominatimGeocoder`] - OpenStreetMap Nominatim over HTTPS

mod nominatim;

pub use nominatim::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, NominatimGeocoder};
