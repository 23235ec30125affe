//! Core domain entities.
//!
//! - [`Coordinate`] - A latitude/longitude pair returned by geocoding
//! - [`CalculationRecord`] - A persisted distance calculation
//! - [`NewCalculation`] - Insert payload for a calculation record

pub mod calculation;
pub mod coordinate;

pub use calculation::{CalculationRecord, NewCalculation};
pub use coordinate::Coordinate;
