//! Domain layer containing business entities and ports.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`geocoder`] - Geocoding provider trait
//! - [`distance`] - Haversine distance calculation
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Orchestration lives in [`crate::application::services`].

pub mod distance;
pub mod entities;
pub mod geocoder;
pub mod repositories;
