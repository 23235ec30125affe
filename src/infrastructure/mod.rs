//! Infrastructure layer for external integrations.
//!
//! Implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`geocoding`] - Geocoding provider clients
//! - [`persistence`] - PostgreSQL repository implementations

pub mod geocoding;
pub mod persistence;
