//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde with camelCase field names on the wire.

pub mod calculate;
pub mod history;
