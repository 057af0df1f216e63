//! Network layer: REST helpers and wire DTOs for the platform backend.

pub mod api;
pub mod types;
