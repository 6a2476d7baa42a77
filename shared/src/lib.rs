//! Shared types for the Curio storefront client
//!
//! Common types used across crates including catalog and checkout models,
//! the API response envelope, and wire DTOs.

pub mod models;
pub mod response;

// Re-exports
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
