//! Curio Client - HTTP client for the storefront backend
//!
//! Provides typed network calls to the backend collaborators: the product
//! and category directories, the delivery profile service, and the two
//! order-finalization endpoints.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod identity;

pub use api::StoreApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use identity::{FixedIdentityProvider, Identity, IdentityProvider};

// Re-export shared types for convenience
pub use shared::ApiResponse;
