//! Checkout collaborator trait and error types

use async_trait::async_trait;
use shared::models::{CustomOrderFinalize, DeliveryProfile, StockOrderRequest};
use thiserror::Error;

/// Checkout error type
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout requires an authenticated identity
    #[error("Authentication required")]
    Unauthorized,

    /// The delivery profile has not been completed yet
    #[error("Delivery profile is incomplete")]
    ProfileIncomplete,

    /// No pending order is loaded
    #[error("No pending order")]
    NoPendingOrder,

    /// A customized order cannot be submitted before an admin prices it
    #[error("Customized order has no agreed price")]
    Unpriced,

    /// A finalization call is already in flight
    #[error("Submission already in flight")]
    SubmitInFlight,

    /// Operation not allowed in the current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Collaborator call failed (transient, retryable)
    #[error("Service error: {0}")]
    Service(String),
}

/// Gateway to the checkout collaborators: the delivery profile service
/// and the two order-finalization endpoints.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Fetch the delivery profile for the current identity.
    ///
    /// An incomplete (never saved) profile surfaces as
    /// [`CheckoutError::ProfileIncomplete`].
    async fn fetch_profile(&self) -> Result<DeliveryProfile, CheckoutError>;

    /// Persist the delivery profile for the current identity
    async fn save_profile(&self, profile: &DeliveryProfile) -> Result<(), CheckoutError>;

    /// Finalize a stock-product order
    async fn finalize_stock(&self, request: &StockOrderRequest) -> Result<(), CheckoutError>;

    /// Finalize a customized order by id
    async fn finalize_custom(
        &self,
        order_id: &str,
        request: &CustomOrderFinalize,
    ) -> Result<(), CheckoutError>;
}
