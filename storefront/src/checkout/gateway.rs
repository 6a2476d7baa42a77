//! HTTP checkout gateway backed by the typed store API
//!
//! Maps client-level errors into the checkout taxonomy at the boundary:
//! a missing profile is "incomplete", everything else transient.

use async_trait::async_trait;
use curio_client::{ClientError, StoreApi};
use shared::models::{CustomOrderFinalize, DeliveryProfile, StockOrderRequest};

use super::traits::{CheckoutError, CheckoutGateway};

/// Checkout gateway over the backend HTTP API
#[derive(Debug, Clone)]
pub struct HttpCheckoutGateway {
    api: StoreApi,
}

impl HttpCheckoutGateway {
    /// Wrap a typed store API
    pub fn new(api: StoreApi) -> Self {
        Self { api }
    }

    fn service_error(err: ClientError) -> CheckoutError {
        match err {
            ClientError::Unauthorized => CheckoutError::Unauthorized,
            other => CheckoutError::Service(other.to_string()),
        }
    }
}

#[async_trait]
impl CheckoutGateway for HttpCheckoutGateway {
    async fn fetch_profile(&self) -> Result<DeliveryProfile, CheckoutError> {
        self.api.delivery_profile().await.map_err(|err| match err {
            ClientError::NotFound(_) => CheckoutError::ProfileIncomplete,
            other => Self::service_error(other),
        })
    }

    async fn save_profile(&self, profile: &DeliveryProfile) -> Result<(), CheckoutError> {
        self.api
            .save_delivery_profile(profile)
            .await
            .map_err(Self::service_error)
    }

    async fn finalize_stock(&self, request: &StockOrderRequest) -> Result<(), CheckoutError> {
        self.api
            .finalize_stock_order(request)
            .await
            .map_err(Self::service_error)
    }

    async fn finalize_custom(
        &self,
        order_id: &str,
        request: &CustomOrderFinalize,
    ) -> Result<(), CheckoutError> {
        self.api
            .finalize_custom_order(order_id, request)
            .await
            .map_err(Self::service_error)
    }
}
