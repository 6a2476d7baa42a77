//! Typed API calls to the storefront backend
//!
//! One method per collaborator operation. Every endpoint wraps its payload
//! in the standard [`ApiResponse`] envelope; unwrapping happens here so the
//! rest of the client works with plain domain types.

use crate::{ClientError, ClientResult, HttpClient};
use shared::ApiResponse;
use shared::models::{
    Category, CustomOrderFinalize, DeliveryProfile, Product, StockOrderRequest,
};

/// Typed storefront API over an [`HttpClient`]
#[derive(Debug, Clone)]
pub struct StoreApi {
    http: HttpClient,
}

impl StoreApi {
    /// Create a new API wrapper
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Access the underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Replace the bearer token (identity change)
    pub fn set_token(&mut self, token: Option<String>) {
        self.http.set_token(token);
    }

    /// Unwrap an envelope, rejecting error codes even on 2xx responses
    fn unwrap_data<T>(response: ApiResponse<T>, what: &str) -> ClientResult<T> {
        if !response.is_success() {
            return Err(ClientError::Backend {
                code: response.code,
                message: response.message,
            });
        }
        response
            .data
            .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {} data", what)))
    }

    // ========== Product Directory ==========

    /// Fetch the full product list
    pub async fn products(&self) -> ClientResult<Vec<Product>> {
        let response = self
            .http
            .get::<ApiResponse<Vec<Product>>>("/api/products")
            .await?;
        Self::unwrap_data(response, "product list")
    }

    /// Fetch one product by id
    pub async fn product(&self, id: &str) -> ClientResult<Product> {
        let response = self
            .http
            .get::<ApiResponse<Product>>(&format!("/api/products/{}", id))
            .await?;
        Self::unwrap_data(response, "product")
    }

    // ========== Category Directory ==========

    /// Fetch all categories with nested subcategories
    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        let response = self
            .http
            .get::<ApiResponse<Vec<Category>>>("/api/categories")
            .await?;
        Self::unwrap_data(response, "category list")
    }

    // ========== Delivery Profile Service ==========

    /// Fetch the delivery profile for the current identity
    ///
    /// Returns [`ClientError::NotFound`] when the profile has not been
    /// completed yet.
    pub async fn delivery_profile(&self) -> ClientResult<DeliveryProfile> {
        let response = self
            .http
            .get::<ApiResponse<DeliveryProfile>>("/api/profile")
            .await?;
        Self::unwrap_data(response, "delivery profile")
    }

    /// Upsert the delivery profile for the current identity
    pub async fn save_delivery_profile(&self, profile: &DeliveryProfile) -> ClientResult<()> {
        self.http
            .put::<ApiResponse<()>, _>("/api/profile", profile)
            .await?;
        Ok(())
    }

    // ========== Order Finalization ==========

    /// Finalize a stock-product order
    pub async fn finalize_stock_order(&self, request: &StockOrderRequest) -> ClientResult<()> {
        self.http
            .post::<ApiResponse<()>, _>("/api/orders", request)
            .await?;
        tracing::debug!(items = request.items.len(), "Stock order finalized");
        Ok(())
    }

    /// Finalize a customized order by id
    pub async fn finalize_custom_order(
        &self,
        order_id: &str,
        request: &CustomOrderFinalize,
    ) -> ClientResult<()> {
        self.http
            .patch::<ApiResponse<()>, _>(&format!("/api/custom-orders/{}", order_id), request)
            .await?;
        tracing::debug!(order_id, "Custom order finalized");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::response::API_CODE_SUCCESS;

    fn envelope<T>(code: &str, message: &str, data: Option<T>) -> ApiResponse<T> {
        ApiResponse {
            code: code.to_string(),
            message: message.to_string(),
            data,
        }
    }

    #[test]
    fn unwrap_data_returns_payload_on_success() {
        let response = envelope(API_CODE_SUCCESS, "Success", Some(42));
        assert_eq!(StoreApi::unwrap_data(response, "answer").unwrap(), 42);
    }

    #[test]
    fn unwrap_data_rejects_error_envelope_even_with_data() {
        let response = envelope("E9001", "Internal server error", Some(42));
        let err = StoreApi::unwrap_data(response, "answer").unwrap_err();
        match err {
            ClientError::Backend { code, message } => {
                assert_eq!(code, "E9001");
                assert_eq!(message, "Internal server error");
            }
            other => panic!("expected backend error, got {:?}", other),
        }
    }

    #[test]
    fn unwrap_data_rejects_missing_payload() {
        let response = envelope::<i32>(API_CODE_SUCCESS, "Success", None);
        let err = StoreApi::unwrap_data(response, "answer").unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }
}
