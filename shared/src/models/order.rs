//! Checkout order types
//!
//! The Pending Order is the transient record written when a user initiates
//! checkout and consumed by the checkout flow. The two shapes are mutually
//! exclusive, discriminated by the `type` tag on the wire.

use serde::{Deserialize, Serialize};

use super::profile::DeliveryProfile;

// ============================================================================
// Payment Types
// ============================================================================

/// Payment method chosen at checkout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Pay on delivery
    #[default]
    CashOnDelivery,
    /// Online payment, settled out-of-band
    Online,
}

/// Payment status reported to the custom-order finalization endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Completed,
    Pending,
}

impl PaymentStatus {
    /// Derive the status for a custom-order finalization.
    ///
    /// Cash on delivery settles the checkout immediately; online payment
    /// stays pending until confirmed by the payment collaborator.
    pub fn derive(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::CashOnDelivery => Self::Completed,
            PaymentMethod::Online => Self::Pending,
        }
    }
}

// ============================================================================
// Pending Order
// ============================================================================

/// Pending order - exactly one shape per record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PendingOrder {
    /// Multi-line stock-product cart
    Product { items: Vec<StockLine> },
    /// Single bespoke customized request
    Customized { order: CustomReference },
}

impl PendingOrder {
    /// Whether every resolved per-item price is known.
    ///
    /// A customized order is unpriced until an admin sets the agreed price,
    /// and must not reach payment before that.
    pub fn is_priced(&self) -> bool {
        match self {
            Self::Product { .. } => true,
            Self::Customized { order } => order.price.is_some(),
        }
    }
}

/// One cart line of a stock-product pending order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockLine {
    pub product_id: String,
    pub name: String,
    /// Unit price (missing on the wire defaults to 0)
    #[serde(default)]
    pub price: f64,
    /// Quantity (missing on the wire defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn default_quantity() -> i32 {
    1
}

/// Reference to a submitted customized request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomReference {
    pub id: String,
    /// Agreed price - None until an admin has priced the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub material: String,
    pub height: f64,
    pub length: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

// ============================================================================
// Checkout View / Finalization DTOs
// ============================================================================

/// Normalized checkout line item (unified view over both order shapes)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub unit_price: f64,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Payload for the stock-order finalization endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockOrderRequest {
    /// Delivery profile snapshot taken at confirmation time
    pub delivery: DeliveryProfile,
    pub payment_method: PaymentMethod,
    pub items: Vec<StockLine>,
}

/// Payload for the custom-order finalization endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomOrderFinalize {
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
}
