//! Delivery Profile Model

use serde::{Deserialize, Serialize};

use super::order::PaymentMethod;

/// The user's saved shipping/contact identity, reused across checkouts
///
/// Fetched from the profile service at checkout entry and editable
/// in-place before order confirmation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DeliveryProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    /// Payment-method preference, defaults to cash on delivery
    #[serde(default)]
    pub payment_method: PaymentMethod,
}
