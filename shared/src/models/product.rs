//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity as served by the product directory
///
/// Read-only to the client; created/updated by the admin back office.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Unit price, currency-agnostic (non-negative)
    #[serde(default)]
    pub price: f64,
    /// Average rating in [0, 5], absent when not yet rated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Category reference (String ID). Some products carry only a
    /// subcategory reference, never a direct category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Subcategory reference with embedded parent back-reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<SubcategoryRef>,
    /// Ordered image paths (possibly empty)
    #[serde(default)]
    pub images: Vec<String>,
    /// Descriptive tag, e.g. "Sale", "New", "Best Seller"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Subcategory reference embedded on a product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubcategoryRef {
    pub id: String,
    /// Parent category ID (back-reference)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
