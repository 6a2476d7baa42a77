//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
///
/// Owns an ordered list of subcategories. The hierarchy is two-level
/// and non-recursive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

/// Subcategory entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    /// Parent category reference (String ID, exactly one)
    pub category: String,
}
