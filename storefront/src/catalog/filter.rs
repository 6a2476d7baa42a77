//! Catalog Filter Engine
//!
//! Derives the currently-visible product list from the full set plus the
//! active filters: category, subcategory membership, price range, and
//! minimum rating. Filtering is a strict conjunction of all active
//! predicates. All operations are total over well-typed input; absent
//! optional fields fail their predicate or default to 0.

use std::collections::HashSet;

use shared::models::Product;

/// Fallback price bounds used when the product set is empty
const DEFAULT_PRICE_BOUNDS: (f64, f64) = (0.0, 10_000.0);

/// Composite product filter over an in-memory product set
#[derive(Debug, Clone)]
pub struct FilterEngine {
    products: Vec<Product>,
    /// Active category filter. Set from navigation, not reset by `clear`.
    category: Option<String>,
    /// Active subcategory ids; empty means no subcategory restriction
    subcategories: HashSet<String>,
    /// Full price bounds derived from the current product set
    bounds: (f64, f64),
    /// Active price range, kept ordered and within `bounds`
    range: (f64, f64),
    /// Minimum rating threshold (1-4); None means any rating
    min_rating: Option<u8>,
}

impl FilterEngine {
    /// Create an engine with an empty product set and no active filters
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            category: None,
            subcategories: HashSet::new(),
            bounds: DEFAULT_PRICE_BOUNDS,
            range: DEFAULT_PRICE_BOUNDS,
            min_rating: None,
        }
    }

    /// Replace the source product set
    ///
    /// Re-derives the price bounds as `floor(min)..ceil(max)` over the new
    /// set and resets the active range to the full bounds. Other filters
    /// are untouched.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.bounds = Self::derive_bounds(&self.products);
        self.range = self.bounds;
    }

    /// Set or clear the active category filter
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
    }

    /// Add the subcategory id to the active set if absent, else remove it
    pub fn toggle_subcategory(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.subcategories.remove(&id) {
            self.subcategories.insert(id);
        }
    }

    /// Set the active price range
    ///
    /// The handles are kept ordered (low <= high) and clamped to the
    /// derived bounds.
    pub fn set_price_range(&mut self, low: f64, high: f64) {
        let low = low.clamp(self.bounds.0, self.bounds.1);
        let high = high.clamp(self.bounds.0, self.bounds.1);
        self.range = if low <= high { (low, high) } else { (high, low) };
    }

    /// Set or clear the minimum-rating threshold
    pub fn set_min_rating(&mut self, rating: Option<u8>) {
        self.min_rating = rating;
    }

    /// Reset subcategories, price range, and rating to their defaults
    ///
    /// The category filter is navigation state, not a filter, and is
    /// intentionally left in place.
    pub fn clear(&mut self) {
        self.subcategories.clear();
        self.range = self.bounds;
        self.min_rating = None;
    }

    /// The filtered product list (strict AND of all active predicates)
    pub fn visible_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| self.matches_category(p))
            .filter(|p| self.matches_subcategory(p))
            .filter(|p| self.matches_price(p))
            .filter(|p| self.matches_rating(p))
            .collect()
    }

    // ========== Accessors ==========

    /// The full source product set
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Active category filter
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Active subcategory ids
    pub fn selected_subcategories(&self) -> &HashSet<String> {
        &self.subcategories
    }

    /// Full price bounds derived from the current set
    pub fn price_bounds(&self) -> (f64, f64) {
        self.bounds
    }

    /// Active price range
    pub fn price_range(&self) -> (f64, f64) {
        self.range
    }

    /// Active minimum-rating threshold
    pub fn min_rating(&self) -> Option<u8> {
        self.min_rating
    }

    // ========== Predicates ==========

    /// Category match: direct category id, or the subcategory's parent id.
    /// The OR fallback exists because some products carry only a
    /// subcategory reference, never a direct category.
    fn matches_category(&self, product: &Product) -> bool {
        let Some(active) = &self.category else {
            return true;
        };
        if product.category.as_deref() == Some(active.as_str()) {
            return true;
        }
        product
            .subcategory
            .as_ref()
            .and_then(|s| s.category.as_deref())
            == Some(active.as_str())
    }

    fn matches_subcategory(&self, product: &Product) -> bool {
        if self.subcategories.is_empty() {
            return true;
        }
        match &product.subcategory {
            Some(s) => self.subcategories.contains(&s.id),
            None => false,
        }
    }

    fn matches_price(&self, product: &Product) -> bool {
        product.price >= self.range.0 && product.price <= self.range.1
    }

    fn matches_rating(&self, product: &Product) -> bool {
        let Some(threshold) = self.min_rating else {
            return true;
        };
        product.rating.unwrap_or(0.0).floor() >= f64::from(threshold)
    }

    fn derive_bounds(products: &[Product]) -> (f64, f64) {
        if products.is_empty() {
            return DEFAULT_PRICE_BOUNDS;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for p in products {
            min = min.min(p.price);
            max = max.max(p.price);
        }
        (min.floor(), max.ceil())
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::SubcategoryRef;

    fn make_product(id: &str, price: f64, rating: Option<f64>, category: Option<&str>) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price,
            rating,
            category: category.map(str::to_string),
            subcategory: None,
            images: vec![],
            tag: None,
        }
    }

    fn sample_set() -> Vec<Product> {
        vec![
            make_product("1", 500.0, Some(4.2), Some("X")),
            make_product("2", 1500.0, Some(3.0), Some("Y")),
        ]
    }

    fn engine_with(products: Vec<Product>) -> FilterEngine {
        let mut engine = FilterEngine::new();
        engine.set_products(products);
        engine
    }

    fn visible_ids(engine: &FilterEngine) -> Vec<&str> {
        engine
            .visible_products()
            .iter()
            .map(|p| p.id.as_str())
            .collect()
    }

    #[test]
    fn category_filter_matches_direct_reference() {
        let mut engine = engine_with(sample_set());
        engine.set_category(Some("X".to_string()));
        assert_eq!(visible_ids(&engine), vec!["1"]);
    }

    #[test]
    fn category_filter_matches_subcategory_parent() {
        // Product tagged only with a subcategory, no direct category
        let mut orphan = make_product("3", 700.0, None, None);
        orphan.subcategory = Some(SubcategoryRef {
            id: "sub-1".to_string(),
            category: Some("X".to_string()),
        });
        let mut products = sample_set();
        products.push(orphan);

        let mut engine = engine_with(products);
        engine.set_category(Some("X".to_string()));
        assert_eq!(visible_ids(&engine), vec!["1", "3"]);
    }

    #[test]
    fn min_rating_uses_floor() {
        let mut engine = engine_with(sample_set());
        engine.set_min_rating(Some(4));
        // floor(4.2) = 4 >= 4 passes; floor(3.0) = 3 < 4 fails
        assert_eq!(visible_ids(&engine), vec!["1"]);
    }

    #[test]
    fn unrated_product_fails_rating_threshold() {
        let mut engine = engine_with(vec![make_product("1", 100.0, None, None)]);
        engine.set_min_rating(Some(1));
        assert!(engine.visible_products().is_empty());
    }

    #[test]
    fn subcategory_toggle_is_idempotent_in_pairs() {
        let mut engine = FilterEngine::new();
        engine.toggle_subcategory("sub-1");
        assert!(engine.selected_subcategories().contains("sub-1"));
        engine.toggle_subcategory("sub-1");
        assert!(engine.selected_subcategories().is_empty());
    }

    #[test]
    fn subcategory_filter_requires_membership() {
        let mut tagged = make_product("1", 100.0, None, None);
        tagged.subcategory = Some(SubcategoryRef {
            id: "sub-1".to_string(),
            category: None,
        });
        let untagged = make_product("2", 100.0, None, None);

        let mut engine = engine_with(vec![tagged, untagged]);
        engine.toggle_subcategory("sub-1");
        assert_eq!(visible_ids(&engine), vec!["1"]);
    }

    #[test]
    fn price_bounds_derived_from_set() {
        let engine = engine_with(vec![
            make_product("1", 12.4, None, None),
            make_product("2", 99.7, None, None),
        ]);
        assert_eq!(engine.price_bounds(), (12.0, 100.0));
        assert_eq!(engine.price_range(), (12.0, 100.0));
    }

    #[test]
    fn empty_set_uses_fallback_bounds() {
        let engine = engine_with(vec![]);
        assert_eq!(engine.price_bounds(), (0.0, 10_000.0));
    }

    #[test]
    fn price_range_is_inclusive() {
        let mut engine = engine_with(sample_set());
        engine.set_price_range(500.0, 1500.0);
        assert_eq!(visible_ids(&engine), vec!["1", "2"]);
        engine.set_price_range(501.0, 1499.0);
        assert!(engine.visible_products().is_empty());
    }

    #[test]
    fn price_range_handles_are_reordered_and_clamped() {
        let mut engine = engine_with(sample_set());
        engine.set_price_range(1200.0, 100.0);
        assert_eq!(engine.price_range(), (500.0, 1200.0));
    }

    #[test]
    fn visible_is_subset_of_source() {
        let mut engine = engine_with(sample_set());
        engine.set_category(Some("X".to_string()));
        engine.set_min_rating(Some(2));
        let source_ids: Vec<&str> = engine.products().iter().map(|p| p.id.as_str()).collect();
        for p in engine.visible_products() {
            assert!(source_ids.contains(&p.id.as_str()));
        }
    }

    #[test]
    fn clear_resets_everything_except_category() {
        let mut engine = engine_with(sample_set());
        engine.set_category(Some("X".to_string()));
        engine.toggle_subcategory("sub-1");
        engine.set_price_range(600.0, 900.0);
        engine.set_min_rating(Some(3));

        engine.clear();

        assert!(engine.selected_subcategories().is_empty());
        assert_eq!(engine.price_range(), engine.price_bounds());
        assert!(engine.min_rating().is_none());
        assert_eq!(engine.category(), Some("X"));

        // With no category override, all products are visible again
        engine.set_category(None);
        assert_eq!(visible_ids(&engine), vec!["1", "2"]);
    }

    #[test]
    fn set_products_resets_range_but_keeps_filters() {
        let mut engine = engine_with(sample_set());
        engine.set_price_range(600.0, 900.0);
        engine.set_min_rating(Some(4));

        engine.set_products(vec![make_product("9", 50.0, Some(5.0), None)]);

        assert_eq!(engine.price_range(), engine.price_bounds());
        assert_eq!(engine.min_rating(), Some(4));
        assert_eq!(visible_ids(&engine), vec!["9"]);
    }
}
