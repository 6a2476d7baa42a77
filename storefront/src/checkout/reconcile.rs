//! Order reconciliation
//!
//! Converts a Pending Order of either shape into the normalized line-item
//! view the checkout screen renders. Stock carts pass through line by
//! line; a customized request collapses to exactly one line.

use shared::models::{LineItem, PendingOrder};

/// Display name for the single line of a customized order
const CUSTOM_LINE_NAME: &str = "Customized 3D Product";

/// Whether a path begins with a URL scheme (e.g. `https://`, `s3://`)
fn is_absolute_url(path: &str) -> bool {
    match path.find("://") {
        Some(idx) if idx > 0 => path[..idx]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.'),
        _ => false,
    }
}

/// Resolve an image path against the backend asset base.
///
/// Absolute URLs are used as-is; anything else is treated as a relative
/// path under the asset base.
pub fn resolve_image(path: &str, asset_base: &str) -> String {
    if is_absolute_url(path) {
        path.to_string()
    } else {
        format!(
            "{}/{}",
            asset_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Coerce a wire price to a finite, non-negative value
fn coerce_price(price: f64) -> f64 {
    if price.is_finite() { price.max(0.0) } else { 0.0 }
}

/// Normalize a pending order into checkout line items.
///
/// Stock lines map through directly (negative or non-finite prices are
/// coerced to 0, quantity floors at 1). A customized order produces one
/// line priced at the agreed price, or 0 while unpriced; its price is
/// coerced the same way.
pub fn line_items(pending: &PendingOrder, asset_base: &str) -> Vec<LineItem> {
    match pending {
        PendingOrder::Product { items } => items
            .iter()
            .map(|line| LineItem {
                name: line.name.clone(),
                unit_price: coerce_price(line.price),
                quantity: line.quantity.max(1),
                image: line.image.clone(),
            })
            .collect(),
        PendingOrder::Customized { order } => vec![LineItem {
            name: CUSTOM_LINE_NAME.to_string(),
            unit_price: order.price.map(coerce_price).unwrap_or(0.0),
            quantity: 1,
            image: order
                .images
                .first()
                .map(|path| resolve_image(path, asset_base)),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::money::order_total;
    use shared::models::{CustomReference, StockLine};

    const ASSET_BASE: &str = "https://api.curio.example/images";

    fn custom_order(price: Option<f64>, images: Vec<String>) -> PendingOrder {
        PendingOrder::Customized {
            order: CustomReference {
                id: "c-1".to_string(),
                price,
                material: "PLA".to_string(),
                height: 12.0,
                length: 8.0,
                notes: None,
                images,
            },
        }
    }

    #[test]
    fn stock_cart_maps_line_by_line() {
        let pending = PendingOrder::Product {
            items: vec![StockLine {
                product_id: "a".to_string(),
                name: "Dragon".to_string(),
                price: 100.0,
                quantity: 2,
                image: Some("dragon.png".to_string()),
            }],
        };

        let items = line_items(&pending, ASSET_BASE);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Dragon");
        assert_eq!(items[0].unit_price, 100.0);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(order_total(&items), 200.0);
    }

    #[test]
    fn stock_cart_coerces_bad_numerics() {
        let pending = PendingOrder::Product {
            items: vec![StockLine {
                product_id: "a".to_string(),
                name: "Dragon".to_string(),
                price: -5.0,
                quantity: 0,
                image: None,
            }],
        };

        let items = line_items(&pending, ASSET_BASE);
        assert_eq!(items[0].unit_price, 0.0);
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn customized_order_collapses_to_one_line() {
        let pending = custom_order(Some(800.0), vec!["prints/fig.png".to_string()]);
        let items = line_items(&pending, ASSET_BASE);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Customized 3D Product");
        assert_eq!(items[0].unit_price, 800.0);
        assert_eq!(items[0].quantity, 1);
        assert_eq!(
            items[0].image.as_deref(),
            Some("https://api.curio.example/images/prints/fig.png")
        );
        assert_eq!(order_total(&items), 800.0);
    }

    #[test]
    fn unpriced_customized_order_lines_up_at_zero() {
        let pending = custom_order(None, vec![]);
        let items = line_items(&pending, ASSET_BASE);
        assert_eq!(items[0].unit_price, 0.0);
        assert!(items[0].image.is_none());
    }

    #[test]
    fn customized_price_is_coerced_like_stock_prices() {
        let items = line_items(&custom_order(Some(-800.0), vec![]), ASSET_BASE);
        assert_eq!(items[0].unit_price, 0.0);

        let items = line_items(&custom_order(Some(f64::NAN), vec![]), ASSET_BASE);
        assert_eq!(items[0].unit_price, 0.0);
    }

    #[test]
    fn absolute_image_urls_pass_through() {
        let url = "https://cdn.example/fig.png";
        assert_eq!(resolve_image(url, ASSET_BASE), url);
        assert_eq!(
            resolve_image("/fig.png", ASSET_BASE),
            "https://api.curio.example/images/fig.png"
        );
        // A bare "://" is not a scheme
        assert_eq!(
            resolve_image("://odd", ASSET_BASE),
            "https://api.curio.example/images/://odd"
        );
    }
}
