//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary arithmetic is done with `Decimal` internally, then
//! converted to `f64` at the serialization boundary.

use rust_decimal::prelude::*;
use shared::models::{LineItem, StockLine};

use super::traits::CheckoutError;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per item
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per item
const MAX_QUANTITY: i32 = 9999;

/// Convert an f64 to Decimal for calculation
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64_retain(value).unwrap_or(Decimal::ZERO)
}

/// Convert a Decimal back to f64, rounded to 2 decimal places
pub fn to_f64(value: Decimal) -> f64 {
    value.round_dp(DECIMAL_PLACES).to_f64().unwrap_or(0.0)
}

/// Validate that an f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> Result<(), CheckoutError> {
    if !value.is_finite() {
        return Err(CheckoutError::InvalidOperation(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

/// Validate a stock cart line before finalization
pub fn validate_stock_line(line: &StockLine) -> Result<(), CheckoutError> {
    require_finite(line.price, "price")?;
    if line.price < 0.0 {
        return Err(CheckoutError::InvalidOperation(format!(
            "price must be non-negative, got {}",
            line.price
        )));
    }
    if line.price > MAX_PRICE {
        return Err(CheckoutError::InvalidOperation(format!(
            "price exceeds maximum allowed ({}), got {}",
            MAX_PRICE, line.price
        )));
    }

    if line.quantity <= 0 {
        return Err(CheckoutError::InvalidOperation(format!(
            "quantity must be positive, got {}",
            line.quantity
        )));
    }
    if line.quantity > MAX_QUANTITY {
        return Err(CheckoutError::InvalidOperation(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, line.quantity
        )));
    }

    Ok(())
}

/// Order total: sum of unit price × quantity over all line items.
///
/// Zero when the list is empty; never negative.
pub fn order_total(items: &[LineItem]) -> f64 {
    let total = items.iter().fold(Decimal::ZERO, |acc, item| {
        acc + to_decimal(item.unit_price) * Decimal::from(item.quantity)
    });
    to_f64(total.max(Decimal::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, unit_price: f64, quantity: i32) -> LineItem {
        LineItem {
            name: name.to_string(),
            unit_price,
            quantity,
            image: None,
        }
    }

    #[test]
    fn total_of_empty_is_zero() {
        assert_eq!(order_total(&[]), 0.0);
    }

    #[test]
    fn total_is_invariant_under_reordering() {
        let a = line("a", 100.0, 2);
        let b = line("b", 49.99, 3);
        let c = line("c", 0.01, 1);
        let forward = order_total(&[a.clone(), b.clone(), c.clone()]);
        let backward = order_total(&[c, b, a]);
        assert_eq!(forward, backward);
        assert_eq!(forward, 349.98);
    }

    #[test]
    fn total_avoids_float_drift() {
        // 0.1 + 0.2 style accumulation stays exact under Decimal
        let items: Vec<LineItem> = (0..10).map(|_| line("x", 0.1, 1)).collect();
        assert_eq!(order_total(&items), 1.0);
    }

    #[test]
    fn stock_line_validation_rejects_bad_values() {
        let mut l = StockLine {
            product_id: "a".to_string(),
            name: "Dragon".to_string(),
            price: 10.0,
            quantity: 1,
            image: None,
        };
        assert!(validate_stock_line(&l).is_ok());

        l.price = -1.0;
        assert!(validate_stock_line(&l).is_err());

        l.price = f64::NAN;
        assert!(validate_stock_line(&l).is_err());

        l.price = 10.0;
        l.quantity = 0;
        assert!(validate_stock_line(&l).is_err());

        l.quantity = 10_000;
        assert!(validate_stock_line(&l).is_err());
    }
}
