//! Order total computation.
//!
//! Pure functions over captured line-item values; no I/O. Totals are
//! computed at read time when orders are listed, never stored.
//!
//! Discount and tax are per-unit monetary amounts (not percentage rates),
//! so each term is scaled by the quantity.
//!
//! The order-level discount stored on the order header is NOT subtracted
//! from the total returned to callers. That asymmetry is long-standing
//! observed behavior that downstream clients reconcile against; changing it
//! here would silently shift recorded revenue, so it is kept and pinned by
//! test.

use crate::models::OrderItem;

/// Monetary value of one line:
/// `quantity * price - quantity * discount + quantity * tax`.
#[must_use]
pub fn line_value(quantity: i32, price: f64, discount: f64, tax: f64) -> f64 {
    let quantity = f64::from(quantity);
    quantity * price - quantity * discount + quantity * tax
}

/// Monetary total of an order: the sum of its line values.
#[must_use]
pub fn order_total(items: &[OrderItem]) -> f64 {
    items
        .iter()
        .map(|item| line_value(item.quantity, item.price, item.discount, item.tax))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i32, price: f64, discount: f64, tax: f64) -> OrderItem {
        OrderItem {
            product_id: None,
            item_name: "Beans".to_string(),
            quantity,
            price,
            discount,
            tax,
        }
    }

    #[test]
    fn test_line_value_pinned_example() {
        // 2*10 - 2*1 + 2*0.5 = 19
        assert!((line_value(2, 10.0, 1.0, 0.5) - 19.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_order_total_sums_lines() {
        let items = [item(2, 10.0, 1.0, 0.5), item(3, 2.0, 0.0, 0.1)];
        // 19 + (6 + 0.3)
        assert!((order_total(&items) - 25.3).abs() < 1e-9);
    }

    #[test]
    fn test_order_total_empty() {
        assert!((order_total(&[]) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_quantity_line_is_free() {
        assert!((line_value(0, 99.0, 5.0, 2.0) - 0.0).abs() < f64::EPSILON);
    }
}
