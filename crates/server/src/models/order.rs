//! Order domain types.
//!
//! An order is written once, atomically, with its full set of line items and
//! never updated or deleted afterwards. Line-item price, discount, and tax
//! are snapshots captured at order time; the optional product reference is
//! for display only and must not be treated as authoritative for pricing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use larder_core::{OrderId, ProductId};

/// One product line within a recorded order.
///
/// Serializes to the item shape embedded in `GET /orders`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItem {
    /// Product reference; `None` once the product has been deleted.
    pub product_id: Option<ProductId>,
    /// Product name captured at order time.
    pub item_name: String,
    /// Units sold.
    pub quantity: i32,
    /// Per-unit price captured at order time.
    pub price: f64,
    /// Per-unit monetary discount.
    pub discount: f64,
    /// Per-unit monetary tax.
    pub tax: f64,
}

/// Payload for one line of a new order.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrderItem {
    #[serde(default)]
    pub product_id: Option<ProductId>,
    pub item_name: String,
    pub quantity: i32,
    pub price: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub tax: f64,
}

/// Payload for creating an order.
///
/// An empty `items` list is accepted; the reference behavior records an
/// order header with no lines.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrder {
    pub customer_name: String,
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
    #[serde(default)]
    pub discount: f64,
    pub items: Vec<NewOrderItem>,
}

fn default_payment_method() -> String {
    "Cash".to_string()
}

/// An order header with its line items and computed total.
///
/// Serializes to the order shape returned by `GET /orders`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
    pub payment_method: String,
    /// Order-level discount as stored on the header. Not subtracted from
    /// `total` (see [`crate::pricing`]).
    pub order_discount: f64,
    /// Sum of the line values, computed at read time.
    pub total: f64,
    pub items: Vec<OrderItem>,
}
