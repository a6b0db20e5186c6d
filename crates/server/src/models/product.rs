//! Product catalog domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use larder_core::ProductId;

/// A catalog product, exclusively owned by one operator.
///
/// Serializes to the `GET /products` wire shape.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Free-text category.
    pub category: String,
    /// Unit price. Non-negative (enforced by the schema).
    pub price: f64,
    /// Stock on hand. May go negative; no floor is enforced.
    pub stock: i32,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a product.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i32,
}

/// Partial update for a product. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
}

impl ProductPatch {
    /// True if the patch carries no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.stock.is_none()
    }
}
