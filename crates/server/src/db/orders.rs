//! Order engine: atomic order creation and order listing.
//!
//! Creating an order writes the header and all of its line items inside one
//! transaction. If any insert fails the transaction is dropped, which rolls
//! everything back; a partial order is never visible to subsequent reads.
//! Orders are never updated or deleted once written.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use larder_core::{OrderId, ProductId, UserId};

use super::RepositoryError;
use crate::models::{NewOrder, OrderItem, OrderSummary};
use crate::pricing;

/// An `orders` header row.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: OrderId,
    customer_name: String,
    payment_method: String,
    discount: f64,
    created_at: DateTime<Utc>,
}

/// An `order_items` row.
#[derive(Debug, sqlx::FromRow)]
struct OrderItemRow {
    product_id: Option<ProductId>,
    item_name: String,
    quantity: i32,
    price: f64,
    discount: f64,
    tax: f64,
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        Self {
            product_id: row.product_id,
            item_name: row.item_name,
            quantity: row.quantity,
            price: row.price,
            discount: row.discount,
            tax: row.tax,
        }
    }
}

/// Repository for order operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record an order with all of its line items as one atomic unit.
    ///
    /// Returns the generated order ID. Zero-item orders are accepted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::OrderWrite` if any insert or the commit
    /// fails; nothing is retried and nothing partial is left behind.
    pub async fn create(&self, owner: UserId, order: &NewOrder) -> Result<OrderId, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let header: (OrderId,) = sqlx::query_as(
            r"
            INSERT INTO orders (user_id, customer_name, payment_method, discount)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(owner)
        .bind(&order.customer_name)
        .bind(&order.payment_method)
        .bind(order.discount)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::OrderWrite)?;

        let order_id = header.0;

        for item in &order.items {
            sqlx::query(
                r"
                INSERT INTO order_items (order_id, product_id, item_name, quantity, price, discount, tax)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ",
            )
            .bind(order_id)
            .bind(item.product_id)
            .bind(&item.item_name)
            .bind(item.quantity)
            .bind(item.price)
            .bind(item.discount)
            .bind(item.tax)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::OrderWrite)?;
        }

        // An uncommitted transaction rolls back when dropped on the error
        // paths above.
        tx.commit().await.map_err(RepositoryError::OrderWrite)?;

        Ok(order_id)
    }

    /// List the owner's orders with their items and computed totals.
    ///
    /// Header order follows the store's natural scan; no sort is guaranteed.
    /// Items are fetched per order (one query per header), acceptable at
    /// this system's scale.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any query fails.
    pub async fn list(&self, owner: UserId) -> Result<Vec<OrderSummary>, RepositoryError> {
        let headers = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, customer_name, payment_method, discount, created_at
            FROM orders
            WHERE user_id = $1
            ",
        )
        .bind(owner)
        .fetch_all(self.pool)
        .await?;

        let mut summaries = Vec::with_capacity(headers.len());
        for header in headers {
            let items = self.items_for(header.id).await?;
            let total = pricing::order_total(&items);

            summaries.push(OrderSummary {
                order_id: header.id,
                customer_name: header.customer_name,
                created_at: header.created_at,
                payment_method: header.payment_method,
                order_discount: header.discount,
                total,
                items,
            });
        }

        Ok(summaries)
    }

    /// Fetch the line items of one order.
    async fn items_for(&self, order_id: OrderId) -> Result<Vec<OrderItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderItemRow>(
            r"
            SELECT product_id, item_name, quantity, price, discount, tax
            FROM order_items
            WHERE order_id = $1
            ",
        )
        .bind(order_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(OrderItem::from).collect())
    }
}
