//! Owner-scoped product catalog repository.
//!
//! Every query filters on `user_id` in addition to any primary-key
//! predicate. A write aimed at another owner's product therefore matches
//! zero rows and reports success; cross-tenant probes are indistinguishable
//! from missing rows.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use larder_core::{ProductId, UserId};

use super::RepositoryError;
use crate::models::{NewProduct, Product, ProductPatch};

/// A `products` row.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: ProductId,
    name: String,
    category: String,
    price: f64,
    stock: i32,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            category: row.category,
            price: row.price,
            stock: row.stock,
            created_at: row.created_at,
        }
    }
}

/// Repository for product catalog operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the owner's products, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, owner: UserId) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, category, price, stock, created_at
            FROM products
            WHERE user_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(owner)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Create a product for the owner.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        owner: UserId,
        product: &NewProduct,
    ) -> Result<ProductId, RepositoryError> {
        let row: (ProductId,) = sqlx::query_as(
            r"
            INSERT INTO products (user_id, name, category, price, stock)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(owner)
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.price)
        .bind(product.stock)
        .fetch_one(self.pool)
        .await?;

        Ok(row.0)
    }

    /// Apply a partial update to one of the owner's products.
    ///
    /// Returns the number of rows affected: zero when the product does not
    /// exist or belongs to another owner, which is a successful no-op.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NoFieldsToUpdate` without touching the
    /// store if the patch is empty.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        owner: UserId,
        product_id: ProductId,
        patch: &ProductPatch,
    ) -> Result<u64, RepositoryError> {
        let mut query = build_update(owner, product_id, patch)?;

        let result = query.build().execute(self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Delete one of the owner's products.
    ///
    /// Returns `true` if a row was deleted, `false` if nothing matched
    /// (missing product or another owner's).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(
        &self,
        owner: UserId,
        product_id: ProductId,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM products
            WHERE user_id = $1 AND id = $2
            ",
        )
        .bind(owner)
        .bind(product_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Build the dynamic `UPDATE` statement for a partial product update.
///
/// Only the fields present in the patch appear in the `SET` clause.
fn build_update(
    owner: UserId,
    product_id: ProductId,
    patch: &ProductPatch,
) -> Result<QueryBuilder<'static, Postgres>, RepositoryError> {
    if patch.is_empty() {
        return Err(RepositoryError::NoFieldsToUpdate);
    }

    let mut query: QueryBuilder<'static, Postgres> = QueryBuilder::new("UPDATE products SET ");

    {
        let mut set = query.separated(", ");
        if let Some(name) = &patch.name {
            set.push("name = ").push_bind_unseparated(name.clone());
        }
        if let Some(category) = &patch.category {
            set.push("category = ")
                .push_bind_unseparated(category.clone());
        }
        if let Some(price) = patch.price {
            set.push("price = ").push_bind_unseparated(price);
        }
        if let Some(stock) = patch.stock {
            set.push("stock = ").push_bind_unseparated(stock);
        }
    }

    query.push(" WHERE user_id = ");
    query.push_bind(owner);
    query.push(" AND id = ");
    query.push_bind(product_id);

    Ok(query)
}
