//! Product catalog route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use larder_core::ProductId;

use super::MessageResponse;
use crate::db::ProductRepository;
use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::models::{NewProduct, Product, ProductPatch};
use crate::state::AppState;

/// Response body for `GET /products`.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// Response body for `POST /products`.
#[derive(Debug, Serialize)]
pub struct ProductCreatedResponse {
    pub message: String,
    pub id: ProductId,
}

/// `GET /products` - list the owner's catalog, newest first.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
) -> Result<Json<ProductsResponse>> {
    let products = ProductRepository::new(state.pool())
        .list(identity.user_id)
        .await?;

    Ok(Json(ProductsResponse { products }))
}

/// `POST /products` - add a product to the owner's catalog.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
    Json(product): Json<NewProduct>,
) -> Result<Json<ProductCreatedResponse>> {
    let id = ProductRepository::new(state.pool())
        .create(identity.user_id, &product)
        .await?;

    Ok(Json(ProductCreatedResponse {
        message: "Product added".to_string(),
        id,
    }))
}

/// `PUT /products/{id}` - partially update one of the owner's products.
///
/// An empty field set is a 400; a patch aimed at a missing or foreign
/// product affects zero rows and still reports success.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
    Path(product_id): Path<ProductId>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<MessageResponse>> {
    ProductRepository::new(state.pool())
        .update(identity.user_id, product_id, &patch)
        .await?;

    Ok(Json(MessageResponse::new("Product updated")))
}

/// `DELETE /products/{id}` - delete one of the owner's products.
///
/// Deleting a missing or foreign product is a successful no-op.
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
    Path(product_id): Path<ProductId>,
) -> Result<Json<MessageResponse>> {
    ProductRepository::new(state.pool())
        .delete(identity.user_id, product_id)
        .await?;

    Ok(Json(MessageResponse::new("Product deleted")))
}
