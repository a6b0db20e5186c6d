//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! POST /signup              - Create an operator account
//! POST /signin              - Verify credentials, mint a bearer token
//! GET  /me                  - Resolve the authenticated operator
//!
//! # Orders (requires auth)
//! POST /orders              - Record an order with its line items
//! GET  /orders              - List orders with items and computed totals
//!
//! # Products (requires auth)
//! GET    /products          - List the catalog
//! POST   /products          - Add a product
//! PUT    /products/{id}     - Partially update a product
//! DELETE /products/{id}     - Delete a product
//! ```

pub mod auth;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post, put},
};
use serde::Serialize;

use crate::state::AppState;

/// Plain `{"message": ...}` response body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Create the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/signin", post(auth::signin))
        .route("/me", get(auth::me))
        .route("/orders", get(orders::list).post(orders::create))
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            put(products::update).delete(products::delete),
        )
}
