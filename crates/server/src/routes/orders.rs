//! Order route handlers.

use axum::{Json, extract::State};
use serde::Serialize;

use larder_core::OrderId;

use crate::db::OrderRepository;
use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::models::{NewOrder, OrderSummary};
use crate::state::AppState;

/// Response body for `POST /orders`.
#[derive(Debug, Serialize)]
pub struct OrderCreatedResponse {
    pub message: String,
    pub order_id: OrderId,
}

/// Response body for `GET /orders`.
#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    pub orders: Vec<OrderSummary>,
}

/// `POST /orders` - record an order with all of its line items atomically.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
    Json(order): Json<NewOrder>,
) -> Result<Json<OrderCreatedResponse>> {
    let order_id = OrderRepository::new(state.pool())
        .create(identity.user_id, &order)
        .await?;

    tracing::info!(%order_id, items = order.items.len(), "Order recorded");

    Ok(Json(OrderCreatedResponse {
        message: "Order created successfully".to_string(),
        order_id,
    }))
}

/// `GET /orders` - list the owner's orders with items and computed totals.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
) -> Result<Json<OrdersResponse>> {
    let orders = OrderRepository::new(state.pool())
        .list(identity.user_id)
        .await?;

    Ok(Json(OrdersResponse { orders }))
}
