//! Domain types.
//!
//! These represent validated domain objects separate from database row types.
//! Their serialized field names are the wire shapes of the JSON API.

pub mod order;
pub mod product;
pub mod user;

pub use order::{NewOrder, NewOrderItem, OrderItem, OrderSummary};
pub use product::{NewProduct, Product, ProductPatch};
pub use user::User;
