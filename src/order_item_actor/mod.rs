//! # OrderItem Store Actor
//!
//! The line items of the order being composed live in a single
//! [`StoreActor<OrderItem>`](crate::framework::StoreActor). Every UI event that touches
//! the dish list becomes one request, applied in full before the next one.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](crate::framework::StoreEntity) implementation for [`OrderItem`]
//! - [`error`] - [`OrderItemError`] type for client-side failures
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use comanda::order_item_actor;
//! use comanda::model::ItemField;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = order_item_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let id = client.add_item(Some("Penne all'arrabbiata")).await?;
//!     client.update_item(id, ItemField::Quantity, "2").await?;
//!     assert_eq!(client.items().await?[0].quantity, "2");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderItemClient;
use crate::framework::StoreActor;
use crate::model::OrderItem;

/// Creates a new OrderItem store actor and its client.
pub fn new(buffer_size: usize) -> (StoreActor<OrderItem>, OrderItemClient) {
    let (actor, generic_client) = StoreActor::new(buffer_size);
    (actor, OrderItemClient::new(generic_client))
}
