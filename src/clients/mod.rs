//! Type-safe wrappers around the actors' raw message channels.

pub mod comanda_client;
pub mod order_item_client;

pub use comanda_client::*;
pub use order_item_client::*;
