//! One line of an order as it sits in the edit surface.
//!
//! # Actor Framework
//! This struct implements the [`StoreEntity`](crate::framework::StoreEntity) trait,
//! allowing it to be kept by a [`StoreActor`](crate::framework::StoreActor).
//!
//! See [`impl StoreEntity for OrderItem`](#impl-StoreEntity-for-OrderItem) for details on:
//! - Creation parameters ([`OrderItemCreate`])
//! - Update parameters ([`OrderItemUpdate`])
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for order items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// Quantity every freshly added line starts with.
pub const DEFAULT_QUANTITY: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: ItemId,
    pub dish_name: String,
    /// Raw text from the quantity field; parsed only when the order is validated.
    pub quantity: String,
}

impl OrderItem {
    /// Creates a new OrderItem instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (normally assigned by the store actor)
    /// * `dish_name` - Name of the dish, may be empty while the waiter is typing
    /// * `quantity` - Quantity as typed
    pub fn new(id: ItemId, dish_name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            id,
            dish_name: dish_name.into(),
            quantity: quantity.into(),
        }
    }
}

/// Payload for appending a new line.
#[derive(Debug, Clone, Default)]
pub struct OrderItemCreate {
    pub dish_name: String,
}

/// The editable fields of an [`OrderItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemField {
    DishName,
    Quantity,
}

/// Payload for replacing one field of an existing line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemUpdate {
    pub field: ItemField,
    pub value: String,
}
