//! StoreEntity trait implementation for the OrderItem domain type.
//!
//! This module contains the [`StoreEntity`] trait implementation
//! that enables [`OrderItem`] to be kept by the generic [`crate::framework::StoreActor`].

use crate::framework::StoreEntity;
use crate::model::{ItemField, ItemId, OrderItem, OrderItemCreate, OrderItemUpdate, DEFAULT_QUANTITY};

impl StoreEntity for OrderItem {
    type Id = ItemId;
    type Create = OrderItemCreate;
    type Update = OrderItemUpdate;

    /// New lines always start with a quantity of one.
    fn from_create_params(id: ItemId, params: OrderItemCreate) -> Self {
        Self::new(id, params.dish_name, DEFAULT_QUANTITY)
    }

    /// Replaces exactly the named field; the other one is left untouched.
    fn on_update(&mut self, update: OrderItemUpdate) {
        match update.field {
            ItemField::DishName => self.dish_name = update.value,
            ItemField::Quantity => self.quantity = update.value,
        }
    }
}
