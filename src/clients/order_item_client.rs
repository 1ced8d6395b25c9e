//! # OrderItem Client
//!
//! Provides a high-level API for editing the dish list of the order being composed.
//! It wraps a `StoreClient<OrderItem>` and exposes the waiter-facing operations.
use crate::framework::{FrameworkError, StoreClient};
use crate::model::{ItemField, ItemId, OrderItem, OrderItemCreate, OrderItemUpdate};
use crate::order_item_actor::OrderItemError;
use tracing::{debug, instrument};

/// Client for interacting with the OrderItem store actor.
#[derive(Clone)]
pub struct OrderItemClient {
    inner: StoreClient<OrderItem>,
}

impl OrderItemClient {
    pub fn new(inner: StoreClient<OrderItem>) -> Self {
        Self { inner }
    }

    fn map_error(e: FrameworkError) -> OrderItemError {
        OrderItemError::ActorCommunicationError(e.to_string())
    }

    /// Appends a line with the given name (or an empty one) and quantity `"1"`.
    ///
    /// Returns the freshly assigned ID.
    #[instrument(skip(self))]
    pub async fn add_item(&self, initial_name: Option<&str>) -> Result<ItemId, OrderItemError> {
        debug!("Sending request");
        let params = OrderItemCreate {
            dish_name: initial_name.unwrap_or_default().to_string(),
        };
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Removes a line. Returns `false` when the ID was not present.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: ItemId) -> Result<bool, OrderItemError> {
        debug!("Sending request");
        self.inner.remove(id).await.map_err(Self::map_error)
    }

    /// Replaces one field of a line. Returns `None` when the ID was not present.
    #[instrument(skip(self, value))]
    pub async fn update_item(
        &self,
        id: ItemId,
        field: ItemField,
        value: impl Into<String>,
    ) -> Result<Option<OrderItem>, OrderItemError> {
        debug!("Sending request");
        let update = OrderItemUpdate {
            field,
            value: value.into(),
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Empties the dish list. Returns how many lines were dropped.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<usize, OrderItemError> {
        debug!("Sending request");
        self.inner.clear().await.map_err(Self::map_error)
    }

    /// Snapshot of every line, in the order they were added.
    #[instrument(skip(self))]
    pub async fn items(&self) -> Result<Vec<OrderItem>, OrderItemError> {
        self.inner.list().await.map_err(Self::map_error)
    }
}
