//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the task that owns an ordered collection of
//! entities. It processes requests sequentially, so every mutation completes before the
//! next one is looked at and no caller ever observes a half-applied change.

use crate::framework::client::StoreClient;
use crate::framework::entity::StoreEntity;
use crate::framework::message::StoreRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The generic actor that manages an ordered collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Ordering**: IDs come from the internal `next_id` counter and only ever grow,
/// so the `BTreeMap` keyed by ID iterates in insertion order. The counter is not
/// reset by `Clear`, which keeps IDs unique for the lifetime of the actor.
///
/// **Missing IDs**: `Update` and `Remove` on an unknown ID are no-ops, not errors.
/// The UI may race a removal against a field edit and neither should fail.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StoreActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Use**: Clone the client wherever the collection must be read or changed.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. If the channel is full,
    /// calls to the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "OrderItem" instead of "comanda::model::order_item::OrderItem")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    let item = T::from_create_params(id, params);
                    self.store.insert(id, item);
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(id));
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let updated = self.store.get_mut(&id).map(|item| {
                        item.on_update(update);
                        item.clone()
                    });
                    if updated.is_none() {
                        debug!(entity_type, %id, "Update ignored, not found");
                    }
                    let _ = respond_to.send(Ok(updated));
                }
                StoreRequest::Remove { id, respond_to } => {
                    let removed = self.store.remove(&id).is_some();
                    if removed {
                        info!(entity_type, %id, size = self.store.len(), "Removed");
                    } else {
                        debug!(entity_type, %id, "Remove ignored, not found");
                    }
                    let _ = respond_to.send(Ok(removed));
                }
                StoreRequest::Clear { respond_to } => {
                    let removed = self.store.len();
                    self.store.clear();
                    info!(entity_type, removed, "Cleared");
                    let _ = respond_to.send(Ok(removed));
                }
                StoreRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
