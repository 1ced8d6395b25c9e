//! # StoreEntity Trait
//!
//! The contract a line-item type implements to be kept by the generic
//! [`StoreActor`](crate::framework::StoreActor).
//!
//! # Architecture Note
//! The store actor owns an *ordered* collection. Identifiers are generated by the
//! actor from a monotonically increasing `u32` counter, so an identifier-ordered map
//! iterates in insertion order and no identifier is ever handed out twice.
//!
//! Associated types keep each store honest: an `OrderItem` store only accepts
//! `OrderItemCreate` payloads, and the compiler rejects anything else.

use std::fmt::{Debug, Display};

/// Trait that any entity must implement to be managed by a [`StoreActor`](crate::framework::StoreActor).
///
/// Both hooks are infallible: the edit surface accepts any text, and
/// validity is decided later, at the submission boundary.
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from `u32` for automatic ID generation and ordered
    /// the same way as the counter it comes from.
    type Id: Ord + Copy + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Construct the full entity from the freshly assigned ID and the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Self;

    /// Apply an update in place.
    fn on_update(&mut self, update: Self::Update);
}
