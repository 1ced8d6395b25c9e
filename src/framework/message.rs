//! # Generic Messages
//!
//! The request enum exchanged between a [`StoreClient`](crate::framework::StoreClient)
//! and its [`StoreActor`](crate::framework::StoreActor).

use crate::framework::entity::StoreEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the store actor.
///
/// The variants cover the whole lifecycle of an ordered collection:
///
/// - **Create**: append a new entity built from [`StoreEntity::Create`].
/// - **Update**: mutate one entity in place. Absent IDs are a no-op and answer `None`.
/// - **Remove**: drop one entity. Absent IDs are a no-op and answer `false`.
/// - **Clear**: drop every entity, answering how many were removed.
/// - **List**: snapshot of every entity in insertion order.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<Option<T>>,
    },
    Remove {
        id: T::Id,
        respond_to: Response<bool>,
    },
    Clear {
        respond_to: Response<usize>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}
