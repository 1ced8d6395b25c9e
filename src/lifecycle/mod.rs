//! # System Lifecycle
//!
//! Starts the two actors, wires the controller to the store, and tears both down.
//!
//! ## Wiring
//!
//! The store actor has no dependencies. The controller holds an
//! [`OrderItemClient`](crate::clients::OrderItemClient) clone plus its
//! [`Collaborators`](crate::submission::Collaborators):
//!
//! ```rust,ignore
//! let (store, items) = order_item_actor::new(buffer);
//! let (controller, comanda) =
//!     ComandaController::new(buffer, items.clone(), collaborators, settings);
//! let handles = vec![tokio::spawn(store.run()), tokio::spawn(controller.run())];
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. Drop the clients, closing the controller's mailbox.
//! 2. The controller exits and drops its store client.
//! 3. The store's mailbox closes and it exits too.
//!
//! The dependency graph is acyclic, so channel closure alone is enough.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the log subscriber; see the [`tracing`] module.

pub mod comanda_system;
pub mod tracing;

pub use comanda_system::*;
pub use self::tracing::*;
