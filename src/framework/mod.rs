//! Generic actor framework for ordered entity stores.
//!
//! # Main Components
//!
//! - [`StoreEntity`] - Trait that line-item types implement to be managed by a store actor
//! - [`StoreActor`] - Generic actor that owns an ordered collection of entities
//! - [`StoreClient`] - Type-safe async handle for talking to a store actor
//! - [`FrameworkError`] - Errors raised by the plumbing itself
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use entity::StoreEntity;
pub use error::FrameworkError;
pub use message::{Response, StoreRequest};
