//! # Submission Controller
//!
//! Holds the non-item form fields (table, notes, contact) and drives both submission
//! channels plus the suggestion button. It is an actor of its own: the UI talks to it
//! through a [`ComandaClient`](crate::clients::ComandaClient) and watches its
//! [`ControllerSnapshot`] to render feedback.
//!
//! - [`controller`] - the [`ComandaController`] actor and its collaborators
//! - [`status`] - status, snapshot and outcome types
//! - [`message`] - the request enum

pub mod controller;
pub mod message;
pub mod status;

pub use controller::*;
pub use message::*;
pub use status::*;
