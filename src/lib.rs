//! # Comanda
//!
//! > **Order composition for the restaurant floor, with two ways to send it.**
//!
//! A waiter builds an order (dish lines, table number, kitchen notes), then either submits
//! it to the kitchen queue (the *primary* channel) or hands a formatted message to a
//! messaging app through a deep-link (the *secondary* channel). A suggestion button asks a
//! text-generation service for a dish name and appends it to the order.
//!
//! ## Architecture
//!
//! Two actors, each owning its state and handling one request at a time:
//!
//! - The **store actor** ([`order_item_actor`]) keeps the dish lines in insertion order.
//!   It is a [`framework::StoreActor`] specialised for [`model::OrderItem`].
//! - The **controller actor** ([`submission`]) owns the remaining form fields and the
//!   submission status. It reads the store through a client, validates, formats and
//!   dispatches to its collaborators.
//!
//! The UI never touches a channel directly. It holds the typed [`clients`] and watches
//! [`submission::ControllerSnapshot`]s for feedback.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Generic ordered store actor, its client, and a `MockClient` for tests.
//!
//! ### 2. The Domain ([`model`], [`validation`], [`formatter`])
//! Pure data and pure functions: what an order is, when it may be sent, and how it reads
//! as a chat message.
//!
//! ### 3. The Workflow ([`submission`])
//! The controller actor: both channels, the suggestion button and the status timer.
//!
//! ### 4. The Outside World ([`transport`], [`suggestion`], [`link`])
//! Traits at every external seam, with a simulated kitchen, an in-process kitchen queue,
//! a Gemini client, a preset fallback, and two link openers.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! Reads the environment, spawns and wires the actors, installs tracing, shuts down.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod formatter;
pub mod framework;
pub mod lifecycle;
pub mod link;
pub mod model;
pub mod order_item_actor;
pub mod submission;
pub mod suggestion;
pub mod transport;
pub mod validation;
