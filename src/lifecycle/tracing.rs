//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter. Module paths
//! are hidden (`with_target(false)`); the structured fields carry the context instead.
//!
//! ```bash
//! # Lifecycle, submissions and suggestions
//! RUST_LOG=info cargo run
//!
//! # Every store request and formatted message
//! RUST_LOG=debug cargo run
//! ```
//!
//! A primary submission at `info` level reads roughly like:
//!
//! ```text
//! INFO waiter_session: Submitting order table="5" lines=2
//! INFO Simulated kitchen accepted order table="5" lines=2
//! INFO Removed entity_type="OrderItem" id=1 size=1
//! INFO Removed entity_type="OrderItem" id=2 size=0
//! INFO Order submitted
//! ```
//!
//! The Gemini API key never appears in any field or `Debug` output.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
