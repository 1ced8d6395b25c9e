//! # Dish Suggestions
//!
//! The sparkle button asks a [`SuggestionAdapter`] for one dish name and appends it
//! to the order. Adapters must return the bare name: no quotes, no commentary.
//!
//! - [`GeminiSuggester`] - asks the Gemini generative language API
//! - [`PresetSuggester`] - cycles through the quick-add menu, no network needed

pub mod gemini;
pub mod preset;

pub use gemini::*;
pub use preset::*;

use async_trait::async_trait;
use thiserror::Error;

/// Why no dish name could be suggested.
///
/// The `Display` text is shown to the waiter as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SuggestionError {
    /// The service answered, but with nothing usable.
    #[error("Received an empty suggestion from the AI.")]
    Empty,

    /// The request never produced a response (network, TLS, malformed body).
    #[error("Failed to get a dish suggestion. Please try again. ({0})")]
    Request(String),

    /// The service answered with an error status.
    #[error("Suggestion service error {status}: {message}")]
    Api { status: u16, message: String },

    /// The suggestion task stopped before reporting back.
    #[error("Suggestion interrupted: {0}")]
    Interrupted(String),
}

/// Source of candidate dish names.
#[async_trait]
pub trait SuggestionAdapter: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn suggest(&self) -> Result<String, SuggestionError>;
}

const QUOTES: [char; 7] = ['"', '\'', '`', '“', '”', '«', '»'];

/// Reduces raw model output to a bare dish name.
///
/// Keeps the first non-blank line, then strips surrounding whitespace and quotation
/// marks. Fails with [`SuggestionError::Empty`] if nothing is left.
pub fn clean_suggestion(raw: &str) -> Result<String, SuggestionError> {
    let name = raw
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .trim_matches(|c: char| QUOTES.contains(&c))
        .trim();

    if name.is_empty() {
        return Err(SuggestionError::Empty);
    }
    Ok(name.to_string())
}
