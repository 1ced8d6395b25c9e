//! Observable state of the submission controller.

use crate::model::ItemId;
use serde::Serialize;

/// Feedback shown after a successful primary submission.
pub const SUCCESS_MESSAGE: &str = "Comanda inviata con successo!";

/// Outcome of the most recent submission attempt.
///
/// The error text lives inside the `Error` variant, so a status and its message
/// can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error { message: String },
}

impl SubmissionStatus {
    /// The single feedback line to show, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Success => Some(SUCCESS_MESSAGE),
            SubmissionStatus::Error { message } => Some(message),
        }
    }
}

/// Everything the form needs to render, taken at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ControllerSnapshot {
    pub table_number: String,
    pub modifications: String,
    pub destination_contact: String,
    pub status: SubmissionStatus,
    /// A primary submission is in flight.
    pub is_submitting: bool,
    /// A suggestion request is in flight.
    pub is_suggesting: bool,
}

/// Result of a primary submission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The transport accepted the order and the form was reset.
    Submitted,
    /// Another primary submission was still in flight; nothing happened.
    Ignored,
}

/// Result of a suggestion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionOutcome {
    /// The suggested dish was appended to the order.
    Added { id: ItemId, name: String },
    /// Another suggestion was still in flight; nothing happened.
    Ignored,
}
