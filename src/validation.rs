//! Submission rules shared by both channels.
//!
//! [`validate`] is pure: it only looks at the snapshot it is given, and the same
//! snapshot always yields the same answer. Rules run in a fixed order and the first
//! failure wins.

use crate::model::{Channel, Order};
use thiserror::Error;

const MISSING_FIELDS_PRIMARY: &str =
    "Aggiungere almeno un piatto e specificare il numero del tavolo.";
const MISSING_FIELDS_SECONDARY: &str =
    "Per inviare su WhatsApp, sono necessari almeno un piatto, il tavolo e il numero WhatsApp.";
const INVALID_ITEM: &str =
    "Controlla che tutti i piatti abbiano un nome e una quantità valida (almeno 1).";

/// Why an order cannot be sent on a given channel.
///
/// The `Display` text is the message shown to the waiter.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// No dishes, or no table number.
    #[error("{}", missing_fields_message(.channel))]
    MissingRequiredFields { channel: Channel },

    /// Secondary channel without a destination contact.
    #[error("{}", MISSING_FIELDS_SECONDARY)]
    MissingContact,

    /// A dish without a name, or with a quantity that is not a whole number of at least 1.
    #[error("{}", INVALID_ITEM)]
    InvalidItem { channel: Channel },
}

fn missing_fields_message(channel: &Channel) -> &'static str {
    match channel {
        Channel::Primary => MISSING_FIELDS_PRIMARY,
        Channel::Secondary => MISSING_FIELDS_SECONDARY,
    }
}

/// Parses a quantity field. Surrounding whitespace is ignored; zero is rejected.
///
/// Anything up to `u64::MAX` is accepted.
pub fn parse_quantity(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|quantity| *quantity >= 1)
}

/// Decides whether `order` may be sent on `channel`.
pub fn validate(order: &Order, channel: Channel) -> Result<(), ValidationError> {
    if order.items.is_empty() || order.table_number.is_empty() {
        return Err(ValidationError::MissingRequiredFields { channel });
    }

    if channel == Channel::Secondary && order.destination_contact.is_empty() {
        return Err(ValidationError::MissingContact);
    }

    let all_valid = order
        .items
        .iter()
        .all(|item| !item.dish_name.trim().is_empty() && parse_quantity(&item.quantity).is_some());
    if !all_valid {
        return Err(ValidationError::InvalidItem { channel });
    }

    Ok(())
}
