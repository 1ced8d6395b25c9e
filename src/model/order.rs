//! The order as a whole: line items plus the form fields around them.
//!
//! [`Order`] is a snapshot taken at submission time and is never stored.
//! [`ValidatedOrder`] is what leaves the crate: quantities are integers and blank
//! optional fields are gone.
use crate::model::OrderItem;
use crate::validation::{parse_quantity, validate, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The two ways an order can leave the waiter's hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Internal submission to the kitchen queue.
    Primary,
    /// Formatted message handed to an external messaging deep-link.
    Secondary,
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Primary => write!(f, "primary"),
            Channel::Secondary => write!(f, "secondary"),
        }
    }
}

/// Snapshot of everything the waiter has entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    pub items: Vec<OrderItem>,
    pub table_number: String,
    pub modifications: String,
    pub destination_contact: String,
}

impl Order {
    /// Validates the order for `channel` and converts it to its submission form.
    pub fn validated(&self, channel: Channel) -> Result<ValidatedOrder, ValidationError> {
        validate(self, channel)?;

        let lines = self
            .items
            .iter()
            .map(|item| {
                parse_quantity(&item.quantity)
                    .map(|quantity| OrderLine {
                        dish_name: item.dish_name.clone(),
                        quantity,
                    })
                    .ok_or(ValidationError::InvalidItem { channel })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ValidatedOrder {
            table_number: self.table_number.clone(),
            lines,
            modifications: non_blank(&self.modifications),
            destination_contact: non_blank(&self.destination_contact),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// A dish line with a checked quantity (always at least 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub dish_name: String,
    pub quantity: u64,
}

/// An order that passed validation, in store order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedOrder {
    pub table_number: String,
    pub lines: Vec<OrderLine>,
    /// Kitchen notes, verbatim. `None` when the field was blank.
    pub modifications: Option<String>,
    pub destination_contact: Option<String>,
}
