//! Rendering an order as a chat message and wrapping it in a messaging deep-link.

use crate::model::ValidatedOrder;

/// Horizontal rule between message sections.
pub const SEPARATOR: &str = "---------------------";

/// Host used for deep-links when none is configured.
pub const DEFAULT_MESSAGING_HOST: &str = "wa.me";

/// Renders `order` as the fixed-layout text block read by the kitchen.
///
/// ```text
/// *Nuova Comanda*
/// ---------------------
/// *Tavolo:* 5
/// ---------------------
/// - Margherita (x2)
/// ---------------------
/// *Modifiche:* senza basilico
/// ---------------------
/// ```
///
/// The last two separators and the notes line only appear when there are notes.
pub fn format_message(order: &ValidatedOrder) -> String {
    let mut lines = vec![
        "*Nuova Comanda*".to_string(),
        SEPARATOR.to_string(),
        format!("*Tavolo:* {}", order.table_number),
        SEPARATOR.to_string(),
    ];

    lines.extend(
        order
            .lines
            .iter()
            .map(|line| format!("- {} (x{})", line.dish_name, line.quantity)),
    );

    if let Some(modifications) = &order.modifications {
        lines.push(SEPARATOR.to_string());
        lines.push(format!("*Modifiche:* {modifications}"));
        lines.push(SEPARATOR.to_string());
    }

    lines.join("\n")
}

/// Keeps only the ASCII digits of a phone number, e.g. `+39 312-345` becomes `39312345`.
pub fn normalize_contact(contact: &str) -> String {
    contact.chars().filter(char::is_ascii_digit).collect()
}

/// Builds `https://{host}/{digits}?text={percent-encoded message}`.
pub fn deep_link(host: &str, contact: &str, message: &str) -> String {
    format!(
        "https://{}/{}?text={}",
        host,
        normalize_contact(contact),
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderLine;

    fn order(lines: &[(&str, u64)], modifications: Option<&str>) -> ValidatedOrder {
        ValidatedOrder {
            table_number: "5".into(),
            lines: lines
                .iter()
                .map(|(name, quantity)| OrderLine {
                    dish_name: name.to_string(),
                    quantity: *quantity,
                })
                .collect(),
            modifications: modifications.map(str::to_string),
            destination_contact: None,
        }
    }

    #[test]
    fn test_message_without_modifications_ends_after_items() {
        let message = format_message(&order(&[("Margherita", 2), ("Diavola", 1)], None));
        assert_eq!(
            message,
            "*Nuova Comanda*\n\
             ---------------------\n\
             *Tavolo:* 5\n\
             ---------------------\n\
             - Margherita (x2)\n\
             - Diavola (x1)"
        );
    }

    #[test]
    fn test_message_with_modifications() {
        let message = format_message(&order(&[("Tagliata con patatine", 1)], Some("ben cotta")));
        assert_eq!(
            message,
            "*Nuova Comanda*\n\
             ---------------------\n\
             *Tavolo:* 5\n\
             ---------------------\n\
             - Tagliata con patatine (x1)\n\
             ---------------------\n\
             *Modifiche:* ben cotta\n\
             ---------------------"
        );
    }

    #[test]
    fn test_one_line_per_item_in_order() {
        let dishes = [("Olive ascolane", 3), ("Patatine fritte", 1), ("Anelli di cipolla", 12)];
        let message = format_message(&order(&dishes, None));

        let item_lines: Vec<&str> = message.lines().filter(|l| l.starts_with("- ")).collect();
        let expected: Vec<String> = dishes
            .iter()
            .map(|(name, qty)| format!("- {name} (x{qty})"))
            .collect();
        assert_eq!(item_lines, expected);
    }

    #[test]
    fn test_modifications_reappear_verbatim() {
        let notes = "  senza pepe,\ncottura al dente  ";
        let message = format_message(&order(&[("Penne zola e noci", 1)], Some(notes)));
        assert!(message.contains(&format!("*Modifiche:* {notes}")));
    }

    #[test]
    fn test_normalize_contact_strips_non_digits() {
        assert_eq!(normalize_contact("+39 312-345 6789"), "393123456789");
        assert_eq!(normalize_contact("abc"), "");
    }

    #[test]
    fn test_deep_link_encodes_message() {
        let url = deep_link("wa.me", "+39 312 345 6789", "*Nuova Comanda*\n- Pizza (x1)");
        assert!(url.starts_with("https://wa.me/393123456789?text="));

        let text = url.split_once("?text=").unwrap().1;
        assert!(!text.contains(' ') && !text.contains('\n'));
        assert_eq!(
            urlencoding::decode(text).unwrap(),
            "*Nuova Comanda*\n- Pizza (x1)"
        );
    }
}
