//! Entity extraction over raw message text.

use std::sync::LazyLock;

use regex::Regex;

use crate::pipeline::types::EntitySet;

/// Maximal runs of decimal digits.
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit-run pattern compiles"));

/// Pull the first run of digits out of `message` as an order id.
///
/// Any digit run counts, wherever it appears in the text. Returns an empty
/// set when the message has no digits.
pub fn extract_order_id(message: &str) -> EntitySet {
    match DIGIT_RUN.find(message) {
        Some(m) => EntitySet::with_order_id(m.as_str()),
        None => EntitySet::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_leading_zeros() {
        let entities = extract_order_id("order 00042 please");
        assert_eq!(entities.order_id.as_deref(), Some("00042"));
    }

    #[test]
    fn takes_first_run_only() {
        let entities = extract_order_id("track order 5678 or maybe 1234");
        assert_eq!(entities.order_id.as_deref(), Some("5678"));
    }

    #[test]
    fn digits_glued_to_letters_still_count() {
        let entities = extract_order_id("ord#abc99x");
        assert_eq!(entities.order_id.as_deref(), Some("99"));
    }

    #[test]
    fn non_ascii_digits_count() {
        let entities = extract_order_id("order ١٢٣");
        assert_eq!(entities.order_id.as_deref(), Some("١٢٣"));
    }

    #[test]
    fn no_digits_gives_empty_set() {
        assert!(extract_order_id("track my order").is_empty());
        assert!(extract_order_id("").is_empty());
    }
}
