//! Per-intent reply handlers.
//!
//! Each handler is a pure function of its entities and a read-only table.
//! Missing entities or unknown keys become informational replies, never errors.

use crate::knowledge::{FaqTable, OrderTable};
use crate::pipeline::types::EntitySet;

pub const GREETING_REPLY: &str =
    "Hello! 👋 I am your AI support assistant. How can I help you today?";

pub const FALLBACK_REPLY: &str = "I'm not entirely sure about that yet 🤔, \
    but I'll note this question for improvement. \
    Meanwhile, could you rephrase or ask about orders, returns, or account support?";

pub const NO_FAQ_ANSWER_REPLY: &str = "I'm sorry, I don't have information about that yet.";

pub const MISSING_ORDER_ID_REPLY: &str = "Please provide your order ID to track your order.";

/// Trigger keyword groups folded onto the canonical FAQ topic.
const FAQ_TOPICS: &[(&str, &[&str])] = &[
    ("working hours", &["timings", "working hours"]),
    ("return policy", &["return policy", "refund"]),
    ("reset password", &["reset password", "forgot password"]),
    ("contact", &["contact", "email", "phone"]),
];

/// Map a matched keyword onto its canonical FAQ topic.
///
/// Groups are tested in order by substring; a keyword outside every group
/// is used as-is.
pub fn canonical_topic(keyword: &str) -> String {
    let keyword = keyword.to_lowercase();
    FAQ_TOPICS
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|t| keyword.contains(t)))
        .map(|(topic, _)| (*topic).to_string())
        .unwrap_or(keyword)
}

pub fn handle_faq(entities: &EntitySet, faq: &FaqTable) -> String {
    let topic = canonical_topic(entities.keyword.as_deref().unwrap_or_default());
    faq.answer(&topic)
        .filter(|answer| !answer.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| NO_FAQ_ANSWER_REPLY.to_string())
}

pub fn handle_track_order(entities: &EntitySet, orders: &OrderTable) -> String {
    let Some(order_id) = entities.order_id.as_deref() else {
        return MISSING_ORDER_ID_REPLY.to_string();
    };

    match orders.status(order_id).filter(|status| !status.is_empty()) {
        Some(status) => format!("Your order {order_id} status: {status}"),
        None => format!(
            "I could not find any details for order ID {order_id}. \
             Please check the ID and try again."
        ),
    }
}

pub fn handle_greeting() -> String {
    GREETING_REPLY.to_string()
}

/// Reply when nothing matched. The message is not echoed back.
pub fn handle_fallback(_message: &str) -> String {
    FALLBACK_REPLY.to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn topic_groups() {
        assert_eq!(canonical_topic("timings"), "working hours");
        assert_eq!(canonical_topic("working hours"), "working hours");
        assert_eq!(canonical_topic("refund"), "return policy");
        assert_eq!(canonical_topic("forgot password"), "reset password");
        assert_eq!(canonical_topic("email"), "contact");
        assert_eq!(canonical_topic("phone"), "contact");
    }

    #[test]
    fn unmapped_keyword_used_verbatim() {
        assert_eq!(canonical_topic("Shipping"), "shipping");
        assert_eq!(canonical_topic(""), "");
    }

    #[test]
    fn faq_answers_from_table() {
        let faq = FaqTable::default();
        let reply = handle_faq(&EntitySet::with_keyword("refund"), &faq);
        assert_eq!(reply, "You can return any product within 30 days of delivery.");
    }

    #[test]
    fn faq_custom_topic_looked_up_verbatim() {
        let faq = FaqTable::new(HashMap::from([(
            "shipping".to_string(),
            "Free over $50.".to_string(),
        )]));
        assert_eq!(
            handle_faq(&EntitySet::with_keyword("shipping"), &faq),
            "Free over $50."
        );
    }

    #[test]
    fn faq_missing_topic() {
        let faq = FaqTable::new(HashMap::new());
        assert_eq!(
            handle_faq(&EntitySet::with_keyword("contact"), &faq),
            NO_FAQ_ANSWER_REPLY
        );
        assert_eq!(handle_faq(&EntitySet::empty(), &faq), NO_FAQ_ANSWER_REPLY);
    }

    #[test]
    fn faq_blank_answer_counts_as_missing() {
        let faq = FaqTable::new(HashMap::from([("contact".to_string(), String::new())]));
        assert_eq!(
            handle_faq(&EntitySet::with_keyword("email"), &faq),
            NO_FAQ_ANSWER_REPLY
        );
    }

    #[test]
    fn track_order_blank_status_counts_as_unknown() {
        let orders = OrderTable::new(HashMap::from([("42".to_string(), String::new())]));
        assert_eq!(
            handle_track_order(&EntitySet::with_order_id("42"), &orders),
            "I could not find any details for order ID 42. Please check the ID and try again."
        );
    }

    #[test]
    fn track_order_found() {
        let orders = OrderTable::default();
        assert_eq!(
            handle_track_order(&EntitySet::with_order_id("1234"), &orders),
            "Your order 1234 status: Delivered on 25-11-2025"
        );
    }

    #[test]
    fn track_order_unknown_id() {
        let orders = OrderTable::default();
        let reply = handle_track_order(&EntitySet::with_order_id("0000"), &orders);
        assert_eq!(
            reply,
            "I could not find any details for order ID 0000. Please check the ID and try again."
        );
    }

    #[test]
    fn track_order_missing_id() {
        let orders = OrderTable::default();
        assert_eq!(
            handle_track_order(&EntitySet::empty(), &orders),
            MISSING_ORDER_ID_REPLY
        );
    }

    #[test]
    fn fixed_replies() {
        assert_eq!(handle_greeting(), GREETING_REPLY);
        assert_eq!(handle_fallback("whatever"), FALLBACK_REPLY);
        assert!(!handle_fallback("secret words").contains("secret"));
    }
}
