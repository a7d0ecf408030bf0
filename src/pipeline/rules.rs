//! Keyword rules engine for intent detection.
//!
//! Rules are plain substring checks over the lowercased message, evaluated
//! in a fixed order where the first match wins:
//! - "track" and "order" both present → TrackOrder (with order id)
//! - FAQ trigger keywords, in list order → Faq (with the matched keyword)
//! - greeting words → Greeting
//! - anything else → Unknown
//!
//! There are no word boundaries: "shine" contains "hi" and greets.

use tracing::debug;

use crate::pipeline::entities::extract_order_id;
use crate::pipeline::types::{Detection, EntitySet, Intent};

/// Terms that must all appear for a message to be an order-status request.
const TRACK_ORDER_TERMS: &[&str] = &["track", "order"];

/// FAQ trigger keywords. Order decides which keyword is reported.
const FAQ_KEYWORDS: &[&str] = &[
    "working hours",
    "timings",
    "return policy",
    "refund",
    "reset password",
    "forgot password",
    "contact",
    "email",
    "phone",
];

const GREETING_WORDS: &[&str] = &["hi", "hello", "hey"];

/// Ordered substring rules mapping a message to an [`Intent`].
#[derive(Debug, Clone, Copy)]
pub struct IntentDetector {
    track_order_terms: &'static [&'static str],
    faq_keywords: &'static [&'static str],
    greeting_words: &'static [&'static str],
}

impl IntentDetector {
    /// Create a detector with the built-in rule set.
    pub const fn default_rules() -> Self {
        Self {
            track_order_terms: TRACK_ORDER_TERMS,
            faq_keywords: FAQ_KEYWORDS,
            greeting_words: GREETING_WORDS,
        }
    }

    /// Classify a message. Always resolves to exactly one intent.
    pub fn detect(&self, message: &str) -> Detection {
        let normalized = message.to_lowercase();

        let detection = if self
            .track_order_terms
            .iter()
            .all(|term| normalized.contains(term))
        {
            Detection::new(Intent::TrackOrder, extract_order_id(&normalized))
        } else if let Some(keyword) = self
            .faq_keywords
            .iter()
            .find(|kw| normalized.contains(*kw))
        {
            Detection::new(Intent::Faq, EntitySet::with_keyword(*keyword))
        } else if self
            .greeting_words
            .iter()
            .any(|word| normalized.contains(word))
        {
            Detection::new(Intent::Greeting, EntitySet::empty())
        } else {
            Detection::unknown()
        };

        debug!(
            intent = detection.intent.label(),
            keyword = ?detection.entities.keyword,
            order_id = ?detection.entities.order_id,
            "Message classified"
        );

        detection
    }
}

impl Default for IntentDetector {
    fn default() -> Self {
        Self::default_rules()
    }
}
