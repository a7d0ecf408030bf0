//! Shared types for the reply pipeline.

// ── Intent ──────────────────────────────────────────────────────────

/// The closed set of intents a message can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Question answered from the FAQ table.
    Faq,
    /// Order-status request.
    TrackOrder,
    Greeting,
    /// Catch-all when no rule matched.
    Unknown,
}

impl Intent {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Faq => "faq",
            Self::TrackOrder => "track_order",
            Self::Greeting => "greeting",
            Self::Unknown => "unknown",
        }
    }
}

// ── Entities ────────────────────────────────────────────────────────

/// Entities pulled out of a message.
///
/// The populated field depends on the intent: `keyword` for `Faq`,
/// `order_id` (optional) for `TrackOrder`, nothing otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntitySet {
    pub keyword: Option<String>,
    /// Kept as text so leading zeros survive.
    pub order_id: Option<String>,
}

impl EntitySet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Self::default()
        }
    }

    pub fn with_order_id(order_id: impl Into<String>) -> Self {
        Self {
            order_id: Some(order_id.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keyword.is_none() && self.order_id.is_none()
    }
}

// ── Detection ───────────────────────────────────────────────────────

/// Result of running the intent detector over one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub intent: Intent,
    pub entities: EntitySet,
}

impl Detection {
    pub fn new(intent: Intent, entities: EntitySet) -> Self {
        Self { intent, entities }
    }

    pub fn unknown() -> Self {
        Self::new(Intent::Unknown, EntitySet::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_labels() {
        assert_eq!(Intent::Faq.label(), "faq");
        assert_eq!(Intent::TrackOrder.label(), "track_order");
        assert_eq!(Intent::Greeting.label(), "greeting");
        assert_eq!(Intent::Unknown.label(), "unknown");
    }

    #[test]
    fn entity_set_constructors() {
        assert!(EntitySet::empty().is_empty());

        let faq = EntitySet::with_keyword("refund");
        assert_eq!(faq.keyword.as_deref(), Some("refund"));
        assert!(faq.order_id.is_none());

        let order = EntitySet::with_order_id("0042");
        assert_eq!(order.order_id.as_deref(), Some("0042"));
        assert!(!order.is_empty());
    }

    #[test]
    fn unknown_detection_has_no_entities() {
        let detection = Detection::unknown();
        assert_eq!(detection.intent, Intent::Unknown);
        assert!(detection.entities.is_empty());
    }
}
