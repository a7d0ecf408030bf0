//! Read-only lookup tables consulted by the intent handlers.
//!
//! Both tables are built once at startup (defaults or a JSON file) and are
//! never mutated afterwards, so they can be shared across requests behind
//! an `Arc` without locking.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::error::KnowledgeError;

/// Canonical FAQ topic → answer text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqTable {
    entries: HashMap<String, String>,
}

impl FaqTable {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Load a table from a JSON object of `topic: answer` pairs.
    pub fn load(path: &Path) -> Result<Self, KnowledgeError> {
        let entries = read_string_map(path)?;
        info!(path = %path.display(), entries = entries.len(), "Loaded FAQ table");
        Ok(Self::new(entries))
    }

    /// Answer for a canonical topic. Exact match.
    pub fn answer(&self, topic: &str) -> Option<&str> {
        self.entries.get(topic).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FaqTable {
    fn default() -> Self {
        Self::new(string_map(&[
            ("working hours", "Our customer support is available 24/7."),
            (
                "return policy",
                "You can return any product within 30 days of delivery.",
            ),
            (
                "reset password",
                "To reset your password, go to Settings > Account > Reset Password.",
            ),
            (
                "contact",
                "You can contact us at support@example.com or call +1-234-567-890.",
            ),
        ]))
    }
}

/// Order id → human-readable status.
///
/// Stands in for a real order-status service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTable {
    entries: HashMap<String, String>,
}

impl OrderTable {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Load a table from a JSON object of `order_id: status` pairs.
    pub fn load(path: &Path) -> Result<Self, KnowledgeError> {
        let entries = read_string_map(path)?;
        info!(path = %path.display(), entries = entries.len(), "Loaded order table");
        Ok(Self::new(entries))
    }

    /// Status for an order id. Exact match, no partial ids.
    pub fn status(&self, order_id: &str) -> Option<&str> {
        self.entries.get(order_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for OrderTable {
    fn default() -> Self {
        Self::new(string_map(&[
            ("1234", "Delivered on 25-11-2025"),
            ("5678", "Out for delivery. Expected today."),
            ("9999", "Order confirmed. Preparing for dispatch."),
        ]))
    }
}

fn string_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn read_string_map(path: &Path) -> Result<HashMap<String, String>, KnowledgeError> {
    let raw = std::fs::read_to_string(path).map_err(|source| KnowledgeError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| KnowledgeError::Parse {
        path: path.display().to_string(),
        source,
    })
}
