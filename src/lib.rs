//! Support Bot: rule-based customer support responder.

pub mod channels;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod pipeline;
