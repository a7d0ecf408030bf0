//! Channels: the layers that carry user messages into the pipeline.
//!
//! Blank input is answered here and never reaches intent detection.

pub mod cli;
pub mod http;

pub use cli::CliChannel;
pub use http::{ChatRequest, ChatResponse, chat_routes};

use crate::pipeline::Responder;

pub const EMPTY_MESSAGE_REPLY: &str = "Please type a message so I can help you.";

/// Reply to a raw user message, short-circuiting blank input.
pub fn reply_to(responder: &Responder, raw: &str) -> String {
    if raw.trim().is_empty() {
        return EMPTY_MESSAGE_REPLY.to_string();
    }
    responder.reply(raw)
}
