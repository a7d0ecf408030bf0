//! Stateless reply pipeline.
//!
//! Every message flows through:
//! 1. `IntentDetector::detect()`: ordered substring rules
//! 2. `extract_order_id()`: digit-run scan, order requests only
//! 3. `dispatch()`: one handler per intent, exhaustive match
//!
//! Nothing is retained between calls.

pub mod entities;
pub mod handlers;
pub mod responder;
pub mod rules;
pub mod types;

pub use entities::extract_order_id;
pub use responder::{Responder, dispatch, generate_reply};
pub use rules::IntentDetector;
pub use types::{Detection, EntitySet, Intent};
