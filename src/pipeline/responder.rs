//! Reply dispatch: detect the intent, then route to exactly one handler.

use std::sync::Arc;

use crate::knowledge::{FaqTable, OrderTable};
use crate::pipeline::handlers::{handle_fallback, handle_faq, handle_greeting, handle_track_order};
use crate::pipeline::rules::IntentDetector;
use crate::pipeline::types::{Detection, Intent};

/// Built-in rules, shared by every free-function call.
static DEFAULT_DETECTOR: IntentDetector = IntentDetector::default_rules();

/// Produce a reply for `message` using the default detector rules.
pub fn generate_reply(message: &str, faq: &FaqTable, orders: &OrderTable) -> String {
    let detection = DEFAULT_DETECTOR.detect(message);
    dispatch(&detection, message, faq, orders)
}

/// Route a detection to its handler. The match is exhaustive over [`Intent`].
pub fn dispatch(detection: &Detection, message: &str, faq: &FaqTable, orders: &OrderTable) -> String {
    match detection.intent {
        Intent::Faq => handle_faq(&detection.entities, faq),
        Intent::TrackOrder => handle_track_order(&detection.entities, orders),
        Intent::Greeting => handle_greeting(),
        Intent::Unknown => handle_fallback(message),
    }
}

/// Detector plus the shared tables, built once and shared across requests.
///
/// Holds no mutable state, so `&Responder` is safe to use from any number
/// of tasks at once.
#[derive(Debug, Clone)]
pub struct Responder {
    detector: IntentDetector,
    faq: Arc<FaqTable>,
    orders: Arc<OrderTable>,
}

impl Responder {
    pub fn new(detector: IntentDetector, faq: Arc<FaqTable>, orders: Arc<OrderTable>) -> Self {
        Self {
            detector,
            faq,
            orders,
        }
    }

    pub fn reply(&self, message: &str) -> String {
        let detection = self.detector.detect(message);
        dispatch(&detection, message, &self.faq, &self.orders)
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(
            IntentDetector::default_rules(),
            Arc::new(FaqTable::default()),
            Arc::new(OrderTable::default()),
        )
    }
}
