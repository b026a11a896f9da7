//! Port for structured transcript logging.
//!
//! Defines the [`ConversationLogger`] trait for recording what each run saw
//! and produced (prompt, detected sentiment, generation prompt, output).
//!
//! This is separate from `tracing`-based diagnostics: tracing handles
//! human-readable operation logs, while this port captures the transcript in
//! a machine-readable format.

use serde_json::Value;

/// A structured transcript event.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "prompt_received", "sentiment_detected").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging transcript events.
///
/// `log` is synchronous and infallible: a broken transcript must never fail
/// a generation run, so implementations swallow their own I/O errors.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
