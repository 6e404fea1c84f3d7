//! Event dispatch error types.

use std::any::Any;
use thiserror::Error;

use crate::listener::ListenerId;

/// Errors surfaced by fallible dispatch.
///
/// Plain [`Event::fire`](crate::Event::fire) never produces these: a
/// panicking listener unwinds straight through it. Only
/// [`Event::try_fire`](crate::Event::try_fire) turns that panic into a value.
#[derive(Debug, Error)]
pub enum EventError {
    /// A listener panicked; listeners after it were not invoked.
    #[error("listener `{listener}` ({listener_id}) panicked: {message}")]
    ListenerPanicked {
        /// Debug name of the listener that panicked.
        listener: String,
        /// Identity of the listener that panicked.
        listener_id: ListenerId,
        /// The panic payload, when it was a string.
        message: String,
    },
}

/// Result type for event operations.
pub type EventResult<T> = Result<T, EventError>;

/// Extract a readable message from a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
