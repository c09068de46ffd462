//! # Notification value delivered to subscribers.
//!
//! An [`Event`] is keyed by a free-form name (`"motion_detected"`, `"message"`,
//! `"price_changed"`, ...) and may carry a payload and the name of the peer that
//! sent it. Subscriptions are registered per event name; there is no constraint
//! on the name format.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically across all buses in the process. Use `seq` to correlate log
//! lines produced by independent subscribers.
//!
//! ## Example
//! ```rust
//! use statebus::Event;
//!
//! let ev = Event::new("motion_detected")
//!     .with_payload("Motion detected in the living room")
//!     .with_sender("motion-sensor");
//!
//! assert_eq!(ev.name(), "motion_detected");
//! assert_eq!(ev.payload(), Some("Motion detected in the living room"));
//! assert_eq!(ev.sender(), Some("motion-sensor"));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// A named notification with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - `payload` and `sender` are optional and set by the producer
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,

    /// Event name subscriptions are keyed by.
    name: Arc<str>,
    /// Optional payload carried to every notified subscriber.
    payload: Option<Arc<str>>,
    /// Optional name of the sending peer (used by [`Bus::broadcast`](crate::Bus::broadcast)
    /// to exclude the sender from its own notification).
    sender: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event with the current timestamp and next sequence number.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            name: name.into(),
            payload: None,
            sender: None,
        }
    }

    /// Attaches a payload.
    #[inline]
    pub fn with_payload(mut self, payload: impl Into<Arc<str>>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Attaches the sending peer's name.
    #[inline]
    pub fn with_sender(mut self, sender: impl Into<Arc<str>>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Returns the event name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the payload, if any.
    #[inline]
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Returns the sender name, if any.
    #[inline]
    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let a = Event::new("a");
        let b = Event::new("b");
        assert!(b.seq > a.seq, "seq {} should exceed {}", b.seq, a.seq);
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let ev = Event::new("bare");
        assert_eq!(ev.payload(), None);
        assert_eq!(ev.sender(), None);
    }
}
