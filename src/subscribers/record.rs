//! # Recorder — subscriber that remembers what it saw.
//!
//! [`Recorder`] appends every received notification to an in-memory log in
//! delivery order. Demos and tests use it to assert exactly which events a
//! peer received, and in which order, without printing anything.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::HandlerError;
use crate::events::Event;
use crate::subscribers::Subscribe;

/// One remembered notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Received {
    /// Event name.
    pub event: String,
    /// Payload carried by the event, if any.
    pub payload: Option<String>,
    /// Sender named on the event, if any.
    pub sender: Option<String>,
}

/// Subscriber that records received notifications in delivery order.
///
/// The internal log is only touched inside [`on_event`](Subscribe::on_event)
/// and the accessors; the lock is never held across an await.
pub struct Recorder {
    name: String,
    seen: Mutex<Vec<Received>>,
}

impl Recorder {
    /// Creates a named recorder and returns it as a shared handle.
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            seen: Mutex::new(Vec::new()),
        })
    }

    /// Returns everything received so far, in delivery order.
    pub fn received(&self) -> Vec<Received> {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Returns just the event names received so far, in delivery order.
    pub fn events(&self) -> Vec<String> {
        self.received().into_iter().map(|r| r.event).collect()
    }

    /// Number of notifications received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// True if nothing was received yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Subscribe for Recorder {
    async fn on_event(&self, event: &Event) -> Result<(), HandlerError> {
        let entry = Received {
            event: event.name().to_string(),
            payload: event.payload().map(str::to_string),
            sender: event.sender().map(str::to_string),
        };
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).push(entry);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use crate::events::{Bus, Event};

    use super::*;

    #[tokio::test]
    async fn test_recorder_keeps_payload_and_sender() {
        let bus = Bus::new("test");
        let rec = Recorder::new("rec");
        bus.subscribe("message", rec.clone()).await;

        bus.publish(
            Event::new("message")
                .with_payload("hi")
                .with_sender("alice"),
        )
        .await
        .unwrap();

        assert_eq!(
            rec.received(),
            vec![Received {
                event: "message".into(),
                payload: Some("hi".into()),
                sender: Some("alice".into()),
            }]
        );
        assert_eq!(rec.len(), 1);
        assert!(!rec.is_empty());
    }
}
