//! # Event bus: ordered fan-out of named events to subscribers.
//!
//! [`Bus`] keeps a registry from event name to the subscribers registered for it
//! and delivers each published event to them one by one, in registration order,
//! on the publishing caller. Delivery completes before `publish` returns; there
//! is no buffering, no retry and no background worker.
//!
//! ## Architecture
//! ```text
//! subscribe("motion", light)          publish(Event "motion")
//! subscribe("motion", camera)              │
//!        │                                 ▼
//!        ▼                        ┌─ snapshot list under read lock ─┐
//! ┌──────────────────┐            │  (lock released before any      │
//! │ "motion" → [light,│◄──────────┤   handler runs)                 │
//! │            camera]│           └────────────┬────────────────────┘
//! └──────────────────┘                         ▼
//!                                   light.on_event()   (1st)
//!                                   camera.on_event()  (2nd)
//! ```
//!
//! ## Rules
//! - **Order**: subscribers are notified in the exact order they subscribed.
//! - **No dedup**: subscribing the same subscriber twice delivers the event twice.
//! - **Isolation**: a failing or panicking handler never stops the fan-out; the
//!   remaining subscribers are still notified and the failures are surfaced
//!   afterwards as one [`DispatchError`].
//! - **No subscribers**: publishing an event nobody listens to is a no-op, not
//!   an error; so is unsubscribing a peer that was never subscribed.
//! - **Locking**: the registry lock is held only while the subscriber list is
//!   mutated or copied, never across a handler call.

use std::collections::HashMap;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::RwLock;

use crate::error::{DispatchError, HandlerError, SubscriberFailure};
use crate::subscribers::{Subscribe, SubscriberRef};

use super::event::Event;

/// Named publish-subscribe coordinator.
///
/// Holds subscriber references for dispatch only; subscribers keep no reference
/// back. Share it between peers behind an `Arc`.
///
/// ### Properties
/// - **Synchronous fan-out**: `publish().await` returns after every handler ran.
/// - **Registration order**: delivery order is subscription order, duplicates kept.
/// - **Mediator mode**: [`Bus::broadcast`] skips the subscriber named as the
///   event's sender, so a peer never receives its own message.
pub struct Bus {
    name: Arc<str>,
    topics: RwLock<HashMap<String, Vec<SubscriberRef>>>,
}

impl Bus {
    /// Creates a new, empty bus with the given name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            topics: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the bus name used in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers `subscriber` for `event`.
    ///
    /// Registrations are not deduplicated: subscribing the same subscriber to
    /// the same event twice means it will be notified twice per publish.
    pub async fn subscribe(&self, event: impl Into<String>, subscriber: SubscriberRef) {
        let mut topics = self.topics.write().await;
        topics.entry(event.into()).or_default().push(subscriber);
    }

    /// Removes one matching registration of `subscriber` from `event`.
    ///
    /// Matching is by `Arc` identity; the earliest registration is removed.
    /// Unknown events and never-subscribed peers are a silent no-op.
    pub async fn unsubscribe(&self, event: &str, subscriber: &SubscriberRef) {
        let mut topics = self.topics.write().await;
        if let Some(subs) = topics.get_mut(event) {
            if let Some(pos) = subs.iter().position(|s| Arc::ptr_eq(s, subscriber)) {
                subs.remove(pos);
            }
        }
    }

    /// Number of registrations currently held for `event`.
    ///
    /// Duplicates count once per registration.
    pub async fn subscriber_count(&self, event: &str) -> usize {
        let topics = self.topics.read().await;
        topics.get(event).map_or(0, Vec::len)
    }

    /// Publishes an event to every subscriber registered for its name.
    ///
    /// Subscribers are notified sequentially, in subscription order, on the
    /// calling task. If the event has no subscribers this is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] after the fan-out completes if one or more
    /// handlers failed or panicked. Delivery to the remaining subscribers is
    /// never cut short by an earlier failure.
    pub async fn publish(&self, event: Event) -> Result<(), DispatchError> {
        self.dispatch(event, false).await
    }

    /// Publishes an event in mediator mode: the subscriber whose name equals
    /// the event's sender is excluded from delivery.
    ///
    /// This is the chatroom-style broadcast where a peer addresses everyone
    /// but itself. Events without a sender behave exactly like [`Bus::publish`].
    ///
    /// # Errors
    ///
    /// Same aggregation contract as [`Bus::publish`].
    pub async fn broadcast(&self, event: Event) -> Result<(), DispatchError> {
        self.dispatch(event, true).await
    }

    /// Shared fan-out: snapshot the delivery list, release the lock, notify.
    async fn dispatch(&self, event: Event, exclude_sender: bool) -> Result<(), DispatchError> {
        let targets: Vec<SubscriberRef> = {
            let topics = self.topics.read().await;
            match topics.get(event.name()) {
                Some(subs) => subs
                    .iter()
                    .filter(|s| {
                        !(exclude_sender && event.sender() == Some(s.name()))
                    })
                    .cloned()
                    .collect(),
                None => Vec::new(),
            }
        };

        if targets.is_empty() {
            return Ok(());
        }

        let mut failures: Vec<SubscriberFailure> = Vec::new();
        for sub in targets {
            let fut = sub.on_event(&event);
            match std::panic::AssertUnwindSafe(fut).catch_unwind().await {
                Ok(Ok(())) => {}
                Ok(Err(error)) => {
                    failures.push(SubscriberFailure {
                        subscriber: sub.name().to_string(),
                        error,
                    });
                }
                Err(panic_err) => {
                    let info = panic_info(panic_err);
                    eprintln!(
                        "[statebus] bus '{}': subscriber '{}' panicked: {info}",
                        self.name,
                        sub.name()
                    );
                    failures.push(SubscriberFailure {
                        subscriber: sub.name().to_string(),
                        error: HandlerError::Panicked { info },
                    });
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::HandlersFailed {
                event: event.name().to_string(),
                failures,
            })
        }
    }
}

/// Renders a caught panic payload as text.
fn panic_info(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "opaque panic payload".to_string()
    }
}
