//! Error types used by the event bus and its subscribers.
//!
//! This module defines two main error enums:
//!
//! - [`HandlerError`] — a failure raised by a single subscriber while handling an event.
//! - [`DispatchError`] — the aggregated report a publisher returns after a fan-out
//!   in which one or more subscribers failed.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.
//!
//! Failures are collected, never short-circuited: a subscriber that fails does not
//! prevent the subscribers after it from being notified. The publisher finishes the
//! fan-out first and only then surfaces a [`DispatchError`] listing every failure
//! in delivery order.

use thiserror::Error;

/// # Errors produced by a single event handler.
///
/// These represent failures of one subscriber's [`on_event`](crate::Subscribe::on_event)
/// call. They never abort delivery to the remaining subscribers.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Handler returned an error while processing the event.
    #[error("handler failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Handler panicked; the panic was caught by the publisher.
    #[error("handler panicked: {info}")]
    Panicked {
        /// Panic payload rendered as text.
        info: String,
    },
}

impl HandlerError {
    /// Convenience constructor for [`HandlerError::Fail`].
    ///
    /// # Example
    /// ```
    /// use statebus::HandlerError;
    ///
    /// let err = HandlerError::fail("connection refused");
    /// assert_eq!(err.as_label(), "handler_failed");
    /// ```
    pub fn fail(error: impl Into<String>) -> Self {
        HandlerError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use statebus::HandlerError;
    ///
    /// let err = HandlerError::Panicked { info: "boom".into() };
    /// assert_eq!(err.as_label(), "handler_panicked");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            HandlerError::Fail { .. } => "handler_failed",
            HandlerError::Panicked { .. } => "handler_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            HandlerError::Fail { error } => format!("error: {error}"),
            HandlerError::Panicked { info } => format!("panic: {info}"),
        }
    }

    /// Indicates whether this failure came from a caught panic rather than
    /// an ordinary error return.
    pub fn is_panic(&self) -> bool {
        matches!(self, HandlerError::Panicked { .. })
    }
}

/// One subscriber's failure captured during a fan-out.
///
/// The publisher records these in delivery order while it keeps notifying
/// the remaining subscribers.
#[derive(Debug)]
pub struct SubscriberFailure {
    /// Name of the failing subscriber (see [`Subscribe::name`](crate::Subscribe::name)).
    pub subscriber: String,
    /// What went wrong.
    pub error: HandlerError,
}

/// # Aggregated fan-out failure report.
///
/// Returned by [`Bus::publish`](crate::Bus::publish) / [`Bus::broadcast`](crate::Bus::broadcast)
/// after the fan-out has completed. Every subscriber was given its notification;
/// this error only reports which of them failed.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DispatchError {
    /// One or more subscribers failed while handling the event.
    #[error("event \"{event}\": {n} subscriber(s) failed after full fan-out", n = .failures.len())]
    HandlersFailed {
        /// Name of the event that was dispatched.
        event: String,
        /// Per-subscriber failures, in delivery order.
        failures: Vec<SubscriberFailure>,
    },
}

impl DispatchError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use statebus::{DispatchError, HandlerError, SubscriberFailure};
    ///
    /// let err = DispatchError::HandlersFailed {
    ///     event: "motion_detected".into(),
    ///     failures: vec![SubscriberFailure {
    ///         subscriber: "camera".into(),
    ///         error: HandlerError::fail("lens cap on"),
    ///     }],
    /// };
    /// assert_eq!(err.as_label(), "dispatch_handlers_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::HandlersFailed { .. } => "dispatch_handlers_failed",
        }
    }

    /// Returns a human-readable message listing each failing subscriber.
    pub fn as_message(&self) -> String {
        match self {
            DispatchError::HandlersFailed { event, failures } => {
                let detail: Vec<String> = failures
                    .iter()
                    .map(|f| format!("{}: {}", f.subscriber, f.error.as_message()))
                    .collect();
                format!("event {event}: [{}]", detail.join("; "))
            }
        }
    }

    /// Returns the per-subscriber failures, in delivery order.
    pub fn failures(&self) -> &[SubscriberFailure] {
        match self {
            DispatchError::HandlersFailed { failures, .. } => failures,
        }
    }
}
