//! # Event subscriber trait.
//!
//! Provides [`Subscribe`], the extension point for plugging event handlers into
//! a [`Bus`](crate::Bus).
//!
//! Each subscriber gets:
//! - **In-order delivery** (notified in the order it subscribed)
//! - **Failure isolation** (its errors never block delivery to other subscribers)
//! - **Panic isolation** (panics are caught and reported as
//!   [`HandlerError::Panicked`](crate::HandlerError::Panicked))
//!
//! ## Rules
//! - Handlers run on the publishing task; the fan-out awaits each handler before
//!   calling the next one.
//! - A handler's `Err` is collected into the publisher's [`DispatchError`](crate::DispatchError)
//!   after the fan-out completes; it is never raised mid-delivery.
//! - The subscriber holds no reference back to the bus unless it separately
//!   registers as a publisher itself.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use statebus::{Event, HandlerError, Subscribe};
//!
//! struct Thermostat;
//!
//! #[async_trait]
//! impl Subscribe for Thermostat {
//!     async fn on_event(&self, ev: &Event) -> Result<(), HandlerError> {
//!         if ev.name() == "window_opened" {
//!             // lower the target temperature, etc.
//!         }
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str { "thermostat" }   // prefer short, descriptive names
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::HandlerError;
use crate::events::Event;

/// Shared handle to a subscriber, as stored by the bus.
pub type SubscriberRef = Arc<dyn Subscribe>;

/// Capability of being notified by a [`Bus`](crate::Bus).
///
/// Implementors receive every event published under a name they subscribed to,
/// in subscription order, with duplicates preserved.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Return `Err` for recoverable processing failures; the bus aggregates them.
/// - Panics are caught by the bus and reported like errors.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Processes a single event.
    ///
    /// Called on the publishing task as part of the fan-out. Failures do not
    /// stop delivery to the remaining subscribers.
    async fn on_event(&self, event: &Event) -> Result<(), HandlerError>;

    /// Returns the subscriber name used in logs, failure reports and
    /// sender-exclusion ([`Bus::broadcast`](crate::Bus::broadcast)).
    ///
    /// Prefer short, descriptive names (e.g., "light", "camera", "alice").
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
