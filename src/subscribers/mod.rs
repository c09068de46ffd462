//! # Event subscribers.
//!
//! This module provides the [`Subscribe`] trait and built-in implementations
//! for handling events fanned out by a [`Bus`](crate::events::Bus).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   peer ── publish(Event) ──► Bus ──► notify in subscription order
//!                                          │
//!                                          ├──► Subscribe::on_event(&Event)
//!                                          │         │
//!                                          │    ┌────┴────┬──────────┬───────┐
//!                                          │    ▼         ▼          ▼       ▼
//!                                          │  LogWriter  Recorder  Custom  ...
//!                                          │
//!                                          └──► failures collected → DispatchError
//! ```
//!
//! ## Subscriber types
//! - **Passive subscribers** - observe and react to events (logging, alerts)
//! - **Stateful subscribers** - remember what they saw ([`Recorder`])
//! - **Peers** - subscribers that also hold a bus and publish themselves
//!   (chatroom users, smart-home devices)

mod record;
mod subscriber;

#[cfg(feature = "logging")]
mod log;

pub use record::{Received, Recorder};
pub use subscriber::{Subscribe, SubscriberRef};

#[cfg(feature = "logging")]
pub use log::LogWriter;
