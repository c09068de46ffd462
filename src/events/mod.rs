//! Events: the notification data model and the bus that fans it out.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to named events exchanged between decoupled peers
//! (chatroom users, smart-home devices, market participants, ...).
//!
//! ## Contents
//! - [`Event`] name, payload, sender and ordering metadata
//! - [`Bus`] the ordered, synchronous publish-subscribe coordinator
//!
//! ## Quick reference
//! - **Producers**: any code holding the bus; peers that are themselves
//!   subscribers may publish too (the "distributed" arrangement).
//! - **Consumers**: implementors of [`Subscribe`](crate::Subscribe), notified
//!   in subscription order; see `subscribers/` for the trait and built-ins.

mod bus;
mod event;

pub use bus::Bus;
pub use event::Event;
