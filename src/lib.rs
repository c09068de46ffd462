//! # statebus
//!
//! **statebus** is a small library of in-process coordination primitives for Rust.
//!
//! It provides two independent building blocks: an ordered publish-subscribe
//! [`Bus`] that decouples event senders from receivers, and a snapshot/restore
//! [`Caretaker`] that gives any mutable subject an undo history and
//! transactional rollback.
//!
//! ## Architecture
//! ### Event coordination
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  peer "alice"│   │  peer "light"│   │ peer "camera"│
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            │ subscribe(name)  │                  │
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Bus                                                      │
//! │  - event-name → [subscribers] (insertion order kept,      │
//! │    duplicates kept)                                       │
//! │  - publish: notify every subscriber, in order, awaited    │
//! │  - broadcast: same, minus the event's sender              │
//! │  - failures collected → DispatchError after the fan-out   │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ### State history
//! ```text
//! Caretaker<O: Originator>
//!   ├── originator: O                     (the live, mutable subject)
//!   └── history: [Snapshot, Snapshot, ..] (LIFO; sealed deep copies)
//!
//! backup()         → push originator.save()
//! undo()           → pop + restore   (empty history: reported no-op)
//! transaction(op)  → backup; run op; rollback + re-surface on failure
//! ```
//!
//! ## Features
//! | Area              | Description                                                          | Key types / traits                  |
//! |-------------------|----------------------------------------------------------------------|-------------------------------------|
//! | **Subscriber API**| Receive named events in subscription order.                          | [`Subscribe`], [`SubscriberRef`]    |
//! | **Publishing**    | Ordered synchronous fan-out, mediator sender-exclusion.              | [`Bus`], [`Event`]                  |
//! | **Errors**        | Per-handler failures aggregated after delivery completes.            | [`HandlerError`], [`DispatchError`] |
//! | **History**       | Sealed snapshots, LIFO undo, transactional rollback.                 | [`Caretaker`], [`Originator`], [`Snapshot`] |
//! | **Configuration** | History depth cap with sentinel semantics.                           | [`HistoryConfig`]                   |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use statebus::{Bus, Caretaker, Event, Originator, Recorder, Undo};
//!
//! struct Counter {
//!     value: i64,
//! }
//!
//! impl Originator for Counter {
//!     type State = i64;
//!     fn capture(&self) -> i64 { self.value }
//!     fn apply(&mut self, state: i64) { self.value = state; }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Event side: wire two listeners, publish once.
//!     let bus = Bus::new("home");
//!     let light = Recorder::new("light");
//!     let camera = Recorder::new("camera");
//!     bus.subscribe("motion_detected", light.clone()).await;
//!     bus.subscribe("motion_detected", camera.clone()).await;
//!
//!     bus.publish(Event::new("motion_detected").with_payload("Motion detected"))
//!         .await?;
//!     assert_eq!(light.events(), vec!["motion_detected"]);
//!     assert_eq!(camera.events(), vec!["motion_detected"]);
//!
//!     // History side: capture, mutate, revert.
//!     let mut caretaker = Caretaker::new(Counter { value: 1 });
//!     caretaker.backup();
//!     caretaker.originator_mut().value = 2;
//!     assert_eq!(caretaker.undo(), Undo::Restored);
//!     assert_eq!(caretaker.originator().value, 1);
//!     Ok(())
//! }
//! ```

mod error;
mod events;
mod history;
mod subscribers;

// ---- Public re-exports ----

pub use error::{DispatchError, HandlerError, SubscriberFailure};
pub use events::{Bus, Event};
pub use history::{Caretaker, HistoryConfig, Originator, Snapshot, Undo};
pub use subscribers::{Received, Recorder, Subscribe, SubscriberRef};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
