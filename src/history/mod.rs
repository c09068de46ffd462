//! History: capture, order and revert an originator's state.
//!
//! This module groups the snapshot **value type** and the roles around it:
//! the subject that can be captured ([`Originator`]) and the keeper of the
//! undo stack ([`Caretaker`]).
//!
//! ## Contents
//! - [`Snapshot`] immutable, timestamped state copy (crate-sealed constructor)
//! - [`Originator`] capture/apply capability with provided save/restore
//! - [`Caretaker`] LIFO history, undo and transactional rollback
//! - [`HistoryConfig`] depth cap with sentinel semantics
//!
//! ## Quick wiring
//! ```text
//! Caretaker<O> { originator: O, history: Vec<Snapshot<O::State>> }
//!      ├─ backup()        originator.save() → push
//!      ├─ undo()          pop → originator.restore(&snapshot)
//!      └─ transaction(op) backup → op(&mut originator) → rollback on failure
//! ```

mod caretaker;
mod config;
mod originator;
mod snapshot;

pub use caretaker::{Caretaker, Undo};
pub use config::HistoryConfig;
pub use originator::Originator;
pub use snapshot::Snapshot;
