//! # Originator — the subject whose state is captured and reverted.
//!
//! Implementors expose their state as a deep-copyable value; the provided
//! [`save`](Originator::save) / [`restore`](Originator::restore) pair is the
//! only way [`Snapshot`]s come into and out of existence.

use crate::history::snapshot::Snapshot;

/// Capability of having state captured into and restored from [`Snapshot`]s.
///
/// Implement [`capture`](Originator::capture) and [`apply`](Originator::apply);
/// the snapshot plumbing is provided. `State: Clone` carries the deep-copy
/// contract: cloning the state must not share mutable structure with the
/// original (the standard collections all satisfy this).
///
/// # Example
/// ```
/// use statebus::{Caretaker, Originator, Undo};
///
/// struct Counter {
///     value: i64,
/// }
///
/// impl Originator for Counter {
///     type State = i64;
///
///     fn capture(&self) -> i64 {
///         self.value
///     }
///
///     fn apply(&mut self, state: i64) {
///         self.value = state;
///     }
/// }
///
/// let mut caretaker = Caretaker::new(Counter { value: 1 });
/// caretaker.backup();
/// caretaker.originator_mut().value = 2;
/// assert_eq!(caretaker.undo(), Undo::Restored);
/// assert_eq!(caretaker.originator().value, 1);
/// ```
pub trait Originator {
    /// Deep-copyable representation of the current state.
    type State: Clone;

    /// Returns a deep copy of the current state.
    fn capture(&self) -> Self::State;

    /// Replaces the current state.
    fn apply(&mut self, state: Self::State);

    /// Captures the current state into a sealed, timestamped [`Snapshot`].
    ///
    /// Mutating `self` afterwards never changes the returned snapshot.
    fn save(&self) -> Snapshot<Self::State> {
        Snapshot::seal(self.capture())
    }

    /// Replaces the current state with a copy taken from `snapshot`.
    ///
    /// Mutating `self` afterwards never changes the snapshot, which may be
    /// restored from again.
    fn restore(&mut self, snapshot: &Snapshot<Self::State>) {
        self.apply(snapshot.clone_state());
    }
}
