//! # Snapshot — immutable point-in-time copy of an originator's state.
//!
//! A [`Snapshot`] is minted by [`Originator::save`](crate::Originator::save)
//! and consumed by [`Originator::restore`](crate::Originator::restore); client
//! code can inspect one but can never construct or mutate one. The constructor
//! is crate-private, which plays the role the source material gives to a
//! memento class nested inside its originator.

use std::time::SystemTime;

/// Immutable, timestamped copy of an [`Originator`](crate::Originator)'s state.
///
/// ### Properties
/// - **Sealed**: only `Originator::save` can create one.
/// - **Frozen**: never mutated after creation; restore clones state *out* of
///   it, so the same snapshot may be restored from any number of times.
/// - **Independent**: holds its own deep copy; later mutation of the
///   originator never shows through.
#[derive(Clone, Debug)]
pub struct Snapshot<S> {
    state: S,
    at: SystemTime,
}

impl<S: Clone> Snapshot<S> {
    /// Seals a captured state with the current wall-clock time.
    pub(crate) fn seal(state: S) -> Self {
        Self {
            state,
            at: SystemTime::now(),
        }
    }

    /// Returns the capture timestamp.
    #[inline]
    pub fn at(&self) -> SystemTime {
        self.at
    }

    /// Borrows the stored state.
    ///
    /// This is a read-only view; restoring goes through
    /// [`Originator::restore`](crate::Originator::restore), which clones the
    /// state out.
    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Clones the stored state out for a restore.
    pub(crate) fn clone_state(&self) -> S {
        self.state.clone()
    }
}
