//! # Caretaker — ordered snapshot history for one originator.
//!
//! The [`Caretaker`] owns exactly one [`Originator`] plus a LIFO stack of
//! [`Snapshot`]s of its state. It orders and stores snapshots; it never looks
//! inside them.
//!
//! ## Lifecycle
//! ```text
//! Caretaker::new(originator)          history: []           (EMPTY)
//!   backup()                          history: [S0]         (HAS_HISTORY)
//!   mutate, backup()                  history: [S0, S1]
//!   undo()    → restores S1           history: [S0]
//!   undo()    → restores S0           history: []           (EMPTY)
//!   undo()    → NothingToUndo         history: []           (reported no-op)
//! ```
//!
//! ## Rules
//! - `undo()` on an empty history is never an error; it reports
//!   [`Undo::NothingToUndo`] and leaves the originator untouched.
//! - After any undo or rollback the originator's observable state deep-equals
//!   the state at the matching `backup()` call, nested collections included.
//! - [`transaction`](Caretaker::transaction) takes a backup on entry and rolls
//!   back on every non-success exit out of the guarded closure (an `Err`
//!   return and an unwinding panic alike), then lets the failure propagate.

use crate::history::config::HistoryConfig;
use crate::history::originator::Originator;
use crate::history::snapshot::Snapshot;

/// Outcome of an [`undo`](Caretaker::undo) call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Undo {
    /// The most recent snapshot was popped and restored.
    Restored,
    /// History was empty; the originator is unchanged.
    NothingToUndo,
}

/// Owns one originator and the LIFO history of its snapshots.
///
/// ### Properties
/// - **Exclusive ownership**: snapshots in the history belong to this
///   caretaker and are dropped when popped or evicted.
/// - **LIFO undo**: each `undo()` reverts to the state at the time of the
///   previous `backup()`; repeated calls walk further back until exhausted.
/// - **Opaque state**: the caretaker never inspects or mutates snapshot
///   contents; capture and restore go through the [`Originator`] trait.
pub struct Caretaker<O: Originator> {
    originator: O,
    history: Vec<Snapshot<O::State>>,
    config: HistoryConfig,
}

impl<O: Originator> Caretaker<O> {
    /// Creates a caretaker with an empty, unbounded history.
    pub fn new(originator: O) -> Self {
        Self::with_config(originator, HistoryConfig::default())
    }

    /// Creates a caretaker with an empty history and the given configuration.
    pub fn with_config(originator: O, config: HistoryConfig) -> Self {
        Self {
            originator,
            history: Vec::new(),
            config,
        }
    }

    /// Borrows the originator.
    pub fn originator(&self) -> &O {
        &self.originator
    }

    /// Mutably borrows the originator.
    ///
    /// Mutations made through this borrow never affect snapshots already in
    /// the history.
    pub fn originator_mut(&mut self) -> &mut O {
        &mut self.originator
    }

    /// Consumes the caretaker, returning the originator and dropping the history.
    pub fn into_inner(self) -> O {
        self.originator
    }

    /// Captures the originator's current state and pushes it onto the history.
    ///
    /// With a bounded [`HistoryConfig`], the oldest snapshot is discarded once
    /// the stack is full.
    pub fn backup(&mut self) {
        if let Some(limit) = self.config.depth_limit() {
            while self.history.len() >= limit {
                self.history.remove(0);
            }
        }
        self.history.push(self.originator.save());
    }

    /// Pops the most recent snapshot and restores the originator from it.
    ///
    /// With empty history this reports [`Undo::NothingToUndo`] and changes
    /// nothing; calling it repeatedly past exhaustion stays a safe no-op.
    pub fn undo(&mut self) -> Undo {
        match self.history.pop() {
            Some(snapshot) => {
                self.originator.restore(&snapshot);
                Undo::Restored
            }
            None => Undo::NothingToUndo,
        }
    }

    /// Borrows the saved snapshots, oldest first.
    ///
    /// The top of the undo stack is the last element.
    pub fn history(&self) -> &[Snapshot<O::State>] {
        &self.history
    }

    /// Number of snapshots currently held.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// True if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Runs `op` against the originator inside a rollback scope.
    ///
    /// A backup is taken on entry. If `op` returns `Ok`, the result is passed
    /// through and the entry snapshot stays in history. If `op` returns `Err`
    /// or panics, the entry snapshot is popped and restored *before* the
    /// failure continues to the caller, so the originator is observably back
    /// at its pre-transaction state by the time the caller sees the failure.
    ///
    /// # Errors
    ///
    /// Whatever `op` returned, unchanged; the rollback never swallows it.
    pub fn transaction<T, E, F>(&mut self, op: F) -> Result<T, E>
    where
        F: FnOnce(&mut O) -> Result<T, E>,
    {
        self.backup();

        let mut guard = RollbackGuard {
            history: &mut self.history,
            originator: &mut self.originator,
            armed: true,
        };
        let result = op(&mut *guard.originator);
        if result.is_ok() {
            guard.armed = false;
        }
        drop(guard);
        result
    }
}

/// Pops and restores the entry snapshot unless disarmed.
///
/// Runs as part of unwinding too, which is what makes
/// [`Caretaker::transaction`] roll back on panics.
struct RollbackGuard<'a, O: Originator> {
    history: &'a mut Vec<Snapshot<O::State>>,
    originator: &'a mut O,
    armed: bool,
}

impl<O: Originator> Drop for RollbackGuard<'_, O> {
    fn drop(&mut self) {
        if self.armed {
            if let Some(snapshot) = self.history.pop() {
                self.originator.restore(&snapshot);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    /// Structured-record subject: a game with nested collection state.
    #[derive(Clone, Debug, PartialEq, Eq)]
    struct SaveState {
        level: u32,
        score: u64,
        inventory: Vec<String>,
    }

    struct Game {
        state: SaveState,
    }

    impl Game {
        fn new() -> Self {
            Self {
                state: SaveState {
                    level: 1,
                    score: 0,
                    inventory: Vec::new(),
                },
            }
        }

        fn play(&mut self) {
            self.state.level += 1;
            self.state.score += 100;
            let item = format!("Item{}", self.state.inventory.len() + 1);
            self.state.inventory.push(item);
        }
    }

    impl Originator for Game {
        type State = SaveState;

        fn capture(&self) -> SaveState {
            self.state.clone()
        }

        fn apply(&mut self, state: SaveState) {
            self.state = state;
        }
    }

    /// Key-value subject for the transactional tests.
    #[derive(Default)]
    struct KvStore {
        data: HashMap<String, String>,
    }

    impl KvStore {
        fn set(&mut self, key: &str, value: &str) {
            self.data.insert(key.to_string(), value.to_string());
        }

        fn get(&self, key: &str) -> Option<&str> {
            self.data.get(key).map(String::as_str)
        }
    }

    impl Originator for KvStore {
        type State = HashMap<String, String>;

        fn capture(&self) -> Self::State {
            self.data.clone()
        }

        fn apply(&mut self, state: Self::State) {
            self.data = state;
        }
    }

    #[test]
    fn test_undo_restores_states_in_lifo_order() {
        let mut caretaker = Caretaker::new(Game::new());

        caretaker.backup(); // S0: level 1, score 0
        caretaker.originator_mut().play();
        caretaker.backup(); // S1: level 2, score 100
        caretaker.originator_mut().play(); // level 3, score 200

        assert_eq!(caretaker.originator().state.level, 3);
        assert_eq!(caretaker.originator().state.score, 200);

        assert_eq!(caretaker.undo(), Undo::Restored);
        assert_eq!(caretaker.originator().state.level, 2);
        assert_eq!(caretaker.originator().state.score, 100);

        assert_eq!(caretaker.undo(), Undo::Restored);
        assert_eq!(caretaker.originator().state.level, 1);
        assert_eq!(caretaker.originator().state.score, 0);
        assert!(caretaker.originator().state.inventory.is_empty());
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut caretaker = Caretaker::new(Game::new());
        assert!(caretaker.is_empty());

        assert_eq!(caretaker.undo(), Undo::NothingToUndo);
        assert_eq!(caretaker.originator().state.level, 1);
    }

    #[test]
    fn test_undo_past_exhaustion_keeps_initial_state() {
        let mut caretaker = Caretaker::new(Game::new());
        caretaker.backup();
        caretaker.originator_mut().play();

        assert_eq!(caretaker.undo(), Undo::Restored);
        let baseline = caretaker.originator().state.clone();

        for _ in 0..3 {
            assert_eq!(caretaker.undo(), Undo::NothingToUndo);
            assert_eq!(caretaker.originator().state, baseline);
        }
    }

    #[test]
    fn test_snapshot_unaffected_by_later_mutation() {
        let mut game = Game::new();
        game.play();
        let snapshot = game.save();
        let saved = snapshot.state().clone();

        game.play();
        game.state.inventory.push("Contraband".to_string());

        assert_eq!(snapshot.state(), &saved, "snapshot must stay frozen");
        assert_eq!(snapshot.state().inventory, vec!["Item1"]);
    }

    #[test]
    fn test_restore_is_a_defensive_copy() {
        let mut game = Game::new();
        game.play();
        let snapshot = game.save();

        game.play();
        game.restore(&snapshot);
        // Mutating after restore must not reach into the snapshot.
        game.state.inventory.push("Contraband".to_string());
        assert_eq!(snapshot.state().inventory, vec!["Item1"]);

        // The same snapshot restores cleanly a second time.
        game.restore(&snapshot);
        assert_eq!(game.state.inventory, vec!["Item1"]);
    }

    #[test]
    fn test_history_is_ordered_oldest_first() {
        let mut caretaker = Caretaker::new(Game::new());
        caretaker.backup();
        caretaker.originator_mut().play();
        caretaker.backup();

        let levels: Vec<u32> = caretaker
            .history()
            .iter()
            .map(|s| s.state().level)
            .collect();
        assert_eq!(levels, vec![1, 2]);
        assert_eq!(caretaker.depth(), 2);
    }

    #[test]
    fn test_depth_cap_discards_oldest() {
        let mut caretaker =
            Caretaker::with_config(Game::new(), HistoryConfig { max_depth: 2 });

        for _ in 0..3 {
            caretaker.backup();
            caretaker.originator_mut().play();
        }

        assert_eq!(caretaker.depth(), 2);
        let levels: Vec<u32> = caretaker
            .history()
            .iter()
            .map(|s| s.state().level)
            .collect();
        // The level-1 snapshot was evicted.
        assert_eq!(levels, vec![2, 3]);
    }

    #[test]
    fn test_transaction_commits_on_success() {
        let mut caretaker = Caretaker::new(KvStore::default());

        let result: Result<(), String> = caretaker.transaction(|db| {
            db.set("a", "10");
            db.set("c", "3");
            Ok(())
        });

        assert!(result.is_ok());
        assert_eq!(caretaker.originator().get("a"), Some("10"));
        assert_eq!(caretaker.originator().get("c"), Some("3"));
        // The entry snapshot stays in history.
        assert_eq!(caretaker.depth(), 1);
    }

    #[test]
    fn test_transaction_rolls_back_on_error() {
        let mut caretaker = Caretaker::new(KvStore::default());
        caretaker.originator_mut().set("a", "10");
        caretaker.originator_mut().set("b", "2");
        caretaker.originator_mut().set("c", "3");

        let result: Result<(), String> = caretaker.transaction(|db| {
            db.set("b", "20");
            Err("something went wrong".to_string())
        });

        assert_eq!(result.unwrap_err(), "something went wrong");
        assert_eq!(caretaker.originator().get("a"), Some("10"));
        assert_eq!(caretaker.originator().get("b"), Some("2"));
        assert_eq!(caretaker.originator().get("c"), Some("3"));
        // The rolled-back snapshot was consumed.
        assert!(caretaker.is_empty());
    }

    #[test]
    fn test_transaction_rolls_back_on_panic() {
        let mut caretaker = Caretaker::new(KvStore::default());
        caretaker.originator_mut().set("a", "1");

        let unwound = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _: Result<(), String> = caretaker.transaction(|db| {
                db.set("a", "poisoned");
                panic!("interrupted mid-transaction");
            });
        }));

        assert!(unwound.is_err());
        assert_eq!(caretaker.originator().get("a"), Some("1"));
        assert!(caretaker.is_empty());
    }

    #[test]
    fn test_transaction_value_passes_through() {
        let mut caretaker = Caretaker::new(KvStore::default());

        let fetched: Result<String, String> = caretaker.transaction(|db| {
            db.set("a", "10");
            Ok(db.get("a").unwrap_or("").to_string())
        });

        assert_eq!(fetched.unwrap(), "10");
    }
}
