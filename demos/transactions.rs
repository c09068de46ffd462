//! # Example: transactions
//!
//! A key-value store with transactional rollback: every transaction starts
//! with a backup; a failure inside the guarded block reverts the store before
//! the error reaches the caller.
//!
//! ## Flow
//! ```text
//! caretaker.transaction(|db| { ... })
//!     ├─ backup()                      (entry snapshot pushed)
//!     ├─ op(&mut db)
//!     │    ├─ Ok  ─► snapshot kept, result passed through
//!     │    └─ Err ─► rollback to entry snapshot, error passed through
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example transactions
//! ```

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use statebus::{Caretaker, Originator};

/// Simple key-value store; the transactional subject.
#[derive(Default)]
struct KvStore {
    data: HashMap<String, String>,
}

impl KvStore {
    fn set(&mut self, key: &str, value: &str) {
        println!("setting {key} = {value}");
        self.data.insert(key.to_string(), value.to_string());
    }

    fn describe(&self) -> String {
        let mut pairs: Vec<String> = self
            .data
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        pairs.sort();
        format!("{{{}}}", pairs.join(", "))
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

fn main() -> Result<()> {
    let mut caretaker = Caretaker::new(KvStore::default());

    caretaker.originator_mut().set("a", "1");
    caretaker.originator_mut().set("b", "2");

    // Successful transaction: changes persist.
    caretaker.transaction(|db| {
        db.set("a", "10");
        db.set("c", "3");
        Ok::<_, anyhow::Error>(())
    })?;
    println!("after commit:   {}", caretaker.originator().describe());

    // Failing transaction: changes are rolled back, the error survives.
    let failed = caretaker.transaction(|db| {
        db.set("b", "20");
        Err::<(), _>(anyhow!("something went wrong"))
    });
    match failed {
        Ok(()) => unreachable!("this transaction always fails"),
        Err(err) => println!("transaction failed and rolled back: {err}"),
    }
    println!("after rollback: {}", caretaker.originator().describe());

    Ok(())
}
