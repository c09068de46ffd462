//! # Example: game_state
//!
//! Saving and restoring the state of a game with a LIFO undo history.
//!
//! Shows how to:
//! - Implement [`Originator`] for a subject with nested collection state.
//! - Walk back through history with repeated [`Caretaker::undo`] calls.
//! - Observe the reported no-op when history runs out.
//!
//! ## Run
//! ```bash
//! cargo run --example game_state
//! ```

use anyhow::Result;
use statebus::{Caretaker, Originator, Undo};

#[derive(Clone, Debug)]
struct GameState {
    level: u32,
    score: u64,
    inventory: Vec<String>,
}

struct Game {
    state: GameState,
}

impl Game {
    fn new() -> Self {
        Self {
            state: GameState {
                level: 1,
                score: 0,
                inventory: Vec::new(),
            },
        }
    }

    /// Simulates progress: one level up, some score, one item found.
    fn play(&mut self) {
        self.state.level += 1;
        self.state.score += 100;
        let item = format!("Item{}", self.state.inventory.len() + 1);
        self.state.inventory.push(item);
    }

    fn describe(&self) -> String {
        format!(
            "Level: {}, Score: {}, Inventory: {:?}",
            self.state.level, self.state.score, self.state.inventory
        )
    }
}

impl Originator for Game {
    type State = GameState;

    fn capture(&self) -> GameState {
        self.state.clone()
    }

    fn apply(&mut self, state: GameState) {
        self.state = state;
    }
}

fn main() -> Result<()> {
    let mut caretaker = Caretaker::new(Game::new());

    println!("{}", caretaker.originator().describe());
    caretaker.backup();
    caretaker.originator_mut().play();

    println!("{}", caretaker.originator().describe());
    caretaker.backup();
    caretaker.originator_mut().play();

    println!("{}", caretaker.originator().describe());
    println!("saved snapshots: {}", caretaker.depth());

    // Walk back through history, then once past its end.
    for _ in 0..3 {
        match caretaker.undo() {
            Undo::Restored => println!("restored -> {}", caretaker.originator().describe()),
            Undo::NothingToUndo => println!("nothing to undo"),
        }
    }

    Ok(())
}
