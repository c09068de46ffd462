//! # Example: chatroom
//!
//! A chat room as a mediator: users publish to the room, the room delivers to
//! every user except the sender.
//!
//! Shows how to:
//! - Implement the [`Subscribe`] trait for a peer type.
//! - Use [`Bus::broadcast`] so a sender never receives its own message.
//! - Unsubscribe a peer at runtime (leaving the room).
//!
//! ## Flow
//! ```text
//! User::send("...") ──► Bus::broadcast(Event "message", sender=user)
//!                           ├─► every other user ─► User::on_event() ─► prints
//!                           └─► the sender is skipped
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example chatroom
//! ```

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use statebus::{Bus, Event, HandlerError, Subscribe, SubscriberRef};

/// A user in the chat room: subscriber for incoming messages, publisher for
/// its own.
struct User {
    name: String,
    room: Arc<Bus>,
}

impl User {
    /// Creates the user and subscribes it to the room's message stream.
    async fn join(name: &str, room: &Arc<Bus>) -> Arc<Self> {
        let user = Arc::new(Self {
            name: name.to_string(),
            room: Arc::clone(room),
        });
        room.subscribe("message", user.clone()).await;
        user
    }

    async fn send(&self, message: &str) -> Result<()> {
        println!("{} sends: {}", self.name, message);
        self.room
            .broadcast(
                Event::new("message")
                    .with_payload(message)
                    .with_sender(self.name.as_str()),
            )
            .await?;
        Ok(())
    }
}

#[async_trait]
impl Subscribe for User {
    async fn on_event(&self, event: &Event) -> Result<(), HandlerError> {
        println!("{} receives: {}", self.name, event.payload().unwrap_or(""));
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let room = Arc::new(Bus::new("chatroom"));

    let alice = User::join("Alice", &room).await;
    let bob = User::join("Bob", &room).await;
    let charlie = User::join("Charlie", &room).await;

    alice.send("Hello, everyone!").await?;
    bob.send("Hi, Alice!").await?;
    charlie.send("Hey folks!").await?;

    // Bob leaves; nobody errors, he simply stops receiving.
    let bob_ref: SubscriberRef = bob;
    room.unsubscribe("message", &bob_ref).await;
    alice.send("Bob left the chat").await?;

    Ok(())
}
