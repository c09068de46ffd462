//! # LogWriter — simple event printer
//!
//! A minimal subscriber that prints incoming [`Event`]s to stdout.
//! Use it for test or demo.
//!
//! ## Example output
//! ```text
//! [event] seq=3 name="motion_detected" payload="Motion detected" sender=-
//! [event] seq=4 name="message" payload="Hello, everyone!" sender="alice"
//! ```

use async_trait::async_trait;

use crate::error::HandlerError;
use crate::events::Event;
use crate::subscribers::Subscribe;

/// Event writer subscriber.
///
/// Enabled via the `logging` feature. Prints one human-readable line per
/// received event to stdout for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Subscribe`] for
/// structured logging or metrics collection.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) -> Result<(), HandlerError> {
        let payload = e.payload().unwrap_or("-");
        match e.sender() {
            Some(sender) => println!(
                "[event] seq={} name={:?} payload={:?} sender={:?}",
                e.seq,
                e.name(),
                payload,
                sender
            ),
            None => println!(
                "[event] seq={} name={:?} payload={:?} sender=-",
                e.seq,
                e.name(),
                payload
            ),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}
