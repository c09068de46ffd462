//! # Example: smart_home
//!
//! Home automation in the "distributed" arrangement: every device owns its own
//! bus and can act as publisher and subscriber at the same time.
//!
//! Shows how to:
//! - Give each peer its own [`Bus`] and cross-wire subscriptions.
//! - Subscribe one device to several event names.
//! - Attach the built-in [`LogWriter`] next to domain subscribers.
//!
//! ## Flow
//! ```text
//! motion_sensor.announce("motion_detected", ...)
//!     └─► motion_sensor's Bus ──► light.on_event()    (1st)
//!                             ├─► camera.on_event()   (2nd)
//!                             └─► LogWriter           (3rd)
//! ```
//!
//! ## Run
//! Requires the `logging` feature to export [`LogWriter`].
//! ```bash
//! cargo run --example smart_home --features logging
//! ```

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use statebus::{Bus, Event, HandlerError, LogWriter, Subscribe, SubscriberRef};

/// A device that both emits events (through its own bus) and reacts to events
/// emitted by other devices.
struct Device {
    name: String,
    bus: Bus,
}

impl Device {
    fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            bus: Bus::new(name),
        })
    }

    /// Wires `listener` to this device's `event` stream.
    async fn listen(&self, event: &str, listener: SubscriberRef) {
        self.bus.subscribe(event, listener).await;
    }

    /// Emits an event from this device to everything wired to it.
    async fn announce(&self, event: &str, payload: &str) -> Result<()> {
        self.bus
            .publish(
                Event::new(event)
                    .with_payload(payload)
                    .with_sender(self.name.as_str()),
            )
            .await?;
        Ok(())
    }
}

#[async_trait]
impl Subscribe for Device {
    async fn on_event(&self, event: &Event) -> Result<(), HandlerError> {
        println!(
            "{} received {}: {}",
            self.name,
            event.name(),
            event.payload().unwrap_or("")
        );
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let light = Device::new("Smart Light");
    let thermostat = Device::new("Thermostat");
    let camera = Device::new("Security Camera");
    let door_lock = Device::new("Door Lock");
    let motion_sensor = Device::new("Motion Sensor");
    let doorbell = Device::new("Doorbell");
    let window_sensor = Device::new("Window Sensor");

    // Wire devices to events.
    motion_sensor.listen("motion_detected", light).await;
    motion_sensor.listen("motion_detected", camera.clone()).await;
    doorbell.listen("button_pressed", camera).await;
    doorbell.listen("button_pressed", door_lock).await;
    window_sensor.listen("window_opened", thermostat.clone()).await;
    window_sensor.listen("window_closed", thermostat).await;

    // A console log next to the domain subscribers.
    motion_sensor
        .listen("motion_detected", Arc::new(LogWriter::new()))
        .await;

    // Publish events.
    motion_sensor
        .announce("motion_detected", "Motion detected in the living room")
        .await?;
    doorbell.announce("button_pressed", "Doorbell pressed").await?;
    window_sensor
        .announce("window_opened", "Window opened in the bedroom")
        .await?;
    window_sensor
        .announce("window_closed", "Window closed in the bedroom")
        .await?;

    Ok(())
}
