//! The bridge event loop.

use std::io::Write;

use padlink_gesture::GestureEngine;
use tokio::sync::watch;

use crate::{BridgeError, CommandChannel, EvdevSource};

/// Production runtime: one task, one event at a time to completion.
///
/// The loop is a bounded wait over two sources — the next input event and
/// an explicit shutdown signal — so teardown is deterministic instead of
/// relying on an interrupt landing mid-read. The channel has exactly one
/// writer (this task), which is why no locking appears anywhere.
pub struct Runtime<W: Write> {
    engine: GestureEngine,
    channel: CommandChannel<W>,
}

impl<W: Write> Runtime<W> {
    /// Build a runtime from an engine and an output channel.
    pub fn new(engine: GestureEngine, channel: CommandChannel<W>) -> Self {
        Self { engine, channel }
    }

    /// Run until the source fails or shutdown is signalled.
    ///
    /// On shutdown the batch buffer is flushed and the engine's teardown
    /// intents (a drag release, if one is held) follow it, so nothing the
    /// peripheral should have seen stays queued and no button stays
    /// half-pressed.
    ///
    /// # Errors
    ///
    /// [`BridgeError::Input`] if the event stream fails,
    /// [`BridgeError::Transport`] if a serial write fails. Neither is
    /// retried.
    pub async fn run(
        mut self,
        source: &mut EvdevSource,
        shutdown: &mut watch::Receiver<bool>,
    ) -> Result<(), BridgeError> {
        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    tracing::info!("shutdown signalled");
                    break;
                },
                event = source.next_event() => {
                    let Some(event) = event? else { continue };
                    let intents = self.engine.handle(event);
                    for intent in &intents {
                        self.channel.deliver(intent).map_err(BridgeError::Transport)?;
                    }
                },
            }
        }
        self.teardown()
    }

    fn teardown(&mut self) -> Result<(), BridgeError> {
        // Flush first: a drag's press may still sit in the batch buffer,
        // and the release below must reach the wire after it.
        self.channel.flush().map_err(BridgeError::Transport)?;
        for intent in self.engine.teardown() {
            self.channel
                .write_now(&intent.commands())
                .map_err(BridgeError::Transport)?;
        }
        Ok(())
    }
}
