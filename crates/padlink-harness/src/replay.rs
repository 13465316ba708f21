//! Replay driver: real engine, real channel, captured sink.

use padlink_bridge::CommandChannel;
use padlink_gesture::{GestureConfig, GestureEngine, GestureIntent, InputEvent};

/// Engine plus command channel over an in-memory sink.
///
/// Feed events, then inspect either the high-level intent stream or the
/// byte-exact wire transcript in delivery order — the transcript is what
/// the peripheral would actually have seen, bypasses and batching
/// included.
#[derive(Debug)]
pub struct Replay {
    engine: GestureEngine,
    channel: CommandChannel<Vec<u8>>,
}

impl Replay {
    /// Build a replay with the given gesture config and batch size.
    #[must_use]
    pub fn new(config: GestureConfig, batch_size: usize) -> Self {
        Self {
            engine: GestureEngine::new(config),
            channel: CommandChannel::new(Vec::new(), batch_size),
        }
    }

    /// Feed events through engine and channel; returns the intents they
    /// produced.
    pub fn feed(&mut self, events: &[InputEvent]) -> std::io::Result<Vec<GestureIntent>> {
        let mut produced = Vec::new();
        for event in events {
            let intents = self.engine.handle(*event);
            for intent in &intents {
                self.channel.deliver(intent)?;
            }
            produced.extend(intents);
        }
        Ok(produced)
    }

    /// Wire transcript delivered so far, in write order.
    #[must_use]
    pub fn wire(&self) -> String {
        String::from_utf8_lossy(self.channel.sink()).into_owned()
    }

    /// Lines still waiting in the batch buffer.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.channel.pending_len()
    }

    /// Run the shutdown path — final flush, then the engine's teardown
    /// intents — and return the complete transcript. The flush comes
    /// first so a still-buffered drag press precedes its release.
    pub fn shutdown(mut self) -> std::io::Result<String> {
        self.channel.flush()?;
        for intent in self.engine.teardown() {
            self.channel.write_now(&intent.commands())?;
        }
        Ok(self.wire())
    }
}
