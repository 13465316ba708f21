//! Batching command channel.

use std::io::Write;

use padlink_gesture::{Delivery, GestureIntent};
use padlink_proto::Command;

/// Ordered, batching text-line sink — the engine's only output port.
///
/// Commands enqueue as encoded lines; once the pending count reaches the
/// batch size, everything flushes as one concatenated write. Small writes
/// are expensive on a UART, and pointer movement produces a dense stream,
/// so batching pays for itself immediately.
///
/// [`CommandChannel::write_now`] bypasses the queue for latency-sensitive
/// output (taps). The bypass means two delivery orders are possible for
/// one logical intent stream: a queued `Move` can reach the wire after a
/// `Tap` issued moments later. That reordering is an accepted property of
/// the design — click latency is prioritized over strict ordering — not a
/// defect.
#[derive(Debug)]
pub struct CommandChannel<W: Write> {
    sink: W,
    pending: Vec<String>,
    batch_size: usize,
}

impl<W: Write> CommandChannel<W> {
    /// Create a channel over the given sink. A batch size of `n` flushes
    /// after every `n`th enqueued command; `1` disables batching.
    pub fn new(sink: W, batch_size: usize) -> Self {
        Self { sink, pending: Vec::new(), batch_size: batch_size.max(1) }
    }

    /// Queue a command, flushing the batch when it is full.
    pub fn enqueue(&mut self, command: &Command) -> std::io::Result<()> {
        self.pending.push(command.encode_line());
        if self.pending.len() >= self.batch_size {
            self.flush()?;
        }
        Ok(())
    }

    /// Write commands to the sink immediately, ahead of anything queued.
    /// Pending lines stay queued.
    pub fn write_now(&mut self, commands: &[Command]) -> std::io::Result<()> {
        let mut burst = String::new();
        for command in commands {
            burst.push_str(&command.encode_line());
        }
        self.sink.write_all(burst.as_bytes())?;
        self.sink.flush()
    }

    /// Deliver one intent according to its delivery class.
    pub fn deliver(&mut self, intent: &GestureIntent) -> std::io::Result<()> {
        let commands = intent.commands();
        match intent.delivery() {
            Delivery::Immediate => self.write_now(&commands),
            Delivery::Batched => {
                for command in &commands {
                    self.enqueue(command)?;
                }
                Ok(())
            },
        }
    }

    /// Drain all pending lines as one write, regardless of batch fill.
    /// Called at shutdown so no buffered command is lost.
    pub fn flush(&mut self) -> std::io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let batch: String = self.pending.concat();
        self.pending.clear();
        self.sink.write_all(batch.as_bytes())?;
        self.sink.flush()
    }

    /// Number of lines waiting in the batch buffer.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Shared access to the underlying sink, for tests.
    pub fn sink(&self) -> &W {
        &self.sink
    }
}
