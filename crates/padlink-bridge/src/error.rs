//! Bridge error types.

use thiserror::Error;

/// Errors that can occur in the bridge.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The configured input device does not exist.
    ///
    /// Fatal at startup: there is nothing to read from. Check the device
    /// name (`--device`) against the kernel's input device list.
    #[error("input device {name:?} not found")]
    DeviceNotFound {
        /// Device name that was searched for.
        name: String,
    },

    /// Reading from the input device failed.
    ///
    /// Usually means the device disappeared mid-run (unplugged). Fatal
    /// for the run; the event stream is not restartable.
    #[error("input source error: {0}")]
    Input(#[source] std::io::Error),

    /// Writing to the serial channel failed.
    ///
    /// Fatal for the run. No automatic reconnect: if the transport drops,
    /// the peripheral's state is unknown and the operator restarts.
    #[error("transport error: {0}")]
    Transport(#[source] std::io::Error),

    /// Invalid configuration (bad serial path, zero batch size, etc.).
    #[error("configuration error: {0}")]
    Config(String),
}
