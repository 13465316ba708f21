//! Serial transport setup.

use std::time::Duration;

use serialport::SerialPort;

use crate::BridgeError;

/// Open the UART to the peripheral.
///
/// The returned port implements [`std::io::Write`] and plugs straight
/// into a [`crate::CommandChannel`]. The short timeout bounds how long a
/// wedged peripheral can stall the write path before the run fails.
///
/// # Errors
///
/// [`BridgeError::Transport`] when the port cannot be opened (bad path,
/// permissions, already claimed).
pub fn open_serial(path: &str, baud_rate: u32) -> Result<Box<dyn SerialPort>, BridgeError> {
    let port = serialport::new(path, baud_rate)
        .timeout(Duration::from_millis(100))
        .open()
        .map_err(|e| BridgeError::Transport(e.into()))?;
    tracing::info!(path, baud_rate, "serial transport open");
    Ok(port)
}
