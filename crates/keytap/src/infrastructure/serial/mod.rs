//! Serial channel backed by the `serialport` crate.
//!
//! # Blocking reads
//!
//! `serialport` always reads with a timeout.  The channel uses a long poll
//! interval and reports an expired poll as a zero-byte read, so from the
//! bridge loop's point of view a silent device simply blocks.  Every other
//! read error is returned unchanged and ends the loop.
//!
//! # Close
//!
//! The OS handle is owned by the boxed `SerialPort` and released when the
//! channel is dropped, on every exit path out of the bridge.

use std::io::{self, Read};
use std::time::Duration;

use keytap_core::EffectiveConfig;
use serialport::SerialPort;
use tracing::{debug, info};

use crate::application::bridge_loop::BridgeError;

/// How long one underlying read waits before reporting "no data yet".
const READ_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// An open serial connection, exclusively owned by the bridge loop.
pub struct SerialChannel {
    port: Box<dyn SerialPort>,
    name: String,
}

impl SerialChannel {
    /// Opens `config.port` at `config.baud` (8N1, no flow control).
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::SerialOpen`] if the device does not exist,
    /// is busy, or cannot be accessed.
    pub fn open(config: &EffectiveConfig) -> Result<Self, BridgeError> {
        let port = serialport::new(config.port.as_str(), config.baud)
            .timeout(READ_POLL_INTERVAL)
            .open()
            .map_err(|e| BridgeError::SerialOpen {
                port: config.port.clone(),
                baud: config.baud,
                reason: e.to_string(),
            })?;
        info!(port = %config.port, baud = config.baud, "serial port open");

        Ok(Self {
            port,
            name: config.port.clone(),
        })
    }
}

impl Read for SerialChannel {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        poll_result(self.port.read(buf))
    }
}

impl Drop for SerialChannel {
    fn drop(&mut self) {
        debug!(port = %self.name, "closing serial port");
    }
}

/// Maps an expired poll to "zero bytes read".
fn poll_result(result: io::Result<usize>) -> io::Result<usize> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(0),
        other => other,
    }
}
