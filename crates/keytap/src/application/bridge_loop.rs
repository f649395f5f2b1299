//! BridgeLoop: the read → look up → dispatch cycle.
//!
//! # Startup sequence
//!
//! ```text
//! start()
//!  ├─ resolve()        CLI + INI → EffectiveConfig     (fatal on error)
//!  ├─ open(config)     serial device                   (fatal on error)
//!  ├─ load_mapping()   raw-line pass over the INI file (fatal on error)
//!  └─ BridgeLoop::run()
//!       loop {
//!         read ≤128 bytes  ── error ─▶ Terminated (return Err)
//!         decode as text, log it
//!         exact-match lookup ── hit ─▶ KeyDispatcher::dispatch
//!       }
//! ```
//!
//! The loop never returns `Ok`.  There is no stop command and no retry;
//! the only ways out are a read error or the process being killed.
//!
//! # Generic source
//!
//! The loop reads from any [`std::io::Read`].  In production that is a
//! `SerialChannel`; in tests it is a scripted byte source.  A read that
//! returns `Ok(0)` means "nothing arrived yet" and the loop simply reads
//! again.

use std::io::Read;
use std::path::Path;

use keytap_core::{load_mapping, resolve, CliOverrides, ConfigError, EffectiveConfig, KeyMapping};
use thiserror::Error;
use tracing::{error, info};

use super::dispatch_keys::KeyDispatcher;

/// Size of the buffer each serial read fills.
pub const READ_BUFFER_SIZE: usize = 128;

/// Fatal bridge errors.  Each one ends the process.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to open serial port {port} at {baud} baud: {reason}")]
    SerialOpen {
        port: String,
        baud: u32,
        reason: String,
    },

    #[error("serial read failed: {0}")]
    SerialRead(#[source] std::io::Error),
}

/// Lifecycle of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Owns the serial source and mapping for the life of the process.
pub struct BridgeLoop<S> {
    source: S,
    mapping: KeyMapping,
    dispatcher: KeyDispatcher,
    state: LoopState,
}

impl<S: Read> BridgeLoop<S> {
    pub fn new(source: S, mapping: KeyMapping, dispatcher: KeyDispatcher) -> Self {
        Self {
            source,
            mapping,
            dispatcher,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Reads and dispatches until the source fails.
    ///
    /// # Errors
    ///
    /// Always ends with [`BridgeError::SerialRead`]; the state is
    /// [`LoopState::Terminated`] afterwards.
    pub fn run(&mut self) -> Result<(), BridgeError> {
        let mut buf = [0u8; READ_BUFFER_SIZE];
        loop {
            let n = match self.source.read(&mut buf) {
                Ok(n) => n,
                Err(e) => {
                    error!("serial read failed: {e}");
                    self.state = LoopState::Terminated;
                    return Err(BridgeError::SerialRead(e));
                }
            };
            if n > 0 {
                self.handle_chunk(&buf[..n]);
            }
        }
    }

    /// Handles one chunk of received bytes as a single token.
    ///
    /// Returns `true` if the token matched a mapping entry.
    pub fn handle_chunk(&self, bytes: &[u8]) -> bool {
        let token = String::from_utf8_lossy(bytes);
        info!("{token}");

        match self.mapping.get(&token) {
            Some(keys) => {
                info!("Sending keys: [{}]", keys.join(" "));
                self.dispatcher.dispatch(keys);
                true
            }
            None => false,
        }
    }
}

/// Runs the full bridge: resolve config, open the source, load the mapping,
/// then loop.
///
/// `open` is only called once config resolution has succeeded, so a missing
/// or invalid config never touches the serial device.
///
/// # Errors
///
/// Returns the first fatal [`BridgeError`] encountered.
pub fn start<S, F>(
    overrides: &CliOverrides,
    config_path: &Path,
    open: F,
    dispatcher: KeyDispatcher,
) -> Result<(), BridgeError>
where
    S: Read,
    F: FnOnce(&EffectiveConfig) -> Result<S, BridgeError>,
{
    let config = resolve(overrides, config_path)?;
    info!(port = %config.port, baud = config.baud, "opening serial port");
    let source = open(&config)?;

    let mapping = load_mapping(config_path)?;
    info!(entries = mapping.len(), "loaded key mapping");

    BridgeLoop::new(source, mapping, dispatcher).run()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
