use std::path::PathBuf;

use thiserror::Error;

/// Error type for config resolution and mapping load.
///
/// Every variant is fatal to the bridge; the binary logs it and exits.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file does not exist.
    #[error("config file does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    /// The config file is not valid INI.
    #[error("config file {} is not valid ini format: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// The config file exists but could not be read.
    #[error("I/O error reading config at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Neither the CLI nor the file supplied a baud rate above zero.
    #[error("baud rate is not valid: {0}")]
    InvalidBaud(i64),

    /// Neither the CLI nor the file supplied a port name.
    #[error("port name is not valid")]
    InvalidPort,
}
