//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;
use keytap_core::CliOverrides;

/// Bridge a serial macro pad to keystrokes.
///
/// Reads tokens from a serial port and taps the keys mapped to them in the
/// config file.
#[derive(Debug, Parser)]
#[command(name = "keytap", version)]
pub struct Args {
    /// Baud rate (0 = use the config file value)
    #[arg(short = 'b', value_name = "BAUD", default_value_t = 0, allow_negative_numbers = true)]
    pub baud: i64,

    /// Serial port name (empty = use the config file value)
    #[arg(short = 'p', value_name = "PORT", default_value = "")]
    pub port: String,

    /// Config file path
    #[arg(short = 'f', value_name = "FILE", default_value = "config.ini")]
    pub file: PathBuf,
}

impl Args {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            baud: self.baud,
            port: self.port.clone(),
        }
    }
}
