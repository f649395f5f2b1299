//! # keytap-core
//!
//! Shared library for keytap containing the key-name vocabulary and the
//! configuration store (CLI/INI resolution and the token-to-keys mapping).
//!
//! This crate has zero dependencies on OS input APIs or serial devices.
//!
//! # Architecture overview (for beginners)
//!
//! keytap turns a small serial device (a macro pad, an Arduino, a foot
//! switch) into a keyboard.  The device writes short ASCII tokens such as
//! `A` or `F13` to its serial port; keytap reads each token and, if the
//! config file maps it to keys, presses those keys on the host.
//!
//! This crate is the pure foundation.  It defines:
//!
//! - **`keymap`** – The vocabulary of key names accepted in the config file
//!   (`ctrl`, `shift`, `a`, `f5`, ...) and their canonical [`KeyCode`].
//!
//! - **`config`** – Resolution of the effective baud/port pair from CLI
//!   overrides and the INI file, plus the line-oriented parse of
//!   `token=key1+key2` mapping entries.

pub mod config;
pub mod keymap;

// Re-export the most-used types at the crate root so callers can write
// `keytap_core::KeyMapping` instead of `keytap_core::config::mapping::KeyMapping`.
pub use config::error::ConfigError;
pub use config::mapping::{load_mapping, parse_mapping, KeyMapping};
pub use config::settings::{resolve, CliOverrides, EffectiveConfig};
pub use keymap::code::KeyCode;
pub use keymap::KeyMapper;
