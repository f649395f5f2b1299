//! keytap library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does keytap do? (for beginners)
//!
//! A macro pad or microcontroller is plugged in over USB-serial and writes
//! a short token (`A`, `vol+`, `F13`) whenever one of its buttons is
//! pressed.  keytap:
//!
//! 1. Resolves the serial port and baud rate from `-p`/`-b` or the INI file.
//! 2. Opens the port and reads from it forever.
//! 3. Looks each received token up in the `token=key1+key2` lines of the
//!    same INI file.
//! 4. Presses the mapped keys together and releases them, through the
//!    platform input API (`SendInput`, XTest, CoreGraphics via `enigo`).

/// Application layer: key dispatch and the bridge loop.
pub mod application;

/// Command-line flags.
pub mod cli;

/// Infrastructure layer: serial device and OS key injection.
pub mod infrastructure;
