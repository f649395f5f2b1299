//! Infrastructure layer for keytap.
//!
//! Contains OS-facing adapters: the serial device and desktop key
//! injection.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `keytap_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`serial`** – `SerialChannel`, a blocking `Read` over a named serial
//!   port opened with the `serialport` crate.
//!
//! - **`input_injection`** – implementations of `PlatformKeyInjector`:
//!   `EnigoInjector` for the real desktop and `RecordingKeyInjector` for
//!   tests.

pub mod input_injection;
pub mod serial;
