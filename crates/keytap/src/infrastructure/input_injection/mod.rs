//! Key injection implementations.
//!
//! - **`desktop`** – the `enigo`-backed injector for the local desktop.
//! - **`mock`** – records taps for tests.

pub mod desktop;
pub mod mock;
