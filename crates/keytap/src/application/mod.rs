//! Application layer use cases.
//!
//! - **`dispatch_keys`** – checks a mapped key list against the platform key
//!   table and issues one combined tap through an injected
//!   `PlatformKeyInjector`.
//!
//! - **`bridge_loop`** – the startup sequence and the endless
//!   read → look up → dispatch loop over any byte source.

pub mod bridge_loop;
pub mod dispatch_keys;
