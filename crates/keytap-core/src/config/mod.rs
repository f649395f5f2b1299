//! Configuration store: serial settings and the token-to-keys mapping.
//!
//! The config file is read twice, by two independent parsers:
//!
//! - **`settings`** – a structured INI parse for `baud` and `port`, merged
//!   with CLI overrides into an [`settings::EffectiveConfig`].
//! - **`mapping`** – a raw line pass that turns every `token=k1+k2` line
//!   into a [`mapping::KeyMapping`] entry.
//!
//! Both results are immutable once built.

pub mod error;
pub mod mapping;
pub mod settings;
