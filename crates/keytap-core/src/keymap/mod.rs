//! Key-name vocabulary and canonical key codes.
//!
//! The config file names keys by string (`ctrl`, `f5`, `a`).  This module
//! owns the table of accepted names and resolves them to [`KeyCode`]s.
//! Platform injectors translate from [`KeyCode`] to their native codes.

pub mod code;
pub mod names;

pub use code::KeyCode;

/// Unified lookup over the key-name vocabulary.
pub struct KeyMapper;

impl KeyMapper {
    /// Resolves a key name (as written in the config file) to a [`KeyCode`].
    ///
    /// Returns `None` if the name is not part of the vocabulary.
    pub fn lookup(name: &str) -> Option<KeyCode> {
        names::name_to_code(name)
    }

    /// Returns `true` if `name` is part of the vocabulary.
    pub fn is_supported(name: &str) -> bool {
        Self::lookup(name).is_some()
    }

    /// Iterates over every accepted key name in table order.
    pub fn supported_names() -> impl Iterator<Item = &'static str> {
        names::KEY_NAMES.iter().map(|&(name, _)| name)
    }
}
