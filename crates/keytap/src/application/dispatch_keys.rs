//! KeyDispatcher: turns a mapped key list into one combined OS key tap.
//!
//! This use case sits at the application layer and delegates to a
//! [`PlatformKeyInjector`] trait object for the platform key table and
//! the actual OS-level injection.  The platform implementations are in the
//! infrastructure layer.
//!
//! # Validation is advisory
//!
//! Each key name is checked against the injector's key table first, and
//! unknown names are reported with a warning.  The tap itself still receives
//! the *complete* original list, unknown names included; the injector is the
//! one that decides what it can actually press.

use std::sync::Arc;

use keytap_core::{KeyCode, KeyMapper};
use thiserror::Error;
use tracing::warn;

/// Error type for key injection operations.
#[derive(Debug, Error)]
pub enum InjectionError {
    #[error("platform error: {0}")]
    Platform(String),
    #[error("injector not connected: {0}")]
    NotConnected(String),
}

/// OS key injection capability.
///
/// Holds the platform key table (name → code) and the simultaneous-tap
/// primitive.  Injected into [`KeyDispatcher`] so tests can substitute a
/// recording fake for the real desktop.
pub trait PlatformKeyInjector {
    /// Looks up a key name in the platform key table.
    ///
    /// The default implementation uses the shared keytap vocabulary.
    fn key_code(&self, name: &str) -> Option<KeyCode> {
        KeyMapper::lookup(name)
    }

    /// Presses every key in `keys` together, in order, then releases them.
    fn key_tap(&self, keys: &[String]) -> Result<(), InjectionError>;
}

/// The Dispatch Keys use case.
pub struct KeyDispatcher {
    injector: Arc<dyn PlatformKeyInjector>,
}

impl KeyDispatcher {
    /// Creates a new dispatcher with the given platform injector.
    pub fn new(injector: Arc<dyn PlatformKeyInjector>) -> Self {
        Self { injector }
    }

    /// Validates `keys` against the platform key table, then issues one
    /// combined tap of the whole list.
    ///
    /// Injection failures are logged and swallowed; the caller keeps running.
    pub fn dispatch(&self, keys: &[String]) {
        for key in keys {
            if self.injector.key_code(key).is_none() {
                warn!(key = %key, "key is not supported by the platform key table");
            }
        }

        if let Err(e) = self.injector.key_tap(keys) {
            warn!("key tap failed: {e}");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{mock, predicate::eq};

    mock! {
        Injector {}

        impl PlatformKeyInjector for Injector {
            fn key_code(&self, name: &str) -> Option<KeyCode>;
            fn key_tap(&self, keys: &[String]) -> Result<(), InjectionError>;
        }
    }

    fn keys(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dispatch_taps_all_keys_in_order() {
        // Arrange
        let mut injector = MockInjector::new();
        injector
            .expect_key_code()
            .returning(|name| KeyMapper::lookup(name));
        injector
            .expect_key_tap()
            .withf(|tapped| tapped == ["ctrl", "c"])
            .times(1)
            .returning(|_| Ok(()));
        let dispatcher = KeyDispatcher::new(Arc::new(injector));

        // Act
        dispatcher.dispatch(&keys(&["ctrl", "c"]));

        // Assert – expectations verified on drop
    }

    #[test]
    fn test_dispatch_checks_every_key_against_table() {
        // Arrange
        let mut injector = MockInjector::new();
        injector
            .expect_key_code()
            .with(eq("shift"))
            .times(1)
            .returning(|_| Some(KeyCode::ShiftLeft));
        injector
            .expect_key_code()
            .with(eq("1"))
            .times(1)
            .returning(|_| Some(KeyCode::Digit1));
        injector.expect_key_tap().times(1).returning(|_| Ok(()));
        let dispatcher = KeyDispatcher::new(Arc::new(injector));

        // Act
        dispatcher.dispatch(&keys(&["shift", "1"]));
    }

    #[test]
    fn test_dispatch_keeps_unsupported_keys_in_tap() {
        // Arrange – "hyper" is not in the table but must still be tapped
        let mut injector = MockInjector::new();
        injector
            .expect_key_code()
            .returning(|name| KeyMapper::lookup(name));
        injector
            .expect_key_tap()
            .withf(|tapped| tapped == ["hyper", "a"])
            .times(1)
            .returning(|_| Ok(()));
        let dispatcher = KeyDispatcher::new(Arc::new(injector));

        // Act
        dispatcher.dispatch(&keys(&["hyper", "a"]));
    }

    #[test]
    fn test_dispatch_swallows_injection_failure() {
        // Arrange
        let mut injector = MockInjector::new();
        injector.expect_key_code().returning(|_| None);
        injector
            .expect_key_tap()
            .times(1)
            .returning(|_| Err(InjectionError::Platform("injected failure".to_string())));
        let dispatcher = KeyDispatcher::new(Arc::new(injector));

        // Act – must not panic or propagate
        dispatcher.dispatch(&keys(&["f5"]));
    }

    #[test]
    fn test_default_key_code_uses_shared_vocabulary() {
        struct TapOnly;
        impl PlatformKeyInjector for TapOnly {
            fn key_tap(&self, _: &[String]) -> Result<(), InjectionError> {
                Ok(())
            }
        }

        assert_eq!(TapOnly.key_code("ctrl"), Some(KeyCode::ControlLeft));
        assert_eq!(TapOnly.key_code("Ctrl"), None);
    }
}
