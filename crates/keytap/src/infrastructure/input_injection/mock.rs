//! Recording key injector for tests.
//!
//! The real injector presses keys on the desktop the tests run on.  The
//! `RecordingKeyInjector` replaces that with in-memory recording: each tap
//! is pushed into a `Mutex<Vec<...>>` so assertions can inspect exactly which
//! key lists were tapped and in what order.
//!
//! # Usage in tests
//!
//! ```ignore
//! let injector = Arc::new(RecordingKeyInjector::new());
//! let dispatcher = KeyDispatcher::new(Arc::clone(&injector) as Arc<dyn PlatformKeyInjector>);
//!
//! dispatcher.dispatch(&["ctrl".into(), "c".into()]);
//!
//! assert_eq!(injector.taps(), vec![vec!["ctrl", "c"]]);
//! ```
//!
//! Set `should_fail = true` to make every tap return
//! `InjectionError::Platform` without recording it.

use std::sync::Mutex;

use crate::application::dispatch_keys::{InjectionError, PlatformKeyInjector};

/// Records every tap instead of injecting it.
#[derive(Default)]
pub struct RecordingKeyInjector {
    /// Each key list passed to `key_tap`, in call order.
    pub recorded: Mutex<Vec<Vec<String>>>,
    /// When `true`, `key_tap` fails without recording.
    pub should_fail: bool,
}

impl RecordingKeyInjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all recorded taps.
    pub fn taps(&self) -> Vec<Vec<String>> {
        self.recorded
            .lock()
            .map(|taps| taps.clone())
            .unwrap_or_default()
    }
}

impl PlatformKeyInjector for RecordingKeyInjector {
    fn key_tap(&self, keys: &[String]) -> Result<(), InjectionError> {
        if self.should_fail {
            return Err(InjectionError::Platform("mock failure".into()));
        }
        self.recorded
            .lock()
            .map_err(|_| InjectionError::Platform("recording lock poisoned".into()))?
            .push(keys.to_vec());
        Ok(())
    }
}
