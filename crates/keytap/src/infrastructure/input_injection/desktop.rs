//! Desktop key injection via `enigo`.
//!
//! `enigo` wraps `SendInput` on Windows, CoreGraphics events on macOS and
//! the XTest extension on Linux/X11.  Events go to whichever window has
//! focus, exactly like physical keystrokes.
//!
//! # Key translation
//!
//! ```text
//! key name → KeyCode (shared vocabulary) → enigo::Key
//! ```
//!
//! Printable keys are sent as `Key::Unicode` of their US-layout character;
//! the rest map to enigo's named keys.  `insert`, `num_lock`, `printscreen`
//! and `menu` have no macOS equivalent, so on macOS [`EnigoInjector`]
//! reports them as unsupported through `key_code` and the dispatcher warns
//! about them.  A name outside the vocabulary that is a single character is
//! still typed as that character.  Anything else cannot be pressed and is
//! left out of the tap.
//!
//! # Connection
//!
//! The display connection is opened on the first tap rather than at
//! startup.  If it fails (no `DISPLAY`, no accessibility permission) the
//! tap returns `NotConnected` and the next tap tries again.

use std::sync::Mutex;

use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use keytap_core::{KeyCode, KeyMapper};
use tracing::debug;

use crate::application::dispatch_keys::{InjectionError, PlatformKeyInjector};

/// Production injector for the local desktop session.
#[derive(Default)]
pub struct EnigoInjector {
    enigo: Mutex<Option<Enigo>>,
}

impl EnigoInjector {
    pub fn new() -> Self {
        let unavailable: Vec<&str> = KeyMapper::supported_names()
            .filter(|name| name_to_enigo_key(name).is_none())
            .collect();
        if !unavailable.is_empty() {
            debug!(keys = ?unavailable, "key names with no injectable key on this platform");
        }
        Self::default()
    }
}

impl PlatformKeyInjector for EnigoInjector {
    fn key_code(&self, name: &str) -> Option<KeyCode> {
        KeyMapper::lookup(name).filter(|&code| code_to_enigo_key(code).is_some())
    }

    fn key_tap(&self, keys: &[String]) -> Result<(), InjectionError> {
        let presses: Vec<Key> = keys
            .iter()
            .filter_map(|name| {
                let key = name_to_enigo_key(name);
                if key.is_none() {
                    debug!(key = %name, "no injectable key for name; leaving it out of the tap");
                }
                key
            })
            .collect();
        if presses.is_empty() {
            return Ok(());
        }

        let mut guard = self
            .enigo
            .lock()
            .map_err(|_| InjectionError::Platform("injector lock poisoned".into()))?;
        if guard.is_none() {
            let enigo = Enigo::new(&Settings::default())
                .map_err(|e| InjectionError::NotConnected(e.to_string()))?;
            debug!("connected to desktop input session");
            *guard = Some(enigo);
        }
        let Some(enigo) = guard.as_mut() else {
            return Err(InjectionError::NotConnected("no input session".into()));
        };

        tap(enigo, &presses)
    }
}

/// Presses `keys` in order, then releases them in reverse.
///
/// If a press fails, the keys already held are released before returning.
fn tap(enigo: &mut Enigo, keys: &[Key]) -> Result<(), InjectionError> {
    let mut held = 0;
    let mut result = Ok(());
    for key in keys {
        match enigo.key(*key, Direction::Press) {
            Ok(()) => held += 1,
            Err(e) => {
                result = Err(InjectionError::Platform(e.to_string()));
                break;
            }
        }
    }
    for key in keys[..held].iter().rev() {
        if let Err(e) = enigo.key(*key, Direction::Release) {
            if result.is_ok() {
                result = Err(InjectionError::Platform(e.to_string()));
            }
        }
    }
    result
}

fn name_to_enigo_key(name: &str) -> Option<Key> {
    match KeyMapper::lookup(name) {
        Some(code) => code_to_enigo_key(code),
        None => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(Key::Unicode(c)),
                _ => None,
            }
        }
    }
}

/// X11 keysym for the context-menu key; enigo has no named variant for it.
#[cfg(all(unix, not(target_os = "macos")))]
const XK_MENU: u32 = 0xff67;

fn code_to_enigo_key(code: KeyCode) -> Option<Key> {
    if let Some(c) = code.as_char() {
        return Some(Key::Unicode(c));
    }
    let key = match code {
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Return,
        KeyCode::Escape => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        KeyCode::Space => Key::Unicode(' '),
        KeyCode::CapsLock => Key::CapsLock,
        KeyCode::Delete => Key::Delete,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::ArrowUp => Key::UpArrow,
        KeyCode::ArrowDown => Key::DownArrow,
        KeyCode::ArrowLeft => Key::LeftArrow,
        KeyCode::ArrowRight => Key::RightArrow,
        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,
        KeyCode::F5 => Key::F5,
        KeyCode::F6 => Key::F6,
        KeyCode::F7 => Key::F7,
        KeyCode::F8 => Key::F8,
        KeyCode::F9 => Key::F9,
        KeyCode::F10 => Key::F10,
        KeyCode::F11 => Key::F11,
        KeyCode::F12 => Key::F12,
        KeyCode::F13 => Key::F13,
        KeyCode::F14 => Key::F14,
        KeyCode::F15 => Key::F15,
        KeyCode::F16 => Key::F16,
        KeyCode::F17 => Key::F17,
        KeyCode::F18 => Key::F18,
        KeyCode::F19 => Key::F19,
        KeyCode::F20 => Key::F20,
        KeyCode::VolumeUp => Key::VolumeUp,
        KeyCode::VolumeDown => Key::VolumeDown,
        KeyCode::VolumeMute => Key::VolumeMute,
        KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
        KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
        KeyCode::MetaLeft | KeyCode::MetaRight => Key::Meta,
        #[cfg(any(target_os = "windows", all(unix, not(target_os = "macos"))))]
        KeyCode::Insert => Key::Insert,
        #[cfg(any(target_os = "windows", all(unix, not(target_os = "macos"))))]
        KeyCode::NumLock => Key::Numlock,
        #[cfg(target_os = "windows")]
        KeyCode::PrintScreen => Key::Snapshot,
        #[cfg(all(unix, not(target_os = "macos")))]
        KeyCode::PrintScreen => Key::Print,
        #[cfg(target_os = "windows")]
        KeyCode::ContextMenu => Key::Apps,
        #[cfg(all(unix, not(target_os = "macos")))]
        KeyCode::ContextMenu => Key::Other(XK_MENU),
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combo_names_translate_to_enigo_keys() {
        assert_eq!(name_to_enigo_key("ctrl"), Some(Key::Control));
        assert_eq!(name_to_enigo_key("rshift"), Some(Key::Shift));
        assert_eq!(name_to_enigo_key("c"), Some(Key::Unicode('c')));
        assert_eq!(name_to_enigo_key("1"), Some(Key::Unicode('1')));
        assert_eq!(name_to_enigo_key("num_enter"), Some(Key::Return));
        assert_eq!(name_to_enigo_key("f5"), Some(Key::F5));
    }

    #[test]
    fn test_single_character_outside_vocabulary_is_typed() {
        assert_eq!(name_to_enigo_key("A"), Some(Key::Unicode('A')));
    }

    #[test]
    fn test_unknown_multi_character_name_has_no_key() {
        assert_eq!(name_to_enigo_key("hyper"), None);
        assert_eq!(name_to_enigo_key(""), None);
    }

    #[test]
    fn test_macro_pad_keys_translate_on_every_platform() {
        assert_eq!(name_to_enigo_key("f13"), Some(Key::F13));
        assert_eq!(name_to_enigo_key("f20"), Some(Key::F20));
        assert_eq!(name_to_enigo_key("volumeup"), Some(Key::VolumeUp));
        assert_eq!(name_to_enigo_key("volumedown"), Some(Key::VolumeDown));
        assert_eq!(name_to_enigo_key("volumemute"), Some(Key::VolumeMute));
    }

    #[test]
    fn test_key_code_accepts_exactly_the_pressable_names() {
        // Arrange
        let injector = EnigoInjector::new();

        // Act / Assert – a name the tap would drop must fail validation
        for name in KeyMapper::supported_names() {
            assert_eq!(
                injector.key_code(name).is_some(),
                name_to_enigo_key(name).is_some(),
                "{name:?}: validation and injection disagree"
            );
        }
        assert_eq!(injector.key_code("hyper"), None);
    }

    #[cfg(any(target_os = "windows", all(unix, not(target_os = "macos"))))]
    #[test]
    fn test_every_vocabulary_name_is_pressable() {
        let dropped: Vec<&str> = KeyMapper::supported_names()
            .filter(|name| name_to_enigo_key(name).is_none())
            .collect();
        assert!(dropped.is_empty(), "names the injector cannot press: {dropped:?}");
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn test_editing_keys_translate_on_x11() {
        assert_eq!(name_to_enigo_key("insert"), Some(Key::Insert));
        assert_eq!(name_to_enigo_key("num_lock"), Some(Key::Numlock));
        assert_eq!(name_to_enigo_key("printscreen"), Some(Key::Print));
        assert_eq!(name_to_enigo_key("menu"), Some(Key::Other(XK_MENU)));
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_keys_without_macos_equivalent_fail_validation() {
        let injector = EnigoInjector::new();
        for name in ["insert", "num_lock", "printscreen", "menu"] {
            assert_eq!(injector.key_code(name), None, "{name:?}");
        }
    }

    #[test]
    fn test_tap_of_only_unpressable_names_is_a_no_op() {
        // No display connection is attempted when there is nothing to press.
        let injector = EnigoInjector::new();
        assert!(injector.key_tap(&["hyper".to_string()]).is_ok());
    }
}
