//! Key-name vocabulary accepted on the right-hand side of mapping lines.
//!
//! Names are lowercase and matched exactly (`Ctrl` is not `ctrl`).  The
//! vocabulary follows the names most desktop automation tools use, so a
//! config written for one of them usually works unchanged:
//!
//! | Name(s)                       | Key                     |
//! |-------------------------------|-------------------------|
//! | `a`–`z`, `0`–`9`              | letters and digits      |
//! | `f1`–`f20`                    | function keys           |
//! | `enter`, `return`             | Enter                   |
//! | `esc`, `escape`               | Escape                  |
//! | `ctrl`, `lctrl`, `rctrl`      | Control (left / right)  |
//! | `shift`, `lshift`, `rshift`   | Shift                   |
//! | `alt`, `lalt`, `ralt`         | Alt / Option            |
//! | `cmd`, `command`, `lcmd`, `rcmd` | Meta / Win / Command |
//! | `num0`–`num9`, `num_enter`, … | numeric keypad          |
//! | `volumeup`, `volumedown`, `volumemute` | media volume   |

use super::code::KeyCode;

/// Every accepted key name and the key it resolves to.
pub const KEY_NAMES: &[(&str, KeyCode)] = &[
    ("a", KeyCode::KeyA),
    ("b", KeyCode::KeyB),
    ("c", KeyCode::KeyC),
    ("d", KeyCode::KeyD),
    ("e", KeyCode::KeyE),
    ("f", KeyCode::KeyF),
    ("g", KeyCode::KeyG),
    ("h", KeyCode::KeyH),
    ("i", KeyCode::KeyI),
    ("j", KeyCode::KeyJ),
    ("k", KeyCode::KeyK),
    ("l", KeyCode::KeyL),
    ("m", KeyCode::KeyM),
    ("n", KeyCode::KeyN),
    ("o", KeyCode::KeyO),
    ("p", KeyCode::KeyP),
    ("q", KeyCode::KeyQ),
    ("r", KeyCode::KeyR),
    ("s", KeyCode::KeyS),
    ("t", KeyCode::KeyT),
    ("u", KeyCode::KeyU),
    ("v", KeyCode::KeyV),
    ("w", KeyCode::KeyW),
    ("x", KeyCode::KeyX),
    ("y", KeyCode::KeyY),
    ("z", KeyCode::KeyZ),
    ("0", KeyCode::Digit0),
    ("1", KeyCode::Digit1),
    ("2", KeyCode::Digit2),
    ("3", KeyCode::Digit3),
    ("4", KeyCode::Digit4),
    ("5", KeyCode::Digit5),
    ("6", KeyCode::Digit6),
    ("7", KeyCode::Digit7),
    ("8", KeyCode::Digit8),
    ("9", KeyCode::Digit9),
    ("-", KeyCode::Minus),
    ("=", KeyCode::Equal),
    ("[", KeyCode::BracketLeft),
    ("]", KeyCode::BracketRight),
    ("\\", KeyCode::Backslash),
    (";", KeyCode::Semicolon),
    ("'", KeyCode::Quote),
    ("`", KeyCode::Backquote),
    (",", KeyCode::Comma),
    (".", KeyCode::Period),
    ("/", KeyCode::Slash),
    ("f1", KeyCode::F1),
    ("f2", KeyCode::F2),
    ("f3", KeyCode::F3),
    ("f4", KeyCode::F4),
    ("f5", KeyCode::F5),
    ("f6", KeyCode::F6),
    ("f7", KeyCode::F7),
    ("f8", KeyCode::F8),
    ("f9", KeyCode::F9),
    ("f10", KeyCode::F10),
    ("f11", KeyCode::F11),
    ("f12", KeyCode::F12),
    ("f13", KeyCode::F13),
    ("f14", KeyCode::F14),
    ("f15", KeyCode::F15),
    ("f16", KeyCode::F16),
    ("f17", KeyCode::F17),
    ("f18", KeyCode::F18),
    ("f19", KeyCode::F19),
    ("f20", KeyCode::F20),
    ("enter", KeyCode::Enter),
    ("return", KeyCode::Enter),
    ("esc", KeyCode::Escape),
    ("escape", KeyCode::Escape),
    ("backspace", KeyCode::Backspace),
    ("tab", KeyCode::Tab),
    ("space", KeyCode::Space),
    ("capslock", KeyCode::CapsLock),
    ("printscreen", KeyCode::PrintScreen),
    ("insert", KeyCode::Insert),
    ("delete", KeyCode::Delete),
    ("home", KeyCode::Home),
    ("end", KeyCode::End),
    ("pageup", KeyCode::PageUp),
    ("pagedown", KeyCode::PageDown),
    ("up", KeyCode::ArrowUp),
    ("down", KeyCode::ArrowDown),
    ("left", KeyCode::ArrowLeft),
    ("right", KeyCode::ArrowRight),
    ("menu", KeyCode::ContextMenu),
    ("ctrl", KeyCode::ControlLeft),
    ("lctrl", KeyCode::ControlLeft),
    ("rctrl", KeyCode::ControlRight),
    ("shift", KeyCode::ShiftLeft),
    ("lshift", KeyCode::ShiftLeft),
    ("rshift", KeyCode::ShiftRight),
    ("alt", KeyCode::AltLeft),
    ("lalt", KeyCode::AltLeft),
    ("ralt", KeyCode::AltRight),
    ("cmd", KeyCode::MetaLeft),
    ("command", KeyCode::MetaLeft),
    ("lcmd", KeyCode::MetaLeft),
    ("rcmd", KeyCode::MetaRight),
    ("num0", KeyCode::Numpad0),
    ("num1", KeyCode::Numpad1),
    ("num2", KeyCode::Numpad2),
    ("num3", KeyCode::Numpad3),
    ("num4", KeyCode::Numpad4),
    ("num5", KeyCode::Numpad5),
    ("num6", KeyCode::Numpad6),
    ("num7", KeyCode::Numpad7),
    ("num8", KeyCode::Numpad8),
    ("num9", KeyCode::Numpad9),
    ("num_lock", KeyCode::NumLock),
    ("num.", KeyCode::NumpadDecimal),
    ("num+", KeyCode::NumpadAdd),
    ("num-", KeyCode::NumpadSubtract),
    ("num*", KeyCode::NumpadMultiply),
    ("num/", KeyCode::NumpadDivide),
    ("num_enter", KeyCode::NumpadEnter),
    ("volumeup", KeyCode::VolumeUp),
    ("volumedown", KeyCode::VolumeDown),
    ("volumemute", KeyCode::VolumeMute),
];

/// Resolves a key name to its [`KeyCode`].
///
/// Returns `None` for names outside the vocabulary.
pub fn name_to_code(name: &str) -> Option<KeyCode> {
    KEY_NAMES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|&(_, code)| code)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
