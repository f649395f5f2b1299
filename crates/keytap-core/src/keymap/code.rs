//! Canonical key codes (USB HID Usage IDs, Keyboard/Keypad page 0x07).
//!
//! Every key name in the vocabulary resolves to one [`KeyCode`].  Several
//! names may share a code (`ctrl` and `lctrl` both resolve to
//! [`KeyCode::ControlLeft`]).  The numeric value of each variant is its HID
//! Usage ID, which gives the platform injectors a stable, layout-independent
//! identity to translate from.
//!
//! # Printable keys
//!
//! Keys that produce a single ASCII character on a US layout report it via
//! [`KeyCode::as_char`].  Injectors that type by character (rather than by
//! scan code) use this for letters, digits and punctuation.

/// USB HID Usage ID for a key that keytap can name in its config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum KeyCode {
    // Letters (HID 0x04–0x1D)
    KeyA = 0x04,
    KeyB = 0x05,
    KeyC = 0x06,
    KeyD = 0x07,
    KeyE = 0x08,
    KeyF = 0x09,
    KeyG = 0x0A,
    KeyH = 0x0B,
    KeyI = 0x0C,
    KeyJ = 0x0D,
    KeyK = 0x0E,
    KeyL = 0x0F,
    KeyM = 0x10,
    KeyN = 0x11,
    KeyO = 0x12,
    KeyP = 0x13,
    KeyQ = 0x14,
    KeyR = 0x15,
    KeyS = 0x16,
    KeyT = 0x17,
    KeyU = 0x18,
    KeyV = 0x19,
    KeyW = 0x1A,
    KeyX = 0x1B,
    KeyY = 0x1C,
    KeyZ = 0x1D,

    // Digits (HID 0x1E–0x27)
    Digit1 = 0x1E,
    Digit2 = 0x1F,
    Digit3 = 0x20,
    Digit4 = 0x21,
    Digit5 = 0x22,
    Digit6 = 0x23,
    Digit7 = 0x24,
    Digit8 = 0x25,
    Digit9 = 0x26,
    Digit0 = 0x27,

    // Control and punctuation (HID 0x28–0x39)
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    Minus = 0x2D,
    Equal = 0x2E,
    BracketLeft = 0x2F,
    BracketRight = 0x30,
    Backslash = 0x31,
    Semicolon = 0x33,
    Quote = 0x34,
    Backquote = 0x35,
    Comma = 0x36,
    Period = 0x37,
    Slash = 0x38,
    CapsLock = 0x39,

    // Function keys (HID 0x3A–0x45)
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,

    // Navigation cluster (HID 0x46–0x52)
    PrintScreen = 0x46,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    ArrowRight = 0x4F,
    ArrowLeft = 0x50,
    ArrowDown = 0x51,
    ArrowUp = 0x52,

    // Numpad (HID 0x53–0x63)
    NumLock = 0x53,
    NumpadDivide = 0x54,
    NumpadMultiply = 0x55,
    NumpadSubtract = 0x56,
    NumpadAdd = 0x57,
    NumpadEnter = 0x58,
    Numpad1 = 0x59,
    Numpad2 = 0x5A,
    Numpad3 = 0x5B,
    Numpad4 = 0x5C,
    Numpad5 = 0x5D,
    Numpad6 = 0x5E,
    Numpad7 = 0x5F,
    Numpad8 = 0x60,
    Numpad9 = 0x61,
    Numpad0 = 0x62,
    NumpadDecimal = 0x63,

    ContextMenu = 0x65,

    // Extended function keys (HID 0x68–0x6F)
    F13 = 0x68,
    F14 = 0x69,
    F15 = 0x6A,
    F16 = 0x6B,
    F17 = 0x6C,
    F18 = 0x6D,
    F19 = 0x6E,
    F20 = 0x6F,

    // Volume (HID 0x7F–0x81)
    VolumeMute = 0x7F,
    VolumeUp = 0x80,
    VolumeDown = 0x81,

    // Modifiers (HID 0xE0–0xE7)
    ControlLeft = 0xE0,
    ShiftLeft = 0xE1,
    AltLeft = 0xE2,
    MetaLeft = 0xE3,
    ControlRight = 0xE4,
    ShiftRight = 0xE5,
    AltRight = 0xE6,
    MetaRight = 0xE7,
}

impl KeyCode {
    /// Returns the raw HID Usage ID.
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Returns the character this key types on a US layout without Shift,
    /// or `None` for non-printing keys.
    pub fn as_char(self) -> Option<char> {
        let raw = self.as_u16();
        match self {
            // Letters and digits are contiguous in the HID table.
            _ if (0x04..=0x1D).contains(&raw) => char::from_u32(u32::from(b'a') + u32::from(raw - 0x04)),
            KeyCode::Digit0 | KeyCode::Numpad0 => Some('0'),
            _ if (0x1E..=0x26).contains(&raw) => char::from_u32(u32::from(b'1') + u32::from(raw - 0x1E)),
            _ if (0x59..=0x61).contains(&raw) => char::from_u32(u32::from(b'1') + u32::from(raw - 0x59)),
            KeyCode::Minus | KeyCode::NumpadSubtract => Some('-'),
            KeyCode::Equal => Some('='),
            KeyCode::BracketLeft => Some('['),
            KeyCode::BracketRight => Some(']'),
            KeyCode::Backslash => Some('\\'),
            KeyCode::Semicolon => Some(';'),
            KeyCode::Quote => Some('\''),
            KeyCode::Backquote => Some('`'),
            KeyCode::Comma => Some(','),
            KeyCode::Period | KeyCode::NumpadDecimal => Some('.'),
            KeyCode::Slash | KeyCode::NumpadDivide => Some('/'),
            KeyCode::NumpadMultiply => Some('*'),
            KeyCode::NumpadAdd => Some('+'),
            _ => None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_map_to_lowercase_characters() {
        assert_eq!(KeyCode::KeyA.as_char(), Some('a'));
        assert_eq!(KeyCode::KeyM.as_char(), Some('m'));
        assert_eq!(KeyCode::KeyZ.as_char(), Some('z'));
    }

    #[test]
    fn test_digits_and_numpad_digits_map_to_same_character() {
        assert_eq!(KeyCode::Digit1.as_char(), Some('1'));
        assert_eq!(KeyCode::Digit9.as_char(), Some('9'));
        assert_eq!(KeyCode::Digit0.as_char(), Some('0'));
        assert_eq!(KeyCode::Numpad1.as_char(), Some('1'));
        assert_eq!(KeyCode::Numpad9.as_char(), Some('9'));
        assert_eq!(KeyCode::Numpad0.as_char(), Some('0'));
    }

    #[test]
    fn test_non_printing_keys_have_no_character() {
        for key in [
            KeyCode::Enter,
            KeyCode::Escape,
            KeyCode::F1,
            KeyCode::ArrowUp,
            KeyCode::ControlLeft,
            KeyCode::NumLock,
            KeyCode::F20,
            KeyCode::VolumeMute,
        ] {
            assert_eq!(key.as_char(), None, "{key:?} should not be printable");
        }
    }

    #[test]
    fn test_hid_values_follow_usage_table() {
        assert_eq!(KeyCode::KeyA.as_u16(), 0x04);
        assert_eq!(KeyCode::Enter.as_u16(), 0x28);
        assert_eq!(KeyCode::F12.as_u16(), 0x45);
        assert_eq!(KeyCode::F13.as_u16(), 0x68);
        assert_eq!(KeyCode::VolumeUp.as_u16(), 0x80);
        assert_eq!(KeyCode::ControlLeft.as_u16(), 0xE0);
    }
}
