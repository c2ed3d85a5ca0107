//! Scancodes and layout independent key codes.

use ::std::fmt;

use super::KbdFlags;

/// A raw hardware scancode as it appears in the low byte of a keyboard event.
///
/// Scancodes are independent of modifier state and of the keyboard layout.
/// Extended keys (right ctrl, arrows, ...) share their scancode with a
/// non-extended key and are only told apart by [`KbdFlags::EXTENDED`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scancode(pub u8);

impl Scancode {
    /// Returns the raw scancode byte.
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Only the low byte is kept, the high byte of a wire value carries flags.
impl From<u16> for Scancode {
    fn from(scancode_and_flags: u16) -> Self {
        Self(scancode_and_flags as u8)
    }
}

impl From<u8> for Scancode {
    fn from(scancode: u8) -> Self {
        Self(scancode)
    }
}

/// Identity of a physical key: the scancode with the extended bit folded in
/// as `0x100`.
///
/// Key codes range over `0x000..=0x1FF`. Right ctrl for instance is
/// `0x100 | 0x1D`. They are used to match key releases against prior key
/// presses and to detect shortcut chords.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyCode(u16);

impl KeyCode {
    /// Number of distinct key codes.
    pub const COUNT: usize = 0x200;

    pub const ESC: Self = Self(0x01);
    pub const BACKSPACE: Self = Self(0x0E);
    pub const TAB: Self = Self(0x0F);
    pub const ENTER: Self = Self(0x1C);
    pub const LCTRL: Self = Self(0x1D);
    pub const LSHIFT: Self = Self(0x2A);
    pub const RSHIFT: Self = Self(0x36);
    pub const LALT: Self = Self(0x38);
    pub const CAPSLOCK: Self = Self(0x3A);
    pub const F4: Self = Self(0x3E);
    pub const NUMLOCK: Self = Self(0x45);
    pub const SCROLLLOCK: Self = Self(0x46);
    pub const NUMPAD_7: Self = Self(0x47);
    pub const NUMPAD_8: Self = Self(0x48);
    pub const NUMPAD_9: Self = Self(0x49);
    pub const NUMPAD_MINUS: Self = Self(0x4A);
    pub const NUMPAD_4: Self = Self(0x4B);
    pub const NUMPAD_5: Self = Self(0x4C);
    pub const NUMPAD_6: Self = Self(0x4D);
    pub const NUMPAD_PLUS: Self = Self(0x4E);
    pub const NUMPAD_1: Self = Self(0x4F);
    pub const NUMPAD_2: Self = Self(0x50);
    pub const NUMPAD_3: Self = Self(0x51);
    pub const NUMPAD_0: Self = Self(0x52);
    pub const NUMPAD_DECIMAL: Self = Self(0x53);
    pub const F12: Self = Self(0x58);
    pub const KANA: Self = Self(0x72);

    pub const NUMPAD_ENTER: Self = Self(0x100 | 0x1C);
    pub const RCTRL: Self = Self(0x100 | 0x1D);
    pub const NUMPAD_DIVIDE: Self = Self(0x100 | 0x35);
    pub const RALT: Self = Self(0x100 | 0x38);
    pub const HOME: Self = Self(0x100 | 0x47);
    pub const UP: Self = Self(0x100 | 0x48);
    pub const PAGE_UP: Self = Self(0x100 | 0x49);
    pub const LEFT: Self = Self(0x100 | 0x4B);
    pub const RIGHT: Self = Self(0x100 | 0x4D);
    pub const END: Self = Self(0x100 | 0x4F);
    pub const DOWN: Self = Self(0x100 | 0x50);
    pub const PAGE_DOWN: Self = Self(0x100 | 0x51);
    pub const INSERT: Self = Self(0x100 | 0x52);
    pub const DELETE: Self = Self(0x100 | 0x53);
    pub const LWIN: Self = Self(0x100 | 0x5B);
    pub const RWIN: Self = Self(0x100 | 0x5C);

    /// Computes the key code of an event, folding [`KbdFlags::EXTENDED`]
    /// into bit `0x100`.
    pub fn new(flags: KbdFlags, scancode: Scancode) -> Self {
        let extended = if flags.contains(KbdFlags::EXTENDED) {
            0x100
        } else {
            0
        };
        Self(u16::from(scancode.value()) | extended)
    }

    /// Builds a key code from its raw value. Bits above `0x1FF` are dropped.
    pub const fn from_raw(value: u16) -> Self {
        Self(value & 0x1FF)
    }

    /// The raw key code value in `0x000..=0x1FF`.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// The scancode part of the key code, without the extended bit.
    pub const fn scancode(self) -> Scancode {
        Scancode(self.0 as u8)
    }

    /// Whether the key is an extended key.
    pub const fn is_extended(self) -> bool {
        self.0 & 0x100 != 0
    }

    /// Whether the key belongs to the numeric keypad block whose meaning
    /// depends on NumLock (`7 8 9 4 5 6 1 2 3 0 .`).
    pub(crate) fn is_numpad_navigation(self) -> bool {
        matches!(self.0, 0x47..=0x53) && self != Self::NUMPAD_MINUS && self != Self::NUMPAD_PLUS
    }
}

impl fmt::Debug for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyCode(0x{:03X})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_extended_bit_is_folded() {
        assert_eq!(
            KeyCode::new(KbdFlags::EXTENDED, Scancode(0x1D)),
            KeyCode::RCTRL
        );
        assert_eq!(KeyCode::new(KbdFlags::empty(), Scancode(0x1D)), KeyCode::LCTRL);
        assert_eq!(
            KeyCode::new(KbdFlags::EXTENDED | KbdFlags::RELEASE, Scancode(0x53)),
            KeyCode::DELETE
        );
    }

    #[test]
    fn test_scancode_truncates_flags() {
        assert_eq!(Scancode::from(0x81AA_u16), Scancode(0xAA));
        assert_eq!(KeyCode::from_raw(0x11D).scancode(), Scancode(0x1D));
        assert!(KeyCode::from_raw(0x11D).is_extended());
        assert!(!KeyCode::from_raw(0x1D).is_extended());
    }

    #[test]
    fn test_numpad_navigation_block() {
        assert!(KeyCode::NUMPAD_4.is_numpad_navigation());
        assert!(KeyCode::NUMPAD_DECIMAL.is_numpad_navigation());
        assert!(!KeyCode::NUMPAD_PLUS.is_numpad_navigation());
        assert!(!KeyCode::NUMPAD_MINUS.is_numpad_navigation());
        assert!(!KeyCode::LEFT.is_numpad_navigation());
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", KeyCode::RCTRL), "KeyCode(0x11D)");
    }
}
