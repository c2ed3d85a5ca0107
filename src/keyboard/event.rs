//! Keyboard event flags and the 16-bit "scancode and flags" wire encoding.

use ::bitflags::bitflags;
use ::deku::prelude::*;

use super::{KeyCode, Scancode};

bitflags! {
    /// Flags carried by every keyboard event, using the bit positions of the
    /// high byte of a fast-path keyboard event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KbdFlags: u16 {
        /// Right-side modifiers, arrows, the navigation block, ...
        const EXTENDED = 0x0100;
        /// Second extended prefix, only used by the Pause key.
        const EXTENDED1 = 0x0200;
        /// The key was already down before this event (auto-repeat).
        const DOWN = 0x4000;
        /// Key release. A clear bit means the key is being pressed.
        const RELEASE = 0x8000;
    }
}

impl KbdFlags {
    /// Whether these flags describe a key release.
    pub const fn is_release(self) -> bool {
        self.contains(Self::RELEASE)
    }
}

/// Struct representation of a 16-bit scancode-and-flags value: the high
/// byte carries the [`KbdFlags`], the low byte the [`Scancode`].
///
/// Bitfield definition (most significant bit first):
///
/// | bits   | meaning           |
/// | ------ | ----------------- |
/// | 15     | release           |
/// | 14     | previously down   |
/// | 13..10 | reserved          |
/// | 9      | extended1         |
/// | 8      | extended          |
/// | 7..0   | scancode          |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, DekuRead, DekuWrite)]
#[deku(endian = "big")]
pub struct ScancodeEvent {
    /// Bit 15. The value is 1 if the key is being released, or it is 0 if
    /// the key is being pressed.
    #[deku(bits = "1")]
    pub is_key_release: bool,

    /// Bit 14. The value is 1 if the key was down before this event.
    #[deku(bits = "1")]
    pub was_previous_state_down: bool,

    /// Bit 9. Second extended prefix (Pause key).
    #[deku(pad_bits_before = "4", bits = "1")]
    pub is_extended1: bool,

    /// Bit 8. The value is 1 for extended keys such as right ctrl or the
    /// arrow keys.
    #[deku(bits = "1")]
    pub is_extended: bool,

    /// Bits 0-7. The raw scancode.
    pub scan_code: u8,
}

impl ScancodeEvent {
    /// Assembles an event from already split flags and scancode.
    pub fn new(flags: KbdFlags, scancode: Scancode) -> Self {
        Self {
            is_key_release: flags.contains(KbdFlags::RELEASE),
            was_previous_state_down: flags.contains(KbdFlags::DOWN),
            is_extended1: flags.contains(KbdFlags::EXTENDED1),
            is_extended: flags.contains(KbdFlags::EXTENDED),
            scan_code: scancode.value(),
        }
    }

    /// The event flags.
    pub fn flags(&self) -> KbdFlags {
        let mut flags = KbdFlags::empty();
        flags.set(KbdFlags::RELEASE, self.is_key_release);
        flags.set(KbdFlags::DOWN, self.was_previous_state_down);
        flags.set(KbdFlags::EXTENDED1, self.is_extended1);
        flags.set(KbdFlags::EXTENDED, self.is_extended);
        flags
    }

    /// The raw scancode.
    pub fn scancode(&self) -> Scancode {
        Scancode(self.scan_code)
    }

    /// The key code of the physical key, extended bit folded in.
    pub fn key_code(&self) -> KeyCode {
        KeyCode::new(self.flags(), self.scancode())
    }
}

impl From<u16> for ScancodeEvent {
    fn from(scancode_and_flags: u16) -> Self {
        match Self::from_bytes((&scancode_and_flags.to_be_bytes(), 0)) {
            Ok((_, evt)) => evt,
            // Two bytes always cover the full 16-bit layout.
            Err(_) => Self::default(),
        }
    }
}

impl From<ScancodeEvent> for u16 {
    fn from(evt: ScancodeEvent) -> Self {
        evt.flags().bits() | u16::from(evt.scan_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    /// Pressing 'a' (US layout) without any modifiers.
    #[test]
    fn test_key_down() {
        let event = ScancodeEvent::from(0x001E);

        assert_eq!(
            event,
            ScancodeEvent {
                is_key_release: false,
                was_previous_state_down: false,
                is_extended1: false,
                is_extended: false,
                scan_code: 0x1E,
            }
        );
        assert_eq!(event.flags(), KbdFlags::empty());
        assert_eq!(event.key_code(), KeyCode::from_raw(0x1E));
    }

    /// Releasing right ctrl.
    #[test]
    fn test_extended_key_up() {
        let event = ScancodeEvent::from(0x811D);

        assert_eq!(
            event,
            ScancodeEvent {
                is_key_release: true,
                was_previous_state_down: false,
                is_extended1: false,
                is_extended: true,
                scan_code: 0x1D,
            }
        );
        assert_eq!(event.flags(), KbdFlags::RELEASE | KbdFlags::EXTENDED);
        assert_eq!(event.key_code(), KeyCode::RCTRL);
    }

    /// Auto-repeated key down of 'q' carries the previous state bit.
    #[test]
    fn test_key_down_with_repeat() {
        let event = ScancodeEvent::from(0x4010);

        assert!(event.was_previous_state_down);
        assert!(!event.is_key_release);
        assert_eq!(event.flags(), KbdFlags::DOWN);
        assert_eq!(event.scancode(), Scancode(0x10));
    }

    /// Pause emits an extended1 prefixed left ctrl.
    #[test]
    fn test_extended1() {
        let event = ScancodeEvent::from(0x021D);

        assert!(event.is_extended1);
        assert!(!event.is_extended);
        assert_eq!(event.key_code(), KeyCode::LCTRL);
    }

    /// Reserved bits are ignored when reading.
    #[test]
    fn test_reserved_bits_ignored() {
        let event = ScancodeEvent::from(0x3C48);

        assert_eq!(event.flags(), KbdFlags::empty());
        assert_eq!(u16::from(event), 0x0048);
    }

    #[test]
    fn test_encode_matches_split_flags() {
        let event = ScancodeEvent::new(KbdFlags::RELEASE | KbdFlags::EXTENDED, Scancode(0x53));

        assert_eq!(u16::from(event), 0x8153);
        assert_eq!(ScancodeEvent::from(0x8153), event);
    }
}
