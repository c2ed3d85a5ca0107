//! Modifier and lock state.

use ::bitflags::bitflags;
use ::strum::{Display, EnumIter};

bitflags! {
    /// Lock state as reported by a client synchronize event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyLocks: u8 {
        const SCROLL_LOCK = 0x01;
        const NUM_LOCK = 0x02;
        const CAPS_LOCK = 0x04;
        const KANA_LOCK = 0x08;
    }
}

bitflags! {
    /// Currently held modifiers plus the sticky lock state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModFlags: u16 {
        const LCTRL = 1 << 0;
        const RCTRL = 1 << 1;
        const LSHIFT = 1 << 2;
        const RSHIFT = 1 << 3;
        const LALT = 1 << 4;
        const RALT = 1 << 5;
        const LMETA = 1 << 6;
        const RMETA = 1 << 7;
        const NUMLOCK = 1 << 8;
        const CAPSLOCK = 1 << 9;
        const SCROLLLOCK = 1 << 10;
        const KANALOCK = 1 << 11;

        const CTRL = Self::LCTRL.bits() | Self::RCTRL.bits();
        const SHIFT = Self::LSHIFT.bits() | Self::RSHIFT.bits();
        const ALT = Self::LALT.bits() | Self::RALT.bits();
        const META = Self::LMETA.bits() | Self::RMETA.bits();
        const LOCKS = Self::NUMLOCK.bits()
            | Self::CAPSLOCK.bits()
            | Self::SCROLLLOCK.bits()
            | Self::KANALOCK.bits();
    }
}

/// A single modifier or lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum KeyMod {
    LCtrl,
    RCtrl,
    LShift,
    RShift,
    LAlt,
    RAlt,
    LMeta,
    RMeta,
    NumLock,
    CapsLock,
    ScrollLock,
    KanaLock,
}

impl KeyMod {
    /// Whether this is a sticky lock rather than a held modifier.
    pub fn is_lock(self) -> bool {
        KeyModFlags::from(self).intersects(KeyModFlags::LOCKS)
    }
}

impl From<KeyMod> for KeyModFlags {
    fn from(m: KeyMod) -> Self {
        match m {
            KeyMod::LCtrl => Self::LCTRL,
            KeyMod::RCtrl => Self::RCTRL,
            KeyMod::LShift => Self::LSHIFT,
            KeyMod::RShift => Self::RSHIFT,
            KeyMod::LAlt => Self::LALT,
            KeyMod::RAlt => Self::RALT,
            KeyMod::LMeta => Self::LMETA,
            KeyMod::RMeta => Self::RMETA,
            KeyMod::NumLock => Self::NUMLOCK,
            KeyMod::CapsLock => Self::CAPSLOCK,
            KeyMod::ScrollLock => Self::SCROLLLOCK,
            KeyMod::KanaLock => Self::KANALOCK,
        }
    }
}

impl From<KeyLocks> for KeyModFlags {
    fn from(locks: KeyLocks) -> Self {
        let mut mods = Self::empty();
        mods.set(Self::SCROLLLOCK, locks.contains(KeyLocks::SCROLL_LOCK));
        mods.set(Self::NUMLOCK, locks.contains(KeyLocks::NUM_LOCK));
        mods.set(Self::CAPSLOCK, locks.contains(KeyLocks::CAPS_LOCK));
        mods.set(Self::KANALOCK, locks.contains(KeyLocks::KANA_LOCK));
        mods
    }
}

impl From<KeyModFlags> for KeyLocks {
    fn from(mods: KeyModFlags) -> Self {
        let mut locks = Self::empty();
        locks.set(Self::SCROLL_LOCK, mods.contains(KeyModFlags::SCROLLLOCK));
        locks.set(Self::NUM_LOCK, mods.contains(KeyModFlags::NUMLOCK));
        locks.set(Self::CAPS_LOCK, mods.contains(KeyModFlags::CAPSLOCK));
        locks.set(Self::KANA_LOCK, mods.contains(KeyModFlags::KANALOCK));
        locks
    }
}

impl ::std::ops::BitOr for KeyMod {
    type Output = KeyModFlags;

    fn bitor(self, rhs: Self) -> KeyModFlags {
        KeyModFlags::from(self) | KeyModFlags::from(rhs)
    }
}

impl ::std::ops::BitOr<KeyMod> for KeyModFlags {
    type Output = KeyModFlags;

    fn bitor(self, rhs: KeyMod) -> KeyModFlags {
        self | KeyModFlags::from(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;
    use ::strum::IntoEnumIterator;

    #[test]
    fn test_each_mod_owns_one_bit() {
        let all = KeyMod::iter().fold(KeyModFlags::empty(), |acc, m| {
            let bit = KeyModFlags::from(m);
            assert_eq!(bit.bits().count_ones(), 1, "{m} is not a single bit");
            assert!(!acc.intersects(bit), "{m} overlaps another modifier");
            acc | bit
        });
        assert_eq!(all, KeyModFlags::all());
    }

    #[test]
    fn test_locks_conversion() {
        let locks = KeyLocks::CAPS_LOCK | KeyLocks::KANA_LOCK;
        let mods = KeyModFlags::from(locks);

        assert_eq!(mods, KeyMod::CapsLock | KeyMod::KanaLock);
        assert_eq!(KeyLocks::from(mods | KeyMod::LShift), locks);
    }

    #[test]
    fn test_is_lock() {
        let locks: Vec<_> = KeyMod::iter().filter(|m| m.is_lock()).collect();
        assert_eq!(
            locks,
            [
                KeyMod::NumLock,
                KeyMod::CapsLock,
                KeyMod::ScrollLock,
                KeyMod::KanaLock
            ]
        );
    }

    #[test]
    fn test_combination_is_commutative() {
        assert_eq!(
            KeyMod::RShift | KeyMod::RCtrl,
            KeyMod::RCtrl | KeyMod::RShift
        );
        assert_eq!(
            (KeyMod::LAlt | KeyMod::LShift) | KeyMod::NumLock,
            KeyModFlags::from(KeyMod::LAlt) | (KeyMod::LShift | KeyMod::NumLock)
        );
    }
}
