//! Built-in layout definitions.
//!
//! Scancodes physical layout reference (keys suffixed by `x` are extended):
//!
//! ```text
//! +----+  +----+----+----+----+  +----+----+----+----+  +----+----+----+----+
//! | 01 |  | 3B | 3C | 3D | 3E |  | 3F | 40 | 41 | 42 |  | 43 | 44 | 57 | 58 |
//! +----+  +----+----+----+----+  +----+----+----+----+  +----+----+----+----+
//! +----+----+----+----+----+----+----+----+----+----+----+----+----+--------+  +----+----+----+
//! | 29 | 02 | 03 | 04 | 05 | 06 | 07 | 08 | 09 | 0A | 0B | 0C | 0D |   0E   |  | 52x| 47x| 49x|
//! +-------------------------------------------------------------------------+  +----+----+----+
//! |  0F  | 10 | 11 | 12 | 13 | 14 | 15 | 16 | 17 | 18 | 19 | 1A | 1B |      |  | 53x| 4Fx| 51x|
//! +------------------------------------------------------------------+  1C  |  +----+----+----+
//! |  3A   | 1E | 1F | 20 | 21 | 22 | 23 | 24 | 25 | 26 | 27 | 28 | 2B |     |
//! +-------------------------------------------------------------------------+       +----+
//! |  2A | 56 | 2C | 2D | 2E | 2F | 30 | 31 | 32 | 33 | 34 | 35 |     36     |       | 48x|
//! +-------------------------------------------------------------------------+  +----+----+----+
//! |  1D  |  5Bx | 38 |           39           |  38x  |  5Cx |  5Dx |  1Dx  |  | 4Bx| 50x| 4Dx|
//! +------+------+----+------------------------+-------+------+------+-------+  +----+----+----+
//! ```

mod de;
mod en;
mod fr;
mod ja;

pub use de::{GERMAN, GERMAN_EXTENDED_E2};
pub use en::{UNITED_KINGDOM, US};
pub use fr::FRENCH;
pub use ja::JAPANESE;

use super::{KanaDef, KeyDef, KeySym, LayoutDef};

/// Every layout shipped with the crate.
pub static BUILTIN_LAYOUTS: &[&LayoutDef] = &[
    &US,
    &UNITED_KINGDOM,
    &FRENCH,
    &GERMAN,
    &GERMAN_EXTENDED_E2,
    &JAPANESE,
];

/// Rows shared by every layout: control keys, space and the numeric keypad
/// (keypad digits only apply while NumLock is active).
pub static COMMON_KEYS: &[KeyDef] = &[
    key(0x01, '\x1b', '\x1b'),
    key(0x0E, '\x08', '\x08'),
    key(0x0F, '\t', '\t'),
    key(0x1C, '\r', '\r'),
    key(0x37, '*', '*'),
    key(0x39, ' ', ' '),
    row(0x47, [ch('7'), N, N, N]),
    row(0x48, [ch('8'), N, N, N]),
    row(0x49, [ch('9'), N, N, N]),
    key(0x4A, '-', '-'),
    row(0x4B, [ch('4'), N, N, N]),
    row(0x4C, [ch('5'), N, N, N]),
    row(0x4D, [ch('6'), N, N, N]),
    key(0x4E, '+', '+'),
    row(0x4F, [ch('1'), N, N, N]),
    row(0x50, [ch('2'), N, N, N]),
    row(0x51, [ch('3'), N, N, N]),
    row(0x52, [ch('0'), N, N, N]),
    row(0x53, [ch('.'), N, N, N]),
];

pub const N: KeySym = KeySym::None;

pub const fn ch(c: char) -> KeySym {
    KeySym::Char(c)
}

pub const fn dk(table: u16) -> KeySym {
    KeySym::Dead(super::DeadKeyId(table))
}

pub const fn row(scancode: u8, levels: [KeySym; 4]) -> KeyDef {
    KeyDef {
        scancode,
        levels,
        caps: false,
    }
}

pub const fn key(scancode: u8, base: char, shift: char) -> KeyDef {
    row(scancode, [ch(base), ch(shift), N, N])
}

pub const fn key3(scancode: u8, base: char, shift: char, altgr: char) -> KeyDef {
    row(scancode, [ch(base), ch(shift), ch(altgr), N])
}

/// A letter key: CapsLock acts as Shift.
pub const fn letter(scancode: u8, lower: char, upper: char) -> KeyDef {
    KeyDef {
        scancode,
        levels: [ch(lower), ch(upper), N, N],
        caps: true,
    }
}

pub const fn letter3(scancode: u8, lower: char, upper: char, altgr: char) -> KeyDef {
    KeyDef {
        scancode,
        levels: [ch(lower), ch(upper), ch(altgr), N],
        caps: true,
    }
}

pub const fn letter4(
    scancode: u8,
    lower: char,
    upper: char,
    altgr_lower: char,
    altgr_upper: char,
) -> KeyDef {
    KeyDef {
        scancode,
        levels: [ch(lower), ch(upper), ch(altgr_lower), ch(altgr_upper)],
        caps: true,
    }
}

pub const fn kana(scancode: u8, base: char, shift: char) -> KanaDef {
    KanaDef {
        scancode,
        levels: [ch(base), ch(shift)],
    }
}
