//! Japanese (JIS, 106/109 keys).
//!
//! While KanaLock is active letters produce half-width katakana, which live
//! above `U+FF00`.

use super::{ch, kana, key, letter, row, N};
use crate::layout::{KbdId, LayoutDef};

/// Japanese (0x00000411).
pub static JAPANESE: LayoutDef = LayoutDef {
    id: KbdId::JAPANESE,
    name: "ja-JP",
    display_name: "Japanese",
    right_ctrl_is_ctrl: true,
    keys: &[
        key(0x02, '1', '!'),
        key(0x03, '2', '"'),
        key(0x04, '3', '#'),
        key(0x05, '4', '$'),
        key(0x06, '5', '%'),
        key(0x07, '6', '&'),
        key(0x08, '7', '\''),
        key(0x09, '8', '('),
        key(0x0A, '9', ')'),
        row(0x0B, [ch('0'), N, N, N]),
        key(0x0C, '-', '='),
        key(0x0D, '^', '~'),
        letter(0x10, 'q', 'Q'),
        letter(0x11, 'w', 'W'),
        letter(0x12, 'e', 'E'),
        letter(0x13, 'r', 'R'),
        letter(0x14, 't', 'T'),
        letter(0x15, 'y', 'Y'),
        letter(0x16, 'u', 'U'),
        letter(0x17, 'i', 'I'),
        letter(0x18, 'o', 'O'),
        letter(0x19, 'p', 'P'),
        key(0x1A, '@', '`'),
        key(0x1B, '[', '{'),
        letter(0x1E, 'a', 'A'),
        letter(0x1F, 's', 'S'),
        letter(0x20, 'd', 'D'),
        letter(0x21, 'f', 'F'),
        letter(0x22, 'g', 'G'),
        letter(0x23, 'h', 'H'),
        letter(0x24, 'j', 'J'),
        letter(0x25, 'k', 'K'),
        letter(0x26, 'l', 'L'),
        key(0x27, ';', '+'),
        key(0x28, ':', '*'),
        key(0x2B, ']', '}'),
        letter(0x2C, 'z', 'Z'),
        letter(0x2D, 'x', 'X'),
        letter(0x2E, 'c', 'C'),
        letter(0x2F, 'v', 'V'),
        letter(0x30, 'b', 'B'),
        letter(0x31, 'n', 'N'),
        letter(0x32, 'm', 'M'),
        key(0x33, ',', '<'),
        key(0x34, '.', '>'),
        key(0x35, '/', '?'),
        key(0x73, '\\', '_'),
        key(0x7D, '¥', '|'),
    ],
    kana: &[
        kana(0x02, '\u{FF87}', '\u{FF87}'),
        kana(0x03, '\u{FF8C}', '\u{FF8C}'),
        kana(0x04, '\u{FF71}', '\u{FF67}'),
        kana(0x05, '\u{FF73}', '\u{FF69}'),
        kana(0x06, '\u{FF74}', '\u{FF6A}'),
        kana(0x07, '\u{FF75}', '\u{FF6B}'),
        kana(0x08, '\u{FF94}', '\u{FF6C}'),
        kana(0x09, '\u{FF95}', '\u{FF6D}'),
        kana(0x0A, '\u{FF96}', '\u{FF6E}'),
        kana(0x0B, '\u{FF9C}', '\u{FF66}'),
        kana(0x0C, '\u{FF8E}', '\u{FF8E}'),
        kana(0x0D, '\u{FF8D}', '\u{FF8D}'),
        kana(0x10, '\u{FF80}', '\u{FF80}'),
        kana(0x11, '\u{FF83}', '\u{FF83}'),
        kana(0x12, '\u{FF72}', '\u{FF68}'),
        kana(0x13, '\u{FF7D}', '\u{FF7D}'),
        kana(0x14, '\u{FF76}', '\u{FF76}'),
        kana(0x15, '\u{FF9D}', '\u{FF9D}'),
        kana(0x16, '\u{FF85}', '\u{FF85}'),
        kana(0x17, '\u{FF86}', '\u{FF86}'),
        kana(0x18, '\u{FF97}', '\u{FF97}'),
        kana(0x19, '\u{FF7E}', '\u{FF7E}'),
        kana(0x1A, '\u{FF9E}', '\u{FF9E}'),
        kana(0x1B, '\u{FF9F}', '\u{FF62}'),
        kana(0x1E, '\u{FF81}', '\u{FF81}'),
        kana(0x1F, '\u{FF84}', '\u{FF84}'),
        kana(0x20, '\u{FF7C}', '\u{FF7C}'),
        kana(0x21, '\u{FF8A}', '\u{FF8A}'),
        kana(0x22, '\u{FF77}', '\u{FF77}'),
        kana(0x23, '\u{FF78}', '\u{FF78}'),
        kana(0x24, '\u{FF8F}', '\u{FF8F}'),
        kana(0x25, '\u{FF89}', '\u{FF89}'),
        kana(0x26, '\u{FF98}', '\u{FF98}'),
        kana(0x27, '\u{FF9A}', '\u{FF9A}'),
        kana(0x28, '\u{FF79}', '\u{FF79}'),
        kana(0x2B, '\u{FF91}', '\u{FF63}'),
        kana(0x2C, '\u{FF82}', '\u{FF6F}'),
        kana(0x2D, '\u{FF7B}', '\u{FF7B}'),
        kana(0x2E, '\u{FF7F}', '\u{FF7F}'),
        kana(0x2F, '\u{FF8B}', '\u{FF8B}'),
        kana(0x30, '\u{FF7A}', '\u{FF7A}'),
        kana(0x31, '\u{FF90}', '\u{FF90}'),
        kana(0x32, '\u{FF93}', '\u{FF93}'),
        kana(0x33, '\u{FF88}', '\u{FF64}'),
        kana(0x34, '\u{FF99}', '\u{FF61}'),
        kana(0x35, '\u{FF92}', '\u{FF65}'),
        kana(0x73, '\u{FF9B}', '\u{FF9B}'),
        kana(0x7D, '\u{FF70}', '\u{FF70}'),
    ],
    dead_keys: &[],
};
