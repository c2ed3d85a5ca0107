//! English layouts.

use super::{key, key3, letter, letter4};
use crate::layout::{KbdId, LayoutDef};

/// US (0x00000409).
pub static US: LayoutDef = LayoutDef {
    id: KbdId::US,
    name: "en-US",
    display_name: "US",
    right_ctrl_is_ctrl: true,
    keys: &[
        key(0x02, '1', '!'),
        key(0x03, '2', '@'),
        key(0x04, '3', '#'),
        key(0x05, '4', '$'),
        key(0x06, '5', '%'),
        key(0x07, '6', '^'),
        key(0x08, '7', '&'),
        key(0x09, '8', '*'),
        key(0x0A, '9', '('),
        key(0x0B, '0', ')'),
        key(0x0C, '-', '_'),
        key(0x0D, '=', '+'),
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
        key(0x1A, '[', '{'),
        key(0x1B, ']', '}'),
        letter(0x1E, 'a', 'A'),
        letter(0x1F, 's', 'S'),
        letter(0x20, 'd', 'D'),
        letter(0x21, 'f', 'F'),
        letter(0x22, 'g', 'G'),
        letter(0x23, 'h', 'H'),
        letter(0x24, 'j', 'J'),
        letter(0x25, 'k', 'K'),
        letter(0x26, 'l', 'L'),
        key(0x27, ';', ':'),
        key(0x28, '\'', '"'),
        key(0x29, '`', '~'),
        key(0x2B, '\\', '|'),
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
        key(0x56, '\\', '|'),
    ],
    kana: &[],
    dead_keys: &[],
};

/// United Kingdom (0x00000809).
pub static UNITED_KINGDOM: LayoutDef = LayoutDef {
    id: KbdId::UNITED_KINGDOM,
    name: "en-GB",
    display_name: "United Kingdom",
    right_ctrl_is_ctrl: true,
    keys: &[
        key(0x02, '1', '!'),
        key(0x03, '2', '"'),
        key(0x04, '3', '£'),
        key3(0x05, '4', '$', '€'),
        key(0x06, '5', '%'),
        key(0x07, '6', '^'),
        key(0x08, '7', '&'),
        key(0x09, '8', '*'),
        key(0x0A, '9', '('),
        key(0x0B, '0', ')'),
        key(0x0C, '-', '_'),
        key(0x0D, '=', '+'),
        letter(0x10, 'q', 'Q'),
        letter(0x11, 'w', 'W'),
        letter4(0x12, 'e', 'E', 'é', 'É'),
        letter(0x13, 'r', 'R'),
        letter(0x14, 't', 'T'),
        letter(0x15, 'y', 'Y'),
        letter4(0x16, 'u', 'U', 'ú', 'Ú'),
        letter4(0x17, 'i', 'I', 'í', 'Í'),
        letter4(0x18, 'o', 'O', 'ó', 'Ó'),
        letter(0x19, 'p', 'P'),
        key(0x1A, '[', '{'),
        key(0x1B, ']', '}'),
        letter4(0x1E, 'a', 'A', 'á', 'Á'),
        letter(0x1F, 's', 'S'),
        letter(0x20, 'd', 'D'),
        letter(0x21, 'f', 'F'),
        letter(0x22, 'g', 'G'),
        letter(0x23, 'h', 'H'),
        letter(0x24, 'j', 'J'),
        letter(0x25, 'k', 'K'),
        letter(0x26, 'l', 'L'),
        key(0x27, ';', ':'),
        key(0x28, '\'', '@'),
        key3(0x29, '`', '¬', '¦'),
        key(0x2B, '#', '~'),
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
        key(0x56, '\\', '|'),
    ],
    kana: &[],
    dead_keys: &[],
};
