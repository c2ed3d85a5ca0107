//! French (Legacy, AZERTY).

use super::{ch, dk, key, key3, letter, letter3, row, N};
use crate::layout::{Composition::Char as C, DeadKeyDef, KbdId, LayoutDef};

const CIRCUMFLEX: u16 = 0;
const DIAERESIS: u16 = 1;
const GRAVE: u16 = 2;
const TILDE: u16 = 3;

/// French (0x0000040C).
pub static FRENCH: LayoutDef = LayoutDef {
    id: KbdId::FRENCH,
    name: "fr-FR",
    display_name: "French",
    right_ctrl_is_ctrl: true,
    keys: &[
        key(0x02, '&', '1'),
        row(0x03, [ch('é'), ch('2'), dk(TILDE), N]),
        key3(0x04, '"', '3', '#'),
        key3(0x05, '\'', '4', '{'),
        key3(0x06, '(', '5', '['),
        key3(0x07, '-', '6', '|'),
        row(0x08, [ch('è'), ch('7'), dk(GRAVE), N]),
        key3(0x09, '_', '8', '\\'),
        key3(0x0A, 'ç', '9', '^'),
        key3(0x0B, 'à', '0', '@'),
        key3(0x0C, ')', '°', ']'),
        key3(0x0D, '=', '+', '}'),
        letter(0x10, 'a', 'A'),
        letter(0x11, 'z', 'Z'),
        letter3(0x12, 'e', 'E', '€'),
        letter(0x13, 'r', 'R'),
        letter(0x14, 't', 'T'),
        letter(0x15, 'y', 'Y'),
        letter(0x16, 'u', 'U'),
        letter(0x17, 'i', 'I'),
        letter(0x18, 'o', 'O'),
        letter(0x19, 'p', 'P'),
        row(0x1A, [dk(CIRCUMFLEX), dk(DIAERESIS), N, N]),
        key3(0x1B, '$', '£', '¤'),
        letter(0x1E, 'q', 'Q'),
        letter(0x1F, 's', 'S'),
        letter(0x20, 'd', 'D'),
        letter(0x21, 'f', 'F'),
        letter(0x22, 'g', 'G'),
        letter(0x23, 'h', 'H'),
        letter(0x24, 'j', 'J'),
        letter(0x25, 'k', 'K'),
        letter(0x26, 'l', 'L'),
        letter(0x27, 'm', 'M'),
        key(0x28, 'ù', '%'),
        key(0x29, '²', '²'),
        key(0x2B, '*', 'µ'),
        letter(0x2C, 'w', 'W'),
        letter(0x2D, 'x', 'X'),
        letter(0x2E, 'c', 'C'),
        letter(0x2F, 'v', 'V'),
        letter(0x30, 'b', 'B'),
        letter(0x31, 'n', 'N'),
        key(0x32, ',', '?'),
        key(0x33, ';', '.'),
        key(0x34, ':', '/'),
        key(0x35, '!', '§'),
        key(0x56, '<', '>'),
    ],
    kana: &[],
    dead_keys: &[
        DeadKeyDef {
            accent: '^',
            compositions: &[
                (' ', C('^')),
                ('a', C('â')),
                ('e', C('ê')),
                ('i', C('î')),
                ('o', C('ô')),
                ('u', C('û')),
                ('A', C('Â')),
                ('E', C('Ê')),
                ('I', C('Î')),
                ('O', C('Ô')),
                ('U', C('Û')),
            ],
        },
        DeadKeyDef {
            accent: '¨',
            compositions: &[
                (' ', C('¨')),
                ('a', C('ä')),
                ('e', C('ë')),
                ('i', C('ï')),
                ('o', C('ö')),
                ('u', C('ü')),
                ('y', C('ÿ')),
                ('A', C('Ä')),
                ('E', C('Ë')),
                ('I', C('Ï')),
                ('O', C('Ö')),
                ('U', C('Ü')),
            ],
        },
        DeadKeyDef {
            accent: '`',
            compositions: &[
                (' ', C('`')),
                ('a', C('à')),
                ('e', C('è')),
                ('i', C('ì')),
                ('o', C('ò')),
                ('u', C('ù')),
                ('A', C('À')),
                ('E', C('È')),
                ('I', C('Ì')),
                ('O', C('Ò')),
                ('U', C('Ù')),
            ],
        },
        DeadKeyDef {
            accent: '~',
            compositions: &[
                (' ', C('~')),
                ('a', C('ã')),
                ('n', C('ñ')),
                ('o', C('õ')),
                ('A', C('Ã')),
                ('N', C('Ñ')),
                ('O', C('Õ')),
            ],
        },
    ],
};
