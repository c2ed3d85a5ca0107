//! German layouts (QWERTZ).
//!
//! The extended E2 variant shares the key rows of the plain German layout and
//! only adds double dead keys: circumflex and acute may be stacked in either
//! order before a vowel (`´` `^` `a` gives `ấ`).

use super::{ch, dk, key, key3, letter, letter3, row, N};
use crate::layout::{
    Composition::{Char as C, Dead as D},
    DeadKeyDef, DeadKeyId, KbdId, KeyDef, LayoutDef,
};

const CIRCUMFLEX: u16 = 0;
const ACUTE: u16 = 1;
const GRAVE: u16 = 2;
const CIRCUMFLEX_ACUTE: u16 = 3;
const ACUTE_CIRCUMFLEX: u16 = 4;

static GERMAN_KEYS: &[KeyDef] = &[
    key(0x02, '1', '!'),
    key3(0x03, '2', '"', '²'),
    key3(0x04, '3', '§', '³'),
    key(0x05, '4', '$'),
    key(0x06, '5', '%'),
    key(0x07, '6', '&'),
    key3(0x08, '7', '/', '{'),
    key3(0x09, '8', '(', '['),
    key3(0x0A, '9', ')', ']'),
    key3(0x0B, '0', '=', '}'),
    key3(0x0C, 'ß', '?', '\\'),
    row(0x0D, [dk(ACUTE), dk(GRAVE), N, N]),
    letter3(0x10, 'q', 'Q', '@'),
    letter(0x11, 'w', 'W'),
    letter3(0x12, 'e', 'E', '€'),
    letter(0x13, 'r', 'R'),
    letter(0x14, 't', 'T'),
    letter(0x15, 'z', 'Z'),
    letter(0x16, 'u', 'U'),
    letter(0x17, 'i', 'I'),
    letter(0x18, 'o', 'O'),
    letter(0x19, 'p', 'P'),
    letter(0x1A, 'ü', 'Ü'),
    key3(0x1B, '+', '*', '~'),
    letter(0x1E, 'a', 'A'),
    letter(0x1F, 's', 'S'),
    letter(0x20, 'd', 'D'),
    letter(0x21, 'f', 'F'),
    letter(0x22, 'g', 'G'),
    letter(0x23, 'h', 'H'),
    letter(0x24, 'j', 'J'),
    letter(0x25, 'k', 'K'),
    letter(0x26, 'l', 'L'),
    letter(0x27, 'ö', 'Ö'),
    letter(0x28, 'ä', 'Ä'),
    row(0x29, [dk(CIRCUMFLEX), ch('°'), N, N]),
    key(0x2B, '#', '\''),
    letter(0x2C, 'y', 'Y'),
    letter(0x2D, 'x', 'X'),
    letter(0x2E, 'c', 'C'),
    letter(0x2F, 'v', 'V'),
    letter(0x30, 'b', 'B'),
    letter(0x31, 'n', 'N'),
    letter3(0x32, 'm', 'M', 'µ'),
    key(0x33, ',', ';'),
    key(0x34, '.', ':'),
    key(0x35, '-', '_'),
    key3(0x56, '<', '>', '|'),
    row(0x53, [ch(','), N, N, N]),
];

const GRAVE_TABLE: DeadKeyDef = DeadKeyDef {
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
};

/// German (0x00000407).
pub static GERMAN: LayoutDef = LayoutDef {
    id: KbdId::GERMAN,
    name: "de-DE",
    display_name: "German",
    right_ctrl_is_ctrl: true,
    keys: GERMAN_KEYS,
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
            accent: '´',
            compositions: &[
                (' ', C('´')),
                ('a', C('á')),
                ('e', C('é')),
                ('i', C('í')),
                ('o', C('ó')),
                ('u', C('ú')),
                ('y', C('ý')),
                ('A', C('Á')),
                ('E', C('É')),
                ('I', C('Í')),
                ('O', C('Ó')),
                ('U', C('Ú')),
                ('Y', C('Ý')),
            ],
        },
        GRAVE_TABLE,
    ],
};

/// German Extended E2 (0x00030407).
pub static GERMAN_EXTENDED_E2: LayoutDef = LayoutDef {
    id: KbdId::GERMAN_EXTENDED_E2,
    name: "de-DE-E2",
    display_name: "German Extended (E2)",
    right_ctrl_is_ctrl: true,
    keys: GERMAN_KEYS,
    kana: &[],
    dead_keys: &[
        DeadKeyDef {
            accent: '^',
            compositions: &[
                (' ', C('^')),
                ('´', D(DeadKeyId(CIRCUMFLEX_ACUTE))),
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
            accent: '´',
            compositions: &[
                (' ', C('´')),
                ('^', D(DeadKeyId(ACUTE_CIRCUMFLEX))),
                ('a', C('á')),
                ('e', C('é')),
                ('i', C('í')),
                ('o', C('ó')),
                ('u', C('ú')),
                ('y', C('ý')),
                ('A', C('Á')),
                ('E', C('É')),
                ('I', C('Í')),
                ('O', C('Ó')),
                ('U', C('Ú')),
                ('Y', C('Ý')),
            ],
        },
        GRAVE_TABLE,
        DeadKeyDef {
            accent: '´',
            compositions: &[
                ('a', C('ấ')),
                ('e', C('ế')),
                ('o', C('ố')),
                ('A', C('Ấ')),
                ('E', C('Ế')),
                ('O', C('Ố')),
            ],
        },
        DeadKeyDef {
            accent: '^',
            compositions: &[
                ('a', C('ấ')),
                ('e', C('ế')),
                ('o', C('ố')),
                ('A', C('Ấ')),
                ('E', C('Ế')),
                ('O', C('Ố')),
            ],
        },
    ],
};
