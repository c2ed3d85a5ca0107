//! Keyboard layout tables.
//!
//! A [`KeyLayout`] is the read-only lookup service the [`Keymap`] decodes
//! against: for every non-extended scancode it knows what the key produces
//! at each shift level, and it owns the dead-key composition tables of the
//! locale.
//!
//! Layouts are described statically by a [`LayoutDef`] and turned into a
//! validated [`KeyLayout`] once, usually by a [`LayoutRegistry`].
//!
//! [`Keymap`]: crate::keyboard::Keymap

mod registry;
pub mod tables;

pub use registry::*;

use ::std::fmt;

use crate::{
    errors::{Error, Result},
    keyboard::Scancode,
};

/// Number of rows in a layout: every non-extended scancode.
pub const LAYOUT_ROWS: usize = 0x80;

/// Index of a dead-key table inside a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeadKeyId(pub u16);

/// What a key produces at one shift level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeySym {
    /// Nothing, the key is unmapped at this level.
    #[default]
    None,
    /// A character.
    Char(char),
    /// A dead key, composing with the next key through the referenced table.
    Dead(DeadKeyId),
}

/// Result of pressing a key while a dead key is pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Composition {
    /// The composed character.
    Char(char),
    /// Another dead key stacks onto the pending one (double dead keys).
    Dead(DeadKeyId),
}

/// Shift level selected by the current modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Base,
    Shift,
    AltGr,
    ShiftAltGr,
    Kana,
    KanaShift,
}

/// The symbols of a single physical key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEntry {
    /// Base, Shift, AltGr and Shift+AltGr levels.
    pub levels: [KeySym; 4],
    /// Kana and Shift+Kana levels, used while KanaLock is active.
    pub kana: [KeySym; 2],
    /// CapsLock inverts Shift for this key.
    pub caps: bool,
}

impl KeyEntry {
    pub const EMPTY: Self = Self {
        levels: [KeySym::None; 4],
        kana: [KeySym::None; 2],
        caps: false,
    };

    /// The symbol at the given level.
    pub fn sym(&self, level: Level) -> KeySym {
        match level {
            Level::Base => self.levels[0],
            Level::Shift => self.levels[1],
            Level::AltGr => self.levels[2],
            Level::ShiftAltGr => self.levels[3],
            Level::Kana => self.kana[0],
            Level::KanaShift => self.kana[1],
        }
    }
}

/// A dead key and every composition it takes part in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeadKeyTable {
    accent: char,
    /// Sorted by the second character.
    compositions: Vec<(char, Composition)>,
}

impl DeadKeyTable {
    /// Builds a table, sorting compositions by their second character.
    pub fn new(accent: char, compositions: impl IntoIterator<Item = (char, Composition)>) -> Self {
        let mut compositions: Vec<_> = compositions.into_iter().collect();
        compositions.sort_by_key(|&(second, _)| second);
        compositions.dedup_by_key(|&mut (second, _)| second);
        Self {
            accent,
            compositions,
        }
    }

    /// The standalone glyph of the dead key, emitted when no composition
    /// exists for the following key.
    pub fn accent(&self) -> char {
        self.accent
    }

    /// All compositions, sorted by the second character.
    pub fn compositions(&self) -> &[(char, Composition)] {
        &self.compositions
    }

    /// Looks up what `second` turns into when typed after this dead key.
    pub fn find_composition(&self, second: char) -> Option<Composition> {
        self.compositions
            .binary_search_by_key(&second, |&(c, _)| c)
            .ok()
            .map(|i| self.compositions[i].1)
    }
}

/// Static row of a layout definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyDef {
    pub scancode: u8,
    /// Base, Shift, AltGr and Shift+AltGr levels.
    pub levels: [KeySym; 4],
    pub caps: bool,
}

/// Static kana row of a layout definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KanaDef {
    pub scancode: u8,
    /// Kana and Shift+Kana levels.
    pub levels: [KeySym; 2],
}

/// Static dead-key table of a layout definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeadKeyDef {
    pub accent: char,
    pub compositions: &'static [(char, Composition)],
}

/// Declarative description of a layout.
///
/// The rows in `keys` are applied on top of [`tables::COMMON_KEYS`] (Esc,
/// Tab, Backspace, Enter, Space and the numeric keypad), so a definition only
/// lists what is specific to its locale and may override the common rows.
#[derive(Clone, Copy, Debug)]
pub struct LayoutDef {
    pub id: KbdId,
    /// Locale style name, e.g. `fr-FR`.
    pub name: &'static str,
    /// Human readable name, e.g. `French (Legacy, AZERTY)`.
    pub display_name: &'static str,
    /// Whether right ctrl acts as ctrl for character lookup.
    pub right_ctrl_is_ctrl: bool,
    pub keys: &'static [KeyDef],
    pub kana: &'static [KanaDef],
    pub dead_keys: &'static [DeadKeyDef],
}

/// A validated per-locale keyboard layout.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyLayout {
    id: KbdId,
    name: &'static str,
    display_name: &'static str,
    right_ctrl_is_ctrl: bool,
    has_kana: bool,
    keys: [KeyEntry; LAYOUT_ROWS],
    dead_keys: Vec<DeadKeyTable>,
}

static NULL_LAYOUT: KeyLayout = KeyLayout::null();

impl KeyLayout {
    /// A layout which maps no key at all.
    pub const fn null() -> Self {
        Self {
            id: KbdId(0),
            name: "null",
            display_name: "null",
            right_ctrl_is_ctrl: true,
            has_kana: false,
            keys: [KeyEntry::EMPTY; LAYOUT_ROWS],
            dead_keys: Vec::new(),
        }
    }

    /// Shared instance of [`KeyLayout::null`].
    pub fn null_layout() -> &'static Self {
        &NULL_LAYOUT
    }

    /// Builds and validates a layout from its definition.
    ///
    /// Fails if a row is outside of `0x00..0x80`, if a scancode is listed
    /// twice in the same row set, or if a dead key points to a table the
    /// definition does not have.
    pub fn new(def: &LayoutDef) -> Result<Self> {
        let mut keys = [KeyEntry::EMPTY; LAYOUT_ROWS];

        for row in tables::COMMON_KEYS {
            keys[usize::from(row.scancode)] = KeyEntry {
                levels: row.levels,
                kana: [KeySym::None; 2],
                caps: row.caps,
            };
        }

        let mut seen = [false; LAYOUT_ROWS];
        for row in def.keys {
            let i = row_index(def.id, row.scancode)?;
            if ::std::mem::replace(&mut seen[i], true) {
                return Err(Error::DuplicateKey {
                    layout: def.id,
                    scancode: row.scancode,
                });
            }
            keys[i] = KeyEntry {
                levels: row.levels,
                kana: [KeySym::None; 2],
                caps: row.caps,
            };
        }

        let mut seen = [false; LAYOUT_ROWS];
        for row in def.kana {
            let i = row_index(def.id, row.scancode)?;
            if ::std::mem::replace(&mut seen[i], true) {
                return Err(Error::DuplicateKey {
                    layout: def.id,
                    scancode: row.scancode,
                });
            }
            keys[i].kana = row.levels;
        }

        let n_tables = def.dead_keys.len();
        let check = |id: DeadKeyId| {
            if usize::from(id.0) < n_tables {
                Ok(())
            } else {
                Err(Error::UnknownDeadKey {
                    layout: def.id,
                    index: id.0,
                })
            }
        };
        for entry in &keys {
            for sym in entry.levels.iter().chain(&entry.kana) {
                if let KeySym::Dead(id) = *sym {
                    check(id)?;
                }
            }
        }
        for table in def.dead_keys {
            for (_, composition) in table.compositions {
                if let Composition::Dead(id) = *composition {
                    check(id)?;
                }
            }
        }

        Ok(Self {
            id: def.id,
            name: def.name,
            display_name: def.display_name,
            right_ctrl_is_ctrl: def.right_ctrl_is_ctrl,
            has_kana: !def.kana.is_empty(),
            keys,
            dead_keys: def
                .dead_keys
                .iter()
                .map(|dk| DeadKeyTable::new(dk.accent, dk.compositions.iter().copied()))
                .collect(),
        })
    }

    pub fn id(&self) -> KbdId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn right_ctrl_is_ctrl(&self) -> bool {
        self.right_ctrl_is_ctrl
    }

    /// Whether the layout has kana levels (and a Kana lock key).
    pub fn has_kana(&self) -> bool {
        self.has_kana
    }

    /// The row of a non-extended scancode. Scancodes at or above `0x80` are
    /// never mapped.
    pub fn entry(&self, scancode: Scancode) -> &KeyEntry {
        self.keys
            .get(usize::from(scancode.value()))
            .unwrap_or(&KeyEntry::EMPTY)
    }

    /// The dead-key table with the given id.
    pub fn dead_key(&self, id: DeadKeyId) -> Option<&DeadKeyTable> {
        self.dead_keys.get(usize::from(id.0))
    }

    /// All dead-key tables of the layout.
    pub fn dead_keys(&self) -> &[DeadKeyTable] {
        &self.dead_keys
    }

    /// The character produced by a key without any modifier, if any.
    pub fn base_char(&self, scancode: Scancode) -> Option<char> {
        match self.entry(scancode).sym(Level::Base) {
            KeySym::Char(c) => Some(c),
            _ => None,
        }
    }

    /// The first scancode producing `ch` without any modifier.
    pub fn scancode_for(&self, ch: char) -> Option<Scancode> {
        (0..LAYOUT_ROWS as u8)
            .map(Scancode)
            .find(|&sc| self.base_char(sc) == Some(ch))
    }
}

impl fmt::Debug for KeyLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyLayout")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("display_name", &self.display_name)
            .field("right_ctrl_is_ctrl", &self.right_ctrl_is_ctrl)
            .field("has_kana", &self.has_kana)
            .field("dead_keys", &self.dead_keys.len())
            .finish_non_exhaustive()
    }
}

fn row_index(layout: KbdId, scancode: u8) -> Result<usize> {
    let i = usize::from(scancode);
    if i < LAYOUT_ROWS {
        Ok(i)
    } else {
        Err(Error::ScancodeOutOfRange { layout, scancode })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tables::{ch, key, letter, row, N};

    use ::pretty_assertions::assert_eq;

    const ACUTE: &[(char, Composition)] = &[
        ('e', Composition::Char('é')),
        (' ', Composition::Char('´')),
        ('a', Composition::Char('á')),
    ];

    fn def(keys: &'static [KeyDef], dead_keys: &'static [DeadKeyDef]) -> LayoutDef {
        LayoutDef {
            id: KbdId(0xF00D),
            name: "test",
            display_name: "Test",
            right_ctrl_is_ctrl: true,
            keys,
            kana: &[],
            dead_keys,
        }
    }

    #[test]
    fn test_compositions_are_sorted() {
        let table = DeadKeyTable::new('´', ACUTE.iter().copied());

        let seconds: Vec<_> = table.compositions().iter().map(|&(c, _)| c).collect();
        assert_eq!(seconds, [' ', 'a', 'e']);
        assert_eq!(table.find_composition('e'), Some(Composition::Char('é')));
        assert_eq!(table.find_composition(' '), Some(Composition::Char('´')));
        assert_eq!(table.find_composition('z'), None);
    }

    #[test]
    fn test_common_rows_are_applied() {
        static KEYS: &[KeyDef] = &[letter(0x10, 'q', 'Q')];
        let layout = KeyLayout::new(&def(KEYS, &[])).unwrap();

        assert_eq!(layout.base_char(Scancode(0x01)), Some('\x1b'));
        assert_eq!(layout.base_char(Scancode(0x0E)), Some('\x08'));
        assert_eq!(layout.base_char(Scancode(0x10)), Some('q'));
        assert!(layout.entry(Scancode(0x10)).caps);
        assert_eq!(layout.scancode_for('q'), Some(Scancode(0x10)));
        assert_eq!(layout.entry(Scancode(0xAA)), &KeyEntry::EMPTY);
    }

    #[test]
    fn test_rows_override_common_rows() {
        static KEYS: &[KeyDef] = &[row(0x53, [ch(','), N, N, N])];
        let layout = KeyLayout::new(&def(KEYS, &[])).unwrap();

        assert_eq!(layout.base_char(Scancode(0x53)), Some(','));
    }

    #[test]
    fn test_duplicate_row_rejected() {
        static KEYS: &[KeyDef] = &[key(0x02, '1', '!'), key(0x02, '&', '1')];

        assert_eq!(
            KeyLayout::new(&def(KEYS, &[])),
            Err(Error::DuplicateKey {
                layout: KbdId(0xF00D),
                scancode: 0x02
            })
        );
    }

    #[test]
    fn test_out_of_range_row_rejected() {
        static KEYS: &[KeyDef] = &[key(0x80, 'x', 'X')];

        assert_eq!(
            KeyLayout::new(&def(KEYS, &[])),
            Err(Error::ScancodeOutOfRange {
                layout: KbdId(0xF00D),
                scancode: 0x80
            })
        );
    }

    #[test]
    fn test_dangling_dead_key_rejected() {
        static KEYS: &[KeyDef] = &[KeyDef {
            scancode: 0x0D,
            levels: [KeySym::Dead(DeadKeyId(1)), N, N, N],
            caps: false,
        }];
        static DEAD_KEYS: &[DeadKeyDef] = &[DeadKeyDef {
            accent: '´',
            compositions: ACUTE,
        }];

        assert_eq!(
            KeyLayout::new(&def(KEYS, DEAD_KEYS)),
            Err(Error::UnknownDeadKey {
                layout: KbdId(0xF00D),
                index: 1
            })
        );
    }

    #[test]
    fn test_null_layout_maps_nothing() {
        let layout = KeyLayout::null_layout();

        assert_eq!(layout.id(), KbdId(0));
        assert!((0..LAYOUT_ROWS as u8).all(|sc| layout.entry(Scancode(sc)) == &KeyEntry::EMPTY));
        assert!(layout.dead_keys().is_empty());
        assert_eq!(ch('a'), KeySym::Char('a'));
    }
}
