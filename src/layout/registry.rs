//! Layout identifiers and the registry of available layouts.

use ::std::{collections::BTreeMap, fmt, str::FromStr};

use ::tap::prelude::*;
use ::tracing::debug;

use super::{tables, KeyLayout, LayoutDef};
use crate::errors::{Error, Result};

/// Numeric keyboard layout identifier (Windows KLID), e.g. `0x040C` for
/// French or `0x30407` for German Extended (E2).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KbdId(pub u32);

impl KbdId {
    pub const US: Self = Self(0x0409);
    pub const UNITED_KINGDOM: Self = Self(0x0809);
    pub const FRENCH: Self = Self(0x040C);
    pub const GERMAN: Self = Self(0x0407);
    pub const GERMAN_EXTENDED_E2: Self = Self(0x0003_0407);
    pub const JAPANESE: Self = Self(0x0411);
}

impl fmt::Display for KbdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

/// Parses a hexadecimal identifier, with or without a `0x` prefix.
impl FromStr for KbdId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|source| Error::InvalidKbdId {
                input: s.to_owned(),
                source,
            })
    }
}

/// Immutable set of layouts, indexed by [`KbdId`].
///
/// Built once (usually with [`LayoutRegistry::builtin`]) and then shared by
/// reference; every [`Keymap`] borrows its layout from here.
///
/// ```
/// use ::kbdkeymap::layout::{KbdId, LayoutRegistry};
///
/// let registry = LayoutRegistry::builtin().expect("built-in layouts are valid");
///
/// let french = registry.get(KbdId::FRENCH).unwrap();
/// assert_eq!(french.name(), "fr-FR");
/// assert_eq!(registry.find_by_name("FR-fr").map(|l| l.id()), Some(KbdId::FRENCH));
/// ```
///
/// [`Keymap`]: crate::keyboard::Keymap
#[derive(Clone, Debug, Default)]
pub struct LayoutRegistry {
    layouts: BTreeMap<KbdId, KeyLayout>,
}

impl LayoutRegistry {
    /// The registry of every layout shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_defs(tables::BUILTIN_LAYOUTS.iter().copied())
    }

    /// Builds a registry from layout definitions.
    ///
    /// Fails on the first invalid definition, or if two definitions share an
    /// id or a (case-insensitive) name.
    pub fn from_defs<'a>(defs: impl IntoIterator<Item = &'a LayoutDef>) -> Result<Self> {
        let mut layouts = BTreeMap::new();

        for def in defs {
            let layout = KeyLayout::new(def)?;

            if layouts.contains_key(&layout.id()) {
                return Err(Error::DuplicateLayoutId(layout.id()));
            }
            if layouts
                .values()
                .any(|other: &KeyLayout| other.name().eq_ignore_ascii_case(layout.name()))
            {
                return Err(Error::DuplicateLayoutName(layout.name().to_owned()));
            }

            layouts.insert(layout.id(), layout);
        }

        debug!(n_layouts = layouts.len(), "Layout registry ready");
        Ok(Self { layouts })
    }

    /// Looks up a layout by id.
    pub fn find_by_id(&self, id: KbdId) -> Option<&KeyLayout> {
        self.layouts.get(&id)
    }

    /// Looks up a layout by id, failing with [`Error::UnknownLayout`].
    pub fn get(&self, id: KbdId) -> Result<&KeyLayout> {
        self.find_by_id(id).ok_or(Error::UnknownLayout(id))
    }

    /// Looks up a layout by locale name, ignoring ASCII case.
    pub fn find_by_name(&self, name: &str) -> Option<&KeyLayout> {
        self.layouts
            .values()
            .find(|layout| layout.name().eq_ignore_ascii_case(name))
    }

    /// Looks up a layout by locale name, failing with
    /// [`Error::UnknownLayoutName`].
    pub fn get_by_name(&self, name: &str) -> Result<&KeyLayout> {
        self.find_by_name(name)
            .ok_or_else(|| Error::UnknownLayoutName(name.to_owned()))
    }

    /// All layouts, ordered by id.
    pub fn layouts(&self) -> impl Iterator<Item = &KeyLayout> {
        self.layouts.values()
    }

    /// All layouts, ordered by display name.
    pub fn sorted_by_name(&self) -> Vec<&KeyLayout> {
        self.layouts
            .values()
            .collect::<Vec<_>>()
            .tap_mut(|layouts| layouts.sort_by_key(|layout| layout.display_name()))
    }

    /// The US layout, falling back to [`KeyLayout::null_layout`] if the
    /// registry does not have it.
    pub fn default_layout(&self) -> &KeyLayout {
        self.find_by_id(KbdId::US)
            .unwrap_or(KeyLayout::null_layout())
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tables::{FRENCH, GERMAN, US};

    use ::maplit::btreeset;
    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_kbd_id_parse() {
        assert_eq!("0x040C".parse::<KbdId>().unwrap(), KbdId::FRENCH);
        assert_eq!("30407".parse::<KbdId>().unwrap(), KbdId::GERMAN_EXTENDED_E2);
        assert_eq!(" 0X0411 ".parse::<KbdId>().unwrap(), KbdId::JAPANESE);
        assert!(matches!(
            "azerty".parse::<KbdId>(),
            Err(Error::InvalidKbdId { input, .. }) if input == "azerty"
        ));
        assert!("".parse::<KbdId>().is_err());
    }

    #[test]
    fn test_kbd_id_display() {
        assert_eq!(KbdId::FRENCH.to_string(), "0x0000040C");
        assert_eq!(KbdId::GERMAN_EXTENDED_E2.to_string(), "0x00030407");
    }

    #[test]
    fn test_builtin_lookup() {
        let registry = LayoutRegistry::builtin().unwrap();

        let ids: ::std::collections::BTreeSet<_> = registry.layouts().map(KeyLayout::id).collect();
        assert_eq!(
            ids,
            btreeset! {
                KbdId::US,
                KbdId::UNITED_KINGDOM,
                KbdId::FRENCH,
                KbdId::GERMAN,
                KbdId::GERMAN_EXTENDED_E2,
                KbdId::JAPANESE,
            }
        );

        assert_eq!(registry.get(KbdId::JAPANESE).unwrap().name(), "ja-JP");
        assert_eq!(registry.get(KbdId(0x1234)), Err(Error::UnknownLayout(KbdId(0x1234))));
        assert_eq!(registry.get_by_name("de-de").unwrap().id(), KbdId::GERMAN);
        assert_eq!(
            registry.get_by_name("xx-XX"),
            Err(Error::UnknownLayoutName("xx-XX".to_owned()))
        );
        assert_eq!(registry.default_layout().id(), KbdId::US);
    }

    #[test]
    fn test_sorted_by_name() {
        let registry = LayoutRegistry::from_defs([&US, &GERMAN, &FRENCH]).unwrap();

        let names: Vec<_> = registry
            .sorted_by_name()
            .into_iter()
            .map(KeyLayout::display_name)
            .collect();
        assert_eq!(names, ["French", "German", "US"]);
    }

    #[test]
    fn test_duplicates_rejected() {
        assert_eq!(
            LayoutRegistry::from_defs([&US, &FRENCH, &US]).unwrap_err(),
            Error::DuplicateLayoutId(KbdId::US)
        );

        let renamed = LayoutDef {
            id: KbdId(0xF00D),
            name: "FR-fr",
            ..FRENCH
        };
        assert_eq!(
            LayoutRegistry::from_defs([&FRENCH, &renamed]).unwrap_err(),
            Error::DuplicateLayoutName("FR-fr".to_owned())
        );
    }

    #[test]
    fn test_empty_registry_defaults_to_null_layout() {
        let registry = LayoutRegistry::default();

        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.default_layout(), KeyLayout::null_layout());
    }
}
