//! Builder object which constructs [`Keymap`]s
//!
//! [`Keymap`]: crate::keyboard::Keymap

use ::tracing::debug;

use crate::{
    errors::Result,
    keyboard::{KeyLocks, Keymap},
    layout::{KbdId, LayoutRegistry},
};

/// A builder pattern object which simplifies the process of creating a
/// [`Keymap`] for a client session.
///
/// The same builder can be re-used to create multiple keymaps with the same
/// configuration, as a type of prototype.
///
/// ```
/// use ::kbdkeymap::{
///     keyboard::{Builder, KeyLocks},
///     layout::{KbdId, LayoutRegistry},
/// };
///
/// let registry = LayoutRegistry::builtin().unwrap();
/// let keymap = Builder::new()
///     .with_layout_id(KbdId::GERMAN)
///     .with_locks(KeyLocks::NUM_LOCK)
///     .build(&registry)
///     .expect("German is a built-in layout");
///
/// assert_eq!(keymap.layout().name(), "de-DE");
/// assert_eq!(keymap.locks(), KeyLocks::NUM_LOCK);
/// ```
///
/// [`Keymap`]: crate::keyboard::Keymap
#[derive(Clone, Debug)]
pub struct Builder {
    layout_id: KbdId,
    locks: KeyLocks,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Construct a new builder. Default values will be used for all properties
    /// until explicitly set.
    pub fn new() -> Self {
        Self {
            layout_id: KbdId::US,
            locks: KeyLocks::empty(),
        }
    }

    /// Set the id of the client's keyboard layout.
    ///
    /// Defaults to [`KbdId::US`] if not set.
    pub fn with_layout_id(self, layout_id: KbdId) -> Self {
        Self { layout_id, ..self }
    }

    /// Set the initial lock state, as announced by the client.
    ///
    /// Defaults to all locks off if not set.
    pub fn with_locks(self, locks: KeyLocks) -> Self {
        Self { locks, ..self }
    }

    /// Gets the currently set layout id.
    pub fn layout_id(&self) -> KbdId {
        self.layout_id
    }

    /// Gets the currently set locks.
    pub fn locks(&self) -> KeyLocks {
        self.locks
    }

    /// Build a new [`Keymap`] with the properties of the builder, borrowing
    /// its layout from `registry`.
    ///
    /// Fails with [`Error::UnknownLayout`] if the registry does not know the
    /// layout id.
    ///
    /// [`Keymap`]: crate::keyboard::Keymap
    /// [`Error::UnknownLayout`]: crate::errors::Error::UnknownLayout
    pub fn build<'l>(&self, registry: &'l LayoutRegistry) -> Result<Keymap<'l>> {
        let layout = registry.get(self.layout_id)?;
        debug!(
            layout = %self.layout_id,
            name = layout.name(),
            locks = ?self.locks,
            "Creating keymap"
        );

        let mut keymap = Keymap::new(layout);
        keymap.set_locks(self.locks);
        Ok(keymap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::Error, keyboard::KeyModFlags};

    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let builder = Builder::default();

        assert_eq!(builder.layout_id(), KbdId::US);
        assert_eq!(builder.locks(), KeyLocks::empty());

        let registry = LayoutRegistry::builtin().unwrap();
        let keymap = builder.build(&registry).unwrap();
        assert_eq!(keymap.layout().id(), KbdId::US);
        assert_eq!(keymap.mods(), KeyModFlags::empty());
    }

    #[test]
    fn test_builder_is_reusable() {
        let registry = LayoutRegistry::builtin().unwrap();
        let builder = Builder::new()
            .with_layout_id(KbdId::JAPANESE)
            .with_locks(KeyLocks::KANA_LOCK | KeyLocks::NUM_LOCK);

        let first = builder.build(&registry).unwrap();
        let second = builder.build(&registry).unwrap();

        assert_eq!(first.layout().id(), KbdId::JAPANESE);
        assert_eq!(first.mods(), second.mods());
        assert_eq!(
            second.mods(),
            KeyModFlags::KANALOCK | KeyModFlags::NUMLOCK
        );
    }

    #[test]
    fn test_unknown_layout() {
        let registry = LayoutRegistry::builtin().unwrap();

        assert_eq!(
            Builder::new()
                .with_layout_id(KbdId(0xDEAD))
                .build(&registry)
                .unwrap_err(),
            Error::UnknownLayout(KbdId(0xDEAD))
        );
    }
}
