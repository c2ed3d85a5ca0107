//! Scancode decoding state machine.

use ::bitvec::prelude::*;
use ::strum::{Display, EnumIter};
use ::tracing::{debug, trace};

use super::{KbdFlags, KeyCode, KeyLocks, KeyMod, KeyModFlags, Scancode, ScancodeEvent};
use crate::layout::{Composition, DeadKeyId, KeyLayout, KeySym, Level};

const NO_CHARS: [u32; 2] = [0; 2];

/// Semantic classification of a key event.
///
/// Exactly one [`KEvent`] is produced per decoded event. It only depends on
/// the key, the current modifiers and the layout, and is never stored
/// between events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum KEvent {
    /// Key-ups, modifiers other than shift/ctrl, and locks.
    #[default]
    None,
    /// Any other key press, printable or not.
    KeyDown,
    F4,
    F12,
    Tab,
    BackTab,
    Enter,
    Esc,
    Delete,
    Backspace,
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,
    Home,
    End,
    PgUp,
    PgDown,
    Insert,
    Cut,
    Copy,
    Paste,
    Ctrl,
    Shift,
}

/// Output of a single decoded event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DecodedKeys {
    /// Key code of the triggering event.
    pub keycode: KeyCode,
    /// Flags of the triggering event, echoed back unchanged.
    pub flags: KbdFlags,
    /// Zero, one or two produced code points. `0` means "no character" and
    /// only ever trails produced code points.
    pub uchars: [u32; 2],
}

impl DecodedKeys {
    /// Whether the event produced at least one character.
    pub fn has_char(&self) -> bool {
        self.uchars[0] != 0
    }

    /// The produced code points, without the trailing zeros.
    pub fn uchars(&self) -> &[u32] {
        let n = self.uchars.iter().take_while(|&&u| u != 0).count();
        &self.uchars[..n]
    }

    /// The produced characters.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.uchars().iter().filter_map(|&u| char::from_u32(u))
    }
}

/// Converts keyboard events into text and semantic key actions.
///
/// # State
///
/// A [`Keymap`] tracks everything needed to decode a stream of `(flags,
/// scancode)` events coming from a remote keyboard:
///
/// - the modifiers currently held (left and right sides are told apart)
///   and the sticky locks (CapsLock, NumLock, ScrollLock, KanaLock),
/// - which physical keys are currently down, to detect shortcut chords and
///   to toggle locks only once per physical press,
/// - the pending dead key, whose accent combines with the next key,
/// - the output of the last decoded event.
///
/// The layout is borrowed, typically from a
/// [`LayoutRegistry`](crate::layout::LayoutRegistry), and can be swapped at
/// any time with [`Keymap::set_layout`].
///
/// # Auto-repeat
///
/// Auto-repeated key presses arrive as repeated key-down events without
/// intervening key-ups. Each of them is decoded again and yields the same
/// output; deciding what to do with repeats is up to the caller.
///
/// # Errors
///
/// Decoding is total: unknown scancodes and unmapped keys decode to no
/// character and a generic [`KEvent`], but are still tracked as down.
///
/// # Example
///
/// ```
/// use ::kbdkeymap::{
///     keyboard::{KEvent, KbdFlags, Keymap, Scancode},
///     layout::{KbdId, LayoutRegistry},
/// };
///
/// let registry = LayoutRegistry::builtin().unwrap();
/// let mut keymap = Keymap::new(registry.get(KbdId::FRENCH).unwrap());
///
/// // Circumflex dead key, then `e`.
/// keymap.event(KbdFlags::empty(), Scancode(0x1A));
/// keymap.event(KbdFlags::RELEASE, Scancode(0x1A));
/// let (decoded, kevent) = keymap.event(KbdFlags::empty(), Scancode(0x12));
///
/// assert_eq!(decoded.chars().collect::<String>(), "ê");
/// assert_eq!(kevent, KEvent::KeyDown);
/// ```
#[derive(Clone, Debug)]
pub struct Keymap<'l> {
    layout: &'l KeyLayout,
    /// Held modifiers and sticky locks.
    mods: KeyModFlags,
    /// Bitfield which tracks the press state of every key code.
    pressed: BitArr!(for KeyCode::COUNT, in usize, Lsb0),
    /// Dead key waiting for the next key.
    dead_key: Option<DeadKeyId>,
    decoded_keys: DecodedKeys,
    kevent: KEvent,
}

impl<'l> Keymap<'l> {
    /// A keymap decoding with `layout`, no key down and all locks off.
    pub fn new(layout: &'l KeyLayout) -> Self {
        Self {
            layout,
            mods: KeyModFlags::empty(),
            pressed: BitArray::ZERO,
            dead_key: None,
            decoded_keys: DecodedKeys::default(),
            kevent: KEvent::None,
        }
    }

    /// Decodes one keyboard event and updates the keymap state.
    ///
    /// The result is also kept until the next call, see
    /// [`last_decoded_keys`](Self::last_decoded_keys) and
    /// [`last_kevent`](Self::last_kevent).
    pub fn event(&mut self, flags: KbdFlags, scancode: Scancode) -> (DecodedKeys, KEvent) {
        let keycode = KeyCode::new(flags, scancode);

        // Pause prefix shares its scancode with left ctrl: neither tracked
        // as pressed nor a modifier, on press and on release.
        let (uchars, kevent) = if flags.contains(KbdFlags::EXTENDED1) {
            if flags.is_release() {
                (NO_CHARS, KEvent::None)
            } else {
                self.dead_key = None;
                (NO_CHARS, KEvent::KeyDown)
            }
        } else if flags.is_release() {
            self.key_up(keycode)
        } else {
            self.key_down(keycode)
        };

        // Never log the decoded characters.
        trace!(?keycode, ?flags, %kevent, "Keyboard event");

        self.decoded_keys = DecodedKeys {
            keycode,
            flags,
            uchars,
        };
        self.kevent = kevent;

        (self.decoded_keys, kevent)
    }

    /// Decodes a 16-bit "scancode and flags" value as found in fast-path
    /// keyboard events: flags in the high byte, scancode in the low byte.
    pub fn event_raw(&mut self, scancode_and_flags: u16) -> (DecodedKeys, KEvent) {
        let evt = ScancodeEvent::from(scancode_and_flags);
        self.event(evt.flags(), evt.scancode())
    }

    /// Overwrites the lock state, typically from a client synchronize event.
    /// Held modifiers are left untouched.
    pub fn set_locks(&mut self, locks: KeyLocks) {
        debug!(?locks, "Synchronizing keyboard locks");
        self.mods = (self.mods - KeyModFlags::LOCKS) | KeyModFlags::from(locks);
    }

    /// Current lock state.
    pub fn locks(&self) -> KeyLocks {
        KeyLocks::from(self.mods)
    }

    /// Held modifiers and locks.
    pub fn mods(&self) -> KeyModFlags {
        self.mods
    }

    /// Switches to another layout. Modifiers, locks and pressed keys are
    /// kept, a pending dead key is dropped.
    pub fn set_layout(&mut self, layout: &'l KeyLayout) {
        debug!(
            layout = %layout.id(),
            name = layout.name(),
            "Switching keyboard layout"
        );
        self.layout = layout;
        self.dead_key = None;
    }

    /// The active layout.
    pub fn layout(&self) -> &'l KeyLayout {
        self.layout
    }

    /// Either ctrl key is held.
    pub fn is_ctrl_pressed(&self) -> bool {
        self.mods.intersects(KeyModFlags::CTRL)
    }

    /// Either shift key is held.
    pub fn is_shift_pressed(&self) -> bool {
        self.mods.intersects(KeyModFlags::SHIFT)
    }

    /// Either alt key (including AltGr) is held.
    pub fn is_alt_pressed(&self) -> bool {
        self.mods.intersects(KeyModFlags::ALT)
    }

    /// Returns `true` if the given key is currently down.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed[usize::from(key.value())]
    }

    /// Ctrl+Alt+Del (either delete key) or Ctrl+Shift+Esc is held.
    pub fn is_tsk_switch_shortcut(&self) -> bool {
        let ctrl = self.is_ctrl_pressed();

        (ctrl
            && self.is_alt_pressed()
            && (self.is_key_pressed(KeyCode::DELETE)
                || self.is_key_pressed(KeyCode::NUMPAD_DECIMAL)))
            || (ctrl && self.is_shift_pressed() && self.is_key_pressed(KeyCode::ESC))
    }

    /// Alt+Tab or Ctrl+Tab is held.
    pub fn is_app_switching_shortcut(&self) -> bool {
        (self.is_alt_pressed() || self.is_ctrl_pressed()) && self.is_key_pressed(KeyCode::TAB)
    }

    /// Output of the last decoded event.
    pub fn last_decoded_keys(&self) -> DecodedKeys {
        self.decoded_keys
    }

    /// [`KEvent`] of the last decoded event.
    pub fn last_kevent(&self) -> KEvent {
        self.kevent
    }

    /// Forgets the output of the last decoded event.
    pub fn reset_decoded_keys(&mut self) {
        self.decoded_keys = DecodedKeys::default();
        self.kevent = KEvent::None;
    }

    /// Forgets every pressed key, held modifier and pending dead key, and
    /// sets the given locks. Used when the keyboard focus is lost and
    /// key-ups may never arrive.
    pub fn reset_mods(&mut self, locks: KeyLocks) {
        debug!(?locks, "Resetting keyboard state");
        self.pressed = BitArray::ZERO;
        self.mods = KeyModFlags::from(locks);
        self.dead_key = None;
    }

    /// Accent of the dead key waiting for the next key, if any.
    pub fn pending_dead_key(&self) -> Option<char> {
        self.dead_key
            .and_then(|id| self.layout.dead_key(id))
            .map(|table| table.accent())
    }

    fn key_up(&mut self, keycode: KeyCode) -> ([u32; 2], KEvent) {
        self.set_pressed(keycode, false);
        if let Some(m) = modifier(keycode) {
            self.mods.remove(m.into());
        }
        (NO_CHARS, KEvent::None)
    }

    fn key_down(&mut self, keycode: KeyCode) -> ([u32; 2], KEvent) {
        let was_down = self.set_pressed(keycode, true);

        if let Some(m) = modifier(keycode) {
            self.mods.insert(m.into());
            let kevent = match m {
                KeyMod::LCtrl | KeyMod::RCtrl => KEvent::Ctrl,
                KeyMod::LShift | KeyMod::RShift => KEvent::Shift,
                _ => KEvent::None,
            };
            return (NO_CHARS, kevent);
        }

        if let Some((lock, kevent)) = self.lock(keycode) {
            // Auto-repeat must not toggle again.
            if !was_down {
                self.mods.toggle(lock.into());
            }
            return (NO_CHARS, kevent);
        }

        if let Some((uchar, kevent)) = self.action(keycode) {
            let had_dead_key = self.dead_key.take().is_some();
            let chorded = self.mods.intersects(KeyModFlags::CTRL | KeyModFlags::ALT);
            let uchars = match uchar {
                Some(c) if !had_dead_key && !chorded => [u32::from(c), 0],
                _ => NO_CHARS,
            };
            return (uchars, kevent);
        }

        if let Some(kevent) = self.clipboard(keycode) {
            self.dead_key = None;
            return (NO_CHARS, kevent);
        }

        match self.sym(keycode) {
            KeySym::None => {
                self.dead_key = None;
                (NO_CHARS, KEvent::KeyDown)
            }
            KeySym::Char(c) => (self.compose(c), KEvent::KeyDown),
            KeySym::Dead(id) => (self.press_dead_key(id), KEvent::KeyDown),
        }
    }

    /// Lock toggled by a key, with the event it produces.
    fn lock(&self, keycode: KeyCode) -> Option<(KeyMod, KEvent)> {
        match keycode {
            KeyCode::CAPSLOCK => Some((KeyMod::CapsLock, KEvent::None)),
            KeyCode::NUMLOCK => Some((KeyMod::NumLock, KEvent::None)),
            KeyCode::SCROLLLOCK => Some((KeyMod::ScrollLock, KEvent::None)),
            KeyCode::KANA if self.layout.has_kana() => Some((KeyMod::KanaLock, KEvent::KeyDown)),
            _ => None,
        }
    }

    /// Non-printable keys, and the control character some of them produce.
    fn action(&self, keycode: KeyCode) -> Option<(Option<char>, KEvent)> {
        let action = match keycode {
            KeyCode::ESC => (Some('\x1b'), KEvent::Esc),
            KeyCode::TAB if self.is_shift_pressed() => (Some('\t'), KEvent::BackTab),
            KeyCode::TAB => (Some('\t'), KEvent::Tab),
            KeyCode::BACKSPACE => (Some('\x08'), KEvent::Backspace),
            KeyCode::ENTER | KeyCode::NUMPAD_ENTER => (Some('\r'), KEvent::Enter),
            KeyCode::F4 => (None, KEvent::F4),
            KeyCode::F12 => (None, KEvent::F12),
            KeyCode::HOME => (None, KEvent::Home),
            KeyCode::UP => (None, KEvent::UpArrow),
            KeyCode::PAGE_UP => (None, KEvent::PgUp),
            KeyCode::LEFT => (None, KEvent::LeftArrow),
            KeyCode::RIGHT => (None, KEvent::RightArrow),
            KeyCode::END => (None, KEvent::End),
            KeyCode::DOWN => (None, KEvent::DownArrow),
            KeyCode::PAGE_DOWN => (None, KEvent::PgDown),
            KeyCode::INSERT => (None, KEvent::Insert),
            KeyCode::DELETE => (None, KEvent::Delete),
            k if k.is_numpad_navigation() => {
                // With NumLock (and no shift) the keypad types digits.
                if self.mods.contains(KeyModFlags::NUMLOCK) && !self.is_shift_pressed() {
                    return None;
                }
                (None, numpad_navigation(k))
            }
            _ => return None,
        };
        Some(action)
    }

    /// Ctrl+X, Ctrl+C and Ctrl+V, matched on the layout's base character so
    /// they follow the key labels of the active layout.
    fn clipboard(&self, keycode: KeyCode) -> Option<KEvent> {
        if !self.is_ctrl_pressed() || self.is_alt_pressed() || keycode.is_extended() {
            return None;
        }
        match self.layout.base_char(keycode.scancode())? {
            'x' => Some(KEvent::Cut),
            'c' => Some(KEvent::Copy),
            'v' => Some(KEvent::Paste),
            _ => None,
        }
    }

    /// Symbol of a key at the level selected by the current modifiers.
    ///
    /// Ctrl alone or alt alone select nothing. Ctrl+Alt and AltGr select the
    /// AltGr levels. CapsLock only inverts shift on the base levels of keys
    /// flagged `caps`.
    fn sym(&self, keycode: KeyCode) -> KeySym {
        if keycode == KeyCode::NUMPAD_DIVIDE {
            return if self.mods.intersects(KeyModFlags::CTRL | KeyModFlags::ALT) {
                KeySym::None
            } else {
                KeySym::Char('/')
            };
        }
        if keycode.is_extended() {
            return KeySym::None;
        }

        let ctrl = if self.layout.right_ctrl_is_ctrl() {
            self.is_ctrl_pressed()
        } else {
            self.mods.contains(KeyModFlags::LCTRL)
        };
        let lalt = self.mods.contains(KeyModFlags::LALT);
        let altgr = self.mods.contains(KeyModFlags::RALT) || (ctrl && lalt);
        if !altgr && (ctrl || lalt) {
            return KeySym::None;
        }

        let entry = self.layout.entry(keycode.scancode());
        let shift = self.is_shift_pressed();

        if altgr {
            return entry.sym(if shift {
                Level::ShiftAltGr
            } else {
                Level::AltGr
            });
        }

        if self.mods.contains(KeyModFlags::KANALOCK) {
            let kana = entry.sym(if shift { Level::KanaShift } else { Level::Kana });
            if kana != KeySym::None {
                return kana;
            }
        }

        let caps = entry.caps && self.mods.contains(KeyModFlags::CAPSLOCK);
        entry.sym(if shift != caps {
            Level::Shift
        } else {
            Level::Base
        })
    }

    /// Combines a character with the pending dead key, if any.
    fn compose(&mut self, c: char) -> [u32; 2] {
        let layout = self.layout;
        match self.dead_key.take().and_then(|id| layout.dead_key(id)) {
            None => [u32::from(c), 0],
            Some(table) => match table.find_composition(c) {
                Some(Composition::Char(composed)) => [u32::from(composed), 0],
                Some(Composition::Dead(next)) => {
                    self.dead_key = Some(next);
                    NO_CHARS
                }
                None => [u32::from(table.accent()), u32::from(c)],
            },
        }
    }

    /// Stores a dead key, or stacks it onto the pending one.
    ///
    /// Stacking follows the pending table: a chained table becomes pending, a
    /// composed character is emitted, anything else emits both accents.
    fn press_dead_key(&mut self, id: DeadKeyId) -> [u32; 2] {
        let layout = self.layout;
        let table = match layout.dead_key(id) {
            Some(table) => table,
            None => {
                self.dead_key = None;
                return NO_CHARS;
            }
        };

        match self.dead_key.take().and_then(|pending| layout.dead_key(pending)) {
            None => {
                self.dead_key = Some(id);
                NO_CHARS
            }
            Some(pending) => match pending.find_composition(table.accent()) {
                Some(Composition::Dead(next)) => {
                    self.dead_key = Some(next);
                    NO_CHARS
                }
                Some(Composition::Char(c)) => [u32::from(c), 0],
                None => [u32::from(pending.accent()), u32::from(table.accent())],
            },
        }
    }

    /// Marks a key as down or up, returning whether it was down before.
    fn set_pressed(&mut self, keycode: KeyCode, down: bool) -> bool {
        self.pressed.replace(usize::from(keycode.value()), down)
    }
}

/// The modifier a key holds while down.
fn modifier(keycode: KeyCode) -> Option<KeyMod> {
    Some(match keycode {
        KeyCode::LCTRL => KeyMod::LCtrl,
        KeyCode::RCTRL => KeyMod::RCtrl,
        KeyCode::LSHIFT => KeyMod::LShift,
        KeyCode::RSHIFT => KeyMod::RShift,
        KeyCode::LALT => KeyMod::LAlt,
        KeyCode::RALT => KeyMod::RAlt,
        KeyCode::LWIN => KeyMod::LMeta,
        KeyCode::RWIN => KeyMod::RMeta,
        _ => return None,
    })
}

fn numpad_navigation(keycode: KeyCode) -> KEvent {
    match keycode {
        KeyCode::NUMPAD_7 => KEvent::Home,
        KeyCode::NUMPAD_8 => KEvent::UpArrow,
        KeyCode::NUMPAD_9 => KEvent::PgUp,
        KeyCode::NUMPAD_4 => KEvent::LeftArrow,
        KeyCode::NUMPAD_6 => KEvent::RightArrow,
        KeyCode::NUMPAD_1 => KEvent::End,
        KeyCode::NUMPAD_2 => KEvent::DownArrow,
        KeyCode::NUMPAD_3 => KEvent::PgDown,
        KeyCode::NUMPAD_0 => KEvent::Insert,
        KeyCode::NUMPAD_DECIMAL => KEvent::Delete,
        _ => KEvent::KeyDown,
    }
}
