//! Keyboard scancode decoding.
//!
//! Turns the raw `(flags, scancode)` keyboard events sent by a remote
//! desktop client into Unicode text and semantic key actions, following the
//! client's keyboard layout: modifiers, locks, dead keys and shortcut
//! chords are tracked across events by a [`Keymap`].
//!
//! ```
//! use ::kbdkeymap::{
//!     keyboard::{Builder, KEvent, KeyLocks},
//!     layout::{KbdId, LayoutRegistry},
//! };
//!
//! let registry = LayoutRegistry::builtin().unwrap();
//! let mut keymap = Builder::new()
//!     .with_layout_id(KbdId::US)
//!     .with_locks(KeyLocks::CAPS_LOCK)
//!     .build(&registry)
//!     .unwrap();
//!
//! let (decoded, kevent) = keymap.event_raw(0x001E);
//! assert_eq!(decoded.chars().collect::<String>(), "A");
//! assert_eq!(kevent, KEvent::KeyDown);
//! ```
//!
//! [`Keymap`]: keyboard::Keymap

pub mod errors;
pub mod keyboard;
pub mod layout;
