//! Decoding of keyboard scancode events.

mod builder;
mod codes;
mod event;
mod keymap;
mod mods;

pub use builder::*;
pub use codes::*;
pub use event::*;
pub use keymap::*;
pub use mods::*;
