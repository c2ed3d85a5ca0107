//! Decodes a stream of keyboard events typed on stdin.
//!
//! Each input line holds one 16-bit "flags | scancode" value in hexadecimal,
//! e.g. `001A` for a key press of scancode `0x1A` or `801A` for its release.
//! The layout id is read from the first argument and defaults to US:
//!
//! ```text
//! printf '1A\n801A\n12\n8012\n' | RUST_LOG=trace cargo run -- 0x040C
//! ```

use ::kbdkeymap::{
    keyboard::Builder,
    layout::{KbdId, LayoutRegistry},
};
use ::std::io::{self, BufRead};
use ::tracing::warn;
use ::tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn main() {
    ::tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let layout_id = match ::std::env::args().nth(1) {
        Some(arg) => arg.parse().expect("Invalid keyboard layout id"),
        None => KbdId::US,
    };

    let registry = LayoutRegistry::builtin().expect("Built-in layouts are valid");
    let mut keymap = Builder::new()
        .with_layout_id(layout_id)
        .build(&registry)
        .expect("Unknown keyboard layout");

    let mut text = String::new();
    for line in io::stdin().lock().lines() {
        let line = line.expect("Failed to read stdin");
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let scancode_and_flags = match u16::from_str_radix(line.trim_start_matches("0x"), 16) {
            Ok(value) => value,
            Err(err) => {
                warn!(input = line, %err, "Skipping malformed event");
                continue;
            }
        };

        let (decoded, kevent) = keymap.event_raw(scancode_and_flags);
        text.extend(decoded.chars());
        println!(
            "{:?} {:?} {:?} -> {kevent}",
            decoded.keycode,
            decoded.flags,
            decoded.chars().collect::<String>(),
        );

        if keymap.is_tsk_switch_shortcut() {
            println!("(task manager shortcut)");
        }
    }

    println!("text: {text:?}");
}
