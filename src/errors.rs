//! Crate-specific error and result types.
//!
//! Decoding keyboard events never fails. Errors only come from building
//! layouts, looking them up in a registry, and parsing layout identifiers.

use ::std::num::ParseIntError;

use crate::layout::KbdId;

/// Result type returned by layout construction and lookups.
pub type Result<T> = ::std::result::Result<T, Error>;

/// Error type for layout construction and lookups.
#[derive(Clone, Debug, PartialEq, Eq, ::thiserror::Error)]
pub enum Error {
    /// No layout with this id is registered.
    #[error("unknown keyboard layout {0}")]
    UnknownLayout(KbdId),

    /// No layout with this locale name is registered.
    #[error("unknown keyboard layout name {0:?}")]
    UnknownLayoutName(String),

    /// Two layouts of a registry share the same id.
    #[error("keyboard layout {0} is defined twice")]
    DuplicateLayoutId(KbdId),

    /// Two layouts of a registry share the same locale name.
    #[error("keyboard layout name {0:?} is defined twice")]
    DuplicateLayoutName(String),

    /// A layout definition lists the same scancode twice.
    #[error("layout {layout}: scancode 0x{scancode:02X} is defined twice")]
    DuplicateKey { layout: KbdId, scancode: u8 },

    /// A layout definition has a row for an extended or invalid scancode.
    #[error("layout {layout}: scancode 0x{scancode:02X} is out of range")]
    ScancodeOutOfRange { layout: KbdId, scancode: u8 },

    /// A dead key points to a table the layout does not have.
    #[error("layout {layout}: dead key table {index} does not exist")]
    UnknownDeadKey { layout: KbdId, index: u16 },

    /// A layout identifier is not a hexadecimal number.
    #[error("invalid keyboard layout id {input:?}")]
    InvalidKbdId {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::UnknownLayout(KbdId::FRENCH).to_string(),
            "unknown keyboard layout 0x0000040C"
        );
        assert_eq!(
            Error::DuplicateKey {
                layout: KbdId::US,
                scancode: 0x1E
            }
            .to_string(),
            "layout 0x00000409: scancode 0x1E is defined twice"
        );
    }

    #[test]
    fn test_invalid_id_keeps_source() {
        let err = "0xZZ".parse::<KbdId>().unwrap_err();

        assert_eq!(err.to_string(), "invalid keyboard layout id \"0xZZ\"");
        assert!(::std::error::Error::source(&err).is_some());
    }
}
