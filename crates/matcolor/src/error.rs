//! Utility module with matcolor's errors.

use thiserror::Error;

/// An erroneous color format.
///
/// Hexadecimal color strings are the only textual format accepted by this
/// crate. They have six or eight digits, optionally preceded by `#`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format without any characters besides white space and the
    /// leading `#`.
    #[error("color format should contain hexadecimal digits but is empty")]
    Empty,

    /// A color format with non-ASCII characters. For example, `#💩00ff`
    /// contains an emoji.
    #[error("color format should contain only ASCII characters but does not")]
    UnexpectedCharacters,

    /// A color format with neither six nor eight digits. For example, `#0f0`
    /// has only three digits.
    #[error("color format should have 6 or 8 hex digits but has another number")]
    UnexpectedLength,

    /// A color format with a character that is not a hexadecimal digit. For
    /// example, `#00ffgg` contains two `g`s.
    #[error("color format coordinates should be hexadecimal integers but are not")]
    MalformedHex,
}
