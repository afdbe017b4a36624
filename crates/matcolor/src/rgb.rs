//! The 32-bit display color used at the crate's boundaries.

use std::str::FromStr;

use crate::core::{format_rgb_hex, format_rgba_hex, parse_hex};
use crate::error::ColorFormatError;

/// A 32-bit sRGB color with alpha channel.
///
/// This struct wraps the red, green, blue, and alpha coordinates in that
/// order. It converts to and from the packed ARGB representation used
/// throughout color derivation, which places alpha in the most significant
/// byte. Alpha is carried along but ignored by color math, which treats all
/// colors as opaque.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StandardRgb([u8; 4]);

impl StandardRgb {
    /// Create a new opaque color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 0xff])
    }

    /// Create a new color from its coordinates including alpha.
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Create a new color from the packed ARGB integer.
    pub const fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self([r, g, b, a])
    }

    /// Create a new color from its hexadecimal representation.
    ///
    /// See [`StandardRgb::from_str`] for the accepted formats.
    pub fn from_rgba_hex(s: &str) -> Result<Self, ColorFormatError> {
        s.parse()
    }

    /// Get this color as packed ARGB integer.
    pub const fn to_argb(&self) -> u32 {
        let [r, g, b, a] = self.0;
        u32::from_be_bytes([a, r, g, b])
    }

    /// Get the red coordinate.
    pub const fn red(&self) -> u8 {
        self.0[0]
    }

    /// Get the green coordinate.
    pub const fn green(&self) -> u8 {
        self.0[1]
    }

    /// Get the blue coordinate.
    pub const fn blue(&self) -> u8 {
        self.0[2]
    }

    /// Get the alpha coordinate.
    pub const fn alpha(&self) -> u8 {
        self.0[3]
    }

    /// Get an opaque version of this color.
    pub const fn opaque(&self) -> Self {
        let [r, g, b, _] = self.0;
        Self([r, g, b, 0xff])
    }

    /// Format this color as `#rrggbbaa`.
    pub fn to_rgba_hex(&self) -> String {
        format_rgba_hex(&self.0)
    }

    /// Format this color as `#rrggbb`, dropping alpha.
    pub fn to_rgb_hex(&self) -> String {
        format_rgb_hex(&self.0)
    }
}

impl AsRef<[u8; 4]> for StandardRgb {
    fn as_ref(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<u32> for StandardRgb {
    fn from(value: u32) -> Self {
        Self::from_argb(value)
    }
}

impl From<StandardRgb> for u32 {
    fn from(value: StandardRgb) -> Self {
        value.to_argb()
    }
}

impl From<[u8; 4]> for StandardRgb {
    fn from(value: [u8; 4]) -> Self {
        Self(value)
    }
}

impl FromStr for StandardRgb {
    type Err = ColorFormatError;

    /// Parse a color in hexadecimal notation.
    ///
    /// This method accepts `#rrggbbaa` as well as `#rrggbb`, with the latter
    /// producing an opaque color. The leading `#` is optional, digits are
    /// case-insensitive, and surrounding white space is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(Self)
    }
}

impl std::fmt::Display for StandardRgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rgba_hex())
    }
}

#[cfg(test)]
mod test {
    use super::StandardRgb;
    use crate::error::ColorFormatError;

    #[test]
    fn test_argb() {
        let color = StandardRgb::with_alpha(0x63, 0xa0, 0x02, 0x80);
        assert_eq!(color.to_argb(), 0x8063a002);
        assert_eq!(StandardRgb::from_argb(0x8063a002), color);
        assert_eq!(u32::from(StandardRgb::new(0xff, 0, 0)), 0xffff0000);
        assert_eq!(color.opaque().alpha(), 0xff);
    }

    #[test]
    fn test_hex() -> Result<(), ColorFormatError> {
        let color: StandardRgb = "#63A002FF".parse()?;
        assert_eq!(color, StandardRgb::new(0x63, 0xa0, 0x02));
        assert_eq!(color.to_rgba_hex(), "#63a002ff");
        assert_eq!(color.to_rgb_hex(), "#63a002");
        assert_eq!(format!("{}", color), "#63a002ff");

        let color = StandardRgb::from_rgba_hex("63a00240")?;
        assert_eq!(color.alpha(), 0x40);
        assert_eq!(
            StandardRgb::from_rgba_hex("#63a0"),
            Err(ColorFormatError::UnexpectedLength)
        );
        Ok(())
    }
}
