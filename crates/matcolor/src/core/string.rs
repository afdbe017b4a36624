use crate::error::ColorFormatError;

/// Parse a color in hexadecimal format.
///
/// This function trims leading and trailing white space and an optional
/// leading `#`. It then accepts six digits for an opaque color or eight digits
/// for a color with alpha channel. Digits are case-insensitive. If successful,
/// this function returns the red, green, blue, and alpha coordinates.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 4], ColorFormatError> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    if s.is_empty() {
        return Err(ColorFormatError::Empty);
    } else if !s.is_ascii() {
        return Err(ColorFormatError::UnexpectedCharacters);
    } else if s.len() != 6 && s.len() != 8 {
        return Err(ColorFormatError::UnexpectedLength);
    } else if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        // from_str_radix() also accepts a leading sign
        return Err(ColorFormatError::MalformedHex);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(2 * index..2 * (index + 1))
            .ok_or(ColorFormatError::UnexpectedLength)?;
        u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)
    }

    let r = parse_coordinate(s, 0)?;
    let g = parse_coordinate(s, 1)?;
    let b = parse_coordinate(s, 2)?;
    let a = if s.len() == 8 {
        parse_coordinate(s, 3)?
    } else {
        0xff
    };

    Ok([r, g, b, a])
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the coordinates as lowercase `#rrggbb` string.
pub(crate) fn format_rgb_hex(coordinates: &[u8; 4]) -> String {
    let [r, g, b, _] = *coordinates;
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Format the coordinates as lowercase `#rrggbbaa` string.
pub(crate) fn format_rgba_hex(coordinates: &[u8; 4]) -> String {
    let [r, g, b, a] = *coordinates;
    format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("#63A002FF")?, [0x63, 0xa0, 0x02, 0xff]);
        assert_eq!(parse_hex("  63a00280\n")?, [0x63, 0xa0, 0x02, 0x80]);
        assert_eq!(parse_hex("#4C662B")?, [0x4c, 0x66, 0x2b, 0xff]);
        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_hex(""), Err(ColorFormatError::Empty));
        assert_eq!(parse_hex(" # "), Err(ColorFormatError::Empty));
        assert_eq!(parse_hex("#0f0"), Err(ColorFormatError::UnexpectedLength));
        assert_eq!(parse_hex("#00ff00f"), Err(ColorFormatError::UnexpectedLength));
        assert_eq!(parse_hex("#💩00"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse_hex("#00ffgg"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#+1+2+3"), Err(ColorFormatError::MalformedHex));
    }

    #[test]
    fn test_format() {
        assert_eq!(format_rgb_hex(&[0x4c, 0x66, 0x2b, 0x80]), "#4c662b");
        assert_eq!(format_rgba_hex(&[0x4c, 0x66, 0x2b, 0x80]), "#4c662b80");
    }
}
