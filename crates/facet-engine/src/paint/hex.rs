use std::fmt;
use std::str::FromStr;

/// Straight-alpha sRGB color as four bytes.
///
/// This is the storage form of a tint: it parses from and prints to hex
/// notation so persisted values survive a round trip bit-for-bit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (case-insensitive).
    /// Missing alpha means fully opaque.
    pub fn parse_hex(src: &str) -> Result<Self, HexError> {
        let digits = src
            .strip_prefix('#')
            .ok_or_else(|| HexError::new(src, "missing leading `#`"))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(HexError::new(src, "non-hex digit"));
        }

        // Digits are validated ASCII, so byte slicing stays on char boundaries.
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| HexError::new(src, "bad hex pair"));
        let nibble = |s: &str| byte(s).map(|v| v * 17);

        match digits.len() {
            3 => Ok(Self::opaque(nibble(&digits[0..1])?, nibble(&digits[1..2])?, nibble(&digits[2..3])?)),
            6 => Ok(Self::opaque(byte(&digits[0..2])?, byte(&digits[2..4])?, byte(&digits[4..6])?)),
            8 => Ok(Self::new(
                byte(&digits[0..2])?,
                byte(&digits[2..4])?,
                byte(&digits[4..6])?,
                byte(&digits[6..8])?,
            )),
            n => Err(HexError::new(src, format!("expected 3, 6 or 8 hex digits, got {n}"))),
        }
    }

    /// Canonical `#rrggbbaa`, lowercase.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba8 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A malformed hex color string.
#[derive(Debug, Clone, PartialEq)]
pub struct HexError {
    pub input: String,
    pub message: String,
}

impl HexError {
    fn new(input: &str, message: impl Into<String>) -> Self {
        Self { input: input.to_string(), message: message.into() }
    }
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color {:?}: {}", self.input, self.message)
    }
}

impl std::error::Error for HexError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn six_digits_are_opaque() {
        assert_eq!(Rgba8::parse_hex("#FF0000").unwrap(), Rgba8::new(255, 0, 0, 255));
    }
    #[test] fn eight_digits_keep_alpha() {
        assert_eq!(Rgba8::parse_hex("#10203040").unwrap(), Rgba8::new(0x10, 0x20, 0x30, 0x40));
    }
    #[test] fn three_digits_expand() {
        assert_eq!(Rgba8::parse_hex("#f80").unwrap(), Rgba8::opaque(0xff, 0x88, 0x00));
    }
    #[test] fn prints_lowercase_with_alpha() {
        assert_eq!(Rgba8::opaque(0xAB, 0xCD, 0xEF).to_hex(), "#abcdefff");
    }
    #[test] fn printed_form_parses_back() {
        let c = Rgba8::new(1, 2, 3, 4);
        assert_eq!(c.to_hex().parse::<Rgba8>().unwrap(), c);
    }
    #[test] fn err_missing_hash() { Rgba8::parse_hex("ff0000").unwrap_err(); }
    #[test] fn err_bad_digit() { Rgba8::parse_hex("#ff00zz").unwrap_err(); }
    #[test] fn err_bad_length() { Rgba8::parse_hex("#ff00").unwrap_err(); }
    #[test] fn err_non_ascii() { Rgba8::parse_hex("#ffé0").unwrap_err(); }
}
