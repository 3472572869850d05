//! Colour type and hex decoding.

use std::fmt;
use std::str::FromStr;

use crate::error::{ChromaError, Result};

/// An RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a six-digit hex colour string.
    ///
    /// The leading `#` is optional. Markup only ever carries `RRGGBB`, so
    /// the short `RGB` form is rejected like any other wrong length.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        let r = parse_hex_byte(&hex[0..2]).ok_or_else(|| invalid_hex(s))?;
        let g = parse_hex_byte(&hex[2..4]).ok_or_else(|| invalid_hex(s))?;
        let b = parse_hex_byte(&hex[4..6]).ok_or_else(|| invalid_hex(s))?;
        Ok(Self::rgb(r, g, b))
    }

    /// Convert to an RGB array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase hex digits without the `#` prefix.
    pub fn hex_digits(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Squared Euclidean distance in RGB space.
    pub fn distance_squared(self, other: Colour) -> u32 {
        let dr = u32::from(self.r.abs_diff(other.r));
        let dg = u32::from(self.g.abs_diff(other.g));
        let db = u32::from(self.b.abs_diff(other.b));
        dr * dr + dg * dg + db * db
    }
}

impl FromStr for Colour {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn invalid_hex(s: &str) -> ChromaError {
    ChromaError::InvalidHex {
        value: s.to_string(),
        help: Some("Use #RRGGBB format with six hex digits".to_string()),
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Option<u8> {
    // from_str_radix accepts a leading '+', which is not a hex digit
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(s, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c = Colour::from_hex("#1a1a2e").unwrap();
        assert_eq!(c, Colour::rgb(0x1a, 0x1a, 0x2e));
    }

    #[test]
    fn test_from_hex_no_hash() {
        let c = Colour::from_hex("a1b2c3").unwrap();
        assert_eq!(c, Colour::rgb(0xa1, 0xb2, 0xc3));
    }

    #[test]
    fn test_from_hex_wrong_length() {
        assert!(Colour::from_hex("#F00").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("#FF000080").is_err());
        assert!(Colour::from_hex("").is_err());
    }

    #[test]
    fn test_from_hex_non_hex() {
        assert!(Colour::from_hex("#zz0000").is_err());
        assert!(Colour::from_hex("+f+f+f").is_err());
        assert!(Colour::from_hex("ééé").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#FF0000");
        assert_eq!(Colour::rgb(255, 0, 10).hex_digits(), "ff000a");
    }

    #[test]
    fn test_distance() {
        assert_eq!(Colour::BLACK.distance_squared(Colour::BLACK), 0);
        assert_eq!(
            Colour::rgb(255, 0, 0).distance_squared(Colour::rgb(170, 0, 0)),
            85 * 85
        );
    }
}
