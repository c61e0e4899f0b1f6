//! Base colour parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TextureError;

/// An 8-bit sRGB base colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse a `#RRGGBB` string (case-insensitive digits).
    pub fn from_hex(input: &str) -> Result<Self, TextureError> {
        let invalid = |reason| TextureError::InvalidColorFormat {
            input: input.to_owned(),
            reason,
        };
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| invalid("expected a leading '#'"))?;
        if digits.len() != 6 {
            return Err(invalid("expected exactly six hex digits"));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid("contains a non-hex character"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| invalid("contains a non-hex character"))
        };
        Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
    }

    /// Channels as floats in `[0, 255]`.
    #[inline]
    pub fn to_f64(self) -> [f64; 3] {
        self.0.map(f64::from)
    }
}

impl FromStr for Rgb {
    type Err = TextureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = TextureError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_in_either_case() {
        assert_eq!(Rgb::from_hex("#8b6e4e").unwrap(), Rgb::new(0x8b, 0x6e, 0x4e));
        assert_eq!(Rgb::from_hex("#8B6E4E").unwrap(), Rgb::new(0x8b, 0x6e, 0x4e));
        assert_eq!(Rgb::from_hex("#8B6E4E").unwrap().to_string(), "#8b6e4e");
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["8b6e4e", "#8b6e4", "#8b6e4e0", "#8g6e4e", "", "#", "#+1+2+3", "#ééé"] {
            match Rgb::from_hex(bad) {
                Err(TextureError::InvalidColorFormat { input, .. }) => assert_eq!(input, bad),
                other => panic!("{bad:?} should be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn serde_uses_hex_strings() {
        let color: Rgb = serde_json::from_str("\"#1a2744\"").unwrap();
        assert_eq!(color, Rgb::new(0x1a, 0x27, 0x44));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#1a2744\"");
        assert!(serde_json::from_str::<Rgb>("\"navy\"").is_err());
    }
}
