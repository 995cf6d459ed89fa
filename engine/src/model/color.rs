use crate::common::errors::SchemeError;
use std::fmt;

/// A 24-bit RGB color parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(value: &str) -> Result<Self, SchemeError> {
        let hex = value.strip_prefix('#').unwrap_or(value);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid(value, "expected 6 hex digits"));
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|_| invalid(value, "invalid red component"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|_| invalid(value, "invalid green component"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|_| invalid(value, "invalid blue component"))?;

        Ok(Self { r, g, b })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.r, self.g, self.b)
    }
}

fn invalid(value: &str, reason: &str) -> SchemeError {
    SchemeError::InvalidColor {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!(assert_ok!(Rgb::from_hex("#1e1e2e")), Rgb::new(0x1e, 0x1e, 0x2e));
        assert_eq!(assert_ok!(Rgb::from_hex("FFa500")), Rgb::new(255, 165, 0));
    }

    #[test]
    fn test_rejects_malformed_colors() {
        assert_err!(Rgb::from_hex(""));
        assert_err!(Rgb::from_hex("#fff"));
        assert_err!(Rgb::from_hex("#12345g"));
        assert_err!(Rgb::from_hex("##123456"));
        assert_err!(Rgb::from_hex("#1234567"));
        // from_str_radix alone would accept a sign
        assert_err!(Rgb::from_hex("#+f+f+f"));
        assert_err!(Rgb::from_hex("#-1-1-1"));
        // multi-byte input must not panic on slicing
        assert_err!(Rgb::from_hex("#ééé"));
    }

    #[test]
    fn test_hex_round_trip_is_lowercase() {
        let rgb = assert_ok!(Rgb::from_hex("#ABCDEF"));
        assert_eq!(rgb.to_hex(), "#abcdef");
    }

    #[test]
    fn test_display_is_sgr_triplet() {
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "1;2;3");
    }
}
