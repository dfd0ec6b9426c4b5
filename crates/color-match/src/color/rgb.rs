//! RGB color type
//!
//! Channels are stored as `f64` on the 0..=255 scale so that averaged samples
//! keep their fractional part. The kernel never clamps; rounding happens only
//! when a caller asks for bytes or a hex string.

use std::fmt;
use std::str::FromStr;

use crate::error::KernelError;

/// A color with red, green and blue channels on the 0..=255 scale.
///
/// Values produced by sampling may be fractional. Palette entries are whole
/// numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red channel (0.0..=255.0)
    pub r: f64,
    /// Green channel (0.0..=255.0)
    pub g: f64,
    /// Blue channel (0.0..=255.0)
    pub b: f64,
}

impl Rgb {
    /// Create a color from channel values.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use color_match::Rgb;
    /// let red = Rgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 255.0);
    /// ```
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64,
            g: g as f64,
            b: b as f64,
        }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B], rounding and clamping each channel.
    ///
    /// # Example
    /// ```
    /// use color_match::Rgb;
    /// let color = Rgb::new(254.6, 300.0, -3.0);
    /// assert_eq!(color.to_bytes(), [255, 255, 0]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            self.r.round().clamp(0.0, 255.0) as u8,
            self.g.round().clamp(0.0, 255.0) as u8,
            self.b.round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Round every channel to the nearest whole number (no clamping).
    #[inline]
    pub fn round(self) -> Self {
        Self::new(self.r.round(), self.g.round(), self.b.round())
    }

    /// Channels as an array [R, G, B].
    #[inline]
    pub fn channels(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb` representation of the rounded, clamped color.
    ///
    /// # Example
    /// ```
    /// use color_match::Rgb;
    /// assert_eq!(Rgb::from_u8(255, 128, 0).to_hex(), "#ff8000");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Rgb {
    /// Formats as `r, g, b` using the rounded channel values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round();
        write!(f, "{}, {}, {}", rounded.r, rounded.g, rounded.b)
    }
}

impl FromStr for Rgb {
    type Err = KernelError;

    /// Parse a color from a hex string.
    ///
    /// Supports `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB` (case-insensitive).
    ///
    /// # Example
    /// ```
    /// use color_match::Rgb;
    /// let orange: Rgb = "#F80".parse().unwrap();
    /// assert_eq!(orange.to_bytes(), [255, 136, 0]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return Err(KernelError::invalid(format!("invalid hex color '{s}'")));
        }

        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16)
                .map_err(|e| KernelError::invalid(format!("invalid hex color '{s}': {e}")))
        };

        match hex.len() {
            6 => Ok(Self::from_u8(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                // #RGB expands each digit: F -> FF
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Self::from_u8(r * 17, g * 17, b * 17))
            }
            _ => Err(KernelError::invalid(format!(
                "invalid hex color '{s}' (expected 3 or 6 hex digits)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u8_keeps_scale() {
        let c = Rgb::from_u8(12, 34, 56);
        assert_eq!(c.channels(), [12.0, 34.0, 56.0]);
    }

    #[test]
    fn test_to_bytes_rounds_half_away_from_zero() {
        assert_eq!(Rgb::new(0.5, 1.49, 127.5).to_bytes(), [1, 1, 128]);
    }

    #[test]
    fn test_round_does_not_clamp() {
        let c = Rgb::new(-0.6, 255.7, 10.2).round();
        assert_eq!(c, Rgb::new(-1.0, 256.0, 10.0));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb::from_u8(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb::new(250.4, 5.0, 15.6).to_hex(), "#fa0510");
    }

    #[test]
    fn test_display_rounds() {
        assert_eq!(Rgb::new(1.4, 2.5, 254.9).to_string(), "1, 3, 255");
    }

    #[test]
    fn test_parse_long_and_short() {
        assert_eq!("#ff0000".parse::<Rgb>().unwrap(), Rgb::from_u8(255, 0, 0));
        assert_eq!("00FF00".parse::<Rgb>().unwrap(), Rgb::from_u8(0, 255, 0));
        assert_eq!("#00f".parse::<Rgb>().unwrap(), Rgb::from_u8(0, 0, 255));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for bad in ["", "#12", "#12345", "#gggggg", "#ééé"] {
            let result = bad.parse::<Rgb>();
            assert!(
                matches!(result, Err(KernelError::InvalidInput(_))),
                "'{bad}' should be rejected, got {result:?}"
            );
        }
    }
}
