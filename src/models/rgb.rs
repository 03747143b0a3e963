//! RGB color handling with hex parsing and HSL conversion.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Allow float comparisons in HSL conversion (standard algorithm)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#RRGGBB) and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use agentdesk::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color to HSL, rounded to whole degrees and percents.
    ///
    /// # Examples
    ///
    /// ```
    /// use agentdesk::models::{HslColor, RgbColor};
    ///
    /// let red = RgbColor::new(255, 0, 0);
    /// assert_eq!(red.to_hsl(), HslColor::new(0, 100, 50));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> HslColor {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return HslColor::new(0, 0, (l * 100.0).round() as u8);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };

        HslColor::new(
            (h * 360.0).round() as u16,
            (s * 100.0).round() as u8,
            (l * 100.0).round() as u8,
        )
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Hue/saturation/lightness triple as written into style variables.
///
/// Displays as `"<h> <s>% <l>%"`, e.g. `"0 100% 50%"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HslColor {
    /// Hue in whole degrees (0-360)
    pub h: u16,
    /// Saturation in whole percent (0-100)
    pub s: u8,
    /// Lightness in whole percent (0-100)
    pub l: u8,
}

impl HslColor {
    /// Creates a new `HslColor`.
    #[must_use]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Converts a hex triplet to HSL.
    ///
    /// Unparseable input yields `0 0% 0%` rather than an error.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        RgbColor::from_hex(hex)
            .map(|rgb| rgb.to_hsl())
            .unwrap_or_default()
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00FF00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("  #0000ff  ").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_to_hex_lowercase() {
        assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
        assert_eq!(RgbColor::new(255, 255, 255).to_string(), "#ffffff");
    }

    #[test]
    fn test_hsl_known_values() {
        assert_eq!(HslColor::from_hex("#ffffff").to_string(), "0 0% 100%");
        assert_eq!(HslColor::from_hex("#000000").to_string(), "0 0% 0%");
        assert_eq!(HslColor::from_hex("#ff0000").to_string(), "0 100% 50%");
    }

    #[test]
    fn test_hsl_other_channels() {
        assert_eq!(HslColor::from_hex("#00ff00"), HslColor::new(120, 100, 50));
        assert_eq!(HslColor::from_hex("#0000ff"), HslColor::new(240, 100, 50));
        // Magenta: red maximum with g < b takes the +6 branch
        assert_eq!(HslColor::from_hex("#ff00ff"), HslColor::new(300, 100, 50));
    }

    #[test]
    fn test_hsl_light_color_uses_upper_saturation_formula() {
        // l > 0.5, so s = d / (2 - max - min)
        assert_eq!(HslColor::from_hex("#e6f0fa"), HslColor::new(210, 67, 94));
    }

    #[test]
    fn test_hsl_gray() {
        assert_eq!(HslColor::from_hex("#808080"), HslColor::new(0, 0, 50));
    }

    #[test]
    fn test_hsl_unparseable_is_black() {
        assert_eq!(HslColor::from_hex("not a color"), HslColor::new(0, 0, 0));
        assert_eq!(HslColor::from_hex("#fff"), HslColor::new(0, 0, 0));
    }
}
