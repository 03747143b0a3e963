//! Theme preference data structures.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_RADIUS, MAX_RADIUS};

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light backgrounds
    #[default]
    Light,
    /// Dark backgrounds
    Dark,
}

impl ThemeMode {
    /// Lowercase identifier as persisted.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => anyhow::bail!("Unknown theme mode '{other}'. Expected 'light' or 'dark'"),
        }
    }
}

/// Named preset layered on top of the mode, or a user-defined palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeVariant {
    /// Default corporate palette
    #[default]
    Professional,
    /// Saturated palette with violet accents
    Modern,
    /// Near-monochrome palette
    Minimal,
    /// Accessibility palette with maximum contrast
    HighContrast,
    /// User-supplied color scheme
    Custom,
}

impl ThemeVariant {
    /// Named presets, excluding `Custom`.
    pub const PRESETS: [Self; 4] = [
        Self::Professional,
        Self::Modern,
        Self::Minimal,
        Self::HighContrast,
    ];

    /// Kebab-case identifier as persisted.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Modern => "modern",
            Self::Minimal => "minimal",
            Self::HighContrast => "high-contrast",
            Self::Custom => "custom",
        }
    }

    /// Human-readable name, also used as the export name of presets.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Modern => "Modern",
            Self::Minimal => "Minimal",
            Self::HighContrast => "High Contrast",
            Self::Custom => "Custom",
        }
    }

    /// True for presets that carry a marker on the presentation context.
    #[must_use]
    pub const fn has_marker(&self) -> bool {
        matches!(self, Self::Modern | Self::Minimal | Self::HighContrast)
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "professional" => Ok(Self::Professional),
            "modern" => Ok(Self::Modern),
            "minimal" => Ok(Self::Minimal),
            "high-contrast" => Ok(Self::HighContrast),
            "custom" => Ok(Self::Custom),
            other => anyhow::bail!(
                "Unknown theme variant '{other}'. Expected one of: professional, modern, minimal, high-contrast, custom"
            ),
        }
    }
}

/// The eight named color slots, each a hex triplet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Brand color for primary actions
    pub primary: String,
    /// Secondary surfaces and actions
    pub secondary: String,
    /// Highlights and focus
    pub accent: String,
    /// Success states
    pub success: String,
    /// Warnings
    pub warning: String,
    /// Errors and destructive actions
    pub destructive: String,
    /// Page background
    pub background: String,
    /// Body text
    pub foreground: String,
}

impl ColorScheme {
    /// Slot names in the order they are applied.
    pub const SLOTS: [&'static str; 8] = [
        "primary",
        "secondary",
        "accent",
        "success",
        "warning",
        "destructive",
        "background",
        "foreground",
    ];

    /// Builds a scheme from eight hex strings in [`Self::SLOTS`] order.
    #[must_use]
    pub fn from_hex(colors: [&str; 8]) -> Self {
        let [primary, secondary, accent, success, warning, destructive, background, foreground] =
            colors.map(str::to_string);
        Self {
            primary,
            secondary,
            accent,
            success,
            warning,
            destructive,
            background,
            foreground,
        }
    }

    /// `(slot, hex)` pairs in [`Self::SLOTS`] order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("accent", self.accent.as_str()),
            ("success", self.success.as_str()),
            ("warning", self.warning.as_str()),
            ("destructive", self.destructive.as_str()),
            ("background", self.background.as_str()),
            ("foreground", self.foreground.as_str()),
        ]
    }

    /// Mutable access to a slot by name.
    pub fn slot_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "primary" => Some(&mut self.primary),
            "secondary" => Some(&mut self.secondary),
            "accent" => Some(&mut self.accent),
            "success" => Some(&mut self.success),
            "warning" => Some(&mut self.warning),
            "destructive" => Some(&mut self.destructive),
            "background" => Some(&mut self.background),
            "foreground" => Some(&mut self.foreground),
            _ => None,
        }
    }
}

/// Clamps a corner radius to the accepted 0–24px range.
#[must_use]
pub fn clamp_radius(radius: f32) -> f32 {
    if radius.is_nan() {
        DEFAULT_RADIUS
    } else {
        radius.clamp(0.0, MAX_RADIUS)
    }
}

/// The active theme selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePreference {
    /// Light or dark
    pub mode: ThemeMode,
    /// Preset or custom
    pub variant: ThemeVariant,
    /// Custom palette, present when a custom theme has been applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<ColorScheme>,
    /// Corner radius in px (0–24)
    pub radius: f32,
    /// Name of the custom theme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ThemePreference {
    /// Display name: the custom name when custom, else the preset name.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.variant, &self.name) {
            (ThemeVariant::Custom, Some(name)) => name.clone(),
            (variant, _) => variant.display_name().to_string(),
        }
    }
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self {
            mode: ThemeMode::default(),
            variant: ThemeVariant::default(),
            scheme: None,
            radius: DEFAULT_RADIUS,
            name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preference() {
        let pref = ThemePreference::default();
        assert_eq!(pref.mode, ThemeMode::Light);
        assert_eq!(pref.variant, ThemeVariant::Professional);
        assert!(pref.scheme.is_none());
        assert!((pref.radius - 8.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_variant_round_trips_through_str() {
        for variant in ThemeVariant::PRESETS {
            assert_eq!(variant.as_str().parse::<ThemeVariant>().unwrap(), variant);
        }
        assert_eq!(
            serde_json::to_string(&ThemeVariant::HighContrast).unwrap(),
            "\"high-contrast\""
        );
    }

    #[test]
    fn test_marker_only_for_non_default_presets() {
        assert!(!ThemeVariant::Professional.has_marker());
        assert!(!ThemeVariant::Custom.has_marker());
        assert!(ThemeVariant::Modern.has_marker());
        assert!(ThemeVariant::HighContrast.has_marker());
    }

    #[test]
    fn test_toggle_mode() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_clamp_radius() {
        assert!((clamp_radius(30.0) - 24.0).abs() < f32::EPSILON);
        assert!(clamp_radius(-1.0).abs() < f32::EPSILON);
        assert!((clamp_radius(f32::NAN) - 8.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_scheme_slots() {
        let mut scheme = ColorScheme::from_hex([
            "#111111", "#222222", "#333333", "#444444", "#555555", "#666666", "#777777", "#888888",
        ]);
        assert_eq!(scheme.entries()[5], ("destructive", "#666666"));
        *scheme.slot_mut("accent").unwrap() = "#abcdef".to_string();
        assert_eq!(scheme.accent, "#abcdef");
        assert!(scheme.slot_mut("border").is_none());
    }
}
