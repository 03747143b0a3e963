//! Built-in color schemes for the named variants.
//!
//! Each preset has a light and a dark scheme. Colors are listed in
//! [`ColorScheme::SLOTS`] order: primary, secondary, accent, success, warning,
//! destructive, background, foreground.

use crate::models::{ColorScheme, ThemeMode, ThemePreference, ThemeVariant};

const PROFESSIONAL_LIGHT: [&str; 8] = [
    "#1d4ed8", "#e2e8f0", "#0ea5e9", "#16a34a", "#d97706", "#dc2626", "#ffffff", "#0f172a",
];
const PROFESSIONAL_DARK: [&str; 8] = [
    "#3b82f6", "#1e293b", "#38bdf8", "#22c55e", "#f59e0b", "#ef4444", "#0b1120", "#f1f5f9",
];

const MODERN_LIGHT: [&str; 8] = [
    "#7c3aed", "#ede9fe", "#ec4899", "#10b981", "#f59e0b", "#e11d48", "#fafaff", "#1e1b4b",
];
const MODERN_DARK: [&str; 8] = [
    "#a78bfa", "#2e1065", "#f472b6", "#34d399", "#fbbf24", "#fb7185", "#0f0a1f", "#ede9fe",
];

const MINIMAL_LIGHT: [&str; 8] = [
    "#171717", "#f5f5f5", "#525252", "#3f6212", "#a16207", "#b91c1c", "#ffffff", "#0a0a0a",
];
const MINIMAL_DARK: [&str; 8] = [
    "#fafafa", "#262626", "#a3a3a3", "#84cc16", "#eab308", "#f87171", "#0a0a0a", "#fafafa",
];

const HIGH_CONTRAST_LIGHT: [&str; 8] = [
    "#0000cc", "#ffffff", "#6600cc", "#006600", "#995500", "#cc0000", "#ffffff", "#000000",
];
const HIGH_CONTRAST_DARK: [&str; 8] = [
    "#ffff00", "#000000", "#00ffff", "#00ff00", "#ffaa00", "#ff3333", "#000000", "#ffffff",
];

/// Scheme for a named variant in `mode`; `None` for [`ThemeVariant::Custom`].
#[must_use]
pub fn scheme_for(variant: ThemeVariant, mode: ThemeMode) -> Option<ColorScheme> {
    let colors = match (variant, mode) {
        (ThemeVariant::Professional, ThemeMode::Light) => PROFESSIONAL_LIGHT,
        (ThemeVariant::Professional, ThemeMode::Dark) => PROFESSIONAL_DARK,
        (ThemeVariant::Modern, ThemeMode::Light) => MODERN_LIGHT,
        (ThemeVariant::Modern, ThemeMode::Dark) => MODERN_DARK,
        (ThemeVariant::Minimal, ThemeMode::Light) => MINIMAL_LIGHT,
        (ThemeVariant::Minimal, ThemeMode::Dark) => MINIMAL_DARK,
        (ThemeVariant::HighContrast, ThemeMode::Light) => HIGH_CONTRAST_LIGHT,
        (ThemeVariant::HighContrast, ThemeMode::Dark) => HIGH_CONTRAST_DARK,
        (ThemeVariant::Custom, _) => return None,
    };
    Some(ColorScheme::from_hex(colors))
}

/// Scheme actually shown for `preference`.
///
/// A custom variant without a stored scheme falls back to the professional
/// preset for the current mode.
#[must_use]
pub fn effective_scheme(preference: &ThemePreference) -> ColorScheme {
    match (&preference.variant, &preference.scheme) {
        (ThemeVariant::Custom, Some(scheme)) => scheme.clone(),
        (variant, _) => scheme_for(*variant, preference.mode)
            .or_else(|| scheme_for(ThemeVariant::Professional, preference.mode))
            .unwrap_or_else(|| ColorScheme::from_hex(PROFESSIONAL_LIGHT)),
    }
}
