//! Presentation-context port for applying a theme.
//!
//! The engine never touches a rendering surface directly. It hands the active
//! [`ThemePreference`] to a [`ThemePort`] after every change; [`StyleContext`]
//! is the standard port, a registry of CSS-style variables plus a dark flag
//! and a variant marker.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::models::{HslColor, ThemeMode, ThemePreference, ThemeVariant};
use crate::theme::presets::effective_scheme;

/// Receives the active theme after every change.
pub trait ThemePort {
    /// Applies `preference` to the presentation context.
    fn apply(&mut self, preference: &ThemePreference);
}

/// Style variables, dark flag and variant marker of a presentation context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleContext {
    variables: BTreeMap<String, String>,
    dark: bool,
    marker: Option<ThemeVariant>,
}

impl StyleContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a variable, e.g. `variable("--primary")`.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// All variables in name order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// True when the dark flag is set.
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.dark
    }

    /// The variant marker, set only for presets that carry one.
    #[must_use]
    pub const fn marker(&self) -> Option<ThemeVariant> {
        self.marker
    }

    /// Renders the context as a CSS rule.
    ///
    /// The selector carries `.dark` and `[data-theme="<variant>"]` when the
    /// flag and marker are set.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut selector = String::from(":root");
        if self.dark {
            selector.push_str(".dark");
        }
        if let Some(marker) = self.marker {
            let _ = write!(selector, "[data-theme=\"{marker}\"]");
        }

        let mut css = format!("{selector} {{\n");
        for (name, value) in &self.variables {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }
}

impl ThemePort for StyleContext {
    fn apply(&mut self, preference: &ThemePreference) {
        let scheme = effective_scheme(preference);
        for (slot, hex) in scheme.entries() {
            self.variables
                .insert(format!("--{slot}"), HslColor::from_hex(hex).to_string());
        }
        self.variables
            .insert("--radius".to_string(), format!("{}px", preference.radius));

        self.dark = matches!(preference.mode, ThemeMode::Dark);
        self.marker = preference
            .variant
            .has_marker()
            .then_some(preference.variant);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorScheme;

    fn custom(radius: f32) -> ThemePreference {
        ThemePreference {
            mode: ThemeMode::Light,
            variant: ThemeVariant::Custom,
            scheme: Some(ColorScheme::from_hex([
                "#ff0000", "#00ff00", "#0000ff", "#ffffff", "#000000", "#ff00ff", "#ffffff",
                "not-a-color",
            ])),
            radius,
            name: Some("Mine".to_string()),
        }
    }

    #[test]
    fn test_apply_writes_hsl_variables() {
        let mut context = StyleContext::new();
        context.apply(&custom(12.0));

        assert_eq!(context.variable("--primary"), Some("0 100% 50%"));
        assert_eq!(context.variable("--secondary"), Some("120 100% 50%"));
        assert_eq!(context.variable("--background"), Some("0 0% 100%"));
        assert_eq!(context.variable("--foreground"), Some("0 0% 0%"));
        assert_eq!(context.variable("--radius"), Some("12px"));
        assert_eq!(context.variables().count(), 9);
    }

    #[test]
    fn test_fractional_radius() {
        let mut context = StyleContext::new();
        context.apply(&custom(6.5));
        assert_eq!(context.variable("--radius"), Some("6.5px"));
    }

    #[test]
    fn test_marker_set_and_removed() {
        let mut context = StyleContext::new();
        let mut preference = ThemePreference {
            variant: ThemeVariant::HighContrast,
            ..ThemePreference::default()
        };
        context.apply(&preference);
        assert_eq!(context.marker(), Some(ThemeVariant::HighContrast));

        preference.variant = ThemeVariant::Professional;
        context.apply(&preference);
        assert_eq!(context.marker(), None);

        context.apply(&custom(8.0));
        assert_eq!(context.marker(), None);
    }

    #[test]
    fn test_dark_flag() {
        let mut context = StyleContext::new();
        context.apply(&ThemePreference {
            mode: ThemeMode::Dark,
            ..ThemePreference::default()
        });
        assert!(context.is_dark());

        context.apply(&ThemePreference::default());
        assert!(!context.is_dark());
    }

    #[test]
    fn test_to_css() {
        let mut context = StyleContext::new();
        context.apply(&ThemePreference {
            mode: ThemeMode::Dark,
            variant: ThemeVariant::Modern,
            ..ThemePreference::default()
        });

        let css = context.to_css();
        assert!(css.starts_with(":root.dark[data-theme=\"modern\"] {\n"));
        assert!(css.contains("  --radius: 8px;\n"));
        assert!(css.ends_with("}\n"));
    }
}
