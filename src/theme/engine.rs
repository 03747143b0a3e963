//! Theme engine: holds the active preference, applies it and persists it.
//!
//! Every mutation runs the same two steps: apply the preference through the
//! [`ThemePort`], then persist it. A failed write leaves the applied theme in
//! place and is reported through [`PersistStatus`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use tracing::{debug, info, warn};

use crate::constants::{THEME_CUSTOM_KEY, THEME_MODE_KEY, THEME_VARIANT_KEY};
use crate::models::{clamp_radius, ColorScheme, ThemeMode, ThemePreference, ThemeVariant};
use crate::services::{PersistStatus, Store};
use crate::theme::document::{ImportError, ThemeDocument};
use crate::theme::port::ThemePort;
use crate::theme::presets;

/// Persisted form of a custom theme under `theme-custom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CustomRecord {
    #[serde(default)]
    name: Option<String>,
    colors: ColorScheme,
    border_radius: f32,
}

/// The active theme and the port it is applied to.
pub struct ThemeEngine<P: ThemePort> {
    store: Rc<dyn Store>,
    port: P,
    preference: ThemePreference,
}

impl<P: ThemePort> ThemeEngine<P> {
    /// Restores the persisted preference and applies it to `port`.
    ///
    /// Missing or unreadable values fall back to light mode, the professional
    /// preset and an 8px radius. Nothing is written at startup.
    pub fn load(store: Rc<dyn Store>, mut port: P) -> Self {
        let preference = read_preference(store.as_ref());
        debug!(
            "Restored theme: {} / {} ({}px)",
            preference.mode, preference.variant, preference.radius
        );
        port.apply(&preference);
        Self {
            store,
            port,
            preference,
        }
    }

    /// The active preference.
    #[must_use]
    pub const fn preference(&self) -> &ThemePreference {
        &self.preference
    }

    /// The presentation port.
    #[must_use]
    pub const fn port(&self) -> &P {
        &self.port
    }

    /// Consumes the engine, returning its port.
    pub fn into_port(self) -> P {
        self.port
    }

    /// Scheme currently shown.
    #[must_use]
    pub fn effective_scheme(&self) -> ColorScheme {
        presets::effective_scheme(&self.preference)
    }

    /// Sets light or dark mode.
    pub fn set_mode(&mut self, mode: ThemeMode) -> PersistStatus {
        self.preference.mode = mode;
        self.commit()
    }

    /// Flips between light and dark.
    pub fn toggle_mode(&mut self) -> PersistStatus {
        self.set_mode(self.preference.mode.toggled())
    }

    /// Selects a variant. The custom scheme, if any, is kept for later.
    pub fn set_variant(&mut self, variant: ThemeVariant) -> PersistStatus {
        if variant == ThemeVariant::Custom && self.preference.scheme.is_none() {
            debug!("Custom variant selected without a custom scheme; showing professional colors");
        }
        self.preference.variant = variant;
        self.commit()
    }

    /// Applies a user-defined scheme and radius (clamped to 0–24px).
    pub fn apply_custom_scheme(
        &mut self,
        scheme: ColorScheme,
        radius: f32,
        name: Option<String>,
    ) -> PersistStatus {
        self.preference.variant = ThemeVariant::Custom;
        self.preference.scheme = Some(scheme);
        self.preference.radius = clamp_radius(radius);
        if name.is_some() {
            self.preference.name = name;
        }
        self.commit()
    }

    /// Builds a document for the active theme.
    #[must_use]
    pub fn export(&self) -> ThemeDocument {
        ThemeDocument::new(
            self.preference.display_name(),
            self.effective_scheme(),
            self.preference.radius,
        )
    }

    /// Imports a theme document and makes it the active custom theme.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError`] when the document is rejected; the active
    /// theme is then unchanged.
    pub fn import(&mut self, text: &str) -> Result<PersistStatus, ImportError> {
        let document = ThemeDocument::parse(text)?;
        info!("Imported theme '{}'", document.name);
        Ok(self.apply_custom_scheme(
            document.colors,
            document.border_radius,
            Some(document.name),
        ))
    }

    fn commit(&mut self) -> PersistStatus {
        self.port.apply(&self.preference);
        self.persist()
    }

    fn persist(&self) -> PersistStatus {
        let store = self.store.as_ref();
        let mut status = PersistStatus::from_result(
            store.save(THEME_MODE_KEY, self.preference.mode.as_str()),
            "theme mode",
        )
        .and(PersistStatus::from_result(
            store.save(THEME_VARIANT_KEY, self.preference.variant.as_str()),
            "theme variant",
        ));

        if self.preference.variant == ThemeVariant::Custom {
            if let Some(colors) = &self.preference.scheme {
                let record = CustomRecord {
                    name: self.preference.name.clone(),
                    colors: colors.clone(),
                    border_radius: self.preference.radius,
                };
                let result = serde_json::to_string(&record)
                    .context("Failed to serialize custom theme")
                    .and_then(|json| store.save(THEME_CUSTOM_KEY, &json));
                status = status.and(PersistStatus::from_result(result, "custom theme"));
            }
        }
        status
    }
}

impl<P: ThemePort + std::fmt::Debug> std::fmt::Debug for ThemeEngine<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("port", &self.port)
            .field("preference", &self.preference)
            .finish_non_exhaustive()
    }
}

fn read_preference(store: &dyn Store) -> ThemePreference {
    let mut preference = ThemePreference::default();

    if let Some(mode) = read_value(store, THEME_MODE_KEY) {
        preference.mode = mode;
    }
    if let Some(variant) = read_value(store, THEME_VARIANT_KEY) {
        preference.variant = variant;
    }
    match read_custom(store) {
        Ok(Some(record)) => {
            preference.scheme = Some(record.colors);
            preference.radius = clamp_radius(record.border_radius);
            preference.name = record.name;
        }
        Ok(None) => {}
        Err(e) => warn!("Ignoring unusable custom theme: {e:#}"),
    }
    preference
}

fn read_value<T>(store: &dyn Store, key: &str) -> Option<T>
where
    T: std::str::FromStr<Err = anyhow::Error>,
{
    let raw = match store.load(key) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!("Could not read '{key}': {e:#}");
            return None;
        }
    };
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring stored '{key}': {e:#}");
            None
        }
    }
}

fn read_custom(store: &dyn Store) -> Result<Option<CustomRecord>> {
    let Some(content) = store.load(THEME_CUSTOM_KEY)? else {
        return Ok(None);
    };
    let record = serde_json::from_str(&content).context("Failed to parse stored custom theme")?;
    Ok(Some(record))
}
