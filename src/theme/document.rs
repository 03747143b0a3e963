//! Theme documents: the portable JSON form used for export and import.
//!
//! ```json
//! {
//!   "name": "Night Shift",
//!   "colors": { "primary": "#3b82f6", ... },
//!   "borderRadius": 8,
//!   "timestamp": "2026-03-01T09:30:00Z"
//! }
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::models::{clamp_radius, ColorScheme, RgbColor};

/// Name given to an imported theme that has none.
pub const DEFAULT_IMPORT_NAME: &str = "Imported Theme";

/// A theme serialized for export and import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDocument {
    /// Theme name
    pub name: String,
    /// Colors of all eight slots
    pub colors: ColorScheme,
    /// Corner radius in px
    pub border_radius: f32,
    /// Export time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ThemeDocument {
    /// Creates a document stamped with the current time.
    #[must_use]
    pub fn new(name: impl Into<String>, colors: ColorScheme, border_radius: f32) -> Self {
        Self {
            name: name.into(),
            colors,
            border_radius,
            timestamp: Some(Utc::now()),
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize theme document")
    }

    /// Parses and validates an imported document.
    ///
    /// `name` defaults to [`DEFAULT_IMPORT_NAME`], the radius is clamped and
    /// an unreadable `timestamp` is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError`] describing why the document was rejected.
    pub fn parse(text: &str) -> Result<Self, ImportError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| ImportError::Parse(e.to_string()))?;
        let Value::Object(object) = value else {
            return Err(ImportError::Invalid("expected a JSON object".to_string()));
        };

        let colors = parse_colors(&object)?;

        let border_radius = object
            .get("borderRadius")
            .ok_or(ImportError::MissingField("borderRadius"))?
            .as_f64()
            .ok_or_else(|| ImportError::Invalid("'borderRadius' must be a number".to_string()))?;

        let name = match object.get("name") {
            None | Some(Value::Null) => DEFAULT_IMPORT_NAME.to_string(),
            Some(Value::String(name)) if name.trim().is_empty() => DEFAULT_IMPORT_NAME.to_string(),
            Some(Value::String(name)) => name.trim().to_string(),
            Some(_) => return Err(ImportError::Invalid("'name' must be a string".to_string())),
        };

        let timestamp = object
            .get("timestamp")
            .and_then(Value::as_str)
            .and_then(|raw| match DateTime::parse_from_rfc3339(raw) {
                Ok(time) => Some(time.with_timezone(&Utc)),
                Err(e) => {
                    debug!("Ignoring unreadable theme timestamp '{raw}': {e}");
                    None
                }
            });

        #[allow(clippy::cast_possible_truncation)]
        let border_radius = clamp_radius(border_radius as f32);

        Ok(Self {
            name,
            colors,
            border_radius,
            timestamp,
        })
    }
}

fn parse_colors(object: &Map<String, Value>) -> Result<ColorScheme, ImportError> {
    let colors = object
        .get("colors")
        .ok_or(ImportError::MissingField("colors"))?;

    let scheme: ColorScheme = serde_json::from_value(colors.clone())
        .map_err(|e| ImportError::Invalid(format!("'colors': {e}")))?;

    for (slot, hex) in scheme.entries() {
        if let Err(e) = RgbColor::from_hex(hex) {
            return Err(ImportError::Invalid(format!("'colors.{slot}': {e}")));
        }
    }
    Ok(scheme)
}

/// File name suggested for an exported theme: lower-cased, whitespace runs
/// replaced by `-`, plus `.json`.
#[must_use]
pub fn suggested_file_name(name: &str) -> String {
    let stem = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    if stem.is_empty() {
        "theme.json".to_string()
    } else {
        format!("{stem}.json")
    }
}

/// Why an imported theme was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// Input is not JSON
    Parse(String),
    /// A required field is absent
    MissingField(&'static str),
    /// Fields are present but have the wrong shape
    Invalid(String),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(reason) => write!(f, "Theme file is not valid JSON: {reason}"),
            Self::MissingField(field) => {
                write!(f, "Theme file is missing required field '{field}'")
            }
            Self::Invalid(reason) => write!(f, "Theme file is invalid: {reason}"),
        }
    }
}

impl std::error::Error for ImportError {}
