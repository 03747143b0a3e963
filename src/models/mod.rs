//! Data models for widgets, dashboard layouts and theme preferences.
//!
//! This module contains all the core data structures used throughout the application.
//! Models are designed to be independent of persistence and presentation.

pub mod layout;
pub mod rgb;
pub mod theme;
pub mod widget;

// Re-export all model types
pub use layout::{DashboardLayout, Role};
pub use rgb::{HslColor, RgbColor};
pub use theme::{clamp_radius, ColorScheme, ThemeMode, ThemePreference, ThemeVariant};
pub use widget::{
    Renderer, WidgetCategory, WidgetDescriptor, WidgetInstance, WidgetKind, WidgetRegistry,
};
