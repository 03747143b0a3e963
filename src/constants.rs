//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name, grid dimensions and persisted key names.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "AgentDesk";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "agentdesk";

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "AGENTDESK_CONFIG_DIR";

/// Number of columns in the dashboard placement grid.
pub const GRID_COLUMNS: u32 = 12;

/// Rows a widget may extend to; stored geometry beyond this is clamped.
pub const GRID_MAX_ROWS: u32 = 1_000;

/// Width given to a newly added widget when the registry minimum is smaller.
pub const DEFAULT_WIDGET_WIDTH: u32 = 4;

/// Height given to a newly added widget when the registry minimum is smaller.
pub const DEFAULT_WIDGET_HEIGHT: u32 = 3;

/// Store key holding the theme mode (`light` or `dark`).
pub const THEME_MODE_KEY: &str = "theme-mode";

/// Store key holding the theme variant.
pub const THEME_VARIANT_KEY: &str = "theme-variant";

/// Store key holding the custom scheme, radius and name.
pub const THEME_CUSTOM_KEY: &str = "theme-custom";

/// Prefix of the per-role layout keys (`dashboard-layout-<role>`).
pub const LAYOUT_KEY_PREFIX: &str = "dashboard-layout-";

/// Corner radius applied when nothing else has been chosen (px).
pub const DEFAULT_RADIUS: f32 = 8.0;

/// Largest corner radius accepted (px).
pub const MAX_RADIUS: f32 = 24.0;
