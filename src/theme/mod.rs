//! Theme engine.
//!
//! Presets, the presentation port, the engine holding the active preference
//! and the portable theme document used for import and export.

pub mod document;
pub mod engine;
pub mod port;
pub mod presets;

pub use document::{suggested_file_name, ImportError, ThemeDocument};
pub use engine::ThemeEngine;
pub use port::{StyleContext, ThemePort};
