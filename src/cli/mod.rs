//! CLI command handlers for AgentDesk.
//!
//! This module provides headless, scriptable access to the layout and theme
//! engines for automation and testing.

pub mod common;
pub mod config;
pub mod layout;
pub mod theme;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use layout::LayoutArgs;
pub use theme::ThemeArgs;
