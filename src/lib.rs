//! AgentDesk dashboard library
//!
//! This library provides the dashboard layout engine (a 12-column widget grid
//! with per-role persistence and an edit mode) and the theme engine (presets,
//! custom color schemes, import and export).

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod models;
pub mod services;
pub mod theme;
