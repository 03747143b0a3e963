//! Service layer for persistence.
//!
//! This module contains the key-value store abstraction, the per-role layout
//! store and the built-in default layouts.

pub mod defaults;
pub mod layouts;
pub mod store;

// Re-export commonly used types and functions
pub use defaults::default_layout;
pub use layouts::LayoutStore;
pub use store::{FileStore, MemoryStore, PersistStatus, Store};
