//! Dashboard layout engine.
//!
//! Grid compaction, the edit-mode state machine and the widget palette.

pub mod editor;
pub mod grid;
pub mod palette;

pub use editor::{EditMode, GeometryChange, LayoutEditor};
pub use grid::Placement;
pub use palette::{Palette, PaletteGroup, PaletteIntent};
