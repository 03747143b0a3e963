//! Layout editing: the Viewing/Editing state machine and layout operations.
//!
//! The editor owns the active role's in-memory layout. Mutations are only
//! accepted while editing; events arriving while viewing are ignored. Leaving
//! edit mode always commits the layout to the store.

use tracing::{debug, info, warn};

use crate::engine::grid::{self, Placement};
use crate::engine::palette::PaletteIntent;
use crate::models::{DashboardLayout, Role, WidgetInstance};
use crate::services::{LayoutStore, PersistStatus};

/// Edit-mode state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Layout is displayed; mutations are ignored
    #[default]
    Viewing,
    /// Drag, resize, add and remove are permitted
    Editing,
}

/// New geometry for one widget, as reported by the interaction surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryChange<'a> {
    /// Widget id
    pub id: &'a str,
    /// New column
    pub x: u32,
    /// New row
    pub y: u32,
    /// New width
    pub w: u32,
    /// New height
    pub h: u32,
}

/// Dashboard layout editor for one active role.
#[derive(Debug)]
pub struct LayoutEditor {
    layouts: LayoutStore,
    layout: DashboardLayout,
    mode: EditMode,
    palette_open: bool,
}

impl LayoutEditor {
    /// Opens the editor on `role`, loading its persisted or default layout.
    #[must_use]
    pub fn open(layouts: LayoutStore, role: Role) -> Self {
        let layout = layouts.load(role);
        Self {
            layouts,
            layout,
            mode: EditMode::Viewing,
            palette_open: false,
        }
    }

    /// Active role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.layout.role
    }

    /// Current in-memory layout.
    #[must_use]
    pub const fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    /// Current edit mode.
    #[must_use]
    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    /// True while editing.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing)
    }

    /// True while the palette is shown.
    #[must_use]
    pub const fn is_palette_open(&self) -> bool {
        self.palette_open
    }

    /// Layout store backing this editor.
    #[must_use]
    pub const fn store(&self) -> &LayoutStore {
        &self.layouts
    }

    /// Enters edit mode. Has no effect on the layout.
    pub fn edit(&mut self) {
        if self.is_editing() {
            return;
        }
        debug!("Editing {} layout", self.role());
        self.mode = EditMode::Editing;
    }

    /// Commits the layout and returns to viewing.
    ///
    /// Outside edit mode nothing is written.
    pub fn save(&mut self) -> PersistStatus {
        if !self.is_editing() {
            debug!("Save ignored: not editing");
            return PersistStatus::Saved;
        }

        self.mode = EditMode::Viewing;
        self.palette_open = false;

        let status = self.layouts.save(&self.layout);
        if status.is_saved() {
            info!("Saved {} layout ({} widgets)", self.role(), self.layout.len());
        }
        status
    }

    /// Shows the palette. Ignored outside edit mode.
    pub fn open_palette(&mut self) {
        if self.is_editing() {
            self.palette_open = true;
        } else {
            debug!("Palette ignored: not editing");
        }
    }

    /// Applies a palette intent.
    pub fn handle_palette(&mut self, intent: PaletteIntent) -> Option<String> {
        match intent {
            PaletteIntent::AddWidget(widget_type) => self.add_widget(&widget_type),
        }
    }

    /// Adds an instance of `widget_type` at the first free row below the
    /// existing content and closes the palette.
    ///
    /// Returns the new widget's id, or `None` when not editing.
    pub fn add_widget(&mut self, widget_type: &str) -> Option<String> {
        if !self.is_editing() {
            debug!("Add '{widget_type}' ignored: not editing");
            return None;
        }

        self.palette_open = false;

        let registry = *self.layouts.registry();
        let widget = WidgetInstance::spawn(&registry, widget_type);
        let id = widget.id.clone();
        match grid::place(&mut self.layout, widget, Placement::Append) {
            Ok(row) => {
                debug!("Added {id} at row {row}");
                Some(id)
            }
            Err(e) => {
                warn!("Could not add '{widget_type}': {e:#}");
                None
            }
        }
    }

    /// Removes the widget with `id`. Absent ids are a no-op.
    ///
    /// Remaining widgets keep their positions.
    pub fn remove_widget(&mut self, id: &str) -> bool {
        if !self.is_editing() {
            debug!("Remove '{id}' ignored: not editing");
            return false;
        }
        self.layout.remove(id).is_some()
    }

    /// Applies drag/resize results in order; later changes to the same widget win.
    ///
    /// Sizes are clamped to each widget's minimum and the grid width. Returns
    /// the number of changes that matched a widget.
    pub fn move_or_resize(&mut self, changes: &[GeometryChange<'_>]) -> usize {
        if !self.is_editing() {
            debug!("Ignored {} layout change(s): not editing", changes.len());
            return 0;
        }

        let mut applied = 0;
        for change in changes {
            if let Some(widget) = self.layout.get_mut(change.id) {
                widget.set_geometry(change.x, change.y, change.w, change.h);
                applied += 1;
            }
        }
        applied
    }

    /// Pushes overlapping widgets down, keeping `priority` at its position.
    ///
    /// Returns the number of widgets moved; 0 outside edit mode.
    pub fn resolve_collisions(&mut self, priority: &str) -> usize {
        if !self.is_editing() {
            debug!("Collision resolution ignored: not editing");
            return 0;
        }
        let moved = grid::resolve_collisions(&mut self.layout, priority);
        if moved > 0 {
            debug!("Pushed {moved} widget(s) clear of {priority}");
        }
        moved
    }

    /// Runs the compaction pass over the current layout while editing.
    pub fn reflow(&mut self) -> bool {
        if !self.is_editing() {
            debug!("Reflow ignored: not editing");
            return false;
        }
        grid::compact(&mut self.layout);
        true
    }

    /// Discards the persisted layout and restores the role default.
    pub fn reset_to_default(&mut self) -> PersistStatus {
        let role = self.role();
        self.layout = self.layouts.default_for(role);
        self.palette_open = false;
        info!("Reset {role} layout to default");
        self.layouts.clear(role)
    }

    /// Switches the active role, committing pending edits first.
    pub fn switch_role(&mut self, role: Role) -> PersistStatus {
        if role == self.role() {
            return PersistStatus::Saved;
        }

        let status = self.save();
        self.layout = self.layouts.load(role);
        self.mode = EditMode::Viewing;
        self.palette_open = false;
        debug!("Switched to {role} layout");
        status
    }
}
