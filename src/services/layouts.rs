//! Per-role layout persistence.
//!
//! This module centralizes reading and writing dashboard layouts, providing
//! role-specific factory defaults whenever nothing usable is persisted.

use anyhow::{Context, Result};
use std::rc::Rc;
use tracing::{debug, warn};

use crate::models::{DashboardLayout, Role, WidgetInstance, WidgetRegistry};
use crate::services::defaults::default_layout;
use crate::services::store::{PersistStatus, Store};

/// Service persisting one layout per role.
///
/// A layout is written wholesale as a JSON array of widget instances under
/// `dashboard-layout-<role>` and is never merged with the stored version.
#[derive(Clone)]
pub struct LayoutStore {
    store: Rc<dyn Store>,
    registry: WidgetRegistry,
}

impl LayoutStore {
    /// Creates a layout store over a shared key-value store.
    #[must_use]
    pub fn new(store: Rc<dyn Store>, registry: WidgetRegistry) -> Self {
        Self { store, registry }
    }

    /// Widget catalog used for defaults.
    #[must_use]
    pub const fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    /// Built-in layout for `role`.
    #[must_use]
    pub fn default_for(&self, role: Role) -> DashboardLayout {
        default_layout(role, &self.registry)
    }

    /// Loads the persisted layout for `role`, or the role default.
    ///
    /// Never fails: an unreadable or corrupt record is treated as absent.
    #[must_use]
    pub fn load(&self, role: Role) -> DashboardLayout {
        match self.try_load(role) {
            Ok(Some(layout)) => layout,
            Ok(None) => {
                debug!("No saved {role} layout, using default");
                self.default_for(role)
            }
            Err(e) => {
                warn!("Ignoring unusable saved {role} layout: {e:#}");
                self.default_for(role)
            }
        }
    }

    /// Reads and parses the persisted layout, without falling back.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be read, is not a JSON array of
    /// widget instances, or contains duplicate ids.
    pub fn try_load(&self, role: Role) -> Result<Option<DashboardLayout>> {
        let key = role.store_key();
        let Some(content) = self.store.load(&key)? else {
            return Ok(None);
        };

        let widgets: Vec<WidgetInstance> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse stored layout '{key}'"))?;

        let mut layout = DashboardLayout::new(role, widgets)?;
        layout.normalize();
        Ok(Some(layout))
    }

    /// True if a record exists for `role` (whether or not it parses).
    #[must_use]
    pub fn has_saved(&self, role: Role) -> bool {
        matches!(self.store.load(&role.store_key()), Ok(Some(_)))
    }

    /// Writes the layout under its role's key, replacing any previous record.
    pub fn save(&self, layout: &DashboardLayout) -> PersistStatus {
        let key = layout.role.store_key();
        let result = serde_json::to_string(layout.widgets())
            .context("Failed to serialize layout")
            .and_then(|json| self.store.save(&key, &json));
        PersistStatus::from_result(result, &format!("{} layout", layout.role))
    }

    /// Removes the persisted record for `role`.
    pub fn clear(&self, role: Role) -> PersistStatus {
        PersistStatus::from_result(
            self.store.clear(&role.store_key()),
            &format!("{role} layout reset"),
        )
    }
}

impl std::fmt::Debug for LayoutStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutStore").finish_non_exhaustive()
    }
}
