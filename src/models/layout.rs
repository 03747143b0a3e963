//! Dashboard layout and role data structures.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::constants::LAYOUT_KEY_PREFIX;
use crate::models::WidgetInstance;

/// User role; selects which layout applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Front-line agent handling calls
    #[default]
    Agent,
    /// Team supervisor
    Supervisor,
    /// Contact-center administrator
    Admin,
}

impl Role {
    /// All roles in display order.
    pub const ALL: [Self; 3] = [Self::Agent, Self::Supervisor, Self::Admin];

    /// Lowercase identifier used in store keys and on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::Supervisor => "supervisor",
            Self::Admin => "admin",
        }
    }

    /// Store key of this role's persisted layout.
    #[must_use]
    pub fn store_key(&self) -> String {
        format!("{LAYOUT_KEY_PREFIX}{}", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "agent" => Ok(Self::Agent),
            "supervisor" => Ok(Self::Supervisor),
            "admin" => Ok(Self::Admin),
            other => anyhow::bail!(
                "Unknown role '{other}'. Expected one of: agent, supervisor, admin"
            ),
        }
    }
}

/// One user's arrangement of widget instances for one role.
///
/// Widgets are keyed by id; the vector keeps insertion order only so that
/// serialization is stable.
///
/// # Validation
///
/// - Widget ids must be unique within the layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardLayout {
    /// Role this layout belongs to
    pub role: Role,
    widgets: Vec<WidgetInstance>,
}

impl DashboardLayout {
    /// Creates a layout, rejecting duplicate widget ids.
    ///
    /// # Errors
    ///
    /// Returns an error if two widgets share an id.
    pub fn new(role: Role, widgets: Vec<WidgetInstance>) -> Result<Self> {
        let mut seen = HashSet::new();
        for widget in &widgets {
            if !seen.insert(widget.id.as_str()) {
                anyhow::bail!("Duplicate widget id '{}' in {role} layout", widget.id);
            }
        }
        Ok(Self { role, widgets })
    }

    /// Creates an empty layout.
    #[must_use]
    pub const fn empty(role: Role) -> Self {
        Self {
            role,
            widgets: Vec::new(),
        }
    }

    /// Widgets in insertion order.
    #[must_use]
    pub fn widgets(&self) -> &[WidgetInstance] {
        &self.widgets
    }

    /// Mutable access for geometry passes; ids must not be changed through it.
    pub(crate) fn widgets_mut(&mut self) -> &mut [WidgetInstance] {
        &mut self.widgets
    }

    /// Number of widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// True if the layout has no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Looks up a widget by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&WidgetInstance> {
        self.widgets.iter().find(|widget| widget.id == id)
    }

    /// Looks up a widget by id for mutation.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut WidgetInstance> {
        self.widgets.iter_mut().find(|widget| widget.id == id)
    }

    /// True if a widget with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Widget ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.widgets.iter().map(|widget| widget.id.as_str()).collect()
    }

    /// Adds a widget.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is already present.
    pub fn insert(&mut self, widget: WidgetInstance) -> Result<()> {
        if self.contains(&widget.id) {
            anyhow::bail!("Widget id '{}' already exists in {} layout", widget.id, self.role);
        }
        self.widgets.push(widget);
        Ok(())
    }

    /// Removes the widget with this id, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<WidgetInstance> {
        let index = self.widgets.iter().position(|widget| widget.id == id)?;
        Some(self.widgets.remove(index))
    }

    /// Clamps every widget to the geometry invariants.
    pub fn normalize(&mut self) {
        for widget in &mut self.widgets {
            widget.normalize();
        }
    }

    /// Compares two layouts as sets of widgets, ignoring order.
    #[must_use]
    pub fn same_widgets(&self, other: &Self) -> bool {
        if self.role != other.role || self.widgets.len() != other.widgets.len() {
            return false;
        }
        let ours: HashSet<&WidgetInstance> = self.widgets.iter().collect();
        other.widgets.iter().all(|widget| ours.contains(widget))
    }
}
