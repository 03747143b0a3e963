//! Widget catalog and placed widget instances.
//!
//! The registry is a static catalog keyed by widget-type identifier. Views
//! resolve a type id to a [`Renderer`] and match on the [`WidgetKind`] tag;
//! ids that are no longer in the catalog resolve to [`Renderer::Empty`].

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::constants::{DEFAULT_WIDGET_HEIGHT, DEFAULT_WIDGET_WIDTH, GRID_COLUMNS, GRID_MAX_ROWS};

/// Palette grouping for catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WidgetCategory {
    /// Queue and performance statistics
    Analytics,
    /// Customer relationship data
    Crm,
    /// Live call handling
    Calls,
    /// Team supervision
    Supervisor,
    /// Outbound campaign reporting
    Campaigns,
}

impl WidgetCategory {
    /// Display label used by the palette.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Analytics => "Analytics",
            Self::Crm => "CRM",
            Self::Calls => "Calls",
            Self::Supervisor => "Supervisor",
            Self::Campaigns => "Campaigns",
        }
    }
}

impl fmt::Display for WidgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tag identifying which external view renders a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Queue statistic cards
    QueueStats,
    /// Agent performance chart
    AgentPerformance,
    /// Customer profile card
    CustomerProfile,
    /// Call-control panel
    CallControls,
    /// Agent monitor table
    AgentMonitor,
    /// Campaign table
    CampaignStats,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDescriptor {
    /// Widget-type identifier stored in layouts (kebab-case)
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// One-line description shown in the palette
    pub description: &'static str,
    /// Palette grouping
    pub category: WidgetCategory,
    /// Renderer tag
    pub kind: WidgetKind,
    /// Minimum width in grid units
    pub min_w: u32,
    /// Minimum height in grid units
    pub min_h: u32,
}

impl WidgetDescriptor {
    /// Size given to a freshly added instance: the default size, grown to the minimum.
    #[must_use]
    pub fn default_size(&self) -> (u32, u32) {
        (
            DEFAULT_WIDGET_WIDTH.max(self.min_w).min(GRID_COLUMNS),
            DEFAULT_WIDGET_HEIGHT.max(self.min_h),
        )
    }
}

/// Result of resolving a widget-type id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    /// Known type; render with this view
    Widget(WidgetKind),
    /// Unknown type; the slot stays empty
    Empty,
}

const CATALOG: &[WidgetDescriptor] = &[
    WidgetDescriptor {
        id: "queue-stats",
        name: "Queue Stats",
        description: "Waiting calls, service level and average wait time",
        category: WidgetCategory::Analytics,
        kind: WidgetKind::QueueStats,
        min_w: 2,
        min_h: 2,
    },
    WidgetDescriptor {
        id: "agent-performance",
        name: "Agent Performance",
        description: "Handled calls and handle time over the shift",
        category: WidgetCategory::Analytics,
        kind: WidgetKind::AgentPerformance,
        min_w: 3,
        min_h: 3,
    },
    WidgetDescriptor {
        id: "customer-profile",
        name: "Customer Profile",
        description: "Caller details and interaction history",
        category: WidgetCategory::Crm,
        kind: WidgetKind::CustomerProfile,
        min_w: 3,
        min_h: 3,
    },
    WidgetDescriptor {
        id: "call-controls",
        name: "Call Controls",
        description: "Answer, hold, transfer and wrap-up",
        category: WidgetCategory::Calls,
        kind: WidgetKind::CallControls,
        min_w: 4,
        min_h: 4,
    },
    WidgetDescriptor {
        id: "agent-monitor",
        name: "Agent Monitor",
        description: "Live state of every agent on the team",
        category: WidgetCategory::Supervisor,
        kind: WidgetKind::AgentMonitor,
        min_w: 6,
        min_h: 4,
    },
    WidgetDescriptor {
        id: "campaign-stats",
        name: "Campaign Stats",
        description: "Progress and contact rate per outbound campaign",
        category: WidgetCategory::Campaigns,
        kind: WidgetKind::CampaignStats,
        min_w: 3,
        min_h: 3,
    },
];

/// Static widget catalog.
#[derive(Debug, Clone, Copy)]
pub struct WidgetRegistry {
    entries: &'static [WidgetDescriptor],
}

impl WidgetRegistry {
    /// The built-in catalog.
    #[must_use]
    pub const fn builtin() -> Self {
        Self { entries: CATALOG }
    }

    /// All catalog entries in catalog order.
    #[must_use]
    pub const fn entries(&self) -> &'static [WidgetDescriptor] {
        self.entries
    }

    /// Looks up an entry by widget-type id.
    #[must_use]
    pub fn get(&self, widget_type: &str) -> Option<&'static WidgetDescriptor> {
        self.entries.iter().find(|entry| entry.id == widget_type)
    }

    /// Resolves a widget-type id to its renderer.
    #[must_use]
    pub fn resolve(&self, widget_type: &str) -> Renderer {
        self.get(widget_type)
            .map_or(Renderer::Empty, |entry| Renderer::Widget(entry.kind))
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// One placed occurrence of a widget type within a layout.
///
/// # Validation
///
/// - `w >= min_w >= 1`, `h >= min_h >= 1`
/// - `x + w <= 12`
/// - `id` is unique within its layout
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetInstance {
    /// Stable identifier, unique within a layout
    pub id: String,
    /// Column of the left edge (0-based)
    pub x: u32,
    /// Row of the top edge (0-based)
    pub y: u32,
    /// Width in grid units
    pub w: u32,
    /// Height in grid units
    pub h: u32,
    /// Minimum width in grid units
    pub min_w: u32,
    /// Minimum height in grid units
    pub min_h: u32,
    /// Catalog identifier of the widget type
    pub widget_type: String,
}

impl WidgetInstance {
    /// Creates a new instance of `widget_type` at the origin with a generated id.
    ///
    /// Sizing comes from the registry entry; unknown types get the default
    /// size and 1×1 minimums.
    #[must_use]
    pub fn spawn(registry: &WidgetRegistry, widget_type: &str) -> Self {
        let (w, h, min_w, min_h) = match registry.get(widget_type) {
            Some(entry) => {
                let (w, h) = entry.default_size();
                (w, h, entry.min_w, entry.min_h)
            }
            None => (DEFAULT_WIDGET_WIDTH, DEFAULT_WIDGET_HEIGHT, 1, 1),
        };

        Self {
            id: format!("{widget_type}-{}", Uuid::new_v4().simple()),
            x: 0,
            y: 0,
            w,
            h,
            min_w,
            min_h,
            widget_type: widget_type.to_string(),
        }
    }

    /// Creates a fixed instance, used for built-in layouts.
    #[must_use]
    pub fn fixed(
        registry: &WidgetRegistry,
        id: &str,
        widget_type: &str,
        (x, y): (u32, u32),
        (w, h): (u32, u32),
    ) -> Self {
        let (min_w, min_h) = registry
            .get(widget_type)
            .map_or((1, 1), |entry| (entry.min_w, entry.min_h));

        Self {
            id: id.to_string(),
            x,
            y,
            w,
            h,
            min_w,
            min_h,
            widget_type: widget_type.to_string(),
        }
    }

    /// Column just right of the widget.
    #[must_use]
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    /// Sets geometry, clamping it to the instance invariants.
    pub fn set_geometry(&mut self, x: u32, y: u32, w: u32, h: u32) {
        self.w = w.max(self.min_w).min(GRID_COLUMNS);
        self.h = h.max(self.min_h).min(GRID_MAX_ROWS);
        self.x = x.min(GRID_COLUMNS - self.w);
        self.y = y.min(GRID_MAX_ROWS - self.h);
    }

    /// Re-establishes the invariants on an instance read from storage.
    pub fn normalize(&mut self) {
        self.min_w = self.min_w.clamp(1, GRID_COLUMNS);
        self.min_h = self.min_h.clamp(1, GRID_MAX_ROWS);
        self.set_geometry(self.x, self.y, self.w, self.h);
    }

    /// True if the invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min_w >= 1
            && self.min_h >= 1
            && self.w >= self.min_w
            && self.h >= self.min_h
            && self.right() <= GRID_COLUMNS
            && self.y.saturating_add(self.h) <= GRID_MAX_ROWS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_six_entries() {
        let registry = WidgetRegistry::builtin();
        assert_eq!(registry.entries().len(), 6);
        assert_eq!(
            registry.get("agent-monitor").map(|e| e.category),
            Some(WidgetCategory::Supervisor)
        );
        assert_eq!(
            registry.get("customer-profile").map(|e| e.category),
            Some(WidgetCategory::Crm)
        );
    }

    #[test]
    fn test_resolve_unknown_is_empty() {
        let registry = WidgetRegistry::builtin();
        assert_eq!(
            registry.resolve("queue-stats"),
            Renderer::Widget(WidgetKind::QueueStats)
        );
        assert_eq!(registry.resolve("weather"), Renderer::Empty);
    }

    #[test]
    fn test_spawn_uses_registry_minimum() {
        let registry = WidgetRegistry::builtin();

        let small = WidgetInstance::spawn(&registry, "queue-stats");
        assert_eq!((small.w, small.h), (4, 3));

        let large = WidgetInstance::spawn(&registry, "agent-monitor");
        assert_eq!((large.w, large.h), (6, 4));
        assert_eq!((large.min_w, large.min_h), (6, 4));
        assert!(large.id.starts_with("agent-monitor-"));
    }

    #[test]
    fn test_spawn_ids_are_unique() {
        let registry = WidgetRegistry::builtin();
        let a = WidgetInstance::spawn(&registry, "queue-stats");
        let b = WidgetInstance::spawn(&registry, "queue-stats");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_set_geometry_clamps() {
        let registry = WidgetRegistry::builtin();
        let mut widget = WidgetInstance::spawn(&registry, "call-controls");

        widget.set_geometry(10, 2, 1, 1);
        assert_eq!((widget.w, widget.h), (4, 4));
        assert_eq!(widget.x, 8);
        assert_eq!(widget.y, 2);
        assert!(widget.is_valid());

        widget.set_geometry(0, 0, 40, 5);
        assert_eq!(widget.w, 12);
        assert!(widget.is_valid());

        widget.set_geometry(0, u32::MAX, 4, u32::MAX);
        assert_eq!((widget.y, widget.h), (0, GRID_MAX_ROWS));
        assert!(widget.is_valid());

        widget.set_geometry(0, u32::MAX, 4, 4);
        assert_eq!(widget.y, GRID_MAX_ROWS - 4);
    }

    #[test]
    fn test_serializes_camel_case() {
        let registry = WidgetRegistry::builtin();
        let widget = WidgetInstance::fixed(&registry, "queue-stats", "queue-stats", (0, 0), (4, 3));
        let json = serde_json::to_value(&widget).unwrap();

        assert_eq!(json["minW"], 2);
        assert_eq!(json["minH"], 2);
        assert_eq!(json["widgetType"], "queue-stats");
    }
}
