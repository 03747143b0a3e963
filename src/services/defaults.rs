//! Built-in factory layouts, one per role.

use crate::models::{DashboardLayout, Role, WidgetInstance, WidgetRegistry};

/// Returns the built-in layout for `role` on the 12-column grid.
#[must_use]
pub fn default_layout(role: Role, registry: &WidgetRegistry) -> DashboardLayout {
    let at = |id: &str, widget_type: &str, pos: (u32, u32), size: (u32, u32)| {
        WidgetInstance::fixed(registry, id, widget_type, pos, size)
    };

    let widgets = match role {
        Role::Agent => vec![
            at("call-controls", "call-controls", (0, 0), (8, 6)),
            at("customer-profile", "customer-profile", (8, 0), (4, 6)),
            at("performance", "agent-performance", (0, 6), (6, 4)),
            at("queue-stats", "queue-stats", (6, 6), (6, 4)),
        ],
        Role::Supervisor => vec![
            at("queue-stats", "queue-stats", (0, 0), (4, 3)),
            at("campaign-stats", "campaign-stats", (4, 0), (4, 3)),
            at("performance", "agent-performance", (8, 0), (4, 3)),
            at("agent-monitor", "agent-monitor", (0, 3), (12, 5)),
        ],
        Role::Admin => vec![
            at("queue-stats", "queue-stats", (0, 0), (3, 3)),
            at("campaign-stats", "campaign-stats", (3, 0), (3, 3)),
            at("performance", "agent-performance", (6, 0), (3, 3)),
            at("customer-profile", "customer-profile", (9, 0), (3, 3)),
            at("agent-monitor", "agent-monitor", (0, 3), (12, 5)),
        ],
    };

    // The ids above are distinct literals, so construction cannot fail.
    DashboardLayout::new(role, widgets).unwrap_or_else(|_| DashboardLayout::empty(role))
}
