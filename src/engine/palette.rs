//! Edit-mode palette listing addable widgets by category.

use crate::models::{WidgetCategory, WidgetDescriptor, WidgetRegistry};

/// Intent emitted when the user picks a palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteIntent {
    /// Add one instance of this widget type
    AddWidget(String),
}

/// Catalog entries sharing a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteGroup {
    /// Shared category
    pub category: WidgetCategory,
    /// Entries in catalog order
    pub entries: Vec<&'static WidgetDescriptor>,
}

/// Palette view over the widget registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct Palette {
    registry: WidgetRegistry,
}

impl Palette {
    /// Creates a palette over `registry`.
    #[must_use]
    pub const fn new(registry: WidgetRegistry) -> Self {
        Self { registry }
    }

    /// Catalog grouped by category, categories in declaration order.
    #[must_use]
    pub fn groups(&self) -> Vec<PaletteGroup> {
        let mut groups: Vec<PaletteGroup> = Vec::new();
        for entry in self.registry.entries() {
            match groups.iter_mut().find(|group| group.category == entry.category) {
                Some(group) => group.entries.push(entry),
                None => groups.push(PaletteGroup {
                    category: entry.category,
                    entries: vec![entry],
                }),
            }
        }
        groups.sort_by_key(|group| group.category);
        groups
    }

    /// Picks an entry; only catalog types produce an intent.
    #[must_use]
    pub fn choose(&self, widget_type: &str) -> Option<PaletteIntent> {
        self.registry
            .get(widget_type)
            .map(|entry| PaletteIntent::AddWidget(entry.id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_by_category() {
        let groups = Palette::default().groups();
        let categories: Vec<_> = groups.iter().map(|group| group.category).collect();
        assert_eq!(
            categories,
            vec![
                WidgetCategory::Analytics,
                WidgetCategory::Crm,
                WidgetCategory::Calls,
                WidgetCategory::Supervisor,
                WidgetCategory::Campaigns,
            ]
        );

        let analytics: Vec<_> = groups[0].entries.iter().map(|entry| entry.id).collect();
        assert_eq!(analytics, vec!["queue-stats", "agent-performance"]);
    }

    #[test]
    fn test_choose_only_known_types() {
        let palette = Palette::default();
        assert_eq!(
            palette.choose("call-controls"),
            Some(PaletteIntent::AddWidget("call-controls".to_string()))
        );
        assert_eq!(palette.choose("weather"), None);
    }
}
