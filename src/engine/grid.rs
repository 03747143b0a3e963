//! Grid geometry: collision tests and vertical compaction.
//!
//! Compaction processes widgets in ascending `(y, x)` order and drops each one
//! to the smallest row at which it overlaps nothing placed before it. Widgets
//! added with [`Placement::Append`] sort after every concrete row, so they land
//! on the first free row below the existing content.

use anyhow::Result;

use crate::models::{DashboardLayout, WidgetInstance};

/// Row request for a widget entering the compaction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Placement {
    /// Start from this row
    At(u32),
    /// Start below all existing content
    Append,
}

/// Occupied rectangle in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rect {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

impl Rect {
    const fn of(widget: &WidgetInstance, y: u32) -> Self {
        Self {
            x: widget.x,
            y,
            w: widget.w,
            h: widget.h,
        }
    }

    const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    const fn overlaps(&self, other: &Self) -> bool {
        self.x < other.x.saturating_add(other.w)
            && other.x < self.x.saturating_add(self.w)
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// True if the two widgets' rectangles intersect.
#[must_use]
pub fn overlaps(a: &WidgetInstance, b: &WidgetInstance) -> bool {
    Rect::of(a, a.y).overlaps(&Rect::of(b, b.y))
}

/// True if no two widgets in the layout intersect.
#[must_use]
pub fn is_collision_free(layout: &DashboardLayout) -> bool {
    let widgets = layout.widgets();
    widgets
        .iter()
        .enumerate()
        .all(|(i, a)| widgets[i + 1..].iter().all(|b| !overlaps(a, b)))
}

/// Smallest row at or below `start` at which `widget` overlaps none of `placed`.
fn first_free_row(widget: &WidgetInstance, placed: &[Rect], start: u32) -> u32 {
    let mut y = start;
    loop {
        let candidate = Rect::of(widget, y);
        // Every row between y and a blocker's bottom still hits that blocker,
        // so jumping straight to its bottom skips no free row.
        match placed.iter().find(|rect| rect.overlaps(&candidate)) {
            Some(blocker) => y = blocker.bottom(),
            None => return y,
        }
    }
}

/// Resolves the final row of every item, returned in input order.
fn resolve_rows(items: &[(&WidgetInstance, Placement)]) -> Vec<u32> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        let (wa, pa) = items[a];
        let (wb, pb) = items[b];
        pa.cmp(&pb)
            .then(wa.x.cmp(&wb.x))
            .then_with(|| wa.id.cmp(&wb.id))
    });

    let mut rows = vec![0; items.len()];
    let mut placed = Vec::with_capacity(items.len());
    for index in order {
        let widget = items[index].0;
        let y = first_free_row(widget, &placed, 0);
        rows[index] = y;
        placed.push(Rect::of(widget, y));
    }
    rows
}

/// Compacts the layout vertically in place.
///
/// Idempotent: compacting an already compact layout changes nothing.
pub fn compact(layout: &mut DashboardLayout) {
    let rows = {
        let items: Vec<_> = layout
            .widgets()
            .iter()
            .map(|widget| (widget, Placement::At(widget.y)))
            .collect();
        resolve_rows(&items)
    };

    for (widget, y) in layout.widgets_mut().iter_mut().zip(rows) {
        widget.y = y;
    }
}

/// Pushes widgets down until none overlap, keeping `priority` where it is.
///
/// The priority widget is placed first at its own row. Every other widget,
/// in ascending `(y, x, id)` order, moves to the first free row at or below
/// its current one, so widgets that collide with nothing stay put. Returns the
/// number of widgets that moved.
pub fn resolve_collisions(layout: &mut DashboardLayout, priority: &str) -> usize {
    let rows = {
        let widgets = layout.widgets();
        let mut order: Vec<usize> = (0..widgets.len()).collect();
        order.sort_by(|&a, &b| {
            let (wa, wb) = (&widgets[a], &widgets[b]);
            (wb.id == priority)
                .cmp(&(wa.id == priority))
                .then(wa.y.cmp(&wb.y))
                .then(wa.x.cmp(&wb.x))
                .then_with(|| wa.id.cmp(&wb.id))
        });

        let mut rows = vec![0; widgets.len()];
        let mut placed = Vec::with_capacity(widgets.len());
        for index in order {
            let widget = &widgets[index];
            let y = first_free_row(widget, &placed, widget.y);
            rows[index] = y;
            placed.push(Rect::of(widget, y));
        }
        rows
    };

    let mut moved = 0;
    for (widget, y) in layout.widgets_mut().iter_mut().zip(rows) {
        if widget.y != y {
            widget.y = y;
            moved += 1;
        }
    }
    moved
}

/// Inserts `widget` with the given placement request and compacts the layout.
///
/// Returns the row the new widget landed on.
///
/// # Errors
///
/// Returns an error if the widget's id is already in the layout.
pub fn place(
    layout: &mut DashboardLayout,
    mut widget: WidgetInstance,
    placement: Placement,
) -> Result<u32> {
    if layout.contains(&widget.id) {
        anyhow::bail!("Widget id '{}' already exists in {} layout", widget.id, layout.role);
    }

    let mut rows = {
        let mut items: Vec<_> = layout
            .widgets()
            .iter()
            .map(|existing| (existing, Placement::At(existing.y)))
            .collect();
        items.push((&widget, placement));
        resolve_rows(&items)
    };

    let new_row = rows.pop().unwrap_or(0);
    for (existing, y) in layout.widgets_mut().iter_mut().zip(rows) {
        existing.y = y;
    }

    widget.y = new_row;
    layout.insert(widget)?;
    Ok(new_row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, WidgetRegistry};

    fn widget(id: &str, x: u32, y: u32, w: u32, h: u32) -> WidgetInstance {
        // Unknown types carry 1x1 minimums
        WidgetInstance::fixed(&WidgetRegistry::builtin(), id, "unknown", (x, y), (w, h))
    }

    fn layout(widgets: Vec<WidgetInstance>) -> DashboardLayout {
        DashboardLayout::new(Role::Agent, widgets).unwrap()
    }

    fn row_of(layout: &DashboardLayout, id: &str) -> u32 {
        layout.get(id).map(|w| w.y).unwrap()
    }

    #[test]
    fn test_overlaps() {
        assert!(overlaps(&widget("a", 0, 0, 4, 3), &widget("b", 3, 2, 4, 3)));
        // Edge-adjacent rectangles do not overlap
        assert!(!overlaps(&widget("a", 0, 0, 4, 3), &widget("b", 4, 0, 4, 3)));
        assert!(!overlaps(&widget("a", 0, 0, 4, 3), &widget("b", 0, 3, 4, 3)));
    }

    #[test]
    fn test_compact_pulls_widgets_up() {
        let mut grid = layout(vec![widget("a", 0, 5, 4, 3), widget("b", 4, 2, 4, 3)]);
        compact(&mut grid);
        assert_eq!(row_of(&grid, "a"), 0);
        assert_eq!(row_of(&grid, "b"), 0);
    }

    #[test]
    fn test_compact_stacks_within_column_span() {
        let mut grid = layout(vec![
            widget("top", 0, 1, 6, 2),
            widget("below", 2, 9, 6, 4),
            widget("side", 8, 4, 4, 2),
        ]);
        compact(&mut grid);
        assert_eq!(row_of(&grid, "top"), 0);
        assert_eq!(row_of(&grid, "below"), 2);
        assert_eq!(row_of(&grid, "side"), 0);
    }

    #[test]
    fn test_compact_pushes_overlapping_widget_down() {
        let mut grid = layout(vec![widget("a", 0, 0, 4, 2), widget("b", 0, 0, 4, 2)]);
        compact(&mut grid);
        assert_eq!(row_of(&grid, "a"), 0);
        assert_eq!(row_of(&grid, "b"), 2);
        assert!(is_collision_free(&grid));
    }

    #[test]
    fn test_compact_never_moves_widget_down_without_overlap() {
        let mut grid = layout(vec![widget("a", 0, 0, 12, 2), widget("b", 0, 2, 3, 3)]);
        let before = grid.clone();
        compact(&mut grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_compact_is_idempotent() {
        // Deterministic pseudo-random layouts, including overlapping input
        let mut seed: u32 = 0x2545_f491;
        let mut next = |bound: u32| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed % bound
        };

        for _ in 0..200 {
            let count = next(8) + 1;
            let widgets = (0..count)
                .map(|i| {
                    let w = next(6) + 1;
                    let x = next(12 - w + 1);
                    widget(&format!("w{i}"), x, next(20), w, next(4) + 1)
                })
                .collect();
            let mut once = layout(widgets);
            compact(&mut once);
            assert!(is_collision_free(&once));

            let mut twice = once.clone();
            compact(&mut twice);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_compact_is_deterministic() {
        let widgets = vec![
            widget("a", 0, 3, 4, 2),
            widget("b", 0, 3, 4, 2),
            widget("c", 2, 0, 4, 1),
        ];
        let mut first = layout(widgets.clone());
        let mut second = layout(widgets);
        compact(&mut first);
        compact(&mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_collisions_keeps_priority_widget() {
        let mut grid = layout(vec![
            widget("top", 0, 0, 8, 6),
            widget("dropped", 0, 0, 6, 4),
            widget("side", 8, 0, 4, 6),
            widget("under", 0, 6, 6, 4),
        ]);
        assert_eq!(resolve_collisions(&mut grid, "dropped"), 2);

        assert_eq!(row_of(&grid, "dropped"), 0);
        assert_eq!(row_of(&grid, "top"), 4);
        assert_eq!(row_of(&grid, "side"), 0);
        assert_eq!(row_of(&grid, "under"), 10);
        assert!(is_collision_free(&grid));
    }

    #[test]
    fn test_resolve_collisions_leaves_free_layout_alone() {
        let mut grid = layout(vec![widget("a", 0, 0, 4, 3), widget("b", 0, 9, 4, 3)]);
        let before = grid.clone();
        assert_eq!(resolve_collisions(&mut grid, "b"), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_compact_saturates_on_oversized_widgets() {
        // Built directly, bypassing the clamping done by normalize
        let mut tall = widget("a", 0, 0, 4, 1);
        tall.h = u32::MAX;
        let mut taller = widget("b", 0, 1, 4, 1);
        taller.h = u32::MAX;
        let mut grid = layout(vec![tall, taller, widget("c", 0, 2, 4, 3)]);

        compact(&mut grid);
        assert_eq!(row_of(&grid, "a"), 0);
    }

    #[test]
    fn test_place_append_lands_on_first_free_row() {
        let mut grid = layout(vec![widget("a", 0, 0, 8, 6), widget("b", 8, 0, 4, 6)]);
        let row = place(&mut grid, widget("new", 0, 0, 4, 3), Placement::Append).unwrap();
        assert_eq!(row, 6);
        assert_eq!(row_of(&grid, "new"), 6);
    }

    #[test]
    fn test_place_append_fills_gap_beside_short_widget() {
        let mut grid = layout(vec![widget("tall", 4, 0, 8, 6)]);
        let row = place(&mut grid, widget("new", 0, 0, 4, 3), Placement::Append).unwrap();
        assert_eq!(row, 0);
    }

    #[test]
    fn test_place_rejects_duplicate_id() {
        let mut grid = layout(vec![widget("a", 0, 0, 4, 3)]);
        assert!(place(&mut grid, widget("a", 0, 0, 4, 3), Placement::Append).is_err());
        assert_eq!(grid.len(), 1);
    }
}
