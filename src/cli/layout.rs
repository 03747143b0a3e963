//! Dashboard layout CLI commands.
//!
//! Mutating commands run the editor's full lifecycle: enter edit mode, apply
//! the change, save.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::common::{
    load_config, open_store, require_saved, resolve_role, CliError, CliResult,
};
use crate::engine::{GeometryChange, LayoutEditor, Palette, PaletteIntent};
use crate::models::{Renderer, Role, WidgetInstance, WidgetRegistry};
use crate::services::LayoutStore;

/// Dashboard layout commands
#[derive(Args, Debug)]
pub struct LayoutArgs {
    #[command(subcommand)]
    command: LayoutCommand,
}

#[derive(Subcommand, Debug)]
enum LayoutCommand {
    /// Display the layout of a role
    Show(LayoutShowArgs),
    /// List the widgets that can be added, by category
    Palette,
    /// Add a widget below the existing content
    Add(LayoutAddArgs),
    /// Remove a widget by id
    Remove(LayoutRemoveArgs),
    /// Move or resize a widget
    Move(LayoutMoveArgs),
    /// Pull every widget up to the first free row
    Compact,
    /// Restore the built-in layout of a role
    Reset,
}

/// Display the layout of a role
#[derive(Args, Debug)]
pub struct LayoutShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Add a widget
#[derive(Args, Debug)]
pub struct LayoutAddArgs {
    /// Widget type (see `layout palette`)
    #[arg(value_name = "TYPE")]
    widget_type: String,
}

/// Remove a widget
#[derive(Args, Debug)]
pub struct LayoutRemoveArgs {
    /// Widget id
    #[arg(value_name = "ID")]
    id: String,
}

/// Move or resize a widget; omitted values are kept
#[derive(Args, Debug)]
pub struct LayoutMoveArgs {
    /// Widget id
    #[arg(value_name = "ID")]
    id: String,
    /// Column of the left edge
    #[arg(long)]
    x: Option<u32>,
    /// Row of the top edge
    #[arg(long)]
    y: Option<u32>,
    /// Width in grid units
    #[arg(long)]
    w: Option<u32>,
    /// Height in grid units
    #[arg(long)]
    h: Option<u32>,
}

/// JSON-serializable layout for output
#[derive(Serialize, Debug)]
struct LayoutOutput<'a> {
    role: Role,
    saved: bool,
    widgets: Vec<&'a WidgetInstance>,
}

impl LayoutArgs {
    /// Execute layout subcommand
    pub fn execute(&self, role: Option<&str>) -> CliResult<()> {
        let config = load_config()?;
        let role = resolve_role(role, &config)?;
        let layouts = LayoutStore::new(open_store(&config)?, WidgetRegistry::builtin());
        let mut editor = LayoutEditor::open(layouts, role);

        match &self.command {
            LayoutCommand::Show(args) => args.execute(&editor),
            LayoutCommand::Palette => {
                print_palette(editor.store().registry());
                Ok(())
            }
            LayoutCommand::Add(args) => args.execute(&mut editor),
            LayoutCommand::Remove(args) => args.execute(&mut editor),
            LayoutCommand::Move(args) => args.execute(&mut editor),
            LayoutCommand::Compact => {
                editor.edit();
                editor.reflow();
                require_saved(editor.save())?;
                println!("Compacted {role} layout.");
                Ok(())
            }
            LayoutCommand::Reset => {
                require_saved(editor.reset_to_default())?;
                println!("Restored the default {role} layout.");
                Ok(())
            }
        }
    }
}

impl LayoutShowArgs {
    fn execute(&self, editor: &LayoutEditor) -> CliResult<()> {
        let layout = editor.layout();
        let saved = editor.store().has_saved(layout.role);

        let mut widgets: Vec<_> = layout.widgets().iter().collect();
        widgets.sort_by_key(|widget| (widget.y, widget.x));

        if self.json {
            let output = LayoutOutput {
                role: layout.role,
                saved,
                widgets,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::general(format!("Failed to serialize layout: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        let source = if saved { "saved" } else { "default" };
        println!("Layout for role '{}' ({source})", layout.role);
        println!();
        println!("  {:<28} {:<20} {:>7} {:>7}", "ID", "TYPE", "POS", "SIZE");
        let registry = editor.store().registry();
        for widget in widgets {
            let widget_type = match registry.resolve(&widget.widget_type) {
                Renderer::Widget(_) => widget.widget_type.clone(),
                Renderer::Empty => format!("{} (unknown)", widget.widget_type),
            };
            println!(
                "  {:<28} {:<20} {:>7} {:>7}",
                widget.id,
                widget_type,
                format!("{},{}", widget.x, widget.y),
                format!("{}x{}", widget.w, widget.h)
            );
        }
        Ok(())
    }
}

impl LayoutAddArgs {
    fn execute(&self, editor: &mut LayoutEditor) -> CliResult<()> {
        let palette = Palette::new(*editor.store().registry());
        let intent = palette.choose(&self.widget_type).unwrap_or_else(|| {
            eprintln!(
                "Warning: '{}' is not a known widget type; it will render as an empty slot.",
                self.widget_type
            );
            PaletteIntent::AddWidget(self.widget_type.clone())
        });

        editor.edit();
        editor.open_palette();
        let id = editor
            .handle_palette(intent)
            .ok_or_else(|| CliError::general(format!("Could not add '{}'", self.widget_type)))?;
        require_saved(editor.save())?;

        println!("{id}");
        Ok(())
    }
}

impl LayoutRemoveArgs {
    fn execute(&self, editor: &mut LayoutEditor) -> CliResult<()> {
        if !editor.layout().contains(&self.id) {
            return Err(CliError::validation(format!(
                "Widget '{}' not found in {} layout",
                self.id,
                editor.role()
            )));
        }

        editor.edit();
        editor.remove_widget(&self.id);
        require_saved(editor.save())?;

        println!("Removed '{}'.", self.id);
        Ok(())
    }
}

impl LayoutMoveArgs {
    fn execute(&self, editor: &mut LayoutEditor) -> CliResult<()> {
        let current = editor.layout().get(&self.id).ok_or_else(|| {
            CliError::validation(format!(
                "Widget '{}' not found in {} layout",
                self.id,
                editor.role()
            ))
        })?;

        let change = GeometryChange {
            id: &self.id,
            x: self.x.unwrap_or(current.x),
            y: self.y.unwrap_or(current.y),
            w: self.w.unwrap_or(current.w),
            h: self.h.unwrap_or(current.h),
        };

        editor.edit();
        editor.move_or_resize(&[change]);
        let pushed = editor.resolve_collisions(&self.id);
        require_saved(editor.save())?;

        if let Some(widget) = editor.layout().get(&self.id) {
            println!(
                "Moved '{}' to {},{} ({}x{}).",
                widget.id, widget.x, widget.y, widget.w, widget.h
            );
        }
        if pushed > 0 {
            println!("Pushed {pushed} overlapping widget(s) down.");
        }
        Ok(())
    }
}

fn print_palette(registry: &WidgetRegistry) {
    for group in Palette::new(*registry).groups() {
        println!("{}:", group.category);
        for entry in group.entries {
            println!(
                "  {:<20} {:<18} min {}x{}  {}",
                entry.id, entry.name, entry.min_w, entry.min_h, entry.description
            );
        }
    }
}
