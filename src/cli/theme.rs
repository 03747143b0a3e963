//! Theme CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::cli::common::{load_config, open_store, require_saved, CliError, CliResult};
use crate::models::{ColorScheme, HslColor, RgbColor, ThemeMode, ThemeVariant};
use crate::theme::{suggested_file_name, ImportError, StyleContext, ThemeEngine};

/// Theme commands
#[derive(Args, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    command: ThemeCommand,
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    /// Display the active theme
    Show(ThemeShowArgs),
    /// Set the mode: light, dark or toggle
    Mode(ThemeModeArgs),
    /// Select a variant: professional, modern, minimal, high-contrast or custom
    Variant(ThemeVariantArgs),
    /// Print the style variables of the active theme as CSS
    Css,
    /// Export the active theme as a JSON document
    Export(ThemeExportArgs),
    /// Import a theme document and make it the active custom theme
    Import(ThemeImportArgs),
    /// Apply a custom scheme; omitted colors are taken from the active theme
    Custom(ThemeCustomArgs),
}

/// Display the active theme
#[derive(Args, Debug)]
pub struct ThemeShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set the theme mode
#[derive(Args, Debug)]
pub struct ThemeModeArgs {
    /// light, dark or toggle
    #[arg(value_name = "MODE")]
    mode: String,
}

/// Select a variant
#[derive(Args, Debug)]
pub struct ThemeVariantArgs {
    /// Variant name
    #[arg(value_name = "VARIANT")]
    variant: String,
}

/// Export the active theme
#[derive(Args, Debug)]
pub struct ThemeExportArgs {
    /// Output file or directory; prints to stdout when omitted
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

/// Import a theme document
#[derive(Args, Debug)]
pub struct ThemeImportArgs {
    /// Theme JSON file
    #[arg(value_name = "PATH")]
    path: PathBuf,
}

/// Apply a custom scheme
#[derive(Args, Debug)]
pub struct ThemeCustomArgs {
    /// Theme name
    #[arg(long)]
    name: Option<String>,
    /// Corner radius in px (0-24)
    #[arg(long)]
    radius: Option<f32>,
    /// Primary color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    primary: Option<String>,
    /// Secondary color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    secondary: Option<String>,
    /// Accent color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    accent: Option<String>,
    /// Success color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    success: Option<String>,
    /// Warning color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    warning: Option<String>,
    /// Destructive color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    destructive: Option<String>,
    /// Background color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    background: Option<String>,
    /// Foreground color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    foreground: Option<String>,
}

/// JSON-serializable theme for output
#[derive(Serialize, Debug)]
struct ThemeOutput {
    mode: ThemeMode,
    variant: ThemeVariant,
    name: String,
    radius: f32,
    colors: ColorScheme,
}

impl ThemeArgs {
    /// Execute theme subcommand
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let mut engine = ThemeEngine::load(open_store(&config)?, StyleContext::new());

        match &self.command {
            ThemeCommand::Show(args) => args.execute(&engine),
            ThemeCommand::Mode(args) => args.execute(&mut engine),
            ThemeCommand::Variant(args) => {
                let variant: ThemeVariant = args
                    .variant
                    .parse()
                    .map_err(|e: anyhow::Error| CliError::validation(e.to_string()))?;
                require_saved(engine.set_variant(variant))?;
                println!("Theme variant set to {variant}.");
                Ok(())
            }
            ThemeCommand::Css => {
                print!("{}", engine.port().to_css());
                Ok(())
            }
            ThemeCommand::Export(args) => args.execute(&engine),
            ThemeCommand::Import(args) => args.execute(&mut engine),
            ThemeCommand::Custom(args) => args.execute(&mut engine),
        }
    }
}

impl ThemeShowArgs {
    fn execute(&self, engine: &ThemeEngine<StyleContext>) -> CliResult<()> {
        let preference = engine.preference();
        let colors = engine.effective_scheme();

        if self.json {
            let output = ThemeOutput {
                mode: preference.mode,
                variant: preference.variant,
                name: preference.display_name(),
                radius: preference.radius,
                colors,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::general(format!("Failed to serialize theme: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        println!("Theme: {}", preference.display_name());
        println!("  Mode:    {}", preference.mode);
        println!("  Variant: {}", preference.variant);
        println!("  Radius:  {}px", preference.radius);
        println!();
        println!("Colors:");
        for (slot, hex) in colors.entries() {
            println!("  {slot:<12} {hex:<8} {}", HslColor::from_hex(hex));
        }
        Ok(())
    }
}

impl ThemeModeArgs {
    fn execute(&self, engine: &mut ThemeEngine<StyleContext>) -> CliResult<()> {
        let status = if self.mode.trim().eq_ignore_ascii_case("toggle") {
            engine.toggle_mode()
        } else {
            let mode: ThemeMode = self
                .mode
                .parse()
                .map_err(|e: anyhow::Error| CliError::validation(e.to_string()))?;
            engine.set_mode(mode)
        };
        require_saved(status)?;

        println!("Theme mode set to {}.", engine.preference().mode);
        Ok(())
    }
}

impl ThemeExportArgs {
    fn execute(&self, engine: &ThemeEngine<StyleContext>) -> CliResult<()> {
        let document = engine.export();
        let json = document
            .to_json()
            .map_err(|e| CliError::general(format!("{e:#}")))?;

        let Some(output) = &self.output else {
            println!("{json}");
            return Ok(());
        };

        let path = if output.is_dir() {
            output.join(suggested_file_name(&document.name))
        } else {
            output.clone()
        };
        fs::write(&path, format!("{json}\n"))
            .map_err(|e| CliError::io(format!("Failed to write {}: {e}", path.display())))?;

        println!("Exported '{}' to {}", document.name, path.display());
        Ok(())
    }
}

impl ThemeImportArgs {
    fn execute(&self, engine: &mut ThemeEngine<StyleContext>) -> CliResult<()> {
        let text = fs::read_to_string(&self.path)
            .map_err(|e| CliError::io(format!("Failed to read {}: {e}", self.path.display())))?;

        let status = engine
            .import(&text)
            .map_err(|e: ImportError| CliError::validation(e.to_string()))?;
        require_saved(status)?;

        println!("Imported theme '{}'.", engine.preference().display_name());
        Ok(())
    }
}

impl ThemeCustomArgs {
    fn execute(&self, engine: &mut ThemeEngine<StyleContext>) -> CliResult<()> {
        let mut scheme = engine.effective_scheme();
        let overrides = [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("success", &self.success),
            ("warning", &self.warning),
            ("destructive", &self.destructive),
            ("background", &self.background),
            ("foreground", &self.foreground),
        ];
        for (slot, value) in overrides {
            let Some(value) = value else { continue };
            let color = RgbColor::from_hex(value)
                .map_err(|e| CliError::validation(format!("--{slot}: {e:#}")))?;
            if let Some(target) = scheme.slot_mut(slot) {
                *target = color.to_hex();
            }
        }

        let radius = match self.radius {
            Some(radius) if !radius.is_finite() => {
                return Err(CliError::validation("--radius must be a number"));
            }
            Some(radius) => radius,
            None => engine.preference().radius,
        };

        require_saved(engine.apply_custom_scheme(scheme, radius, self.name.clone()))?;

        let preference = engine.preference();
        println!(
            "Applied custom theme '{}' ({}px).",
            preference.display_name(),
            preference.radius
        );
        Ok(())
    }
}
