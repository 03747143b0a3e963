//! Configuration management CLI commands.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::config::Config;
use crate::models::Role;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the config file path
    Path,
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Directory holding saved layouts and theme preferences
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Role used when --role is not given (agent, supervisor or admin)
    #[arg(long, value_name = "ROLE")]
    default_role: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    config_file_exists: bool,
    storage: StorageOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct StorageOutput {
    data_dir: String,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    default_role: Role,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Path => {
                println!("{}", config_file_path()?.display());
                Ok(())
            }
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let data_dir = config
            .store_dir()
            .map_err(|e| CliError::io(format!("Failed to locate store directory: {e:#}")))?;

        let output = ConfigOutput {
            config_file: config_file_path()?.to_string_lossy().to_string(),
            config_file_exists: Config::exists(),
            storage: StorageOutput {
                data_dir: data_dir.to_string_lossy().to_string(),
            },
            ui: UiOutput {
                default_role: config.ui.default_role,
            },
        };

        if self.json {
            let json = serde_json::to_string_pretty(&output).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            output_human_readable(&output);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.data_dir.is_none() && self.default_role.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --data-dir or --default-role",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(role) = &self.default_role {
            config.ui.default_role = role
                .parse()
                .map_err(|e: anyhow::Error| CliError::validation(e.to_string()))?;
        }

        if let Some(path) = &self.data_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create data directory {}: {e}",
                    path.display()
                ))
            })?;
            config.storage.data_dir = Some(path.clone());
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn config_file_path() -> CliResult<PathBuf> {
    Config::config_file_path()
        .map_err(|e| CliError::io(format!("Failed to locate config file: {e:#}")))
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    println!("AgentDesk Configuration");
    println!("=======================");
    println!();
    if output.config_file_exists {
        println!("Config file: {}", output.config_file);
    } else {
        println!("Config file: {} (not written, using defaults)", output.config_file);
    }
    println!();
    println!("Storage:");
    println!("  Data Directory: {}", output.storage.data_dir);
    println!();
    println!("UI:");
    println!("  Default Role: {}", output.ui.default_role);
}
