//! Shared test fixtures for engine and E2E CLI tests.
#![allow(dead_code)] // Each test binary uses a subset

use agentdesk::models::{ColorScheme, Role, ThemePreference, WidgetInstance, WidgetRegistry};
use agentdesk::services::{LayoutStore, MemoryStore};
use agentdesk::theme::ThemePort;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::rc::Rc;
use tempfile::TempDir;

/// Creates an empty in-memory store.
pub fn memory_store() -> Rc<MemoryStore> {
    Rc::new(MemoryStore::new())
}

/// Layout store over `memory` with the built-in catalog.
pub fn layout_store(memory: &Rc<MemoryStore>) -> LayoutStore {
    LayoutStore::new(memory.clone(), WidgetRegistry::builtin())
}

/// Widget of a catalog type at a fixed position.
pub fn widget(
    id: &str,
    widget_type: &str,
    (x, y): (u32, u32),
    (w, h): (u32, u32),
) -> WidgetInstance {
    WidgetInstance::fixed(&WidgetRegistry::builtin(), id, widget_type, (x, y), (w, h))
}

/// Serialized layout record as the store keeps it.
pub fn layout_record(widgets: &[WidgetInstance]) -> String {
    serde_json::to_string(widgets).expect("Failed to serialize widgets")
}

/// A custom scheme with distinct, easy-to-check colors.
pub fn sample_scheme() -> ColorScheme {
    ColorScheme::from_hex([
        "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff8800", "#880000", "#ffffff", "#000000",
    ])
}

/// A complete theme document.
pub fn theme_document(name: &str, radius: f32) -> String {
    serde_json::json!({
        "name": name,
        "colors": sample_scheme(),
        "borderRadius": radius,
        "timestamp": "2026-01-15T08:00:00Z",
    })
    .to_string()
}

/// Theme port that records every applied preference.
#[derive(Debug, Default)]
pub struct RecordingPort {
    pub applied: Vec<ThemePreference>,
}

impl RecordingPort {
    pub fn last(&self) -> Option<&ThemePreference> {
        self.applied.last()
    }
}

impl ThemePort for RecordingPort {
    fn apply(&mut self, preference: &ThemePreference) {
        self.applied.push(preference.clone());
    }
}

/// Path to the agentdesk binary
pub fn agentdesk_bin() -> String {
    std::env::var("CARGO_BIN_EXE_agentdesk")
        .unwrap_or_else(|_| "target/debug/agentdesk".to_string())
}

/// Isolated config and store directories for CLI runs.
pub struct CliEnv {
    temp_dir: TempDir,
}

impl CliEnv {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.temp_dir.path().join("config")
    }

    pub fn store_dir(&self) -> PathBuf {
        self.config_dir().join("store")
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Command with `AGENTDESK_CONFIG_DIR` pointing into the temp dir.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(agentdesk_bin());
        cmd.env("AGENTDESK_CONFIG_DIR", self.config_dir());
        cmd.env_remove("RUST_LOG");
        cmd.args(args);
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute command")
    }

    /// Runs and asserts exit code 0, returning stdout.
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert_eq!(
            output.status.code(),
            Some(0),
            "{args:?} should succeed. stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Runs `layout show --json` for `role`.
    pub fn layout_json(&self, role: Role) -> serde_json::Value {
        let stdout = self.run_ok(&["layout", "show", "--json", "--role", role.as_str()]);
        serde_json::from_str(&stdout).expect("Should parse JSON output")
    }
}
