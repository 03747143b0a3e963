//! Shared plumbing for CLI commands: errors, exit codes and store access.

use std::fmt;
use std::rc::Rc;

use crate::config::Config;
use crate::models::Role;
use crate::services::{FileStore, PersistStatus, Store};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Unexpected failure
    GeneralError = 1,
    /// Bad arguments or rejected input
    ValidationError = 2,
    /// File system failure
    IoError = 3,
}

impl ExitCode {
    /// Numeric code passed to the OS.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code category
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Bad arguments or rejected input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// File system failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Anything else.
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::GeneralError,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        self.kind
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the configuration, mapping failures to validation errors.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Opens the file store configured in `config`.
pub fn open_store(config: &Config) -> CliResult<Rc<dyn Store>> {
    let dir = config
        .store_dir()
        .map_err(|e| CliError::io(format!("Failed to locate store directory: {e:#}")))?;
    Ok(Rc::new(FileStore::new(dir)))
}

/// Role from `--role`, or the configured default.
pub fn resolve_role(flag: Option<&str>, config: &Config) -> CliResult<Role> {
    match flag {
        Some(raw) => raw
            .parse()
            .map_err(|e: anyhow::Error| CliError::validation(e.to_string())),
        None => Ok(config.ui.default_role),
    }
}

/// Turns a failed write into an I/O error; the command has not taken effect.
pub fn require_saved(status: PersistStatus) -> CliResult<()> {
    match status {
        PersistStatus::Saved => Ok(()),
        PersistStatus::Unsaved(reason) => Err(CliError::io(reason)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::general("x").exit_code().code(), 1);
        assert_eq!(CliError::validation("x").exit_code().code(), 2);
        assert_eq!(CliError::io("x").exit_code().code(), 3);
    }

    #[test]
    fn test_resolve_role() {
        let mut config = Config::new();
        config.ui.default_role = Role::Admin;
        assert_eq!(resolve_role(None, &config).unwrap(), Role::Admin);
        assert_eq!(resolve_role(Some("Supervisor"), &config).unwrap(), Role::Supervisor);

        let error = resolve_role(Some("owner"), &config).unwrap_err();
        assert_eq!(error.kind, ExitCode::ValidationError);
    }

    #[test]
    fn test_require_saved() {
        assert!(require_saved(PersistStatus::Saved).is_ok());
        let error = require_saved(PersistStatus::Unsaved("disk full".to_string())).unwrap_err();
        assert_eq!(error.kind, ExitCode::IoError);
        assert_eq!(error.message, "disk full");
    }
}
