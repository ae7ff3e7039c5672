//! Error types for plugdeps operations.
//!
//! This module defines [`PlugdepsError`], the error type for every fatal
//! setup failure, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Setup failures (root, environment, plugins directory, config) are
//!   `PlugdepsError` values that end the run with exit code 1
//! - A single plugin failing to install is *not* an error; it is recorded
//!   in the [`InstallReport`](crate::install::InstallReport)
//! - Use `anyhow::Error` (via `PlugdepsError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for plugdeps operations.
#[derive(Debug, Error)]
pub enum PlugdepsError {
    /// No discovery rule found the application and no usable path was supplied.
    #[error("Application directory not found (looked for {markers})")]
    RootNotFound { markers: String },

    /// A supplied path is missing one or more marker files.
    #[error(
        "The specified path '{path}' does not appear to be a valid application directory \
         (it should contain {markers})"
    )]
    InvalidRoot { path: PathBuf, markers: String },

    /// The virtual environment or its activation script is missing.
    #[error("Virtual environment not found at {path}")]
    EnvironmentNotFound { path: PathBuf },

    /// The plugins directory is missing.
    #[error("Plugins directory not found at {path}")]
    PluginsDirNotFound { path: PathBuf },

    /// Configuration file not found at an explicitly given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A child process could not be started.
    #[error("Failed to start command: {command}: {message}")]
    CommandFailed { command: String, message: String },

    /// Input was required but prompting is disabled or stdin is closed.
    #[error("Cannot prompt for '{key}': {message}")]
    PromptUnavailable { key: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for plugdeps operations.
pub type Result<T> = std::result::Result<T, PlugdepsError>;
