//! plugdeps - Install plugin requirements into an application's virtual environment.
//!
//! plugdeps finds a Python application's root directory by its marker
//! files, activates the application's virtual environment, and runs
//! `pip install -r requirements.txt` for every plugin directory that has
//! one. A failing plugin never stops the others.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `plugdeps.yml` loading
//! - [`discovery`] - Application root discovery rules
//! - [`environment`] - Virtual environment activation
//! - [`error`] - Error types and result aliases
//! - [`install`] - Plugin enumeration and per-plugin installs
//! - [`shell`] - Child process execution
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use plugdeps::install::{InstallReport, PluginOutcome};
//!
//! let mut report = InstallReport::new();
//! report.record("A", PluginOutcome::Installed);
//! report.record("C", PluginOutcome::Failed { exit_code: Some(1) });
//! assert_eq!(report.exit_code(false), 0);
//! assert_eq!(report.exit_code(true), 2);
//! ```
//!
//! For end-to-end runs against a fixture application, see the integration
//! tests.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod environment;
pub mod error;
pub mod install;
pub mod shell;
pub mod ui;

pub use error::{PlugdepsError, Result};
