//! Per-plugin dependency installation.
//!
//! - [`plugins`] - Enumerating plugin directories and their manifests
//! - [`pip`] - The [`PackageInstaller`] seam and the pip implementation
//! - [`runner`] - The sequential install loop
//! - [`report`] - Per-plugin outcomes and exit status

pub mod pip;
pub mod plugins;
pub mod report;
pub mod runner;

pub use pip::{PackageInstaller, PipInstaller};
pub use plugins::{scan_plugins, PluginEntry, PluginFilter};
pub use report::{InstallReport, PluginOutcome, PluginResult, EXIT_INSTALL_FAILURES};
pub use runner::{install_all, InstallOptions};
