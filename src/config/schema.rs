//! Configuration schema definitions for plugdeps.
//!
//! This module contains the struct that maps to the optional
//! `plugdeps.yml` file. Every field has a default, so an empty or missing
//! file describes the standard application layout.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::discovery::DiscoveryRule;

/// Root configuration structure for plugdeps.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlugdepsConfig {
    /// Application name (for display purposes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// Files that must all exist directly inside the application root
    pub markers: Vec<String>,

    /// Virtual environment directory, relative to the root
    pub environment_dir: PathBuf,

    /// Plugins directory, relative to the root
    pub plugins_dir: PathBuf,

    /// Manifest file name looked up inside each plugin directory
    pub manifest: String,

    /// Interpreter used to launch pip (defaults to the environment's own)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<PathBuf>,

    /// Extra arguments appended to `pip install -r <manifest>`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pip_args: Vec<String>,

    /// Exit non-zero when any plugin fails to install
    pub strict: bool,

    /// Ordered root discovery rules; first match wins
    pub discovery: Vec<DiscoveryRule>,
}

impl Default for PlugdepsConfig {
    fn default() -> Self {
        Self {
            app_name: None,
            markers: default_markers(),
            environment_dir: PathBuf::from("venv"),
            plugins_dir: PathBuf::from("custom_nodes"),
            manifest: "requirements.txt".to_string(),
            interpreter: None,
            pip_args: Vec::new(),
            strict: false,
            discovery: DiscoveryRule::default_policy(),
        }
    }
}

fn default_markers() -> Vec<String> {
    vec!["main.py".to_string(), "folder_paths.py".to_string()]
}

impl PlugdepsConfig {
    /// Display name of the application.
    pub fn app_name(&self) -> &str {
        self.app_name.as_deref().unwrap_or("application")
    }
}

/// Join marker names for diagnostics.
pub fn describe_markers(markers: &[String]) -> String {
    match markers {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
