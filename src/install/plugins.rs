//! Plugin directory enumeration.

use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PlugdepsError, Result};

/// One immediate subdirectory of the plugins directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginEntry {
    /// Directory name.
    pub name: String,
    /// Full path of the plugin directory.
    pub path: PathBuf,
    /// Manifest path, when the plugin has one.
    pub manifest: Option<PathBuf>,
}

impl PluginEntry {
    /// Whether the plugin ships a manifest.
    pub fn has_manifest(&self) -> bool {
        self.manifest.is_some()
    }
}

/// List plugin directories in filesystem enumeration order.
///
/// Plain files are ignored. The order is whatever the filesystem yields;
/// nothing downstream depends on it.
pub fn scan_plugins(plugins_dir: &Path, manifest_name: &str) -> Result<Vec<PluginEntry>> {
    if !plugins_dir.is_dir() {
        return Err(PlugdepsError::PluginsDirNotFound {
            path: plugins_dir.to_path_buf(),
        });
    }

    let mut plugins = Vec::new();
    for entry in fs::read_dir(plugins_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let manifest = path.join(manifest_name);
        let manifest = if manifest.exists() {
            Some(manifest)
        } else {
            None
        };

        plugins.push(PluginEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            manifest,
        });
    }

    tracing::debug!(
        "Found {} plugin directories in {}",
        plugins.len(),
        plugins_dir.display()
    );
    Ok(plugins)
}

/// Name-based selection of plugins.
#[derive(Debug, Clone, Default)]
pub struct PluginFilter {
    only: HashSet<String>,
    skip: HashSet<String>,
}

impl PluginFilter {
    /// Create a filter. An empty `only` list selects everything.
    pub fn new<I, J>(only: I, skip: J) -> Self
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
    {
        Self {
            only: only.into_iter().collect(),
            skip: skip.into_iter().collect(),
        }
    }

    /// Whether the plugin named `name` should be processed.
    pub fn allows(&self, name: &str) -> bool {
        if self.skip.contains(name) {
            return false;
        }
        self.only.is_empty() || self.only.contains(name)
    }
}
