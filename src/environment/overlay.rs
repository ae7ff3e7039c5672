//! Environment variable overlay applied to child processes.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::Path;

use crate::shell::{path_list_separator, CommandOptions};

/// Variables set and removed on top of the inherited environment.
///
/// The overlay is handed to each spawned child; the tool's own process
/// environment is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverlay {
    vars: BTreeMap<String, String>,
    removed: Vec<String>,
}

impl EnvOverlay {
    /// Create an empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, cancelling any earlier removal of it.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.removed.retain(|k| k != key);
        self.vars.insert(key.to_string(), value.into());
        self
    }

    /// Remove a variable from the child environment.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.vars.remove(key);
        if !self.removed.iter().any(|k| k == key) {
            self.removed.push(key.to_string());
        }
        self
    }

    /// Value the overlay sets for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Whether the overlay removes `key`.
    pub fn is_removed(&self, key: &str) -> bool {
        self.removed.iter().any(|k| k == key)
    }

    /// Variables set by the overlay, sorted by name.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy the overlay into command options.
    pub fn apply(&self, options: &mut CommandOptions) {
        for key in &self.removed {
            options.env.remove(key);
            options.env_remove.push(key.clone());
        }
        for (key, value) in &self.vars {
            options.env.insert(key.clone(), value.clone());
        }
    }
}

/// Build a `PATH` value with `dir` in front of the inherited entries.
pub fn prepend_to_path(dir: &Path, inherited: Option<&OsStr>) -> String {
    let dir = dir.to_string_lossy();
    match inherited.map(|p| p.to_string_lossy()) {
        Some(rest) if !rest.is_empty() => {
            format!("{}{}{}", dir, path_list_separator(), rest)
        }
        _ => dir.into_owned(),
    }
}
