//! Shared state for command execution.

use std::path::{Path, PathBuf};

use crate::config::{load_config, PlugdepsConfig};
use crate::discovery::{DiscoveryContext, RootResolver};
use crate::error::Result;
use crate::ui::UserInterface;

/// Configuration and locations every command starts from.
#[derive(Debug, Clone)]
pub struct AppContext {
    config: PlugdepsConfig,
    discovery: DiscoveryContext,
    explicit_root: Option<PathBuf>,
}

impl AppContext {
    /// Create a context from already-loaded parts.
    pub fn new(
        config: PlugdepsConfig,
        discovery: DiscoveryContext,
        explicit_root: Option<PathBuf>,
    ) -> Self {
        Self {
            config,
            discovery,
            explicit_root,
        }
    }

    /// Build the context for the running process.
    ///
    /// The config file is looked up next to the executable unless
    /// `config_path` names one.
    pub fn load(config_path: Option<&Path>, explicit_root: Option<PathBuf>) -> Result<Self> {
        let discovery = DiscoveryContext::from_process()?;
        tracing::debug!(
            "Tool dir: {}, working dir: {}",
            discovery.tool_dir.display(),
            discovery.working_dir.display()
        );
        let config = load_config(Some(&discovery.tool_dir), config_path)?;
        Ok(Self::new(config, discovery, explicit_root))
    }

    pub fn config(&self) -> &PlugdepsConfig {
        &self.config
    }

    /// Locate the application root without announcing it.
    pub fn locate_root(&self, ui: &mut dyn UserInterface) -> Result<PathBuf> {
        RootResolver::from_config(&self.config).resolve(
            &self.discovery,
            self.explicit_root.as_deref(),
            ui,
        )
    }

    /// Locate and announce the application root.
    pub fn resolve_root(&self, ui: &mut dyn UserInterface) -> Result<PathBuf> {
        let root = self.locate_root(ui)?;
        ui.message(&format!(
            "Using {} directory: {}",
            self.config.app_name(),
            root.display()
        ));
        Ok(root)
    }

    /// Plugins directory under `root`.
    pub fn plugins_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.config.plugins_dir)
    }

    /// Environment directory under `root`.
    pub fn environment_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.config.environment_dir)
    }
}
