//! Virtual environment activation.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{PlugdepsError, Result};
use crate::shell::{activation_script, bin_dir_name, executable_name};

use super::overlay::{prepend_to_path, EnvOverlay};

/// A Python virtual environment on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEnv {
    root: PathBuf,
}

impl VirtualEnv {
    /// Wrap an environment root. Nothing is checked until [`activate`](Self::activate).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Environment root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the environment's executables.
    pub fn bin_dir(&self) -> PathBuf {
        self.root.join(bin_dir_name())
    }

    /// The activation script whose presence marks a usable environment.
    pub fn activation_script(&self) -> PathBuf {
        self.root.join(activation_script())
    }

    /// The environment's own interpreter.
    pub fn python(&self) -> PathBuf {
        self.bin_dir().join(executable_name("python"))
    }

    /// Activate against the current process `PATH`.
    pub fn activate(&self) -> Result<EnvOverlay> {
        let inherited = std::env::var_os("PATH");
        self.activate_with_path(inherited.as_deref())
    }

    /// Build the overlay that activation would produce.
    ///
    /// Fails without producing anything when the activation script is
    /// missing. Otherwise the overlay puts the bin dir first on `PATH`,
    /// records the root in `VIRTUAL_ENV` and drops `PYTHONHOME`.
    pub fn activate_with_path(&self, inherited_path: Option<&OsStr>) -> Result<EnvOverlay> {
        let script = self.activation_script();
        if !script.is_file() {
            tracing::debug!("Activation script missing: {}", script.display());
            return Err(PlugdepsError::EnvironmentNotFound {
                path: self.root.clone(),
            });
        }

        let root = self
            .root
            .canonicalize()
            .unwrap_or_else(|_| self.root.clone());
        let bin_dir = root.join(bin_dir_name());

        let mut overlay = EnvOverlay::new();
        overlay
            .set("PATH", prepend_to_path(&bin_dir, inherited_path))
            .set("VIRTUAL_ENV", root.to_string_lossy().into_owned())
            .remove("PYTHONHOME");

        tracing::debug!("Environment overlay: {:?}", overlay);
        Ok(overlay)
    }
}

/// Pick the interpreter that launches pip.
///
/// Order: the configured path (relative paths are taken from the
/// application root), the environment's own interpreter, then a bare
/// `python` looked up through the overlaid `PATH`.
pub fn resolve_interpreter(
    configured: Option<&Path>,
    app_root: &Path,
    venv: &VirtualEnv,
) -> PathBuf {
    if let Some(path) = configured {
        return app_root.join(path);
    }

    let python = venv.python();
    if python.is_file() {
        return python;
    }

    PathBuf::from(executable_name("python"))
}
