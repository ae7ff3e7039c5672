//! Package manager invocation.

use std::path::{Path, PathBuf};

use crate::environment::EnvOverlay;
use crate::error::Result;
use crate::shell::{display_command, execute, CommandOptions, CommandResult};

/// Something that installs a dependency manifest.
pub trait PackageInstaller {
    /// The command line that [`install`](Self::install) would run.
    fn describe(&self, manifest: &Path) -> String;

    /// Install `manifest`.
    ///
    /// A non-zero exit is reported through the returned result; `Err` means
    /// the installer could not be started.
    fn install(&self, manifest: &Path) -> Result<CommandResult>;
}

/// Runs `<interpreter> -m pip install -r <manifest>` inside an activated
/// environment.
#[derive(Debug, Clone)]
pub struct PipInstaller {
    interpreter: PathBuf,
    overlay: EnvOverlay,
    extra_args: Vec<String>,
}

impl PipInstaller {
    /// Create an installer launching pip through `interpreter`.
    pub fn new(interpreter: impl Into<PathBuf>, overlay: EnvOverlay) -> Self {
        Self {
            interpreter: interpreter.into(),
            overlay,
            extra_args: Vec::new(),
        }
    }

    /// Append extra arguments after the manifest.
    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    /// Interpreter used to launch pip.
    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    fn args(&self, manifest: &Path) -> Vec<String> {
        let mut args = vec![
            "-m".to_string(),
            "pip".to_string(),
            "install".to_string(),
            "-r".to_string(),
            manifest.to_string_lossy().into_owned(),
        ];
        args.extend(self.extra_args.iter().cloned());
        args
    }

    fn options(&self, manifest: &Path) -> CommandOptions {
        let mut options = CommandOptions::captured();
        options.cwd = manifest
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf);
        self.overlay.apply(&mut options);
        options
    }
}

impl PackageInstaller for PipInstaller {
    fn describe(&self, manifest: &Path) -> String {
        display_command(self.interpreter.as_os_str(), &self.args(manifest))
    }

    fn install(&self, manifest: &Path) -> Result<CommandResult> {
        execute(&self.interpreter, &self.args(manifest), &self.options(manifest))
    }
}
