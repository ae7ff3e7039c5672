//! Install command implementation.
//!
//! The `plugdeps install` command (also the default when no subcommand is
//! given) finds the application, activates its virtual environment and
//! installs every plugin's requirements.

use crate::cli::args::InstallArgs;
use crate::environment::{resolve_interpreter, VirtualEnv};
use crate::error::Result;
use crate::install::{install_all, InstallOptions, PipInstaller, PluginFilter};
use crate::ui::UserInterface;

use super::context::AppContext;
use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand<'a> {
    ctx: &'a AppContext,
    args: InstallArgs,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    pub fn new(ctx: &'a AppContext, args: InstallArgs) -> Self {
        Self { ctx, args }
    }

    fn build_options(&self) -> InstallOptions {
        InstallOptions {
            filter: PluginFilter::new(self.args.only.clone(), self.args.skip.clone()),
            dry_run: self.args.dry_run,
        }
    }

    fn is_strict(&self) -> bool {
        self.args.strict || self.ctx.config().strict
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.ctx.config();
        let root = self.ctx.resolve_root(ui)?;

        let venv = VirtualEnv::new(self.ctx.environment_dir(&root));
        let overlay = venv.activate()?;
        ui.message(&format!(
            "Activated virtual environment: {}",
            venv.root().display()
        ));

        let interpreter = resolve_interpreter(config.interpreter.as_deref(), &root, &venv);
        tracing::debug!("Using interpreter {}", interpreter.display());

        let installer =
            PipInstaller::new(interpreter, overlay).with_extra_args(config.pip_args.clone());
        let report = install_all(
            &self.ctx.plugins_dir(&root),
            &config.manifest,
            &installer,
            &self.build_options(),
            ui,
        )?;

        ui.message(&report.summary(&config.manifest));
        if report.has_failures() {
            ui.warning(&format!(
                "Failed plugins: {}",
                report.failed_names().join(", ")
            ));
        }

        match report.exit_code(self.is_strict()) {
            0 => Ok(CommandResult::success()),
            code => Ok(CommandResult::failure(code)),
        }
    }
}
