//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, InstallArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::completions::CompletionsCommand;
use super::context::AppContext;
use super::install::InstallCommand;
use super::list::ListCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
///
/// The context is loaded lazily so that `completions` works even when the
/// config file next to the executable is broken.
pub struct CommandDispatcher<F> {
    load_context: F,
}

impl<F> CommandDispatcher<F>
where
    F: Fn() -> Result<AppContext>,
{
    /// Create a dispatcher that builds its context with `load_context`.
    pub fn new(load_context: F) -> Self {
        Self { load_context }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand means `install` with default flags.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Install(args)) => {
                let ctx = (self.load_context)()?;
                InstallCommand::new(&ctx, args.clone()).execute(ui)
            }
            Some(Commands::List(args)) => {
                let ctx = (self.load_context)()?;
                ListCommand::new(&ctx, args.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => {
                let ctx = (self.load_context)()?;
                InstallCommand::new(&ctx, InstallArgs::default()).execute(ui)
            }
        }
    }
}
