//! plugdeps CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use plugdeps::cli::{AppContext, Cli, CommandDispatcher};
use plugdeps::shell::is_ci;
use plugdeps::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("plugdeps=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("plugdeps=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("plugdeps starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = match (cli.quiet, cli.verbose) {
        (0, true) => OutputMode::Verbose,
        (0, false) => OutputMode::Normal,
        (1, _) => OutputMode::Quiet,
        _ => OutputMode::Silent,
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Prompts are allowed on a terminal, or on piped stdin unless disabled
    let is_interactive = !cli.no_prompt && !is_ci();
    let mut ui = create_ui(is_interactive, output_mode, !cli.no_prompt);

    let config_path = cli.config.clone();
    let explicit_root = cli.root.clone();
    let dispatcher =
        CommandDispatcher::new(|| AppContext::load(config_path.as_deref(), explicit_root.clone()));

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
