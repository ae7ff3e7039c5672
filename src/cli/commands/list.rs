//! List command implementation.
//!
//! The `plugdeps list` command shows each plugin and whether it has a
//! requirements file. Nothing is activated or installed.

use crate::cli::args::ListArgs;
use crate::error::{PlugdepsError, Result};
use crate::install::{scan_plugins, PluginEntry};
use crate::ui::theme::PlugdepsTheme;
use crate::ui::{should_use_colors, UserInterface};

use super::context::AppContext;
use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand<'a> {
    ctx: &'a AppContext,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(ctx: &'a AppContext, args: ListArgs) -> Self {
        Self { ctx, args }
    }

    fn plugins(&self, ui: &mut dyn UserInterface) -> Result<Vec<PluginEntry>> {
        // JSON output must stay parseable, so the root is not announced.
        let root = if self.args.json {
            self.ctx.locate_root(ui)?
        } else {
            self.ctx.resolve_root(ui)?
        };
        scan_plugins(&self.ctx.plugins_dir(&root), &self.ctx.config().manifest)
    }

    fn render_lines(&self, plugins: &[PluginEntry]) -> Vec<String> {
        let manifest = &self.ctx.config().manifest;
        let theme = if should_use_colors() {
            PlugdepsTheme::new()
        } else {
            PlugdepsTheme::plain()
        };

        plugins
            .iter()
            .map(|plugin| {
                let detail = if plugin.has_manifest() {
                    manifest.clone()
                } else {
                    format!("no {}", manifest)
                };
                format!(
                    "  {}  {}",
                    theme.highlight.apply_to(&plugin.name),
                    theme.dim.apply_to(detail)
                )
            })
            .collect()
    }
}

/// Render plugins as a JSON array.
pub fn render_json(plugins: &[PluginEntry]) -> Result<String> {
    serde_json::to_string_pretty(plugins).map_err(|e| PlugdepsError::Other(e.into()))
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let plugins = self.plugins(ui)?;

        if self.args.json {
            println!("{}", render_json(&plugins)?);
            return Ok(CommandResult::success());
        }

        ui.show_header("Plugins");
        for line in self.render_lines(&plugins) {
            ui.message(&line);
        }

        let with_manifest = plugins.iter().filter(|p| p.has_manifest()).count();
        ui.message(&format!(
            "{} plugins, {} with {}",
            plugins.len(),
            with_manifest,
            self.ctx.config().manifest
        ));

        Ok(CommandResult::success())
    }
}
