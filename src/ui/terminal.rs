//! Interactive terminal UI.

use console::Term;
use std::io::{IsTerminal, Write};

use crate::error::Result;

use super::{
    prompt_user, should_use_colors, NonInteractiveUI, OutputMode, PlugdepsTheme, ProgressSpinner,
    Prompt, SpinnerHandle, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    err_term: Term,
    theme: PlugdepsTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            PlugdepsTheme::new()
        } else {
            PlugdepsTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err_term: Term::stderr(),
            theme,
            mode,
        }
    }

    /// Warnings, errors and failed-command output go to stderr.
    fn diagnostics(&mut self) -> &mut Term {
        &mut self.err_term
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            let line = self.theme.format_warning(msg);
            writeln!(self.diagnostics(), "{}", line).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        writeln!(self.diagnostics(), "{}", line).ok();
    }

    fn show_output(&mut self, output: &str) {
        if self.mode.shows_command_output() && !output.trim().is_empty() {
            writeln!(self.term, "{}", self.theme.format_output(output)).ok();
        }
    }

    fn show_error_output(&mut self, output: &str) {
        if !output.trim().is_empty() {
            let block = self.theme.format_output(output);
            writeln!(self.diagnostics(), "{}", block).ok();
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        prompt_user(prompt, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }
}

/// Create the appropriate UI based on context.
///
/// `allow_stdin_prompt` only affects the non-interactive UI: when set, a
/// prompt reads one line from stdin instead of failing.
pub fn create_ui(
    interactive: bool,
    mode: OutputMode,
    allow_stdin_prompt: bool,
) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() && std::io::stdin().is_terminal() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode, allow_stdin_prompt))
    }
}
