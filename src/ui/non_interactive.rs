//! Non-interactive UI for CI/headless environments and piped input.

use std::collections::HashMap;
use std::io::{BufRead, BufReader};

use crate::error::{PlugdepsError, Result};

use super::theme::PlugdepsTheme;
use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

/// Prefix of environment variables that answer prompts ahead of time.
pub const PROMPT_ENV_PREFIX: &str = "PLUGDEPS_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Output is plain text. Prompts are answered from `PLUGDEPS_PROMPT_<KEY>`
/// variables first, then from one line of the input stream when one is
/// attached.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: PlugdepsTheme,
    env_overrides: HashMap<String, String>,
    input: Option<Box<dyn BufRead>>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    ///
    /// When `read_stdin` is false, prompts without an override fail.
    pub fn new(mode: OutputMode, read_stdin: bool) -> Self {
        let input: Option<Box<dyn BufRead>> = if read_stdin {
            Some(Box::new(BufReader::new(std::io::stdin())))
        } else {
            None
        };

        Self {
            mode,
            theme: PlugdepsTheme::plain(),
            env_overrides: prompt_overrides_from_env(),
            input,
        }
    }

    /// Create with explicit overrides and no input stream (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            theme: PlugdepsTheme::plain(),
            env_overrides: overrides,
            input: None,
        }
    }

    /// Create with an explicit input stream (for testing).
    pub fn with_input(mode: OutputMode, input: Box<dyn BufRead>) -> Self {
        Self {
            mode,
            theme: PlugdepsTheme::plain(),
            env_overrides: HashMap::new(),
            input: Some(input),
        }
    }

    fn read_line(&mut self, prompt: &Prompt) -> Result<String> {
        let question = self.question_text(prompt);
        let Some(input) = self.input.as_mut() else {
            return Err(PlugdepsError::PromptUnavailable {
                key: prompt.key.clone(),
                message: "prompting is disabled in non-interactive mode".to_string(),
            });
        };

        // stdout may carry machine-readable output, so the question goes to stderr.
        if let Some(question) = question {
            eprintln!("{}", question);
        }

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(PlugdepsError::PromptUnavailable {
                key: prompt.key.clone(),
                message: "no input available".to_string(),
            });
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// The question to print before reading, if the output mode shows one.
    fn question_text<'p>(&self, prompt: &'p Prompt) -> Option<&'p str> {
        self.mode
            .shows_status()
            .then_some(prompt.question.as_str())
    }
}

fn prompt_overrides_from_env() -> HashMap<String, String> {
    std::env::vars()
        .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
        .collect()
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_output(&mut self, output: &str) {
        if self.mode.shows_command_output() && !output.trim().is_empty() {
            println!("{}", self.theme.format_output(output));
        }
    }

    fn show_error_output(&mut self, output: &str) {
        if !output.trim().is_empty() {
            eprintln!("{}", self.theme.format_output(output));
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            return Ok(value.clone());
        }

        self.read_line(prompt)
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", self.theme.format_header(title));
        }
    }
}

/// Spinner that does nothing (for non-interactive mode).
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn finish_and_clear(&mut self) {}
}
