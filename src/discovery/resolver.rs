//! Application root resolution.

use std::path::{Path, PathBuf};

use crate::config::schema::describe_markers;
use crate::config::PlugdepsConfig;
use crate::error::{PlugdepsError, Result};
use crate::ui::{Prompt, UserInterface};

use super::rules::{DiscoveryContext, DiscoveryRule};

/// Prompt key used for the interactive fallback.
pub const ROOT_PROMPT_KEY: &str = "root";

/// Finds the application root by trying rules in order.
#[derive(Debug, Clone)]
pub struct RootResolver {
    markers: Vec<String>,
    rules: Vec<DiscoveryRule>,
    app_name: String,
}

impl RootResolver {
    /// Create a resolver for the given marker files and rules.
    pub fn new(markers: Vec<String>, rules: Vec<DiscoveryRule>) -> Self {
        Self {
            markers,
            rules,
            app_name: "application".to_string(),
        }
    }

    /// Create a resolver from configuration.
    pub fn from_config(config: &PlugdepsConfig) -> Self {
        Self {
            markers: config.markers.clone(),
            rules: config.discovery.clone(),
            app_name: config.app_name().to_string(),
        }
    }

    /// Check whether `dir` directly contains every marker file.
    pub fn is_root(&self, dir: &Path) -> bool {
        !self.markers.is_empty() && self.markers.iter().all(|m| dir.join(m).exists())
    }

    /// Try each rule in order and return the first accepted candidate.
    pub fn detect(&self, ctx: &DiscoveryContext) -> Option<PathBuf> {
        for rule in &self.rules {
            let Some(candidate) = rule.candidate(ctx) else {
                tracing::debug!("Rule '{}' has no candidate", rule);
                continue;
            };
            if self.is_root(&candidate) {
                tracing::debug!("Rule '{}' matched {}", rule, candidate.display());
                return Some(absolute(&candidate));
            }
            tracing::debug!("Rule '{}' rejected {}", rule, candidate.display());
        }
        None
    }

    /// Accept `path` only if it holds every marker file.
    pub fn verify(&self, path: &Path) -> Result<PathBuf> {
        if self.is_root(path) {
            Ok(absolute(path))
        } else {
            Err(PlugdepsError::InvalidRoot {
                path: path.to_path_buf(),
                markers: self.markers_display(),
            })
        }
    }

    /// Resolve the root: an explicit path if given, else the rules, else
    /// one prompt through `ui`.
    pub fn resolve(
        &self,
        ctx: &DiscoveryContext,
        explicit: Option<&Path>,
        ui: &mut dyn UserInterface,
    ) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return self.verify(&ctx.working_dir.join(path));
        }

        if let Some(root) = self.detect(ctx) {
            return Ok(root);
        }

        ui.warning(&format!(
            "{} directory not automatically detected.",
            capitalize(&self.app_name)
        ));

        let prompt = Prompt::input(
            ROOT_PROMPT_KEY,
            &format!(
                "Please enter the full path to your {} directory",
                self.app_name
            ),
        );
        let answer = match ui.prompt(&prompt) {
            Ok(answer) => answer,
            Err(PlugdepsError::PromptUnavailable { message, .. }) => {
                tracing::debug!("Root prompt unavailable: {}", message);
                return Err(PlugdepsError::RootNotFound {
                    markers: self.markers_display(),
                });
            }
            Err(e) => return Err(e),
        };

        let answer = clean_input(&answer);
        if answer.is_empty() {
            return Err(PlugdepsError::RootNotFound {
                markers: self.markers_display(),
            });
        }

        self.verify(&ctx.working_dir.join(answer))
    }

    fn markers_display(&self) -> String {
        describe_markers(&self.markers)
    }
}

/// Strip whitespace and one pair of surrounding quotes from typed input.
fn clean_input(input: &str) -> &str {
    let trimmed = input.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|s| s.strip_suffix(quote))
        {
            return inner.trim();
        }
    }
    trimmed
}

fn absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
