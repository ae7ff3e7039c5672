//! Per-plugin outcomes and the run summary.

use serde::Serialize;

/// Exit code for a strict run in which at least one plugin failed.
pub const EXIT_INSTALL_FAILURES: i32 = 2;

/// What happened to one plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum PluginOutcome {
    /// The installer exited successfully.
    Installed,
    /// The installer exited non-zero, was killed, or could not start.
    Failed {
        /// Exit code, if the installer ran and exited normally.
        exit_code: Option<i32>,
    },
    /// No manifest in the plugin directory.
    NoManifest,
    /// Excluded by `--only`/`--skip`.
    Skipped,
    /// Dry run: the command was printed, not run.
    Planned,
}

/// Outcome of one plugin, by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginResult {
    pub name: String,
    #[serde(flatten)]
    pub outcome: PluginOutcome,
}

/// Outcomes of a whole run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstallReport {
    results: Vec<PluginResult>,
}

impl InstallReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome.
    pub fn record(&mut self, name: impl Into<String>, outcome: PluginOutcome) {
        self.results.push(PluginResult {
            name: name.into(),
            outcome,
        });
    }

    pub fn results(&self) -> &[PluginResult] {
        &self.results
    }

    pub fn outcome_of(&self, name: &str) -> Option<&PluginOutcome> {
        self.results
            .iter()
            .find(|r| r.name == name)
            .map(|r| &r.outcome)
    }

    pub fn installed(&self) -> usize {
        self.count(|o| matches!(o, PluginOutcome::Installed))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, PluginOutcome::Failed { .. }))
    }

    pub fn without_manifest(&self) -> usize {
        self.count(|o| matches!(o, PluginOutcome::NoManifest))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, PluginOutcome::Skipped))
    }

    pub fn planned(&self) -> usize {
        self.count(|o| matches!(o, PluginOutcome::Planned))
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    /// Names of failed plugins, in processing order.
    pub fn failed_names(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, PluginOutcome::Failed { .. }))
            .map(|r| r.name.as_str())
            .collect()
    }

    /// One-line summary of the counts.
    pub fn summary(&self, manifest_name: &str) -> String {
        let mut summary = format!(
            "{} installed, {} failed, {} without {}",
            self.installed(),
            self.failed(),
            self.without_manifest(),
            manifest_name
        );
        if self.skipped() > 0 {
            summary.push_str(&format!(", {} skipped", self.skipped()));
        }
        if self.planned() > 0 {
            summary.push_str(&format!(", {} planned", self.planned()));
        }
        summary
    }

    /// Process exit code. Failures only change it in strict mode.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if strict && self.has_failures() {
            EXIT_INSTALL_FAILURES
        } else {
            0
        }
    }

    fn count(&self, pred: impl Fn(&PluginOutcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }
}
