//! Sequential installation over every plugin directory.

use std::path::Path;

use crate::error::Result;
use crate::ui::UserInterface;

use super::pip::PackageInstaller;
use super::plugins::{scan_plugins, PluginFilter};
use super::report::{InstallReport, PluginOutcome};

/// Options for one installation pass.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Which plugins to process.
    pub filter: PluginFilter,
    /// Print commands instead of running them.
    pub dry_run: bool,
}

/// Install the manifest of every plugin under `plugins_dir`, one at a time.
///
/// Only a missing or unreadable plugins directory is an error. A failing
/// install is recorded in the report and the loop moves on.
pub fn install_all(
    plugins_dir: &Path,
    manifest_name: &str,
    installer: &dyn PackageInstaller,
    options: &InstallOptions,
    ui: &mut dyn UserInterface,
) -> Result<InstallReport> {
    let plugins = scan_plugins(plugins_dir, manifest_name)?;
    let mut report = InstallReport::new();

    for plugin in plugins {
        if !options.filter.allows(&plugin.name) {
            tracing::debug!("Skipping filtered plugin {}", plugin.name);
            ui.message(&format!("Skipping {}", plugin.name));
            report.record(plugin.name, PluginOutcome::Skipped);
            continue;
        }

        let Some(manifest) = plugin.manifest.as_deref() else {
            ui.message(&format!("No {} found in {}", manifest_name, plugin.name));
            report.record(plugin.name, PluginOutcome::NoManifest);
            continue;
        };

        ui.message(&format!(
            "Found {} in {}. Installing...",
            manifest_name, plugin.name
        ));

        if options.dry_run {
            ui.message(&format!("Would run: {}", installer.describe(manifest)));
            report.record(plugin.name, PluginOutcome::Planned);
            continue;
        }

        let mut spinner =
            ui.start_spinner(&format!("Installing requirements for {}", plugin.name));
        let result = installer.install(manifest);
        spinner.finish_and_clear();

        let outcome = match result {
            Ok(result) if result.success => {
                ui.success(&format!(
                    "Successfully installed requirements for {}",
                    plugin.name
                ));
                ui.show_output(&result.stdout);
                PluginOutcome::Installed
            }
            Ok(result) => {
                tracing::debug!(
                    "Install for {} exited with {:?} after {:?}",
                    plugin.name,
                    result.exit_code,
                    result.duration
                );
                ui.error(&format!(
                    "Error installing requirements for {}:",
                    plugin.name
                ));
                ui.show_error_output(&result.stderr);
                PluginOutcome::Failed {
                    exit_code: result.exit_code,
                }
            }
            Err(e) => {
                ui.error(&format!(
                    "Error installing requirements for {}:",
                    plugin.name
                ));
                ui.show_error_output(&e.to_string());
                PluginOutcome::Failed { exit_code: None }
            }
        };
        report.record(plugin.name, outcome);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlugdepsError;
    use crate::shell::CommandResult;
    use crate::ui::MockUI;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::fs;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::TempDir;

    /// Installer that records manifests and fails for chosen plugins.
    #[derive(Default)]
    struct MockInstaller {
        calls: RefCell<Vec<PathBuf>>,
        failing: HashSet<String>,
        unspawnable: HashSet<String>,
    }

    impl MockInstaller {
        fn failing(names: &[&str]) -> Self {
            Self {
                failing: names.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<PathBuf> {
            let mut calls = self.calls.borrow().clone();
            calls.sort();
            calls
        }
    }

    fn plugin_name(manifest: &Path) -> String {
        manifest
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    impl PackageInstaller for MockInstaller {
        fn describe(&self, manifest: &Path) -> String {
            format!("pip install -r {}", manifest.display())
        }

        fn install(&self, manifest: &Path) -> Result<CommandResult> {
            self.calls.borrow_mut().push(manifest.to_path_buf());
            let name = plugin_name(manifest);
            if self.unspawnable.contains(&name) {
                return Err(PlugdepsError::CommandFailed {
                    command: "python".to_string(),
                    message: "No such file or directory".to_string(),
                });
            }
            if self.failing.contains(&name) {
                Ok(CommandResult::failure(
                    Some(1),
                    String::new(),
                    format!("ERROR: could not install {}", name),
                    Duration::ZERO,
                ))
            } else {
                Ok(CommandResult::success(
                    format!("Installed {}", name),
                    String::new(),
                    Duration::ZERO,
                ))
            }
        }
    }

    fn plugins_tree(with_manifest: &[&str], without: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for name in with_manifest {
            let dir = temp.path().join(name);
            fs::create_dir(&dir).unwrap();
            fs::write(dir.join("requirements.txt"), "numpy\n").unwrap();
        }
        for name in without {
            fs::create_dir(temp.path().join(name)).unwrap();
        }
        temp
    }

    fn run(
        dir: &Path,
        installer: &MockInstaller,
        options: &InstallOptions,
        ui: &mut MockUI,
    ) -> InstallReport {
        install_all(dir, "requirements.txt", installer, options, ui).unwrap()
    }

    #[test]
    fn one_invocation_per_manifest() {
        let tree = plugins_tree(&["a", "b", "c"], &["d", "e"]);
        let installer = MockInstaller::default();
        let mut ui = MockUI::new();

        let report = run(tree.path(), &installer, &InstallOptions::default(), &mut ui);

        let expected: Vec<PathBuf> = ["a", "b", "c"]
            .iter()
            .map(|n| tree.path().join(n).join("requirements.txt"))
            .collect();
        assert_eq!(installer.calls(), expected);
        assert_eq!(report.installed(), 3);
        assert_eq!(report.without_manifest(), 2);
    }

    #[test]
    fn missing_manifest_is_informational() {
        let tree = plugins_tree(&[], &["B"]);
        let installer = MockInstaller::default();
        let mut ui = MockUI::new();

        run(tree.path(), &installer, &InstallOptions::default(), &mut ui);

        assert!(installer.calls().is_empty());
        assert_eq!(ui.messages(), &["No requirements.txt found in B".to_string()]);
        assert!(ui.successes().is_empty());
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn failure_does_not_stop_later_plugins() {
        let tree = plugins_tree(&["A", "C", "D"], &["B"]);
        let installer = MockInstaller::failing(&["C"]);
        let mut ui = MockUI::new();

        let report = run(tree.path(), &installer, &InstallOptions::default(), &mut ui);

        assert_eq!(installer.calls().len(), 3);
        assert_eq!(report.outcome_of("A"), Some(&PluginOutcome::Installed));
        assert_eq!(report.outcome_of("B"), Some(&PluginOutcome::NoManifest));
        assert_eq!(
            report.outcome_of("C"),
            Some(&PluginOutcome::Failed { exit_code: Some(1) })
        );
        assert_eq!(report.outcome_of("D"), Some(&PluginOutcome::Installed));

        let no_manifest = ui
            .messages()
            .iter()
            .filter(|m| m.starts_with("No requirements.txt"))
            .count();
        assert_eq!(no_manifest + ui.successes().len() + ui.errors().len(), 4);
    }

    #[test]
    fn failure_echoes_captured_stderr() {
        let tree = plugins_tree(&["C"], &[]);
        let installer = MockInstaller::failing(&["C"]);
        let mut ui = MockUI::new();

        run(tree.path(), &installer, &InstallOptions::default(), &mut ui);

        assert!(ui.has_error("Error installing requirements for C:"));
        assert_eq!(
            ui.error_outputs(),
            &["ERROR: could not install C".to_string()]
        );
    }

    #[test]
    fn success_echoes_captured_stdout() {
        let tree = plugins_tree(&["A"], &[]);
        let installer = MockInstaller::default();
        let mut ui = MockUI::new();

        run(tree.path(), &installer, &InstallOptions::default(), &mut ui);

        assert!(ui.has_message("Found requirements.txt in A. Installing..."));
        assert!(ui.has_success("Successfully installed requirements for A"));
        assert_eq!(ui.outputs(), &["Installed A".to_string()]);
    }

    #[test]
    fn spawn_error_counts_as_plugin_failure() {
        let tree = plugins_tree(&["A", "B"], &[]);
        let installer = MockInstaller {
            unspawnable: ["A".to_string()].into_iter().collect(),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let report = run(tree.path(), &installer, &InstallOptions::default(), &mut ui);

        assert_eq!(
            report.outcome_of("A"),
            Some(&PluginOutcome::Failed { exit_code: None })
        );
        assert_eq!(report.outcome_of("B"), Some(&PluginOutcome::Installed));
        assert!(ui.error_outputs()[0].contains("No such file or directory"));
    }

    #[test]
    fn spinners_are_always_finished() {
        let tree = plugins_tree(&["A", "B"], &[]);
        let installer = MockInstaller::failing(&["B"]);
        let mut ui = MockUI::new();

        run(tree.path(), &installer, &InstallOptions::default(), &mut ui);

        assert_eq!(ui.spinners().len(), 2);
        assert_eq!(ui.unfinished_spinners(), 0);
    }

    #[test]
    fn dry_run_spawns_nothing() {
        let tree = plugins_tree(&["A"], &["B"]);
        let installer = MockInstaller::default();
        let mut ui = MockUI::new();
        let options = InstallOptions {
            dry_run: true,
            ..Default::default()
        };

        let report = run(tree.path(), &installer, &options, &mut ui);

        assert!(installer.calls().is_empty());
        assert_eq!(report.planned(), 1);
        assert!(ui
            .messages()
            .iter()
            .any(|m| m.starts_with("Would run: pip install -r ")));
    }

    #[test]
    fn filtered_plugins_are_skipped() {
        let tree = plugins_tree(&["A", "B", "C"], &[]);
        let installer = MockInstaller::default();
        let mut ui = MockUI::new();
        let options = InstallOptions {
            filter: PluginFilter::new(Vec::new(), vec!["B".to_string()]),
            dry_run: false,
        };

        let report = run(tree.path(), &installer, &options, &mut ui);

        assert_eq!(installer.calls().len(), 2);
        assert_eq!(report.outcome_of("B"), Some(&PluginOutcome::Skipped));
        assert!(ui.has_message("Skipping B"));
    }

    #[test]
    fn repeated_runs_agree() {
        let tree = plugins_tree(&["A", "C"], &["B"]);
        let installer = MockInstaller::failing(&["C"]);

        let first = run(
            tree.path(),
            &installer,
            &InstallOptions::default(),
            &mut MockUI::new(),
        );
        let second = run(
            tree.path(),
            &installer,
            &InstallOptions::default(),
            &mut MockUI::new(),
        );

        for name in ["A", "B", "C"] {
            assert_eq!(first.outcome_of(name), second.outcome_of(name));
        }
    }

    #[test]
    fn plain_files_are_ignored() {
        let tree = plugins_tree(&["A"], &[]);
        fs::write(tree.path().join("README.md"), "").unwrap();
        let installer = MockInstaller::default();
        let mut ui = MockUI::new();

        let report = run(tree.path(), &installer, &InstallOptions::default(), &mut ui);

        assert_eq!(report.results().len(), 1);
    }

    #[test]
    fn missing_plugins_dir_is_fatal() {
        let temp = TempDir::new().unwrap();
        let installer = MockInstaller::default();
        let mut ui = MockUI::new();

        let err = install_all(
            &temp.path().join("custom_nodes"),
            "requirements.txt",
            &installer,
            &InstallOptions::default(),
            &mut ui,
        )
        .unwrap_err();

        assert!(matches!(err, PlugdepsError::PluginsDirNotFound { .. }));
        assert!(installer.calls().is_empty());
    }
}
