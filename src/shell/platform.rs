//! Platform conventions for virtual environments and CI detection.

use std::path::{Path, PathBuf};

/// Name of the directory holding a virtual environment's executables.
pub fn bin_dir_name() -> &'static str {
    if cfg!(windows) {
        "Scripts"
    } else {
        "bin"
    }
}

/// Relative path of the activation script inside a virtual environment.
pub fn activation_script() -> PathBuf {
    if cfg!(windows) {
        Path::new("Scripts").join("activate.bat")
    } else {
        Path::new("bin").join("activate")
    }
}

/// Platform file name for an executable (`python` -> `python.exe` on Windows).
pub fn executable_name(name: &str) -> String {
    if cfg!(windows) {
        format!("{}.exe", name)
    } else {
        name.to_string()
    }
}

/// Separator between entries of the `PATH` variable.
pub fn path_list_separator() -> char {
    if cfg!(windows) {
        ';'
    } else {
        ':'
    }
}

/// Variables whose presence marks a CI environment.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
///
/// Used by `main()` to pick the non-interactive UI.
pub fn is_ci() -> bool {
    ci_detected(|name| std::env::var_os(name).is_some())
}

fn ci_detected(is_set: impl Fn(&str) -> bool) -> bool {
    CI_VARS.iter().any(|&name| is_set(name))
}
