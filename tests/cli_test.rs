//! Integration tests for CLI argument parsing and fatal setup errors.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn plugdeps() -> Command {
    let mut cmd = Command::new(cargo_bin("plugdeps"));
    cmd.env_remove("PLUGDEPS_ROOT");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Application tree with markers, an activatable venv and two plugins.
fn setup_app() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("main.py"), "").unwrap();
    fs::write(root.join("folder_paths.py"), "").unwrap();

    fs::create_dir_all(root.join("venv/bin")).unwrap();
    fs::write(root.join("venv/bin/activate"), "").unwrap();
    fs::create_dir_all(root.join("venv/Scripts")).unwrap();
    fs::write(root.join("venv/Scripts/activate.bat"), "").unwrap();

    fs::create_dir_all(root.join("custom_nodes/A")).unwrap();
    fs::write(root.join("custom_nodes/A/requirements.txt"), "numpy\n").unwrap();
    fs::create_dir_all(root.join("custom_nodes/B")).unwrap();
    temp
}

fn root_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    plugdeps()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Install plugin requirements"))
        .stdout(predicate::str::contains("completions"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    plugdeps()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    plugdeps().arg("frobnicate").assert().failure();
    Ok(())
}

#[test]
fn completions_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    plugdeps()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plugdeps"));
    Ok(())
}

#[test]
fn completions_ignore_broken_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    plugdeps()
        .args(["--config"])
        .arg(temp.path().join("missing.yml"))
        .args(["completions", "zsh"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn dry_run_prints_commands() -> Result<(), Box<dyn std::error::Error>> {
    let app = setup_app();
    plugdeps()
        .args(["install", "--dry-run", "--root", &root_arg(app.path())])
        .assert()
        .success()
        .stdout(predicate::str::contains("Using application directory: "))
        .stdout(predicate::str::contains("Activated virtual environment: "))
        .stdout(predicate::str::contains("No requirements.txt found in B"))
        .stdout(predicate::str::contains(
            "Found requirements.txt in A. Installing...",
        ))
        .stdout(predicate::str::contains("-m pip install -r"))
        .stdout(predicate::str::contains(
            "0 installed, 0 failed, 1 without requirements.txt, 1 planned",
        ));
    Ok(())
}

#[test]
fn root_from_environment_variable() -> Result<(), Box<dyn std::error::Error>> {
    let app = setup_app();
    plugdeps()
        .env("PLUGDEPS_ROOT", app.path())
        .args(["install", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 planned"));
    Ok(())
}

#[test]
fn invalid_root_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("main.py"), "")?;
    plugdeps()
        .args(["--root", &root_arg(temp.path())])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "does not appear to be a valid application directory",
        ))
        .stderr(predicate::str::contains("folder_paths.py"));
    Ok(())
}

#[test]
fn missing_environment_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let app = setup_app();
    fs::remove_dir_all(app.path().join("venv"))?;
    plugdeps()
        .args(["--root", &root_arg(app.path())])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Virtual environment not found at"))
        .stdout(predicate::str::contains("Activated").not());
    Ok(())
}

#[test]
fn missing_plugins_dir_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let app = setup_app();
    fs::remove_dir_all(app.path().join("custom_nodes"))?;
    plugdeps()
        .args(["--root", &root_arg(app.path())])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Plugins directory not found at"));
    Ok(())
}

#[test]
fn undiscoverable_root_without_prompt_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    plugdeps()
        .args(["--no-prompt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("directory not automatically detected"))
        .stderr(predicate::str::contains("Application directory not found"));
    Ok(())
}

#[test]
fn root_can_be_typed_at_prompt() -> Result<(), Box<dyn std::error::Error>> {
    let app = setup_app();
    plugdeps()
        .args(["install", "--dry-run"])
        .write_stdin(format!("  \"{}\"  \n", app.path().display()))
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Please enter the full path to your application directory",
        ))
        .stdout(predicate::str::contains("Please enter").not())
        .stdout(predicate::str::contains("1 planned"));
    Ok(())
}

#[test]
fn list_json_with_typed_root_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let app = setup_app();
    let output = plugdeps()
        .args(["list", "--json"])
        .write_stdin(format!("{}\n", app.path().display()))
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value.as_array().map(Vec::len), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Please enter the full path"));
    Ok(())
}

#[test]
fn double_quiet_hides_the_question() -> Result<(), Box<dyn std::error::Error>> {
    let app = setup_app();
    plugdeps()
        .args(["-qq", "list"])
        .write_stdin(format!("{}\n", app.path().display()))
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Please enter").not());
    Ok(())
}

#[test]
fn typed_root_is_still_verified() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    plugdeps()
        .write_stdin(format!("{}\n", temp.path().display()))
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "does not appear to be a valid application directory",
        ));
    Ok(())
}

#[test]
fn closed_stdin_at_prompt_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    plugdeps()
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Application directory not found"));
    Ok(())
}

#[test]
fn list_shows_manifest_presence() -> Result<(), Box<dyn std::error::Error>> {
    let app = setup_app();
    fs::remove_dir_all(app.path().join("venv"))?;
    plugdeps()
        .args(["list", "--root", &root_arg(app.path())])
        .assert()
        .success()
        .stdout(predicate::str::contains("no requirements.txt"))
        .stdout(predicate::str::contains("2 plugins, 1 with requirements.txt"));
    Ok(())
}

#[test]
fn list_json_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let app = setup_app();
    let output = plugdeps()
        .args(["list", "--json", "--root", &root_arg(app.path())])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let plugins = value.as_array().expect("array");
    assert_eq!(plugins.len(), 2);

    let a = plugins.iter().find(|p| p["name"] == "A").expect("plugin A");
    assert!(a["manifest"]
        .as_str()
        .expect("manifest path")
        .ends_with("requirements.txt"));
    let b = plugins.iter().find(|p| p["name"] == "B").expect("plugin B");
    assert!(b["manifest"].is_null());
    Ok(())
}

#[test]
fn config_changes_layout() -> Result<(), Box<dyn std::error::Error>> {
    let app = setup_app();
    fs::rename(app.path().join("custom_nodes"), app.path().join("nodes"))?;
    let config = app.path().join("plugdeps.yml");
    fs::write(&config, "app_name: ComfyUI\nplugins_dir: nodes\n")?;

    plugdeps()
        .arg("--config")
        .arg(&config)
        .args(["install", "--dry-run", "--root", &root_arg(app.path())])
        .assert()
        .success()
        .stdout(predicate::str::contains("Using ComfyUI directory: "))
        .stdout(predicate::str::contains("1 planned"));
    Ok(())
}

#[test]
fn unknown_discovery_rule_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("plugdeps.yml");
    fs::write(&config, "discovery:\n  - rule: everywhere\n")?;

    plugdeps()
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn missing_explicit_config_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    plugdeps()
        .arg("--config")
        .arg(temp.path().join("nope.yml"))
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn double_quiet_prints_nothing_on_success() -> Result<(), Box<dyn std::error::Error>> {
    let app = setup_app();
    plugdeps()
        .args(["-qq", "install", "--dry-run", "--root", &root_arg(app.path())])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}
