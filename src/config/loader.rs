//! Configuration file discovery and loading.
//!
//! The configuration file is optional. Lookup order:
//! 1. An explicit `--config` path (must exist)
//! 2. `plugdeps.yml` next to the running executable
//! 3. Built-in defaults

use crate::config::schema::PlugdepsConfig;
use crate::error::{PlugdepsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up next to the executable.
pub const CONFIG_FILE_NAME: &str = "plugdeps.yml";

/// Find `plugdeps.yml` in the tool's directory.
pub fn find_config(tool_dir: &Path) -> Option<PathBuf> {
    let path = tool_dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into PlugdepsConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<PlugdepsConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PlugdepsError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PlugdepsError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into PlugdepsConfig and validate it.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<PlugdepsConfig> {
    if content.trim().is_empty() {
        return Ok(PlugdepsConfig::default());
    }

    let config: PlugdepsConfig =
        serde_yaml::from_str(content).map_err(|e| PlugdepsError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate(&config).map_err(|message| PlugdepsError::ConfigParseError {
        path: source_path.to_path_buf(),
        message,
    })?;

    Ok(config)
}

fn validate(config: &PlugdepsConfig) -> std::result::Result<(), String> {
    if config.markers.is_empty() {
        return Err("markers must list at least one file".to_string());
    }
    if config.markers.iter().any(|m| m.trim().is_empty()) {
        return Err("markers must not contain empty names".to_string());
    }
    if config.manifest.trim().is_empty() {
        return Err("manifest must not be empty".to_string());
    }
    if config.discovery.is_empty() {
        return Err("discovery must list at least one rule".to_string());
    }
    Ok(())
}

/// Load config with optional path override.
///
/// If `config_override` is provided, that file must exist. Otherwise the
/// tool directory is searched and defaults are used when nothing is found.
pub fn load_config(tool_dir: Option<&Path>, config_override: Option<&Path>) -> Result<PlugdepsConfig> {
    if let Some(path) = config_override {
        tracing::debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    match tool_dir.and_then(find_config) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            Ok(PlugdepsConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::DiscoveryRule;
    use tempfile::TempDir;

    #[test]
    fn missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(Some(temp.path()), None).unwrap();
        assert_eq!(config, PlugdepsConfig::default());
    }

    #[test]
    fn config_next_to_tool_is_loaded() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "app_name: ComfyUI\n").unwrap();

        let config = load_config(Some(temp.path()), None).unwrap();
        assert_eq!(config.app_name.as_deref(), Some("ComfyUI"));
    }

    #[test]
    fn explicit_config_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");

        let err = load_config(None, Some(&missing)).unwrap_err();
        assert!(matches!(err, PlugdepsError::ConfigNotFound { .. }));
    }

    #[test]
    fn empty_file_is_default() {
        let config = parse_config("  \n", Path::new("plugdeps.yml")).unwrap();
        assert_eq!(config, PlugdepsConfig::default());
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let err = parse_config("markers: [unclosed", Path::new("plugdeps.yml")).unwrap_err();
        assert!(matches!(err, PlugdepsError::ConfigParseError { .. }));
    }

    #[test]
    fn empty_markers_rejected() {
        let err = parse_config("markers: []\n", Path::new("plugdeps.yml")).unwrap_err();
        assert!(err.to_string().contains("markers"));
    }

    #[test]
    fn discovery_rules_parse_in_order() {
        let yaml = r#"
discovery:
  - rule: sibling
    name: ComfyUI
  - rule: fixed
    path: /opt/ComfyUI
  - rule: working_dir
  - rule: tool_dir
"#;
        let config = parse_config(yaml, Path::new("plugdeps.yml")).unwrap();
        assert_eq!(
            config.discovery,
            vec![
                DiscoveryRule::Sibling {
                    name: "ComfyUI".into()
                },
                DiscoveryRule::Fixed {
                    path: PathBuf::from("/opt/ComfyUI")
                },
                DiscoveryRule::WorkingDir,
                DiscoveryRule::ToolDir,
            ]
        );
    }

    #[test]
    fn unknown_rule_is_parse_error() {
        let yaml = "discovery:\n  - rule: everywhere\n";
        let err = parse_config(yaml, Path::new("plugdeps.yml")).unwrap_err();
        assert!(matches!(err, PlugdepsError::ConfigParseError { .. }));
    }
}
