//! Configuration loading and parsing for plugdeps.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use plugdeps::config::parse_config;
//! use std::path::Path;
//!
//! let config = parse_config("plugins_dir: nodes", Path::new("plugdeps.yml")).unwrap();
//! assert_eq!(config.plugins_dir, Path::new("nodes"));
//! assert_eq!(config.manifest, "requirements.txt");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::PlugdepsConfig;
