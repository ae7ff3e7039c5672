//! Candidate rules for locating the application root.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Locations a discovery rule can be evaluated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryContext {
    /// Directory containing the running executable.
    pub tool_dir: PathBuf,
    /// Current working directory.
    pub working_dir: PathBuf,
}

impl DiscoveryContext {
    /// Create a context from explicit paths.
    pub fn new(tool_dir: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            tool_dir: tool_dir.into(),
            working_dir: working_dir.into(),
        }
    }

    /// Build the context for the running process.
    pub fn from_process() -> std::io::Result<Self> {
        let exe = std::env::current_exe()?;
        let tool_dir = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self {
            tool_dir,
            working_dir: std::env::current_dir()?,
        })
    }
}

/// One way of proposing an application root.
///
/// Rules only propose a candidate; the resolver decides whether it holds
/// the marker files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum DiscoveryRule {
    /// The directory holding the executable.
    ToolDir,
    /// The parent of the directory holding the executable.
    ToolParent,
    /// A directory next to the executable's directory, e.g. the
    /// `ComfyUI` folder beside `python_embeded` in a portable install.
    Sibling { name: String },
    /// A fixed absolute path.
    Fixed { path: PathBuf },
    /// The current working directory.
    WorkingDir,
}

impl DiscoveryRule {
    /// The rules used when no configuration overrides them.
    pub fn default_policy() -> Vec<Self> {
        vec![Self::ToolDir, Self::ToolParent]
    }

    /// Candidate directory proposed by this rule, if it has one.
    pub fn candidate(&self, ctx: &DiscoveryContext) -> Option<PathBuf> {
        match self {
            Self::ToolDir => Some(ctx.tool_dir.clone()),
            Self::ToolParent => ctx.tool_dir.parent().map(Path::to_path_buf),
            Self::Sibling { name } => ctx.tool_dir.parent().map(|p| p.join(name)),
            Self::Fixed { path } => Some(path.clone()),
            Self::WorkingDir => Some(ctx.working_dir.clone()),
        }
    }
}

impl fmt::Display for DiscoveryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToolDir => write!(f, "tool directory"),
            Self::ToolParent => write!(f, "parent of tool directory"),
            Self::Sibling { name } => write!(f, "sibling '{}'", name),
            Self::Fixed { path } => write!(f, "fixed path {}", path.display()),
            Self::WorkingDir => write!(f, "working directory"),
        }
    }
}
