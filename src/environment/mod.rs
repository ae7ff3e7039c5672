//! Virtual environment activation.
//!
//! Activation never sources a shell script. The environment's bin
//! directory and variables are computed directly and collected into an
//! [`EnvOverlay`] that every child process receives explicitly.

pub mod overlay;
pub mod venv;

pub use overlay::{prepend_to_path, EnvOverlay};
pub use venv::{resolve_interpreter, VirtualEnv};
