//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands that touch the
//! application share an [`AppContext`] holding the loaded configuration
//! and the discovery locations.

pub mod completions;
pub mod context;
pub mod dispatcher;
pub mod install;
pub mod list;

pub use context::AppContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
