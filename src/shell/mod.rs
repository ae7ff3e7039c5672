//! Child process execution and platform conventions.

pub mod command;
pub mod platform;

pub use command::{display_command, execute, CommandOptions, CommandResult};
pub use platform::{
    activation_script, bin_dir_name, executable_name, is_ci, path_list_separator,
};
