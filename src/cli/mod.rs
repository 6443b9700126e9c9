//! Command line interface for the frontdesk decision engine.

pub mod args;
pub mod commands;
pub mod output;

pub use args::{Command, FrontdeskArgs, OutputFormat};
pub use commands::{execute_command, resolve_config};
