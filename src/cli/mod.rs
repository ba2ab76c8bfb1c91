//! CLI module for evaluar
//!
//! Command handlers print reports and progress; argument types live in
//! [`crate::config::cli`].

mod commands;
mod logging;

pub use commands::run_command;
pub use logging::{log, LogLevel};

// Re-export Cli from config for convenience
pub use crate::config::Cli;
