//! CLI argument parsing and validation
//!
//! This module provides the command-line interface for evaluar experiments.
//!
//! # Usage
//!
//! ```bash
//! evaluar run experiment.yaml
//! evaluar run experiment.yaml --output-dir ./out --format json
//! evaluar demo --template imbalanced
//! evaluar validate experiment.yaml
//! evaluar info experiment.yaml
//! evaluar init --template multiclass --output experiment.yaml
//! evaluar score predictions.csv --pos-label 1
//! ```

mod core;
mod init;
mod types;


// Re-export all public types
pub use core::{
    apply_overrides, parse_args, Cli, Command, DemoArgs, InfoArgs, RunArgs, ScoreArgs,
    ValidateArgs,
};
pub use init::{InitArgs, InitTemplate};
pub use types::OutputFormat;
