//! Evaluar CLI
//!
//! # Usage
//!
//! ```bash
//! # Run the built-in lesson
//! evaluar demo
//!
//! # Write, edit and run an experiment
//! evaluar init --template imbalanced --output experiment.yaml
//! evaluar run experiment.yaml --output-dir ./out
//!
//! # Check a config
//! evaluar validate experiment.yaml --detailed
//!
//! # Metrics for predictions from another model
//! evaluar score predictions.csv --format json
//! ```

use clap::Parser;
use evaluar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
