//! Core CLI types - Cli, Command, and basic argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::init::{InitArgs, InitTemplate};
use super::types::OutputFormat;
use crate::config::schema::ExperimentSpec;

/// Evaluar: classification metrics, curves and evaluation reports
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "evaluar")]
#[command(version)]
#[command(
    about = "Classification metrics, ROC/PR curves and model evaluation reports on synthetic experiments"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run an experiment from YAML configuration
    Run(RunArgs),

    /// Run the built-in experiment without a configuration file
    Demo(DemoArgs),

    /// Validate a configuration file without running it
    Validate(ValidateArgs),

    /// Display information about a configuration
    Info(InfoArgs),

    /// Write a starter experiment configuration
    Init(InitArgs),

    /// Compute metrics for labels (and optional scores) stored in a CSV file
    Score(ScoreArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override output directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Override the data seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the number of generated samples
    #[arg(long)]
    pub samples: Option<usize>,

    /// Report format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Skip chart rendering
    #[arg(long)]
    pub no_plots: bool,
}

/// Arguments for the demo command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct DemoArgs {
    /// Built-in experiment to run
    #[arg(short, long, default_value = "binary")]
    pub template: InitTemplate,

    /// Override output directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Report format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Skip chart rendering
    #[arg(long)]
    pub no_plots: bool,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed validation report
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the score command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ScoreArgs {
    /// CSV file with a `y_true,y_pred[,score]` header
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Class treated as positive by binary metrics
    #[arg(long, default_value_t = 1)]
    pub pos_label: usize,

    /// Beta for the F-beta score and threshold selection
    #[arg(long, default_value_t = 2.0)]
    pub beta: f64,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to an ExperimentSpec
pub fn apply_overrides(spec: &mut ExperimentSpec, args: &RunArgs) {
    if let Some(output_dir) = &args.output_dir {
        spec.output.dir = output_dir.clone();
    }
    if let Some(seed) = args.seed {
        spec.data.generator.seed = seed;
    }
    if let Some(samples) = args.samples {
        spec.data.generator.n_samples = samples;
    }
    if args.no_plots {
        spec.output.plots.clear();
    }
}
