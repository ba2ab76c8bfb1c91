//! Init command types

use clap::Parser;
use std::path::PathBuf;

/// Arguments for the init command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitArgs {
    /// Template to use for initialization
    #[arg(short, long, default_value = "binary")]
    pub template: InitTemplate,

    /// Output path (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}

/// Init template type
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InitTemplate {
    /// Balanced two-class problem
    #[default]
    Binary,
    /// Two classes at 90/10 with label noise
    Imbalanced,
    /// Three balanced classes with macro and weighted averages
    Multiclass,
}

impl std::str::FromStr for InitTemplate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "binary" | "default" => Ok(InitTemplate::Binary),
            "imbalanced" | "imbalance" => Ok(InitTemplate::Imbalanced),
            "multiclass" | "multi" => Ok(InitTemplate::Multiclass),
            _ => Err(format!(
                "Unknown template: {s}. Valid templates: binary, imbalanced, multiclass"
            )),
        }
    }
}

impl std::fmt::Display for InitTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitTemplate::Binary => write!(f, "binary"),
            InitTemplate::Imbalanced => write!(f, "imbalanced"),
            InitTemplate::Multiclass => write!(f, "multiclass"),
        }
    }
}
