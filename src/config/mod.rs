//! Declarative experiment configuration
//!
//! - `schema`: serde types for the experiment YAML
//! - `loader`: read, parse and validate a YAML file
//! - `validate`: range and consistency checks
//! - `templates`: starter experiments for `init` and `demo`
//! - `cli`: clap argument definitions

pub mod cli;
mod loader;
mod schema;
mod templates;
mod validate;

pub use cli::{apply_overrides, parse_args, Cli, Command, InitTemplate, OutputFormat};
pub use loader::{load_config, parse_config, to_yaml};
pub use schema::{DataSpec, EvalSpec, ExperimentSpec, ModelSpec, OutputSpec, PlotKind};
pub use templates::{template_spec, template_yaml};
pub use validate::{validate_config, ValidationError};
