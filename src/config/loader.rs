//! Loading experiment specifications from YAML

use crate::config::schema::ExperimentSpec;
use crate::config::validate::validate_config;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Parse and validate an experiment specification from YAML text
pub fn parse_config(yaml: &str) -> Result<ExperimentSpec> {
    let spec: ExperimentSpec = serde_yaml::from_str(yaml)
        .map_err(|e| Error::Config(format!("Failed to parse YAML config: {e}")))?;

    validate_config(&spec).map_err(|e| Error::Config(format!("Invalid config: {e}")))?;

    Ok(spec)
}

/// Load an experiment specification from a YAML file
///
/// Reading, parsing and validation failures all surface as [`Error::Config`].
///
/// # Example
///
/// ```no_run
/// use evaluar::config::load_config;
///
/// let spec = load_config("experiment.yaml")?;
/// println!("{} samples", spec.data.generator.n_samples);
/// # Ok::<(), evaluar::Error>(())
/// ```
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<ExperimentSpec> {
    let yaml_content = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file {}: {}",
            config_path.as_ref().display(),
            e
        ))
    })?;

    parse_config(&yaml_content)
}

/// Serialize a specification to YAML
pub fn to_yaml(spec: &ExperimentSpec) -> Result<String> {
    Ok(serde_yaml::to_string(spec)?)
}
