//! Error types for evaluar
//!
//! Every fallible library call returns [`Result`]. Malformed inputs (length
//! mismatches, empty arrays, single-class targets for ROC) surface as typed
//! variants instead of panics.

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by metrics, models, the pipeline and configuration loading
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter value is outside its valid range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Two inputs that must agree in shape do not
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    /// An input that must contain samples is empty
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// The metric is mathematically undefined for the given input
    #[error("Undefined metric: {0}")]
    UndefinedMetric(String),

    /// A model was used before `fit`
    #[error("Model not fitted: {0}")]
    NotFitted(String),

    /// Configuration could not be read, parsed or validated
    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Build a `ShapeMismatch` for two sample counts
    pub(crate) fn length_mismatch(what: &str, expected: usize, actual: usize) -> Self {
        Error::ShapeMismatch {
            expected: format!("{what} of length {expected}"),
            actual: format!("length {actual}"),
        }
    }
}

/// Check that paired label/score inputs are non-empty and equally long
pub(crate) fn check_pair<A, B>(left: &[A], right: &[B]) -> Result<()> {
    if right.is_empty() {
        return Err(Error::EmptyInput("y_true must contain at least one sample".into()));
    }
    if left.len() != right.len() {
        return Err(Error::length_mismatch("input", right.len(), left.len()));
    }
    Ok(())
}
