//! Validation error types

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid class count: {0} (must be >= 2)")]
    InvalidClassCount(usize),

    #[error("Too few samples: {n_samples} (need at least 2 per class for {n_classes} classes)")]
    TooFewSamples { n_samples: usize, n_classes: usize },

    #[error("Invalid feature count: {0} (must be > 0)")]
    InvalidFeatureCount(usize),

    #[error("Invalid informative feature count: {n_informative} (must be in [1, {n_features}])")]
    InvalidInformative {
        n_informative: usize,
        n_features: usize,
    },

    #[error("Invalid class separation: {0} (must be > 0.0)")]
    InvalidClassSep(f64),

    #[error("Class weights have length {actual}, expected {expected}")]
    WeightsLength { expected: usize, actual: usize },

    #[error("Class weights must be non-negative and sum to 1.0, got sum {0}")]
    InvalidWeights(f64),

    #[error("Invalid label noise: {0} (must be in [0.0, 1.0))")]
    InvalidFlipY(f64),

    #[error("Invalid test size: {0} (must be in (0.0, 1.0))")]
    InvalidTestSize(f64),

    #[error("Invalid learning rate: {0} (must be > 0.0 and <= 10.0)")]
    InvalidLearningRate(f64),

    #[error("Invalid max_iter: {0} (must be > 0)")]
    InvalidMaxIter(usize),

    #[error("Invalid tolerance: {0} (must be > 0.0)")]
    InvalidTolerance(f64),

    #[error("Invalid L2 penalty: {0} (must be >= 0.0)")]
    InvalidL2(f64),

    #[error("Metric list cannot be empty")]
    EmptyMetrics,

    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Invalid pos_label: {pos_label} (must be < n_classes = {n_classes})")]
    InvalidPosLabel { pos_label: usize, n_classes: usize },

    #[error("Invalid cv_folds: {0} (use 0 to disable or >= 2)")]
    InvalidCvFolds(usize),

    #[error("Invalid beta: {0} (must be > 0.0)")]
    InvalidBeta(f64),

    #[error("Unknown plot: {0} (must be one of: roc, pr, confusion)")]
    UnknownPlot(String),
}
