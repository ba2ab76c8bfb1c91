//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::{ExperimentSpec, PlotKind};
use crate::eval::Metric;

/// Validate an experiment specification
///
/// Checks:
/// - Generator parameters are consistent (classes, samples, features, weights)
/// - Numeric values are in valid ranges
/// - Metric and plot names are known
pub fn validate_config(spec: &ExperimentSpec) -> Result<(), ValidationError> {
    let data = &spec.data.generator;

    if data.n_classes < 2 {
        return Err(ValidationError::InvalidClassCount(data.n_classes));
    }

    // Both sides of the split need every class
    if data.n_samples < 2 * data.n_classes {
        return Err(ValidationError::TooFewSamples {
            n_samples: data.n_samples,
            n_classes: data.n_classes,
        });
    }

    if data.n_features == 0 {
        return Err(ValidationError::InvalidFeatureCount(data.n_features));
    }

    if data.n_informative == 0 || data.n_informative > data.n_features {
        return Err(ValidationError::InvalidInformative {
            n_informative: data.n_informative,
            n_features: data.n_features,
        });
    }

    if !(data.class_sep.is_finite() && data.class_sep > 0.0) {
        return Err(ValidationError::InvalidClassSep(data.class_sep));
    }

    if let Some(weights) = &data.weights {
        if weights.len() != data.n_classes {
            return Err(ValidationError::WeightsLength {
                expected: data.n_classes,
                actual: weights.len(),
            });
        }
        let sum: f64 = weights.iter().sum();
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) || (sum - 1.0).abs() > 1e-6 {
            return Err(ValidationError::InvalidWeights(sum));
        }
    }

    if !(0.0..1.0).contains(&data.flip_y) {
        return Err(ValidationError::InvalidFlipY(data.flip_y));
    }

    let test_size = spec.data.test_size;
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(ValidationError::InvalidTestSize(test_size));
    }

    // Validate model hyperparameters
    let model = &spec.model;
    if !(model.learning_rate > 0.0 && model.learning_rate <= 10.0) {
        return Err(ValidationError::InvalidLearningRate(model.learning_rate));
    }

    if model.max_iter == 0 {
        return Err(ValidationError::InvalidMaxIter(model.max_iter));
    }

    if !(model.tol.is_finite() && model.tol > 0.0) {
        return Err(ValidationError::InvalidTolerance(model.tol));
    }

    if !(model.l2.is_finite() && model.l2 >= 0.0) {
        return Err(ValidationError::InvalidL2(model.l2));
    }

    // Validate evaluation settings
    let eval = &spec.eval;
    if eval.metrics.is_empty() {
        return Err(ValidationError::EmptyMetrics);
    }

    if let Some(name) = eval.metrics.iter().find(|m| m.parse::<Metric>().is_err()) {
        return Err(ValidationError::UnknownMetric(name.clone()));
    }

    if eval.pos_label >= data.n_classes {
        return Err(ValidationError::InvalidPosLabel {
            pos_label: eval.pos_label,
            n_classes: data.n_classes,
        });
    }

    if eval.cv_folds == 1 {
        return Err(ValidationError::InvalidCvFolds(eval.cv_folds));
    }

    if !(eval.beta.is_finite() && eval.beta > 0.0) {
        return Err(ValidationError::InvalidBeta(eval.beta));
    }

    if let Some(name) = spec
        .output
        .plots
        .iter()
        .find(|p| p.parse::<PlotKind>().is_err())
    {
        return Err(ValidationError::UnknownPlot(name.clone()));
    }

    Ok(())
}
