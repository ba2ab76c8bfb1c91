//! Single-metric scoring from labels or probabilities

use super::super::classification::{Average, ConfusionMatrix, MultiClassMetrics};
use super::super::curves::{average_precision_score, pr_auc_score, roc_auc_ovr, roc_auc_score};
use super::metric::Metric;
use crate::error::{Error, Result};
use ndarray::Array2;

/// Clipping applied by [`log_loss`] by default
pub const LOG_LOSS_EPS: f64 = 1e-15;

/// Mean negative log-likelihood of the true class
///
/// Probabilities are clipped to `[eps, 1 - eps]`; `eps` must lie in `[0, 0.5)`.
pub fn log_loss(y_true: &[usize], proba: &Array2<f64>, eps: f64) -> Result<f64> {
    if !(eps.is_finite() && (0.0..0.5).contains(&eps)) {
        return Err(Error::InvalidParameter(format!(
            "log loss clipping must be in [0, 0.5), got {eps}"
        )));
    }
    if y_true.is_empty() {
        return Err(Error::EmptyInput("y_true is empty".into()));
    }
    if proba.nrows() != y_true.len() {
        return Err(Error::length_mismatch("probability rows", y_true.len(), proba.nrows()));
    }
    let mut total = 0.0;
    for (row, &label) in proba.rows().into_iter().zip(y_true) {
        let p = row.get(label).copied().ok_or_else(|| {
            Error::InvalidParameter(format!("label {label} has no probability column"))
        })?;
        total -= p.clamp(eps, 1.0 - eps).ln();
    }
    Ok(total / y_true.len() as f64)
}

/// Score a label-based metric; `None` for metrics that need probabilities
pub(crate) fn label_score(
    metric: Metric,
    cm: &ConfusionMatrix,
    metrics: &MultiClassMetrics,
) -> Option<f64> {
    match metric {
        Metric::Accuracy => Some(cm.accuracy()),
        Metric::BalancedAccuracy => Some(metrics.balanced_accuracy()),
        Metric::Precision(avg) => Some(metrics.precision_avg(avg)),
        Metric::Recall(avg) => Some(metrics.recall_avg(avg)),
        Metric::F1(avg) => Some(metrics.f1_avg(avg)),
        Metric::FBeta(beta, avg) => Some(metrics.fbeta_avg(beta.value(), avg)),
        Metric::Specificity(avg) => Some(metrics.specificity_avg(avg)),
        Metric::RocAuc | Metric::AveragePrecision | Metric::PrAuc | Metric::LogLoss => None,
    }
}

/// Macro mean of a binary curve score over one-vs-rest columns
fn ovr_macro(
    y_true: &[usize],
    proba: &Array2<f64>,
    score: fn(&[usize], &[f64], usize) -> Result<f64>,
) -> Result<f64> {
    let k = proba.ncols();
    let mut total = 0.0;
    for class in 0..k {
        total += score(y_true, &proba.column(class).to_vec(), class)?;
    }
    Ok(total / k as f64)
}

/// Score a probability-based metric
///
/// Two-column matrices are scored on the `pos_label` column; wider ones
/// one-vs-rest with a macro mean.
pub(crate) fn proba_score(
    metric: Metric,
    y_true: &[usize],
    proba: &Array2<f64>,
    pos_label: usize,
) -> Result<f64> {
    if proba.nrows() != y_true.len() {
        return Err(Error::length_mismatch("probability rows", y_true.len(), proba.nrows()));
    }
    let binary = proba.ncols() == 2;
    if binary && pos_label >= 2 {
        return Err(Error::InvalidParameter(format!(
            "pos_label {pos_label} out of range for binary probabilities"
        )));
    }
    let positive = || proba.column(pos_label).to_vec();

    match metric {
        Metric::RocAuc if binary => roc_auc_score(y_true, &positive(), pos_label),
        Metric::RocAuc => roc_auc_ovr(y_true, proba, Average::Macro),
        Metric::AveragePrecision if binary => {
            average_precision_score(y_true, &positive(), pos_label)
        }
        Metric::AveragePrecision => ovr_macro(y_true, proba, average_precision_score),
        Metric::PrAuc if binary => pr_auc_score(y_true, &positive(), pos_label),
        Metric::PrAuc => ovr_macro(y_true, proba, pr_auc_score),
        Metric::LogLoss => log_loss(y_true, proba, LOG_LOSS_EPS),
        other => Err(Error::InvalidParameter(format!(
            "{other} is computed from labels, not probabilities"
        ))),
    }
}
