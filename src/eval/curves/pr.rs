//! Precision-recall curve and average precision

use super::{auc, binary_clf_curve};
use crate::error::{Error, Result};
use serde::Serialize;

/// Precision-recall curve in order of decreasing recall
///
/// The final point is `(recall 0, precision 1)` and has no threshold, so
/// `thresholds.len() == precision.len() - 1`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PrecisionRecallCurve {
    pub precision: Vec<f64>,
    pub recall: Vec<f64>,
    /// Increasing, aligned with `precision[..len - 1]`
    pub thresholds: Vec<f64>,
    prevalence: f64,
}

impl PrecisionRecallCurve {
    /// Precision of a classifier that predicts everything positive
    pub fn no_skill(&self) -> f64 {
        self.prevalence
    }

    pub fn len(&self) -> usize {
        self.precision.len()
    }

    pub fn is_empty(&self) -> bool {
        self.precision.is_empty()
    }

    /// Step-wise average precision: sum of (R_n - R_{n-1}) * P_n
    pub fn average_precision(&self) -> f64 {
        self.recall
            .windows(2)
            .zip(&self.precision)
            .map(|(r, &p)| (r[0] - r[1]) * p)
            .sum()
    }

    /// Trapezoidal area under the curve
    pub fn auc(&self) -> f64 {
        auc(&self.recall, &self.precision).unwrap_or(0.0)
    }
}

/// Compute the precision-recall curve of `scores` against `y_true == pos_label`
pub fn precision_recall_curve(
    y_true: &[usize],
    scores: &[f64],
    pos_label: usize,
) -> Result<PrecisionRecallCurve> {
    let counts = binary_clf_curve(y_true, scores, pos_label)?;
    let p = counts.positives();
    if p == 0.0 {
        return Err(Error::UndefinedMetric(format!(
            "recall is undefined without samples of class {pos_label}"
        )));
    }

    // Stop at the first threshold reaching full recall
    let last = counts.tps.iter().position(|&tp| tp == p).unwrap_or(counts.tps.len() - 1);

    let mut curve = PrecisionRecallCurve {
        precision: Vec::with_capacity(last + 2),
        recall: Vec::with_capacity(last + 2),
        thresholds: Vec::with_capacity(last + 1),
        prevalence: p / y_true.len() as f64,
    };
    for i in (0..=last).rev() {
        let (tp, fp) = (counts.tps[i], counts.fps[i]);
        curve.precision.push(tp / (tp + fp));
        curve.recall.push(tp / p);
        curve.thresholds.push(counts.thresholds[i]);
    }
    curve.precision.push(1.0);
    curve.recall.push(0.0);
    Ok(curve)
}

/// Average precision without interpolation
pub fn average_precision_score(y_true: &[usize], scores: &[f64], pos_label: usize) -> Result<f64> {
    Ok(precision_recall_curve(y_true, scores, pos_label)?.average_precision())
}

/// Trapezoidal area under the precision-recall curve
///
/// Linear interpolation between PR points is optimistic; prefer
/// [`average_precision_score`] for reporting.
pub fn pr_auc_score(y_true: &[usize], scores: &[f64], pos_label: usize) -> Result<f64> {
    Ok(precision_recall_curve(y_true, scores, pos_label)?.auc())
}
