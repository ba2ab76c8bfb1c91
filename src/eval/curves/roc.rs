//! Receiver operating characteristic

use super::{auc, binary_clf_curve, check_scores};
use crate::error::{Error, Result};
use crate::eval::classification::Average;
use ndarray::Array2;
use serde::Serialize;
use std::cmp::Ordering;

/// ROC curve points, ordered by decreasing threshold
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RocCurve {
    pub fpr: Vec<f64>,
    pub tpr: Vec<f64>,
    /// `thresholds[0]` is `+inf` (nothing predicted positive)
    pub thresholds: Vec<f64>,
}

impl RocCurve {
    pub fn len(&self) -> usize {
        self.fpr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fpr.is_empty()
    }

    /// Trapezoidal area under the curve
    pub fn auc(&self) -> f64 {
        auc(&self.fpr, &self.tpr).unwrap_or(0.0)
    }
}

/// Compute the ROC curve of `scores` against `y_true == pos_label`
///
/// With `drop_intermediate`, interior points lying on a straight segment
/// are removed; the area is unchanged.
pub fn roc_curve(
    y_true: &[usize],
    scores: &[f64],
    pos_label: usize,
    drop_intermediate: bool,
) -> Result<RocCurve> {
    let counts = binary_clf_curve(y_true, scores, pos_label)?;
    let (p, n) = (counts.positives(), counts.negatives());
    if p == 0.0 {
        return Err(Error::UndefinedMetric(format!(
            "ROC curve needs positive samples of class {pos_label}"
        )));
    }
    if n == 0.0 {
        return Err(Error::UndefinedMetric(format!(
            "ROC curve needs samples outside class {pos_label}"
        )));
    }

    let m = counts.thresholds.len();
    let keep: Vec<usize> = if drop_intermediate && m > 2 {
        let (fps, tps) = (&counts.fps, &counts.tps);
        (0..m)
            .filter(|&i| {
                i == 0
                    || i == m - 1
                    || fps[i + 1] - 2.0 * fps[i] + fps[i - 1] != 0.0
                    || tps[i + 1] - 2.0 * tps[i] + tps[i - 1] != 0.0
            })
            .collect()
    } else {
        (0..m).collect()
    };

    let mut curve = RocCurve {
        fpr: Vec::with_capacity(keep.len() + 1),
        tpr: Vec::with_capacity(keep.len() + 1),
        thresholds: Vec::with_capacity(keep.len() + 1),
    };
    curve.fpr.push(0.0);
    curve.tpr.push(0.0);
    curve.thresholds.push(f64::INFINITY);
    for i in keep {
        curve.fpr.push(counts.fps[i] / n);
        curve.tpr.push(counts.tps[i] / p);
        curve.thresholds.push(counts.thresholds[i]);
    }
    Ok(curve)
}

/// Area under the ROC curve
///
/// Computed as the Mann-Whitney statistic: the probability that a random
/// positive scores above a random negative, ties counting one half.
///
/// ```
/// use evaluar::eval::roc_auc_score;
///
/// let auc = roc_auc_score(&[0, 0, 1, 1], &[0.1, 0.4, 0.35, 0.8], 1).unwrap();
/// assert!((auc - 0.75).abs() < 1e-12);
/// ```
pub fn roc_auc_score(y_true: &[usize], scores: &[f64], pos_label: usize) -> Result<f64> {
    check_scores(y_true, scores)?;

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[a].partial_cmp(&scores[b]).unwrap_or(Ordering::Equal));

    let mut positive_rank_sum = 0.0;
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && scores[order[end]] == scores[order[start]] {
            end += 1;
        }
        // 1-based ranks start+1..=end share their mean
        let rank = (start + 1 + end) as f64 / 2.0;
        let tied_pos = order[start..end]
            .iter()
            .filter(|&&i| y_true[i] == pos_label)
            .count();
        positive_rank_sum += rank * tied_pos as f64;
        start = end;
    }

    let p = y_true.iter().filter(|&&y| y == pos_label).count() as f64;
    let n = y_true.len() as f64 - p;
    if p == 0.0 || n == 0.0 {
        return Err(Error::UndefinedMetric(
            "ROC AUC needs both positive and negative samples".into(),
        ));
    }
    Ok((positive_rank_sum - p * (p + 1.0) / 2.0) / (p * n))
}

/// One-vs-rest ROC AUC for a probability matrix with one column per class
pub fn roc_auc_ovr(y_true: &[usize], proba: &Array2<f64>, average: Average) -> Result<f64> {
    if proba.nrows() != y_true.len() {
        return Err(Error::length_mismatch("probability rows", y_true.len(), proba.nrows()));
    }
    let n_classes = proba.ncols();
    if n_classes < 2 {
        return Err(Error::InvalidParameter(
            "one-vs-rest AUC needs at least 2 probability columns".into(),
        ));
    }
    if let Some(&bad) = y_true.iter().find(|&&y| y >= n_classes) {
        return Err(Error::InvalidParameter(format!(
            "label {bad} has no probability column"
        )));
    }

    let mut aucs = Vec::with_capacity(n_classes);
    let mut supports = Vec::with_capacity(n_classes);
    for class in 0..n_classes {
        let column = proba.column(class).to_vec();
        aucs.push(roc_auc_score(y_true, &column, class)?);
        supports.push(y_true.iter().filter(|&&y| y == class).count() as f64);
    }

    match average {
        Average::Macro => Ok(aucs.iter().sum::<f64>() / n_classes as f64),
        Average::Weighted => {
            let total: f64 = supports.iter().sum();
            Ok(aucs.iter().zip(&supports).map(|(a, s)| a * s).sum::<f64>() / total)
        }
        other => Err(Error::InvalidParameter(format!(
            "one-vs-rest AUC supports macro or weighted averaging, not {other}"
        ))),
    }
}
