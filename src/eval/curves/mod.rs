//! Score-based curves: ROC, precision-recall and the area under them
//!
//! All curves are built from the same cumulative counts: samples sorted by
//! descending score, one point per distinct score.

mod auc;
mod pr;
mod roc;

#[cfg(test)]
mod tests;

pub use auc::auc;
pub use pr::{average_precision_score, pr_auc_score, precision_recall_curve, PrecisionRecallCurve};
pub use roc::{roc_auc_ovr, roc_auc_score, roc_curve, RocCurve};

use crate::error::{check_pair, Error, Result};
use std::cmp::Ordering;

/// Cumulative true/false positive counts at each distinct threshold
#[derive(Clone, Debug)]
pub(crate) struct ClfCounts {
    /// False positives with `score >= thresholds[i]`
    pub fps: Vec<f64>,
    /// True positives with `score >= thresholds[i]`
    pub tps: Vec<f64>,
    /// Distinct scores, decreasing
    pub thresholds: Vec<f64>,
}

impl ClfCounts {
    pub fn positives(&self) -> f64 {
        self.tps.last().copied().unwrap_or(0.0)
    }

    pub fn negatives(&self) -> f64 {
        self.fps.last().copied().unwrap_or(0.0)
    }
}

/// Paired, non-empty inputs without NaN scores
pub(crate) fn check_scores(y_true: &[usize], scores: &[f64]) -> Result<()> {
    check_pair(y_true, scores)?;
    if scores.iter().any(|s| s.is_nan()) {
        return Err(Error::InvalidParameter("scores must not contain NaN".into()));
    }
    Ok(())
}

pub(crate) fn binary_clf_curve(y_true: &[usize], scores: &[f64], pos_label: usize) -> Result<ClfCounts> {
    check_scores(y_true, scores)?;

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));

    let mut counts = ClfCounts {
        fps: Vec::new(),
        tps: Vec::new(),
        thresholds: Vec::new(),
    };
    let (mut tp, mut fp) = (0.0, 0.0);
    for (rank, &idx) in order.iter().enumerate() {
        if y_true[idx] == pos_label {
            tp += 1.0;
        } else {
            fp += 1.0;
        }
        // Close the group at the last sample of each distinct score
        let last_of_group = order
            .get(rank + 1)
            .map_or(true, |&next| scores[next] != scores[idx]);
        if last_of_group {
            counts.tps.push(tp);
            counts.fps.push(fp);
            counts.thresholds.push(scores[idx]);
        }
    }
    Ok(counts)
}
