//! Decision thresholds for score-based binary classifiers

use super::classification::BinaryCounts;
use super::curves::binary_clf_curve;
use crate::error::{Error, Result};
use serde::Serialize;

/// Label `1` where `score >= threshold`, `0` elsewhere
pub fn predict_at_threshold(scores: &[f64], threshold: f64) -> Vec<usize> {
    scores.iter().map(|&s| usize::from(s >= threshold)).collect()
}

/// Binary metrics obtained by cutting at one threshold
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ThresholdPoint {
    pub threshold: f64,
    pub counts: BinaryCounts,
    pub precision: f64,
    pub recall: f64,
    pub specificity: f64,
    /// Youden's J: recall + specificity - 1
    pub youden_j: f64,
}

impl ThresholdPoint {
    fn from_counts(threshold: f64, counts: BinaryCounts) -> Self {
        let recall = counts.tpr();
        let specificity = counts.specificity();
        Self {
            threshold,
            counts,
            precision: counts.precision(),
            recall,
            specificity,
            youden_j: recall + specificity - 1.0,
        }
    }

    pub fn fbeta(&self, beta: f64) -> f64 {
        let b2 = beta * beta;
        let den = b2 * self.precision + self.recall;
        if den == 0.0 {
            0.0
        } else {
            (1.0 + b2) * self.precision * self.recall / den
        }
    }
}

/// Metrics at every distinct score, from the strictest threshold down
#[derive(Clone, Debug)]
pub struct ThresholdSweep {
    points: Vec<ThresholdPoint>,
}

impl ThresholdSweep {
    pub fn new(y_true: &[usize], scores: &[f64], pos_label: usize) -> Result<Self> {
        let counts = binary_clf_curve(y_true, scores, pos_label)?;
        let (p, n) = (counts.positives() as usize, counts.negatives() as usize);
        if p == 0 || n == 0 {
            return Err(Error::UndefinedMetric(
                "threshold sweep needs both positive and negative samples".into(),
            ));
        }

        let points = counts
            .thresholds
            .iter()
            .zip(counts.tps.iter().zip(&counts.fps))
            .map(|(&threshold, (&tp, &fp))| {
                let (tp, fp) = (tp as usize, fp as usize);
                ThresholdPoint::from_counts(
                    threshold,
                    BinaryCounts {
                        tp,
                        fp,
                        tn: n - fp,
                        fn_: p - tp,
                    },
                )
            })
            .collect();
        Ok(Self { points })
    }

    pub fn points(&self) -> &[ThresholdPoint] {
        &self.points
    }

    /// Threshold maximizing Youden's J; ties keep the higher threshold
    pub fn best_by_youden(&self) -> ThresholdPoint {
        self.best_by(|p| p.youden_j)
    }

    /// Threshold maximizing F-beta; ties keep the higher threshold
    pub fn best_by_fbeta(&self, beta: f64) -> ThresholdPoint {
        self.best_by(|p| p.fbeta(beta))
    }

    fn best_by(&self, key: impl Fn(&ThresholdPoint) -> f64) -> ThresholdPoint {
        let mut best = self.points[0];
        for point in &self.points[1..] {
            if key(point) > key(&best) {
                best = *point;
            }
        }
        best
    }
}
