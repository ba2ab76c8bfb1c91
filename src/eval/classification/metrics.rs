//! Multi-class classification metrics

use super::average::Average;
use super::confusion::ConfusionMatrix;

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// F-beta from raw counts: (1 + β²)·TP / ((1 + β²)·TP + β²·FN + FP)
fn fbeta_from_counts(tp: usize, fp: usize, fn_: usize, beta: f64) -> f64 {
    let b2 = beta * beta;
    let num = (1.0 + b2) * tp as f64;
    let den = num + b2 * fn_ as f64 + fp as f64;
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

/// Multi-class classification metrics
#[derive(Clone, Debug)]
pub struct MultiClassMetrics {
    /// Per-class precision
    pub precision: Vec<f64>,
    /// Per-class recall
    pub recall: Vec<f64>,
    /// Per-class F1 score
    pub f1: Vec<f64>,
    /// Per-class specificity (true negative rate)
    pub specificity: Vec<f64>,
    /// Per-class support (count)
    pub support: Vec<usize>,
    /// Number of classes
    pub n_classes: usize,
    tp: Vec<usize>,
    fp: Vec<usize>,
    fn_: Vec<usize>,
    tn: Vec<usize>,
    /// Classes seen in targets or predictions; macro averages skip the rest
    present: Vec<bool>,
}

impl MultiClassMetrics {
    /// Compute metrics from confusion matrix
    pub fn from_confusion_matrix(cm: &ConfusionMatrix) -> Self {
        let n_classes = cm.n_classes();
        let mut metrics = Self {
            precision: Vec::with_capacity(n_classes),
            recall: Vec::with_capacity(n_classes),
            f1: Vec::with_capacity(n_classes),
            specificity: Vec::with_capacity(n_classes),
            support: Vec::with_capacity(n_classes),
            n_classes,
            tp: Vec::with_capacity(n_classes),
            fp: Vec::with_capacity(n_classes),
            fn_: Vec::with_capacity(n_classes),
            tn: Vec::with_capacity(n_classes),
            present: Vec::with_capacity(n_classes),
        };

        for class in 0..n_classes {
            let counts = cm.binary(class);

            metrics.precision.push(counts.precision());
            metrics.recall.push(counts.tpr());
            metrics
                .f1
                .push(fbeta_from_counts(counts.tp, counts.fp, counts.fn_, 1.0));
            metrics.specificity.push(counts.specificity());
            metrics.support.push(cm.support(class));

            metrics.tp.push(counts.tp);
            metrics.fp.push(counts.fp);
            metrics.fn_.push(counts.fn_);
            metrics.tn.push(counts.tn);
            metrics.present.push(cm.is_present(class));
        }

        metrics
    }

    /// Compute from predictions and ground truth
    pub fn from_predictions(y_pred: &[usize], y_true: &[usize]) -> Self {
        let cm = ConfusionMatrix::from_predictions(y_pred, y_true);
        Self::from_confusion_matrix(&cm)
    }

    /// Per-class F-beta scores
    pub fn fbeta(&self, beta: f64) -> Vec<f64> {
        (0..self.n_classes)
            .map(|c| fbeta_from_counts(self.tp[c], self.fp[c], self.fn_[c], beta))
            .collect()
    }

    /// Get averaged precision
    pub fn precision_avg(&self, average: Average) -> f64 {
        let micro = ratio(self.total(&self.tp), self.total(&self.tp) + self.total(&self.fp));
        self.average_metric(&self.precision, average, micro)
    }

    /// Get averaged recall
    pub fn recall_avg(&self, average: Average) -> f64 {
        let micro = ratio(self.total(&self.tp), self.total(&self.tp) + self.total(&self.fn_));
        self.average_metric(&self.recall, average, micro)
    }

    /// Get averaged F1
    pub fn f1_avg(&self, average: Average) -> f64 {
        self.fbeta_avg(1.0, average)
    }

    /// Get averaged F-beta
    pub fn fbeta_avg(&self, beta: f64, average: Average) -> f64 {
        let micro = fbeta_from_counts(
            self.total(&self.tp),
            self.total(&self.fp),
            self.total(&self.fn_),
            beta,
        );
        self.average_metric(&self.fbeta(beta), average, micro)
    }

    /// Get averaged specificity
    pub fn specificity_avg(&self, average: Average) -> f64 {
        let micro = ratio(self.total(&self.tn), self.total(&self.tn) + self.total(&self.fp));
        self.average_metric(&self.specificity, average, micro)
    }

    /// Mean recall over classes that occur in the targets
    pub fn balanced_accuracy(&self) -> f64 {
        let recalls: Vec<f64> = (0..self.n_classes)
            .filter(|&c| self.support[c] > 0)
            .map(|c| self.recall[c])
            .collect();
        if recalls.is_empty() {
            0.0
        } else {
            recalls.iter().sum::<f64>() / recalls.len() as f64
        }
    }

    fn total(&self, counts: &[usize]) -> usize {
        counts.iter().sum()
    }

    fn average_metric(&self, values: &[f64], average: Average, micro: f64) -> f64 {
        match average {
            Average::Binary { pos_label } => values.get(pos_label).copied().unwrap_or(0.0),
            Average::Macro | Average::None => {
                let present: Vec<f64> = values
                    .iter()
                    .zip(&self.present)
                    .filter(|(_, &p)| p)
                    .map(|(&v, _)| v)
                    .collect();
                if present.is_empty() {
                    0.0
                } else {
                    present.iter().sum::<f64>() / present.len() as f64
                }
            }
            Average::Micro => micro,
            Average::Weighted => {
                let total_support: usize = self.support.iter().sum();
                if total_support == 0 {
                    return 0.0;
                }
                values
                    .iter()
                    .zip(self.support.iter())
                    .map(|(&v, &s)| v * s as f64)
                    .sum::<f64>()
                    / total_support as f64
            }
        }
    }
}
