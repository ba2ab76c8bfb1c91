//! Confusion matrix for multi-class classification

use crate::error::{check_pair, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalization applied by [`ConfusionMatrix::normalized`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalize {
    /// Divide each row by its support (rows sum to 1)
    True,
    /// Divide each column by the number of predictions (columns sum to 1)
    Pred,
    /// Divide every cell by the sample count
    All,
}

/// Counts for one class treated as positive against the rest
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BinaryCounts {
    pub tp: usize,
    pub fp: usize,
    pub tn: usize,
    pub fn_: usize,
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

impl BinaryCounts {
    /// Recall / sensitivity: TP / (TP + FN)
    pub fn tpr(&self) -> f64 {
        ratio(self.tp, self.tp + self.fn_)
    }

    /// Fall-out: FP / (FP + TN)
    pub fn fpr(&self) -> f64 {
        ratio(self.fp, self.fp + self.tn)
    }

    /// TP / (TP + FP)
    pub fn precision(&self) -> f64 {
        ratio(self.tp, self.tp + self.fp)
    }

    /// TN / (TN + FP)
    pub fn specificity(&self) -> f64 {
        ratio(self.tn, self.tn + self.fp)
    }
}

/// Confusion matrix for multi-class classification
///
/// Element [i][j] represents count of samples with true label i predicted as j
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    /// The matrix data: matrix[true_label][predicted_label] = count
    matrix: Vec<Vec<usize>>,
    /// Number of classes
    n_classes: usize,
    /// Class labels (indices)
    labels: Vec<usize>,
}

impl ConfusionMatrix {
    /// Create a new confusion matrix with given number of classes
    pub fn new(n_classes: usize) -> Self {
        Self {
            matrix: vec![vec![0; n_classes]; n_classes],
            n_classes,
            labels: (0..n_classes).collect(),
        }
    }

    /// Create from predictions and ground truth
    ///
    /// The number of classes is the largest label seen plus one.
    ///
    /// # Panics
    /// Panics if the slices differ in length.
    pub fn from_predictions(y_pred: &[usize], y_true: &[usize]) -> Self {
        assert_eq!(y_pred.len(), y_true.len(), "Predictions and targets must have same length");

        let n_classes = y_pred.iter().chain(y_true.iter()).max().map_or(0, |&m| m + 1);

        let mut cm = Self::new(n_classes);
        for (&pred, &true_label) in y_pred.iter().zip(y_true.iter()) {
            cm.matrix[true_label][pred] += 1;
        }
        cm
    }

    /// Create with a fixed number of classes, rejecting out-of-range labels
    pub fn with_labels(y_pred: &[usize], y_true: &[usize], n_classes: usize) -> Result<Self> {
        check_pair(y_pred, y_true)?;
        let mut cm = Self::new(n_classes);
        for (&pred, &true_label) in y_pred.iter().zip(y_true.iter()) {
            if pred >= n_classes || true_label >= n_classes {
                return Err(Error::InvalidParameter(format!(
                    "label {} out of range for {n_classes} classes",
                    pred.max(true_label)
                )));
            }
            cm.matrix[true_label][pred] += 1;
        }
        Ok(cm)
    }

    /// Get the raw matrix
    pub fn matrix(&self) -> &Vec<Vec<usize>> {
        &self.matrix
    }

    /// Get the class labels
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Get number of classes
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Get element at [true_label][predicted_label]
    pub fn get(&self, true_label: usize, predicted_label: usize) -> usize {
        self.matrix[true_label][predicted_label]
    }

    /// Calculate true positives for a class
    pub fn true_positives(&self, class: usize) -> usize {
        self.matrix[class][class]
    }

    /// Calculate false positives for a class (predicted as class but wasn't)
    pub fn false_positives(&self, class: usize) -> usize {
        (0..self.n_classes).filter(|&i| i != class).map(|i| self.matrix[i][class]).sum()
    }

    /// Calculate false negatives for a class (was class but predicted differently)
    pub fn false_negatives(&self, class: usize) -> usize {
        (0..self.n_classes).filter(|&j| j != class).map(|j| self.matrix[class][j]).sum()
    }

    /// Calculate true negatives for a class
    pub fn true_negatives(&self, class: usize) -> usize {
        self.total()
            - self.true_positives(class)
            - self.false_positives(class)
            - self.false_negatives(class)
    }

    /// Calculate support (total true instances) for a class
    pub fn support(&self, class: usize) -> usize {
        self.matrix[class].iter().sum()
    }

    /// Number of samples predicted as `class`
    pub fn predicted_count(&self, class: usize) -> usize {
        self.matrix.iter().map(|row| row[class]).sum()
    }

    /// Whether `class` occurs in either the targets or the predictions
    pub fn is_present(&self, class: usize) -> bool {
        self.support(class) > 0 || self.predicted_count(class) > 0
    }

    /// Total number of samples
    pub fn total(&self) -> usize {
        self.matrix.iter().flatten().sum()
    }

    /// Calculate accuracy
    pub fn accuracy(&self) -> f64 {
        let correct: usize = (0..self.n_classes).map(|i| self.matrix[i][i]).sum();
        ratio(correct, self.total())
    }

    /// One-vs-rest counts for `pos_label`
    ///
    /// # Panics
    /// Panics if `pos_label >= n_classes`.
    pub fn binary(&self, pos_label: usize) -> BinaryCounts {
        BinaryCounts {
            tp: self.true_positives(pos_label),
            fp: self.false_positives(pos_label),
            tn: self.true_negatives(pos_label),
            fn_: self.false_negatives(pos_label),
        }
    }

    /// Fractions instead of counts; empty rows/columns stay at zero
    pub fn normalized(&self, normalize: Normalize) -> Vec<Vec<f64>> {
        let total = self.total();
        (0..self.n_classes)
            .map(|i| {
                (0..self.n_classes)
                    .map(|j| {
                        let den = match normalize {
                            Normalize::True => self.support(i),
                            Normalize::Pred => self.predicted_count(j),
                            Normalize::All => total,
                        };
                        ratio(self.matrix[i][j], den)
                    })
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;

        // Header
        write!(f, "      ")?;
        for j in 0..self.n_classes {
            write!(f, "Pred {j} ")?;
        }
        writeln!(f)?;

        // Rows
        for i in 0..self.n_classes {
            write!(f, "True {i}")?;
            for j in 0..self.n_classes {
                write!(f, "{:>6} ", self.matrix[i][j])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
