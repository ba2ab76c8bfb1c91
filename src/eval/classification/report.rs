//! Classification report functions

use super::average::Average;
use super::confusion::ConfusionMatrix;
use super::metrics::MultiClassMetrics;
use crate::error::Result;
use serde::Serialize;
use std::fmt;

/// Compute confusion matrix from predictions and ground truth
///
/// # Arguments
/// * `y_pred` - Predicted class labels
/// * `y_true` - Ground truth class labels
///
/// # Returns
/// A ConfusionMatrix where element [i][j] is count of true label i predicted as j
///
/// # Example
/// ```
/// use evaluar::eval::confusion_matrix;
///
/// let y_pred = vec![0, 1, 1, 2, 0];
/// let y_true = vec![0, 1, 0, 2, 1];
/// let cm = confusion_matrix(&y_pred, &y_true);
///
/// assert_eq!(cm.get(0, 0), 1);  // True 0, predicted 0
/// assert_eq!(cm.get(0, 1), 1);  // True 0, predicted 1
/// ```
pub fn confusion_matrix(y_pred: &[usize], y_true: &[usize]) -> ConfusionMatrix {
    ConfusionMatrix::from_predictions(y_pred, y_true)
}

/// One row of a classification report
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportRow {
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

/// Per-class and averaged metrics, serializable for JSON output
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClassificationReport {
    pub classes: Vec<ReportRow>,
    pub accuracy: f64,
    pub macro_avg: ReportRow,
    pub weighted_avg: ReportRow,
}

impl ClassificationReport {
    pub fn from_confusion_matrix(cm: &ConfusionMatrix) -> Self {
        let metrics = MultiClassMetrics::from_confusion_matrix(cm);
        let total_support: usize = metrics.support.iter().sum();

        let classes = (0..metrics.n_classes)
            .map(|class| ReportRow {
                label: class.to_string(),
                precision: metrics.precision[class],
                recall: metrics.recall[class],
                f1: metrics.f1[class],
                support: metrics.support[class],
            })
            .collect();

        let averaged = |label: &str, average: Average| ReportRow {
            label: label.to_string(),
            precision: metrics.precision_avg(average),
            recall: metrics.recall_avg(average),
            f1: metrics.f1_avg(average),
            support: total_support,
        };

        Self {
            classes,
            accuracy: cm.accuracy(),
            macro_avg: averaged("macro avg", Average::Macro),
            weighted_avg: averaged("weighted avg", Average::Weighted),
        }
    }

    /// Validating constructor
    pub fn from_predictions(y_pred: &[usize], y_true: &[usize]) -> Result<Self> {
        let cm = super::scores::try_confusion_matrix(y_pred, y_true)?;
        Ok(Self::from_confusion_matrix(&cm))
    }

    fn total_support(&self) -> usize {
        self.macro_avg.support
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, row: &ReportRow) -> fmt::Result {
    writeln!(
        f,
        "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}",
        row.label, row.precision, row.recall, row.f1, row.support
    )
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Header
        writeln!(
            f,
            "{:>12} {:>10} {:>10} {:>10} {:>10}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f, "{}", "-".repeat(56))?;

        for row in &self.classes {
            write_row(f, row)?;
        }

        writeln!(f, "{}", "-".repeat(56))?;
        writeln!(
            f,
            "{:>12} {:>10} {:>10} {:>10.2} {:>10}",
            "accuracy",
            "",
            "",
            self.accuracy,
            self.total_support()
        )?;
        write_row(f, &self.macro_avg)?;
        write_row(f, &self.weighted_avg)
    }
}

/// Generate sklearn-style classification report
///
/// # Arguments
/// * `y_pred` - Predicted class labels
/// * `y_true` - Ground truth class labels
///
/// # Returns
/// A formatted string containing per-class and overall metrics
///
/// # Panics
/// Panics if the slices differ in length; use [`ClassificationReport::from_predictions`]
/// for a checked version.
pub fn classification_report(y_pred: &[usize], y_true: &[usize]) -> String {
    let cm = ConfusionMatrix::from_predictions(y_pred, y_true);
    ClassificationReport::from_confusion_matrix(&cm).to_string()
}
