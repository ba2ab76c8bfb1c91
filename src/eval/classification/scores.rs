//! Scalar classification scores with input validation

use super::average::Average;
use super::confusion::ConfusionMatrix;
use super::metrics::MultiClassMetrics;
use crate::error::{check_pair, Error, Result};

/// Confusion matrix wide enough for every label and, for binary averages, the positive label
fn checked_matrix(y_pred: &[usize], y_true: &[usize], average: Average) -> Result<ConfusionMatrix> {
    check_pair(y_pred, y_true)?;
    let mut n_classes = y_pred.iter().chain(y_true).max().map_or(0, |&m| m + 1);
    if let Average::Binary { pos_label } = average {
        n_classes = n_classes.max(pos_label + 1);
    }
    ConfusionMatrix::with_labels(y_pred, y_true, n_classes)
}

fn checked_metrics(y_pred: &[usize], y_true: &[usize], average: Average) -> Result<MultiClassMetrics> {
    let cm = checked_matrix(y_pred, y_true, average)?;
    Ok(MultiClassMetrics::from_confusion_matrix(&cm))
}

/// Fraction of predictions equal to the target
///
/// ```
/// use evaluar::eval::accuracy;
///
/// let acc = accuracy(&[0, 1, 1, 0], &[0, 1, 0, 0]).unwrap();
/// assert!((acc - 0.75).abs() < 1e-12);
/// ```
pub fn accuracy(y_pred: &[usize], y_true: &[usize]) -> Result<f64> {
    check_pair(y_pred, y_true)?;
    let correct = y_pred.iter().zip(y_true).filter(|(p, t)| p == t).count();
    Ok(correct as f64 / y_true.len() as f64)
}

/// Mean per-class recall over classes present in `y_true`
pub fn balanced_accuracy(y_pred: &[usize], y_true: &[usize]) -> Result<f64> {
    Ok(checked_metrics(y_pred, y_true, Average::Macro)?.balanced_accuracy())
}

/// TP / (TP + FP), averaged as requested
pub fn precision_score(y_pred: &[usize], y_true: &[usize], average: Average) -> Result<f64> {
    Ok(checked_metrics(y_pred, y_true, average)?.precision_avg(average))
}

/// TP / (TP + FN), averaged as requested
pub fn recall_score(y_pred: &[usize], y_true: &[usize], average: Average) -> Result<f64> {
    Ok(checked_metrics(y_pred, y_true, average)?.recall_avg(average))
}

/// Harmonic mean of precision and recall
pub fn f1_score(y_pred: &[usize], y_true: &[usize], average: Average) -> Result<f64> {
    fbeta_score(y_pred, y_true, 1.0, average)
}

/// Weighted harmonic mean; `beta > 1` favours recall
pub fn fbeta_score(y_pred: &[usize], y_true: &[usize], beta: f64, average: Average) -> Result<f64> {
    if !(beta.is_finite() && beta > 0.0) {
        return Err(Error::InvalidParameter(format!("beta must be positive, got {beta}")));
    }
    Ok(checked_metrics(y_pred, y_true, average)?.fbeta_avg(beta, average))
}

/// TN / (TN + FP), averaged as requested
pub fn specificity_score(y_pred: &[usize], y_true: &[usize], average: Average) -> Result<f64> {
    Ok(checked_metrics(y_pred, y_true, average)?.specificity_avg(average))
}

/// Confusion matrix with validation instead of panics
pub fn try_confusion_matrix(y_pred: &[usize], y_true: &[usize]) -> Result<ConfusionMatrix> {
    checked_matrix(y_pred, y_true, Average::Macro)
}
