//! Tests for ROC and precision-recall curves

use super::*;
use crate::error::Error;
use crate::eval::classification::Average;
use approx::assert_abs_diff_eq;
use ndarray::array;

const Y: [usize; 4] = [0, 0, 1, 1];
const S: [f64; 4] = [0.1, 0.4, 0.35, 0.8];

#[test]
fn test_roc_curve_sklearn_example() {
    let roc = roc_curve(&Y, &S, 1, false).unwrap();
    assert_eq!(roc.fpr, vec![0.0, 0.0, 0.5, 0.5, 1.0]);
    assert_eq!(roc.tpr, vec![0.0, 0.5, 0.5, 1.0, 1.0]);
    assert!(roc.thresholds[0].is_infinite());
    assert_eq!(&roc.thresholds[1..], &[0.8, 0.4, 0.35, 0.1]);
    assert_abs_diff_eq!(roc.auc(), 0.75, epsilon = 1e-12);
}

#[test]
fn test_roc_auc_matches_curve_area() {
    let y = [1, 0, 1, 1, 0, 0, 1, 0, 1, 0];
    let s = [0.9, 0.8, 0.7, 0.7, 0.5, 0.4, 0.4, 0.2, 0.1, 0.1];
    let roc = roc_curve(&y, &s, 1, true).unwrap();
    let score = roc_auc_score(&y, &s, 1).unwrap();
    assert_abs_diff_eq!(auc(&roc.fpr, &roc.tpr).unwrap(), score, epsilon = 1e-12);
}

#[test]
fn test_roc_perfect_and_inverted() {
    let y = [0, 0, 1, 1];
    let s = [0.1, 0.2, 0.8, 0.9];
    assert_abs_diff_eq!(roc_auc_score(&y, &s, 1).unwrap(), 1.0);
    let flipped: Vec<f64> = s.iter().map(|v| -v).collect();
    assert_abs_diff_eq!(roc_auc_score(&y, &flipped, 1).unwrap(), 0.0);
    // Class 0 as positive mirrors the curve
    assert_abs_diff_eq!(roc_auc_score(&y, &s, 0).unwrap(), 0.0);
}

#[test]
fn test_roc_constant_scores() {
    let y = [0, 1, 0, 1, 1];
    let s = [0.5; 5];
    let roc = roc_curve(&y, &s, 1, true).unwrap();
    assert_eq!(roc.fpr, vec![0.0, 1.0]);
    assert_eq!(roc.tpr, vec![0.0, 1.0]);
    assert_abs_diff_eq!(roc_auc_score(&y, &s, 1).unwrap(), 0.5);
}

#[test]
fn test_roc_drop_intermediate() {
    let y = [1, 1, 1, 0, 0, 0];
    let s = [0.9, 0.8, 0.7, 0.6, 0.5, 0.4];

    let full = roc_curve(&y, &s, 1, false).unwrap();
    assert_eq!(full.len(), 7);

    let dropped = roc_curve(&y, &s, 1, true).unwrap();
    assert_eq!(dropped.fpr, vec![0.0, 0.0, 0.0, 1.0]);
    assert_eq!(dropped.tpr, vec![0.0, 1.0 / 3.0, 1.0, 1.0]);
    assert_abs_diff_eq!(dropped.auc(), full.auc(), epsilon = 1e-12);
}

#[test]
fn test_roc_single_class_is_undefined() {
    let err = roc_curve(&[1, 1, 1], &[0.2, 0.3, 0.4], 1, true).unwrap_err();
    assert!(matches!(err, Error::UndefinedMetric(_)));
    assert!(matches!(
        roc_auc_score(&[0, 0], &[0.2, 0.3], 1),
        Err(Error::UndefinedMetric(_))
    ));
}

#[test]
fn test_curve_input_validation() {
    assert!(matches!(roc_curve(&[0, 1], &[0.5], 1, true), Err(Error::ShapeMismatch { .. })));
    assert!(matches!(roc_curve(&[], &[], 1, true), Err(Error::EmptyInput(_))));
    assert!(matches!(
        roc_auc_score(&[0, 1], &[f64::NAN, 0.5], 1),
        Err(Error::InvalidParameter(_))
    ));
}

#[test]
fn test_auc_direction_and_errors() {
    let inc = auc(&[0.0, 0.5, 1.0], &[1.0, 1.0, 1.0]).unwrap();
    let dec = auc(&[1.0, 0.5, 0.0], &[1.0, 1.0, 1.0]).unwrap();
    assert_abs_diff_eq!(inc, 1.0);
    assert_abs_diff_eq!(dec, 1.0);

    assert!(auc(&[0.0, 1.0, 0.5], &[0.0, 1.0, 1.0]).is_err());
    assert!(auc(&[0.0], &[1.0]).is_err());
    assert!(auc(&[0.0, 1.0], &[1.0]).is_err());
}

#[test]
fn test_roc_auc_ovr() {
    let y = [0, 1, 2, 0, 1, 2];
    let perfect = array![
        [0.8, 0.1, 0.1],
        [0.1, 0.8, 0.1],
        [0.1, 0.1, 0.8],
        [0.7, 0.2, 0.1],
        [0.2, 0.7, 0.1],
        [0.2, 0.1, 0.7],
    ];
    assert_abs_diff_eq!(roc_auc_ovr(&y, &perfect, Average::Macro).unwrap(), 1.0);
    assert_abs_diff_eq!(roc_auc_ovr(&y, &perfect, Average::Weighted).unwrap(), 1.0);
    assert!(roc_auc_ovr(&y, &perfect, Average::Micro).is_err());
    assert!(roc_auc_ovr(&[0, 1, 3, 0, 1, 2], &perfect, Average::Macro).is_err());
    assert!(roc_auc_ovr(&y[..3], &perfect, Average::Macro).is_err());
}

#[test]
fn test_roc_auc_ovr_absent_class() {
    let y = [0, 1, 0, 1];
    let proba = array![[0.6, 0.3, 0.1], [0.3, 0.6, 0.1], [0.5, 0.4, 0.1], [0.2, 0.7, 0.1]];
    assert!(matches!(
        roc_auc_ovr(&y, &proba, Average::Macro),
        Err(Error::UndefinedMetric(_))
    ));
}

#[test]
fn test_precision_recall_curve_example() {
    let pr = precision_recall_curve(&Y, &S, 1).unwrap();
    assert_abs_diff_eq!(pr.precision[0], 2.0 / 3.0, epsilon = 1e-12);
    assert_eq!(&pr.precision[1..], &[0.5, 1.0, 1.0]);
    assert_eq!(pr.recall, vec![1.0, 0.5, 0.5, 0.0]);
    assert_eq!(pr.thresholds, vec![0.35, 0.4, 0.8]);
    assert_eq!(pr.thresholds.len(), pr.len() - 1);
    assert_abs_diff_eq!(pr.no_skill(), 0.5);
}

#[test]
fn test_average_precision_and_pr_auc() {
    // 0.5 * 2/3 + 0.5 * 1
    let ap = average_precision_score(&Y, &S, 1).unwrap();
    assert_abs_diff_eq!(ap, 5.0 / 6.0, epsilon = 1e-12);

    let area = pr_auc_score(&Y, &S, 1).unwrap();
    assert_abs_diff_eq!(area, 0.5 * (7.0 / 12.0) + 0.5, epsilon = 1e-12);
}

#[test]
fn test_average_precision_perfect() {
    let y = [0, 1, 0, 1, 1];
    let s = [0.1, 0.9, 0.2, 0.8, 0.7];
    assert_abs_diff_eq!(average_precision_score(&y, &s, 1).unwrap(), 1.0);
    let pr = precision_recall_curve(&y, &s, 1).unwrap();
    assert!(pr.precision.iter().all(|&p| p == 1.0));
}

#[test]
fn test_pr_curve_recall_is_decreasing() {
    let y = [1, 0, 1, 1, 0, 0, 1, 0, 1, 0];
    let s = [0.9, 0.8, 0.7, 0.7, 0.5, 0.4, 0.4, 0.2, 0.1, 0.1];
    let pr = precision_recall_curve(&y, &s, 1).unwrap();
    assert!(pr.recall.windows(2).all(|w| w[0] >= w[1]));
    assert!(pr.thresholds.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(pr.recall[0], 1.0);
    assert_eq!(*pr.precision.last().unwrap(), 1.0);
}

#[test]
fn test_pr_curve_without_positives() {
    assert!(matches!(
        precision_recall_curve(&[0, 0], &[0.1, 0.2], 1),
        Err(Error::UndefinedMetric(_))
    ));
}

#[test]
fn test_binary_clf_curve_groups_ties() {
    let counts = binary_clf_curve(&[1, 0, 1], &[0.5, 0.5, 0.2], 1).unwrap();
    assert_eq!(counts.thresholds, vec![0.5, 0.2]);
    assert_eq!(counts.tps, vec![1.0, 2.0]);
    assert_eq!(counts.fps, vec![1.0, 1.0]);
}
