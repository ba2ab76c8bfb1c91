//! Tests for cross-validation, KFold, and classification evaluation

use crate::error::Error;
use crate::eval::classification::Average;
use crate::eval::evaluator::*;
use approx::assert_abs_diff_eq;
use ndarray::array;

#[test]
fn test_kfold_split() {
    let kfold = KFold::new(5).unwrap().without_shuffle();
    let folds = kfold.split(100);

    assert_eq!(folds.len(), 5);

    for (train, test) in &folds {
        assert_eq!(test.len(), 20);
        assert_eq!(train.len(), 80);
    }

    // All indices should be covered exactly once across test sets
    let mut all_test: Vec<usize> = folds.iter().flat_map(|(_, t)| t.iter().copied()).collect();
    all_test.sort_unstable();
    assert_eq!(all_test, (0..100).collect::<Vec<_>>());
}

#[test]
fn test_kfold_uneven_split() {
    let folds = KFold::new(3).unwrap().without_shuffle().split(10);
    let test_sizes: Vec<usize> = folds.iter().map(|(_, t)| t.len()).collect();
    assert_eq!(test_sizes, vec![4, 3, 3]);
}

#[test]
fn test_kfold_shuffled() {
    let folds1 = KFold::new(5).unwrap().with_seed(42).split(100);
    let folds2 = KFold::new(5).unwrap().with_seed(42).split(100);
    let folds3 = KFold::new(5).unwrap().with_seed(99).split(100);

    assert_eq!(folds1[0].1, folds2[0].1);
    assert_ne!(folds1[0].1, folds3[0].1);
}

#[test]
fn test_splitters_reject_fewer_than_two_folds() {
    for n_splits in [0, 1] {
        assert!(matches!(KFold::new(n_splits), Err(Error::InvalidParameter(_))));
        assert!(matches!(
            StratifiedKFold::new(n_splits),
            Err(Error::InvalidParameter(_))
        ));
    }
    assert_eq!(KFold::new(2).unwrap().split(4).len(), 2);
    assert_eq!(StratifiedKFold::new(2).unwrap().split(&[0, 1, 0, 1]).len(), 2);
}

#[test]
fn test_stratified_kfold_keeps_proportions() {
    // 80 negatives, 20 positives
    let y: Vec<usize> = (0..100).map(|i| usize::from(i % 5 == 0)).collect();
    let folds = StratifiedKFold::new(5).unwrap().with_seed(7).split(&y);

    assert_eq!(folds.len(), 5);
    for (train, test) in &folds {
        assert_eq!(test.len(), 20);
        assert_eq!(train.len() + test.len(), 100);
        let positives = test.iter().filter(|&&i| y[i] == 1).count();
        assert_eq!(positives, 4);
    }

    let mut all_test: Vec<usize> = folds.iter().flat_map(|(_, t)| t.iter().copied()).collect();
    all_test.sort_unstable();
    assert_eq!(all_test, (0..100).collect::<Vec<_>>());
}

#[test]
fn test_stratified_kfold_uneven_classes() {
    let y = vec![0, 0, 0, 1, 1, 2, 2, 2, 2, 2, 2];
    let folds = StratifiedKFold::new(3).unwrap().without_shuffle().split(&y);
    let sizes: Vec<usize> = folds.iter().map(|(_, t)| t.len()).collect();
    assert_eq!(sizes.iter().sum::<usize>(), 11);
    assert!(sizes.iter().max().unwrap() - sizes.iter().min().unwrap() <= 1);
}

#[test]
fn test_evaluate_classification() {
    let config = EvalConfig {
        metrics: vec![
            Metric::Accuracy,
            Metric::Precision(Average::Macro),
            Metric::Recall(Average::Macro),
            Metric::F1(Average::Macro),
            Metric::BalancedAccuracy,
            Metric::RocAuc,
        ],
        ..Default::default()
    };

    let evaluator = ModelEvaluator::new(config);

    let y_pred = vec![0, 1, 1, 2, 0, 1];
    let y_true = vec![0, 1, 0, 2, 0, 2];

    let result = evaluator
        .evaluate_classification("TestModel", &y_pred, &y_true)
        .unwrap();

    assert!(result.get_score(Metric::Precision(Average::Macro)).is_some());
    assert!(result.get_score(Metric::F1(Average::Macro)).is_some());
    // Needs probabilities
    assert!(result.get_score(Metric::RocAuc).is_none());

    // Positions 0,1,3,4 correct
    assert_abs_diff_eq!(result.get_score(Metric::Accuracy).unwrap(), 4.0 / 6.0, epsilon = 1e-12);
}

#[test]
fn test_evaluate_classification_length_mismatch() {
    let evaluator = ModelEvaluator::new(EvalConfig::default());
    let err = evaluator
        .evaluate_classification("Test", &[0, 1], &[0, 1, 1])
        .unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
}

#[test]
fn test_evaluate_with_scores_binary() {
    let config = EvalConfig {
        metrics: vec![
            Metric::RocAuc,
            Metric::Accuracy,
            Metric::AveragePrecision,
            Metric::PrAuc,
            Metric::LogLoss,
        ],
        ..Default::default()
    };
    let evaluator = ModelEvaluator::new(config);

    let y_true = vec![0, 0, 1, 1];
    let proba = array![[0.9, 0.1], [0.6, 0.4], [0.65, 0.35], [0.2, 0.8]];
    let y_pred = vec![0, 0, 0, 1];

    let result = evaluator
        .evaluate_with_scores("Scored", &y_pred, &proba, &y_true)
        .unwrap();

    assert_abs_diff_eq!(result.get_score(Metric::RocAuc).unwrap(), 0.75, epsilon = 1e-12);
    assert_abs_diff_eq!(
        result.get_score(Metric::AveragePrecision).unwrap(),
        5.0 / 6.0,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(result.get_score(Metric::Accuracy).unwrap(), 0.75);
    assert!(result.get_score(Metric::PrAuc).is_some());
    assert!(result.get_score(Metric::LogLoss).unwrap() > 0.0);
    // Configured order is kept
    assert_eq!(result.metrics()[0], Metric::RocAuc);
}

#[test]
fn test_evaluate_with_scores_pos_label_zero() {
    let config = EvalConfig {
        metrics: vec![Metric::RocAuc],
        pos_label: 0,
        ..Default::default()
    };
    let evaluator = ModelEvaluator::new(config);
    let y_true = vec![0, 0, 1, 1];
    let proba = array![[0.9, 0.1], [0.6, 0.4], [0.65, 0.35], [0.2, 0.8]];
    let result = evaluator
        .evaluate_with_scores("Scored", &[0, 0, 0, 1], &proba, &y_true)
        .unwrap();
    // Class 0 scored on its own column mirrors the positive-class AUC
    assert_abs_diff_eq!(result.get_score(Metric::RocAuc).unwrap(), 0.75, epsilon = 1e-12);
}

#[test]
fn test_evaluate_with_scores_multiclass() {
    let config = EvalConfig {
        metrics: vec![Metric::RocAuc, Metric::AveragePrecision],
        ..Default::default()
    };
    let evaluator = ModelEvaluator::new(config);
    let y_true = vec![0, 1, 2, 0, 1, 2];
    let proba = array![
        [0.8, 0.1, 0.1],
        [0.1, 0.8, 0.1],
        [0.1, 0.1, 0.8],
        [0.7, 0.2, 0.1],
        [0.2, 0.7, 0.1],
        [0.2, 0.1, 0.7],
    ];
    let result = evaluator
        .evaluate_with_scores("OvR", &[0, 1, 2, 0, 1, 2], &proba, &y_true)
        .unwrap();
    assert_abs_diff_eq!(result.get_score(Metric::RocAuc).unwrap(), 1.0);
    assert_abs_diff_eq!(result.get_score(Metric::AveragePrecision).unwrap(), 1.0);
}

#[test]
fn test_compare_classification() {
    let config = EvalConfig {
        metrics: vec![Metric::Accuracy],
        ..Default::default()
    };

    let evaluator = ModelEvaluator::new(config);

    let y_true = vec![0, 1, 1, 0, 1, 0];
    let y_pred_a = vec![0, 1, 1, 1, 1, 0];
    let y_pred_b = vec![0, 1, 1, 0, 1, 0];
    let y_pred_c = vec![1, 0, 1, 1, 0, 0];

    let models: Vec<(&str, &[usize])> = vec![
        ("Model A", &y_pred_a),
        ("Model B", &y_pred_b),
        ("Model C", &y_pred_c),
    ];

    let leaderboard = evaluator.compare_classification(&models, &y_true).unwrap();

    assert_eq!(leaderboard.best().unwrap().model_name, "Model B");
    assert_eq!(leaderboard.results[2].model_name, "Model C");
}

fn perfect_predictor(y_true: &[usize]) -> impl Fn(&[usize], &[usize]) -> crate::Result<Vec<usize>> + '_ {
    move |_, test_idx| Ok(test_idx.iter().map(|&i| y_true[i]).collect())
}

#[test]
fn test_evaluate_cv() {
    let config = EvalConfig {
        metrics: vec![Metric::Accuracy],
        cv_folds: 5,
        ..Default::default()
    };
    let evaluator = ModelEvaluator::new(config);
    let y_true: Vec<usize> = (0..50).map(|i| i % 2).collect();

    let result = evaluator
        .evaluate_cv("Perfect", &y_true, perfect_predictor(&y_true))
        .unwrap();

    assert_eq!(result.cv_scores.as_ref().unwrap().len(), 5);
    assert_eq!(result.cv_mean, Some(1.0));
    assert_eq!(result.cv_std, Some(0.0));
    assert_eq!(result.get_score(Metric::Accuracy), Some(1.0));
}

#[test]
fn test_evaluate_cv_uses_first_label_metric() {
    let config = EvalConfig {
        metrics: vec![Metric::RocAuc, Metric::F1(Average::Macro)],
        cv_folds: 4,
        stratified: true,
        ..Default::default()
    };
    let evaluator = ModelEvaluator::new(config);
    let y_true: Vec<usize> = (0..40).map(|i| i % 2).collect();

    // Always predict class 0
    let result = evaluator
        .evaluate_cv("Constant", &y_true, |_, test| Ok(vec![0; test.len()]))
        .unwrap();

    // Each stratified fold is balanced: F1 macro = (2/3 + 0) / 2
    assert_abs_diff_eq!(result.cv_mean.unwrap(), 1.0 / 3.0, epsilon = 1e-12);
    assert!(result.get_score(Metric::F1(Average::Macro)).is_some());
    assert!(result.get_score(Metric::RocAuc).is_none());
}

#[test]
fn test_evaluate_cv_std_is_sample_std() {
    let config = EvalConfig {
        metrics: vec![Metric::Accuracy],
        cv_folds: 2,
        ..Default::default()
    };
    let evaluator = ModelEvaluator::new(config);
    let y_true = vec![0, 0, 0, 0];

    // First call scores 1.0, then 0.0
    let calls = std::cell::Cell::new(0);
    let result = evaluator
        .evaluate_cv("Flaky", &y_true, |_, test| {
            calls.set(calls.get() + 1);
            let label = if calls.get() == 1 { 0 } else { 1 };
            Ok(vec![label; test.len()])
        })
        .unwrap();

    assert_abs_diff_eq!(result.cv_mean.unwrap(), 0.5);
    assert_abs_diff_eq!(result.cv_std.unwrap(), 0.5f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn test_evaluate_cv_errors() {
    let y_true: Vec<usize> = vec![0, 1, 0];
    for folds in [0, 1, 4] {
        let evaluator = ModelEvaluator::new(EvalConfig {
            cv_folds: folds,
            ..Default::default()
        });
        let err = evaluator
            .evaluate_cv("Test", &y_true, perfect_predictor(&y_true))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)), "folds = {folds}");
    }

    // Errors from the predictor propagate
    let evaluator = ModelEvaluator::new(EvalConfig {
        cv_folds: 3,
        ..Default::default()
    });
    let err = evaluator
        .evaluate_cv("Broken", &y_true, |_, _| {
            Err(Error::NotFitted("model".into()))
        })
        .unwrap_err();
    assert!(matches!(err, Error::NotFitted(_)));
}
