//! Model Evaluator for running evaluations

use super::super::classification::{try_confusion_matrix, MultiClassMetrics};
use super::config::EvalConfig;
use super::kfold::{Folds, KFold, StratifiedKFold};
use super::leaderboard::Leaderboard;
use super::metric::Metric;
use super::result::EvalResult;
use super::scoring::{label_score, proba_score};
use crate::error::{check_pair, Error, Result};
use ndarray::Array2;
use std::time::Instant;

/// Model Evaluator for running evaluations
pub struct ModelEvaluator {
    config: EvalConfig,
}

impl ModelEvaluator {
    /// Create a new evaluator with given configuration
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    /// Metric used for ranking
    pub fn primary_metric(&self) -> Metric {
        self.config.metrics.first().copied().unwrap_or(Metric::Accuracy)
    }

    /// First label-based metric, used for cross-validation
    fn cv_metric(&self) -> Metric {
        self.config
            .metrics
            .iter()
            .copied()
            .find(|m| !m.requires_scores())
            .unwrap_or(Metric::Accuracy)
    }

    fn folds(&self, y_true: &[usize]) -> Result<Folds> {
        let folds = if self.config.stratified {
            StratifiedKFold::new(self.config.cv_folds)?
                .with_seed(self.config.seed)
                .split(y_true)
        } else {
            KFold::new(self.config.cv_folds)?
                .with_seed(self.config.seed)
                .split(y_true.len())
        };
        Ok(folds)
    }

    /// Evaluate classification with cross-validation
    ///
    /// Takes a prediction function that maps (train_indices, test_indices) to predictions.
    /// Returns EvalResult with cv_scores, cv_mean, and cv_std populated.
    pub fn evaluate_cv<F>(
        &self,
        model_name: impl Into<String>,
        y_true: &[usize],
        predict_fn: F,
    ) -> Result<EvalResult>
    where
        F: Fn(&[usize], &[usize]) -> Result<Vec<usize>>,
    {
        let k = self.config.cv_folds;
        if k < 2 {
            return Err(Error::InvalidParameter(format!(
                "cv_folds must be at least 2 for cross-validation, got {k}"
            )));
        }
        if k > y_true.len() {
            return Err(Error::InvalidParameter(format!(
                "cv_folds {k} exceeds the {} available samples",
                y_true.len()
            )));
        }

        let start = Instant::now();
        let metric = self.cv_metric();
        let mut fold_scores: Vec<f64> = Vec::with_capacity(k);

        for (train_idx, test_idx) in &self.folds(y_true)? {
            if test_idx.is_empty() {
                continue;
            }
            let predictions = predict_fn(train_idx, test_idx)?;
            let test_labels: Vec<usize> = test_idx.iter().map(|&i| y_true[i]).collect();

            let cm = try_confusion_matrix(&predictions, &test_labels)?;
            let metrics = MultiClassMetrics::from_confusion_matrix(&cm);
            let score = label_score(metric, &cm, &metrics).unwrap_or_else(|| cm.accuracy());
            fold_scores.push(score);
        }

        // Mean and sample standard deviation
        let cv_mean = fold_scores.iter().sum::<f64>() / fold_scores.len() as f64;
        let cv_std = if fold_scores.len() > 1 {
            let variance = fold_scores
                .iter()
                .map(|s| (s - cv_mean).powi(2))
                .sum::<f64>()
                / (fold_scores.len() - 1) as f64;
            variance.sqrt()
        } else {
            0.0
        };

        let mut result = EvalResult::new(model_name);
        result.cv_scores = Some(fold_scores);
        result.cv_mean = Some(cv_mean);
        result.cv_std = Some(cv_std);
        result.add_score(metric, cv_mean);
        result.inference_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        Ok(result)
    }

    /// Evaluate classification model with predictions and ground truth
    ///
    /// Metrics that need probabilities are skipped; see
    /// [`evaluate_with_scores`](Self::evaluate_with_scores).
    pub fn evaluate_classification(
        &self,
        model_name: impl Into<String>,
        y_pred: &[usize],
        y_true: &[usize],
    ) -> Result<EvalResult> {
        self.evaluate(model_name.into(), y_pred, None, y_true)
    }

    /// Evaluate every configured metric, using `proba` for score-based ones
    pub fn evaluate_with_scores(
        &self,
        model_name: impl Into<String>,
        y_pred: &[usize],
        proba: &Array2<f64>,
        y_true: &[usize],
    ) -> Result<EvalResult> {
        self.evaluate(model_name.into(), y_pred, Some(proba), y_true)
    }

    fn evaluate(
        &self,
        model_name: String,
        y_pred: &[usize],
        proba: Option<&Array2<f64>>,
        y_true: &[usize],
    ) -> Result<EvalResult> {
        check_pair(y_pred, y_true)?;
        let start = Instant::now();

        let cm = try_confusion_matrix(y_pred, y_true)?;
        let metrics = MultiClassMetrics::from_confusion_matrix(&cm);

        let mut result = EvalResult::new(model_name);
        for &metric in &self.config.metrics {
            let score = match (label_score(metric, &cm, &metrics), proba) {
                (Some(score), _) => score,
                (None, Some(proba)) => proba_score(metric, y_true, proba, self.config.pos_label)?,
                (None, None) => continue,
            };
            result.add_score(metric, score);
        }

        result.inference_time_ms = start.elapsed().as_secs_f64() * 1000.0;
        Ok(result)
    }

    /// Compare multiple classification models
    ///
    /// # Arguments
    /// * `models` - Slice of (name, predictions) tuples
    /// * `y_true` - Ground truth labels
    ///
    /// # Returns
    /// Leaderboard with all models ranked by primary metric
    pub fn compare_classification(
        &self,
        models: &[(&str, &[usize])],
        y_true: &[usize],
    ) -> Result<Leaderboard> {
        let mut leaderboard = Leaderboard::new(self.primary_metric());

        for (name, y_pred) in models {
            let result = self.evaluate_classification(*name, y_pred, y_true)?;
            leaderboard.add(result);
        }

        Ok(leaderboard)
    }

    /// Get the configuration
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }
}
