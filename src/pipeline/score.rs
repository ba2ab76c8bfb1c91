//! Metrics for predictions made elsewhere

use super::report::ThresholdReport;
use crate::data::Predictions;
use crate::error::{Error, Result};
use crate::eval::{
    average_precision_score, pr_auc_score, roc_auc_score, Average, Beta, ClassificationReport,
    ConfusionMatrix, EvalConfig, EvalResult, Metric, ModelEvaluator, ThresholdSweep,
};
use serde::Serialize;
use std::fmt;

/// Every applicable metric for one set of predictions
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub n_samples: usize,
    pub n_classes: usize,
    pub pos_label: usize,
    pub result: EvalResult,
    pub confusion_matrix: ConfusionMatrix,
    pub classification_report: ClassificationReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<ThresholdReport>,
}

fn label_metrics(n_classes: usize, pos_label: usize, beta: Beta) -> Vec<Metric> {
    if n_classes <= 2 {
        let avg = Average::Binary { pos_label };
        vec![
            Metric::Accuracy,
            Metric::BalancedAccuracy,
            Metric::Precision(avg),
            Metric::Recall(avg),
            Metric::Specificity(avg),
            Metric::F1(avg),
            Metric::FBeta(beta, avg),
        ]
    } else {
        vec![
            Metric::Accuracy,
            Metric::BalancedAccuracy,
            Metric::Precision(Average::Macro),
            Metric::Recall(Average::Macro),
            Metric::F1(Average::Macro),
            Metric::F1(Average::Micro),
            Metric::F1(Average::Weighted),
            Metric::FBeta(beta, Average::Macro),
        ]
    }
}

/// Score labels, and the positive-class `scores` when present
///
/// Binary problems get binary-averaged metrics for `pos_label`; problems
/// with more classes get macro, micro and weighted averages. Scores are
/// read as the confidence that a sample belongs to `pos_label`.
pub fn score_predictions(
    predictions: &Predictions,
    name: &str,
    pos_label: usize,
    beta: f64,
) -> Result<ScoreReport> {
    let beta = Beta::new(beta)?;
    let n_classes = predictions.n_classes().max(pos_label + 1).max(2);
    let (y_true, y_pred) = (&predictions.y_true, &predictions.y_pred);

    let evaluator = ModelEvaluator::new(EvalConfig {
        metrics: label_metrics(n_classes, pos_label, beta),
        pos_label,
        ..Default::default()
    });
    let mut result = evaluator.evaluate_classification(name, y_pred, y_true)?;

    let thresholds = match &predictions.scores {
        Some(scores) => {
            if scores.len() != y_true.len() {
                return Err(Error::length_mismatch("scores", y_true.len(), scores.len()));
            }
            result.add_score(Metric::RocAuc, roc_auc_score(y_true, scores, pos_label)?);
            result.add_score(
                Metric::AveragePrecision,
                average_precision_score(y_true, scores, pos_label)?,
            );
            result.add_score(Metric::PrAuc, pr_auc_score(y_true, scores, pos_label)?);

            let sweep = ThresholdSweep::new(y_true, scores, pos_label)?;
            Some(ThresholdReport {
                youden: sweep.best_by_youden(),
                beta: beta.value(),
                fbeta: sweep.best_by_fbeta(beta.value()),
            })
        }
        None => None,
    };

    let confusion_matrix = ConfusionMatrix::with_labels(y_pred, y_true, n_classes)?;
    let classification_report = ClassificationReport::from_confusion_matrix(&confusion_matrix);

    Ok(ScoreReport {
        n_samples: predictions.len(),
        n_classes,
        pos_label,
        result,
        confusion_matrix,
        classification_report,
        thresholds,
    })
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} samples, {} classes, positive label {}",
            self.n_samples, self.n_classes, self.pos_label
        )?;
        writeln!(f)?;
        write!(f, "{}", self.result)?;
        writeln!(f)?;
        write!(f, "{}", self.confusion_matrix)?;
        writeln!(f)?;
        write!(f, "{}", self.classification_report)?;
        if let Some(t) = &self.thresholds {
            writeln!(f)?;
            writeln!(
                f,
                "Best threshold (Youden J = {:.3}): {:.4}",
                t.youden.youden_j, t.youden.threshold
            )?;
            writeln!(
                f,
                "Best threshold (F{} = {:.3}): {:.4}",
                t.beta,
                t.fbeta.fbeta(t.beta),
                t.fbeta.threshold
            )?;
        }
        Ok(())
    }
}
