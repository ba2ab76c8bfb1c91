//! Experiment report: everything a run measured, in one serializable value

use super::artifacts::ChartSet;
use crate::config::PlotKind;
use crate::data::DatasetSummary;
use crate::eval::{
    ClassificationReport, ConfusionMatrix, EvalResult, Normalize, PrecisionRecallCurve, RocCurve,
    ThresholdPoint,
};
use crate::plot::{confusion_heatmap, pr_chart, roc_chart};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Train and test split shapes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataReport {
    pub train: DatasetSummary,
    pub test: DatasetSummary,
}

/// Fitted logistic regression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub name: String,
    /// Rows of the weight matrix
    pub n_features: usize,
    /// Columns of the weight matrix (1 for binary problems)
    pub n_outputs: usize,
    pub n_iter: usize,
    pub max_iter: usize,
    /// Stopped on the gradient tolerance before `max_iter`
    pub converged: bool,
}

/// Best decision thresholds on the positive-class score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdReport {
    pub youden: ThresholdPoint,
    pub beta: f64,
    pub fbeta: ThresholdPoint,
}

/// Curves kept for chart rendering; not part of the serialized report
#[derive(Debug, Clone, Default)]
pub struct CurveSet {
    /// `(label, curve, auc)`
    pub roc: Vec<(String, RocCurve, f64)>,
    /// `(label, curve, average precision)`; binary problems only
    pub pr: Vec<(String, PrecisionRecallCurve, f64)>,
    /// Positive prevalence in the test split
    pub no_skill: Option<f64>,
}

/// Outcome of [`Experiment::run`](super::Experiment::run)
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    pub generated_at: DateTime<Utc>,
    pub seed: u64,
    pub n_classes: usize,
    pub pos_label: usize,
    pub data: DataReport,
    pub model: ModelSummary,
    /// Test-split results, logistic regression first
    pub results: Vec<EvalResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_validation: Option<EvalResult>,
    /// Logistic regression on the test split
    pub confusion_matrix: ConfusionMatrix,
    pub classification_report: ClassificationReport,
    /// Binary ROC-AUC, or one-vs-rest macro ROC-AUC for more classes
    pub roc_auc: f64,
    pub average_precision: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<ThresholdReport>,
    pub leaderboard: String,
    #[serde(skip)]
    pub curves: CurveSet,
}

impl ExperimentReport {
    /// Render the requested charts as SVG documents
    ///
    /// The precision-recall chart is only drawn for binary problems.
    pub fn charts(&self, plots: &[PlotKind], normalize: Option<Normalize>) -> ChartSet {
        let mut charts = ChartSet::default();
        for &kind in plots {
            match kind {
                PlotKind::Roc if !self.curves.roc.is_empty() => {
                    let curves: Vec<(&str, &RocCurve, f64)> = self
                        .curves
                        .roc
                        .iter()
                        .map(|(label, curve, auc)| (label.as_str(), curve, *auc))
                        .collect();
                    charts.insert(kind, roc_chart(&curves));
                }
                PlotKind::Pr if !self.curves.pr.is_empty() => {
                    let curves: Vec<(&str, &PrecisionRecallCurve, f64)> = self
                        .curves
                        .pr
                        .iter()
                        .map(|(label, curve, ap)| (label.as_str(), curve, *ap))
                        .collect();
                    let no_skill = self.curves.no_skill.unwrap_or(0.0);
                    charts.insert(kind, pr_chart(&curves, no_skill));
                }
                PlotKind::Confusion => {
                    charts.insert(kind, confusion_heatmap(&self.confusion_matrix, normalize));
                }
                _ => {}
            }
        }
        charts
    }
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Experiment report ({})", self.generated_at.to_rfc3339())?;
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(
            f,
            "Data: {} classes, {} features, seed {}",
            self.n_classes, self.data.train.n_features, self.seed
        )?;
        writeln!(
            f,
            "  train: {} samples, class counts {:?}",
            self.data.train.n_samples, self.data.train.class_counts
        )?;
        writeln!(
            f,
            "  test:  {} samples, class counts {:?}",
            self.data.test.n_samples, self.data.test.class_counts
        )?;
        writeln!(
            f,
            "Model: {} ({}x{} weights, {} of {} iterations{})",
            self.model.name,
            self.model.n_features,
            self.model.n_outputs,
            self.model.n_iter,
            self.model.max_iter,
            if self.model.converged { ", converged" } else { "" }
        )?;
        writeln!(f)?;

        for result in &self.results {
            write!(f, "{result}")?;
        }
        if let Some(cv) = &self.cross_validation {
            write!(f, "{cv}")?;
        }
        writeln!(f)?;

        write!(f, "{}", self.confusion_matrix)?;
        writeln!(f)?;
        write!(f, "{}", self.classification_report)?;
        writeln!(f)?;

        writeln!(f, "ROC-AUC:           {:.4}", self.roc_auc)?;
        writeln!(f, "Average precision: {:.4}", self.average_precision)?;
        if let Some(t) = &self.thresholds {
            writeln!(
                f,
                "Best threshold (Youden J): {:.4} (TPR {:.3}, specificity {:.3})",
                t.youden.threshold, t.youden.recall, t.youden.specificity
            )?;
            writeln!(
                f,
                "Best threshold (F{}): {:.4} (precision {:.3}, recall {:.3})",
                t.beta, t.fbeta.threshold, t.fbeta.precision, t.fbeta.recall
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Leaderboard:")?;
        write!(f, "{}", self.leaderboard)
    }
}
