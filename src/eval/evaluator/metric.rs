//! Evaluation metric definitions

use super::super::classification::Average;
use crate::error::{Error, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Positive, finite F-beta weight usable as a map key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Beta(u64);

impl Beta {
    pub fn new(beta: f64) -> Result<Self> {
        if beta.is_finite() && beta > 0.0 {
            Ok(Self(beta.to_bits()))
        } else {
            Err(Error::InvalidParameter(format!("beta must be positive, got {beta}")))
        }
    }

    pub fn value(self) -> f64 {
        f64::from_bits(self.0)
    }
}

impl fmt::Display for Beta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Available evaluation metrics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    // Label-based
    /// Classification accuracy
    Accuracy,
    /// Mean per-class recall
    BalancedAccuracy,
    /// Precision with averaging strategy
    Precision(Average),
    /// Recall with averaging strategy
    Recall(Average),
    /// F1 score with averaging strategy
    F1(Average),
    /// F-beta score with averaging strategy
    FBeta(Beta, Average),
    /// True negative rate with averaging strategy
    Specificity(Average),
    // Score-based
    /// Area under the ROC curve (one-vs-rest macro for multi-class)
    RocAuc,
    /// Step-wise area under the precision-recall curve
    AveragePrecision,
    /// Trapezoidal area under the precision-recall curve
    PrAuc,
    /// Cross-entropy of the predicted probabilities
    LogLoss,
}

impl Metric {
    /// Whether higher values are better for this metric
    pub fn higher_is_better(&self) -> bool {
        !matches!(self, Metric::LogLoss)
    }

    /// Whether the metric needs probabilities rather than hard labels
    pub fn requires_scores(&self) -> bool {
        matches!(
            self,
            Metric::RocAuc | Metric::AveragePrecision | Metric::PrAuc | Metric::LogLoss
        )
    }

    /// Replace the positive label of binary averages
    pub fn with_pos_label(self, pos_label: usize) -> Self {
        match self {
            Metric::Precision(avg) => Metric::Precision(avg.with_pos_label(pos_label)),
            Metric::Recall(avg) => Metric::Recall(avg.with_pos_label(pos_label)),
            Metric::F1(avg) => Metric::F1(avg.with_pos_label(pos_label)),
            Metric::FBeta(beta, avg) => Metric::FBeta(beta, avg.with_pos_label(pos_label)),
            Metric::Specificity(avg) => Metric::Specificity(avg.with_pos_label(pos_label)),
            other => other,
        }
    }

    /// Get metric name as string
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Accuracy => "Accuracy",
            Metric::BalancedAccuracy => "Balanced Accuracy",
            Metric::Precision(_) => "Precision",
            Metric::Recall(_) => "Recall",
            Metric::F1(_) => "F1",
            Metric::FBeta(..) => "F-beta",
            Metric::Specificity(_) => "Specificity",
            Metric::RocAuc => "ROC AUC",
            Metric::AveragePrecision => "Average Precision",
            Metric::PrAuc => "PR AUC",
            Metric::LogLoss => "Log Loss",
        }
    }
}

/// Machine-readable key, e.g. `f1_macro` or `roc_auc`
impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Accuracy => write!(f, "accuracy"),
            Metric::BalancedAccuracy => write!(f, "balanced_accuracy"),
            Metric::Precision(avg) => write!(f, "precision_{avg}"),
            Metric::Recall(avg) => write!(f, "recall_{avg}"),
            Metric::F1(avg) => write!(f, "f1_{avg}"),
            Metric::FBeta(beta, avg) => write!(f, "f{beta}_{avg}"),
            Metric::Specificity(avg) => write!(f, "specificity_{avg}"),
            Metric::RocAuc => write!(f, "roc_auc"),
            Metric::AveragePrecision => write!(f, "average_precision"),
            Metric::PrAuc => write!(f, "pr_auc"),
            Metric::LogLoss => write!(f, "log_loss"),
        }
    }
}

impl FromStr for Metric {
    type Err = Error;

    /// Averaged metrics accept an `_binary`, `_macro`, `_micro` or `_weighted`
    /// suffix; without one they default to binary.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        match key.as_str() {
            "accuracy" | "acc" => return Ok(Metric::Accuracy),
            "balanced_accuracy" => return Ok(Metric::BalancedAccuracy),
            "roc_auc" | "auc" => return Ok(Metric::RocAuc),
            "average_precision" | "ap" => return Ok(Metric::AveragePrecision),
            "pr_auc" => return Ok(Metric::PrAuc),
            "log_loss" => return Ok(Metric::LogLoss),
            _ => {}
        }

        let unknown = || Error::InvalidParameter(format!("unknown metric: {s}"));
        let (head, average) = match key.rsplit_once('_') {
            Some((head, suffix)) => (head, Average::from_suffix(suffix).ok_or_else(unknown)?),
            None => (key.as_str(), Average::BINARY),
        };

        match head {
            "precision" => Ok(Metric::Precision(average)),
            "recall" | "sensitivity" => Ok(Metric::Recall(average)),
            "specificity" => Ok(Metric::Specificity(average)),
            "f1" => Ok(Metric::F1(average)),
            _ => {
                let beta = head
                    .strip_prefix('f')
                    .and_then(|b| b.parse::<f64>().ok())
                    .ok_or_else(unknown)?;
                // `f1.0` must share a key with `f1`
                if beta == 1.0 {
                    return Ok(Metric::F1(average));
                }
                Ok(Metric::FBeta(Beta::new(beta)?, average))
            }
        }
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
