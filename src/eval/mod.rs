//! Model evaluation
//!
//! ## Architecture
//!
//! - `classification`: label metrics, confusion matrix, reports
//! - `curves`: ROC and precision-recall curves with their areas
//! - `threshold`: choosing a decision threshold on a score
//! - `evaluator`: ModelEvaluator for running evaluations and comparisons
//!
//! ## Example
//!
//! ```
//! use evaluar::eval::{Average, EvalConfig, Metric, ModelEvaluator};
//!
//! let evaluator = ModelEvaluator::new(EvalConfig {
//!     metrics: vec![Metric::Accuracy, Metric::F1(Average::Macro)],
//!     ..Default::default()
//! });
//!
//! let result = evaluator
//!     .evaluate_classification("baseline", &[0, 1, 1, 0], &[0, 1, 0, 0])
//!     .unwrap();
//! assert_eq!(result.get_score(Metric::Accuracy), Some(0.75));
//! ```

pub mod classification;
pub mod curves;
pub mod evaluator;
pub mod threshold;

pub use classification::{
    accuracy, balanced_accuracy, classification_report, confusion_matrix, f1_score, fbeta_score,
    precision_score, recall_score, specificity_score, Average, BinaryCounts,
    ClassificationReport, ConfusionMatrix, MultiClassMetrics, Normalize,
};
pub use curves::{
    auc, average_precision_score, pr_auc_score, precision_recall_curve, roc_auc_ovr,
    roc_auc_score, roc_curve, PrecisionRecallCurve, RocCurve,
};
pub use evaluator::{
    log_loss, Beta, EvalConfig, EvalResult, KFold, Leaderboard, Metric, ModelEvaluator,
    StratifiedKFold,
};
pub use threshold::{predict_at_threshold, ThresholdPoint, ThresholdSweep};
