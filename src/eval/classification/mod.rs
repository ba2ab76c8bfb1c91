//! Classification metrics for model evaluation
//!
//! Provides multi-class classification metrics including:
//! - Confusion matrix computation and normalization
//! - Per-class precision, recall, F-beta and specificity
//! - Binary, macro, micro, and weighted averaging
//! - sklearn-style classification reports

mod average;
mod confusion;
mod metrics;
mod report;
mod scores;


pub use average::Average;
pub use confusion::{BinaryCounts, ConfusionMatrix, Normalize};
pub use metrics::MultiClassMetrics;
pub use report::{classification_report, confusion_matrix, ClassificationReport, ReportRow};
pub use scores::{
    accuracy, balanced_accuracy, f1_score, fbeta_score, precision_score, recall_score,
    specificity_score, try_confusion_matrix,
};
