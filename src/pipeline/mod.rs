//! End-to-end evaluation experiment
//!
//! [`Experiment::run`] walks the lesson in order: generate a synthetic
//! dataset, split it, fit logistic regression next to a prior-based
//! baseline, score both, and collect confusion matrix, report, curves and
//! thresholds into an [`ExperimentReport`]. Rendering and writing files are
//! separate steps so library callers can keep everything in memory.
//!
//! [`score_predictions`] covers the other half of the lesson: metrics for
//! labels and scores that some other model produced.

mod artifacts;
mod experiment;
mod report;
mod score;

pub use artifacts::{ChartSet, REPORT_FILE};
pub use experiment::Experiment;
pub use report::{CurveSet, DataReport, ExperimentReport, ModelSummary, ThresholdReport};
pub use score::{score_predictions, ScoreReport};
