//! Evaluation configuration

use super::super::classification::Average;
use super::metric::Metric;

/// Configuration for model evaluation
#[derive(Clone, Debug)]
pub struct EvalConfig {
    /// Metrics to compute; the first one ranks leaderboards
    pub metrics: Vec<Metric>,
    /// Number of cross-validation folds (0 = no CV)
    pub cv_folds: usize,
    /// Random seed for reproducibility
    pub seed: u64,
    /// Probability column used by binary score metrics
    pub pos_label: usize,
    /// Keep class proportions in every CV fold
    pub stratified: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            metrics: vec![Metric::Accuracy, Metric::F1(Average::Weighted)],
            cv_folds: 0,
            seed: 42,
            pos_label: 1,
            stratified: false,
        }
    }
}
