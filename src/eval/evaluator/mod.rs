//! Model Evaluator for standardized evaluation and comparison
//!
//! Provides ModelEvaluator for running comprehensive evaluations,
//! comparing multiple models, and generating leaderboards.

mod config;
mod kfold;
mod leaderboard;
mod metric;
mod model_evaluator;
mod result;
mod scoring;

#[cfg(test)]
mod tests;

pub use config::EvalConfig;
pub use kfold::{Folds, KFold, StratifiedKFold};
pub use leaderboard::Leaderboard;
pub use metric::{Beta, Metric};
pub use model_evaluator::ModelEvaluator;
pub use result::EvalResult;
pub use scoring::{log_loss, LOG_LOSS_EPS};
