//! Evaluar: classification metrics and evaluation reports
//!
//! Metrics, curves and charts for binary and multi-class classifiers, plus a
//! small estimator stack (synthetic data, logistic regression, baselines) to
//! produce something to evaluate.
//!
//! # Modules
//!
//! - [`data`]: synthetic datasets, train/test splits, CSV predictions
//! - [`model`]: logistic regression and dummy baselines
//! - [`eval`]: confusion matrix, averaged metrics, ROC/PR curves, evaluator
//! - [`plot`]: SVG line charts and confusion heatmaps
//! - [`pipeline`]: the end-to-end experiment and its report
//! - [`config`]: YAML experiment specification and CLI arguments
//! - [`cli`]: command handlers behind the `evaluar` binary
//!
//! # Example
//!
//! ```
//! use evaluar::eval::{f1_score, roc_auc_score, Average};
//!
//! let y_true = [0, 0, 1, 1];
//! let y_pred = [0, 1, 1, 1];
//! let f1 = f1_score(&y_pred, &y_true, Average::BINARY).unwrap();
//! assert!((f1 - 0.8).abs() < 1e-12);
//!
//! let auc = roc_auc_score(&y_true, &[0.1, 0.4, 0.35, 0.8], 1).unwrap();
//! assert!((auc - 0.75).abs() < 1e-12);
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod eval;
pub mod model;
pub mod pipeline;
pub mod plot;

pub use error::{Error, Result};
