//! YAML schema definitions for declarative experiment configuration

use crate::data::ClassificationSpec;
use crate::eval::{Beta, Metric, Normalize};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Complete experiment specification
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExperimentSpec {
    /// Synthetic data and split configuration
    #[serde(default)]
    pub data: DataSpec,

    /// Logistic regression hyperparameters
    #[serde(default)]
    pub model: ModelSpec,

    /// Metrics and cross-validation
    #[serde(default)]
    pub eval: EvalSpec,

    /// Report and chart output
    #[serde(default)]
    pub output: OutputSpec,
}

/// Data generation and splitting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSpec {
    /// Generator parameters (`n_samples`, `n_classes`, `weights`, ...)
    #[serde(flatten)]
    pub generator: ClassificationSpec,

    /// Fraction of samples held out for evaluation
    #[serde(default = "default_test_size")]
    pub test_size: f64,

    /// Keep class proportions equal across the split
    #[serde(default = "default_true")]
    pub stratify: bool,
}

fn default_test_size() -> f64 {
    0.25
}

fn default_true() -> bool {
    true
}

impl Default for DataSpec {
    fn default() -> Self {
        Self {
            generator: ClassificationSpec::default(),
            test_size: default_test_size(),
            stratify: true,
        }
    }
}

/// Logistic regression hyperparameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,

    #[serde(default = "default_max_iter")]
    pub max_iter: usize,

    /// Gradient tolerance for early stopping
    #[serde(default = "default_tol")]
    pub tol: f64,

    /// L2 penalty strength
    #[serde(default)]
    pub l2: f64,

    #[serde(default = "default_true")]
    pub fit_intercept: bool,
}

fn default_learning_rate() -> f64 {
    0.1
}

fn default_max_iter() -> usize {
    2000
}

fn default_tol() -> f64 {
    1e-6
}

impl Default for ModelSpec {
    fn default() -> Self {
        Self {
            learning_rate: default_learning_rate(),
            max_iter: default_max_iter(),
            tol: default_tol(),
            l2: 0.0,
            fit_intercept: true,
        }
    }
}

/// Which metrics to compute and how
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalSpec {
    /// Metric names such as `accuracy`, `f1_macro`, `f2_binary`, `roc_auc`
    #[serde(default = "default_metrics")]
    pub metrics: Vec<String>,

    /// Class treated as positive by binary metrics and curves
    #[serde(default = "default_pos_label")]
    pub pos_label: usize,

    /// Cross-validation folds on the training split (0 disables)
    #[serde(default)]
    pub cv_folds: usize,

    /// Beta used for threshold selection by F-beta
    #[serde(default = "default_beta")]
    pub beta: f64,
}

fn default_metrics() -> Vec<String> {
    [
        "accuracy",
        "balanced_accuracy",
        "precision_binary",
        "recall_binary",
        "f1_binary",
        "roc_auc",
        "average_precision",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

fn default_pos_label() -> usize {
    1
}

fn default_beta() -> f64 {
    2.0
}

impl Default for EvalSpec {
    fn default() -> Self {
        Self {
            metrics: default_metrics(),
            pos_label: default_pos_label(),
            cv_folds: 0,
            beta: default_beta(),
        }
    }
}

impl EvalSpec {
    /// Parse the metric names, binding binary averages to `pos_label`
    pub fn parsed_metrics(&self) -> Result<Vec<Metric>> {
        self.metrics
            .iter()
            .map(|name| {
                name.parse::<Metric>()
                    .map(|m| m.with_pos_label(self.pos_label))
                    .map_err(|e| Error::Config(e.to_string()))
            })
            .collect()
    }

    pub fn beta(&self) -> Result<Beta> {
        Beta::new(self.beta)
    }
}

/// Chart kinds written by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotKind {
    Roc,
    Pr,
    Confusion,
}

impl PlotKind {
    pub const ALL: [PlotKind; 3] = [PlotKind::Roc, PlotKind::Pr, PlotKind::Confusion];

    /// File name inside the output directory
    pub fn file_name(&self) -> &'static str {
        match self {
            PlotKind::Roc => "roc.svg",
            PlotKind::Pr => "pr.svg",
            PlotKind::Confusion => "confusion.svg",
        }
    }
}

impl FromStr for PlotKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "roc" => Ok(PlotKind::Roc),
            "pr" | "precision_recall" => Ok(PlotKind::Pr),
            "confusion" | "confusion_matrix" => Ok(PlotKind::Confusion),
            _ => Err(format!(
                "Unknown plot: {s}. Valid plots: roc, pr, confusion"
            )),
        }
    }
}

impl fmt::Display for PlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotKind::Roc => write!(f, "roc"),
            PlotKind::Pr => write!(f, "pr"),
            PlotKind::Confusion => write!(f, "confusion"),
        }
    }
}

/// Output location and charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpec {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Charts to render: `roc`, `pr`, `confusion`
    #[serde(default = "default_plots")]
    pub plots: Vec<String>,

    /// Show row-normalized fractions in the confusion chart
    #[serde(default = "default_true")]
    pub normalize_confusion: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./evaluar-out")
}

fn default_plots() -> Vec<String> {
    PlotKind::ALL.iter().map(ToString::to_string).collect()
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            plots: default_plots(),
            normalize_confusion: true,
        }
    }
}

impl OutputSpec {
    /// Parse the plot names, dropping duplicates
    pub fn plot_kinds(&self) -> Result<Vec<PlotKind>> {
        let mut kinds = Vec::new();
        for name in &self.plots {
            let kind = name.parse::<PlotKind>().map_err(Error::Config)?;
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        Ok(kinds)
    }

    pub fn normalize(&self) -> Option<Normalize> {
        self.normalize_confusion.then_some(Normalize::True)
    }
}
