//! Starter experiments written by `evaluar init` and run by `evaluar demo`

use super::cli::InitTemplate;
use super::schema::{DataSpec, EvalSpec, ExperimentSpec};
use crate::data::ClassificationSpec;

/// Build the experiment for a template
pub fn template_spec(template: InitTemplate) -> ExperimentSpec {
    match template {
        InitTemplate::Binary => ExperimentSpec::default(),
        InitTemplate::Imbalanced => ExperimentSpec {
            data: DataSpec {
                generator: ClassificationSpec {
                    weights: Some(vec![0.9, 0.1]),
                    flip_y: 0.01,
                    ..Default::default()
                },
                ..Default::default()
            },
            eval: EvalSpec {
                metrics: names(&[
                    "accuracy",
                    "balanced_accuracy",
                    "precision_binary",
                    "recall_binary",
                    "f1_binary",
                    "roc_auc",
                    "average_precision",
                    "pr_auc",
                ]),
                cv_folds: 5,
                ..Default::default()
            },
            ..Default::default()
        },
        InitTemplate::Multiclass => ExperimentSpec {
            data: DataSpec {
                generator: ClassificationSpec {
                    n_features: 5,
                    n_informative: 3,
                    n_classes: 3,
                    class_sep: 1.5,
                    ..Default::default()
                },
                ..Default::default()
            },
            eval: EvalSpec {
                metrics: names(&[
                    "accuracy",
                    "balanced_accuracy",
                    "precision_macro",
                    "recall_macro",
                    "f1_macro",
                    "f1_weighted",
                    "roc_auc",
                    "log_loss",
                ]),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}

/// Template rendered as YAML with a comment header
pub fn template_yaml(template: InitTemplate) -> crate::Result<String> {
    let body = super::loader::to_yaml(&template_spec(template))?;
    Ok(format!(
        "# evaluar experiment ({template})\n# Run with: evaluar run <this file>\n{body}"
    ))
}

fn names(metrics: &[&str]) -> Vec<String> {
    metrics.iter().map(|m| (*m).to_string()).collect()
}
