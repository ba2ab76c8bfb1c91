//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::cli::ValidateArgs;
use crate::config::{parse_config, ExperimentSpec};
use std::fs;

/// Format data configuration as a string
pub fn format_data_info(spec: &ExperimentSpec) -> String {
    let data = &spec.data.generator;
    let mut lines = vec![
        format!("  Samples: {}", data.n_samples),
        format!(
            "  Features: {} ({} informative)",
            data.n_features, data.n_informative
        ),
        format!("  Classes: {} (separation {})", data.n_classes, data.class_sep),
    ];
    if let Some(weights) = &data.weights {
        lines.push(format!("  Class weights: {weights:?}"));
    }
    if data.flip_y > 0.0 {
        lines.push(format!("  Label noise: {}", data.flip_y));
    }
    lines.push(format!(
        "  Test size: {}{}",
        spec.data.test_size,
        if spec.data.stratify { " (stratified)" } else { "" }
    ));
    lines.push(format!("  Seed: {}", data.seed));
    lines.join("\n")
}

/// Format model configuration as a string
pub fn format_model_info(spec: &ExperimentSpec) -> String {
    let model = &spec.model;
    let mut lines = vec![
        format!("  Learning rate: {}", model.learning_rate),
        format!("  Max iterations: {} (tol {})", model.max_iter, model.tol),
    ];
    if model.l2 > 0.0 {
        lines.push(format!("  L2 penalty: {}", model.l2));
    }
    if !model.fit_intercept {
        lines.push("  Intercept: disabled".to_string());
    }
    lines.join("\n")
}

/// Format evaluation configuration as a string
pub fn format_eval_info(spec: &ExperimentSpec) -> String {
    let eval = &spec.eval;
    let mut lines = vec![
        format!("  Metrics: {}", eval.metrics.join(", ")),
        format!("  Positive label: {}", eval.pos_label),
        format!("  Threshold beta: {}", eval.beta),
    ];
    if eval.cv_folds >= 2 {
        lines.push(format!("  Cross-validation: {} folds", eval.cv_folds));
    }
    lines.join("\n")
}

/// Format output configuration as a string
pub fn format_output_info(spec: &ExperimentSpec) -> String {
    let plots = if spec.output.plots.is_empty() {
        "none".to_string()
    } else {
        spec.output.plots.join(", ")
    };
    format!(
        "  Output dir: {}\n  Plots: {plots}",
        spec.output.dir.display()
    )
}

/// Full configuration summary
pub fn format_summary(spec: &ExperimentSpec) -> String {
    format!(
        "Configuration Summary:\n{}\n\n{}\n\n{}\n\n{}",
        format_data_info(spec),
        format_model_info(spec),
        format_eval_info(spec),
        format_output_info(spec)
    )
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let yaml = fs::read_to_string(&args.config)
        .map_err(|e| format!("Config error: cannot read {}: {e}", args.config.display()))?;
    let spec = parse_config(&yaml).map_err(|e| format!("Validation failed: {e}"))?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed {
        println!();
        println!("{}", format_summary(&spec));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{template_spec, InitTemplate};

    #[test]
    fn test_format_data_info_imbalanced() {
        let spec = template_spec(InitTemplate::Imbalanced);
        let info = format_data_info(&spec);
        assert!(info.contains("Samples: 1000"));
        assert!(info.contains("Class weights: [0.9, 0.1]"));
        assert!(info.contains("Label noise: 0.01"));
        assert!(info.contains("(stratified)"));
    }

    #[test]
    fn test_format_model_info() {
        let mut spec = ExperimentSpec::default();
        assert!(!format_model_info(&spec).contains("L2"));
        spec.model.l2 = 0.5;
        spec.model.fit_intercept = false;
        let info = format_model_info(&spec);
        assert!(info.contains("L2 penalty: 0.5"));
        assert!(info.contains("Intercept: disabled"));
    }

    #[test]
    fn test_format_eval_info() {
        let spec = template_spec(InitTemplate::Imbalanced);
        let info = format_eval_info(&spec);
        assert!(info.contains("pr_auc"));
        assert!(info.contains("Cross-validation: 5 folds"));
    }

    #[test]
    fn test_format_output_info() {
        let mut spec = ExperimentSpec::default();
        assert!(format_output_info(&spec).contains("roc, pr, confusion"));
        spec.output.plots.clear();
        assert!(format_output_info(&spec).contains("Plots: none"));
    }

    #[test]
    fn test_format_summary_sections() {
        let summary = format_summary(&ExperimentSpec::default());
        assert!(summary.starts_with("Configuration Summary:"));
        assert!(summary.contains("Learning rate: 0.1"));
        assert!(summary.contains("Output dir: ./evaluar-out"));
    }
}
